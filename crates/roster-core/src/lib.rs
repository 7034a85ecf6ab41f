// Rust guideline compliant 2026-10-19

//! Roster Core Library
//!
//! This crate provides the foundational components for the Roster student records tool:
//! - Data models (Student, StudentPatch, Gender)
//! - Configuration store (email/phone patterns, delete window, enforcement switch)
//! - Status transition rules and transition-graph analysis
//! - Record validation against configuration and reference sets
//! - Student repository with reference-set management and JSON persistence
//! - Tabular CSV/JSON record I/O and certificate rendering
//! - Error types and result handling

pub mod certificate;
pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod record_io;
pub mod references;
pub mod repository;
pub mod rules;
pub mod storage;
pub mod validator;

pub use certificate::{CertificateData, CertificateFormat, SchoolInfo};
pub use config::{Config, ConfigStore};
pub use error::{Error, Result, ValidationError};
pub use graph::TransitionGraph;
pub use models::{Gender, Student, StudentPatch, ROW_FIELDS};
pub use record_io::RecordFormat;
pub use references::{ReferenceKind, ReferenceSet, References};
pub use repository::{ImportReport, SkippedRow, StudentRepository};
pub use rules::{RulesStore, TransitionRules};
pub use storage::JsonStore;
pub use validator::{PhonePattern, StudentValidator};
