// Rust guideline compliant 2026-10-19

//! Shared application services for Roster.
//!
//! This crate wires the core library into a single [`Registrar`] that owns
//! the configuration, the status rules and the student repository of one
//! workspace, and provides workspace discovery, integrity checks and
//! standardized response envelopes.

pub mod doctor;
pub mod error;
pub mod registrar;
pub mod response;
pub mod workspace;

pub use doctor::{DanglingReference, DoctorReport};
pub use error::{AppError, ErrorCode, Result};
pub use registrar::{ConfigKey, Registrar};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use workspace::{Workspace, DATA_DIR_NAME};
