// Rust guideline compliant 2026-10-19

//! Error types for the Roster core library.

use crate::references::ReferenceKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Roster operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A single failed business rule on a student record.
///
/// Variants are listed in the order the validator evaluates them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email does not end with the configured suffix.
    #[error("email '{email}' must end with '{suffix}'")]
    Email {
        /// Offending email.
        email: String,
        /// Configured suffix.
        suffix: String,
    },

    /// Phone does not match the configured pattern.
    #[error("phone '{phone}' does not match pattern '{pattern}'")]
    Phone {
        /// Offending phone number.
        phone: String,
        /// Effective (possibly wrapped) pattern.
        pattern: String,
    },

    /// The configured phone pattern does not compile.
    #[error("phone pattern '{pattern}' is not a valid regex: {reason}")]
    PhonePattern {
        /// Effective (possibly wrapped) pattern.
        pattern: String,
        /// Compiler message.
        reason: String,
    },

    /// A reference field names a value outside its reference set.
    #[error("unknown {kind} '{value}'")]
    UnknownReference {
        /// Which reference set was consulted.
        kind: ReferenceKind,
        /// Offending value.
        value: String,
    },

    /// Gender is not one of the accepted values.
    #[error("gender '{0}' must be Male or Female")]
    Gender(String),

    /// Course is not a 4-digit year.
    #[error("course '{0}' must be a 4-digit year (YYYY)")]
    Course(String),

    /// Date of birth is not in DD/MM/YYYY form.
    #[error("date of birth '{0}' must use DD/MM/YYYY")]
    DateOfBirth(String),
}

/// Error types for Roster operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV read/write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record failed validation.
    #[error("Invalid student: {0}")]
    Validation(#[from] ValidationError),

    /// Student not found.
    #[error("Student not found: {0}")]
    NotFound(String),

    /// A student with the same ID already exists.
    #[error("Student ID already exists: {0}")]
    DuplicateId(String),

    /// A reference value already exists in its set.
    #[error("{kind} already exists: {value}")]
    DuplicateReference {
        /// Reference set involved.
        kind: ReferenceKind,
        /// Duplicate value.
        value: String,
    },

    /// A reference value is unknown to its set.
    #[error("{kind} not found: {value}")]
    UnknownReference {
        /// Reference set involved.
        kind: ReferenceKind,
        /// Missing value.
        value: String,
    },

    /// A reference value is still used by students.
    #[error("{kind} '{value}' is still assigned to {count} student(s)")]
    ReferenceInUse {
        /// Reference set involved.
        kind: ReferenceKind,
        /// Value in use.
        value: String,
        /// Number of students referencing it.
        count: usize,
    },

    /// A tabular row does not have the expected number of fields.
    #[error("Invalid row: expected {expected} fields, found {found}")]
    InvalidRow {
        /// Required field count.
        expected: usize,
        /// Field count in the row.
        found: usize,
    },

    /// Invalid status transition.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// The delete window for a student has closed.
    #[error("Student {id} can only be deleted within {limit_minutes} minute(s) of creation ({elapsed_minutes} elapsed)")]
    DeleteWindowExpired {
        /// Student ID.
        id: String,
        /// Configured window in minutes.
        limit_minutes: i64,
        /// Whole minutes elapsed since creation.
        elapsed_minutes: i64,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing a data file failed; the in-memory state was kept.
    #[error("Failed to persist {path}: {source}")]
    Persist {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },
}
