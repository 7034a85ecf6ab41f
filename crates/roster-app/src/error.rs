// Rust guideline compliant 2026-10-19

//! Error handling for Roster application services.

use roster_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for machine-readable responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested student was not found.
    NotFound,
    /// A student with the same ID already exists.
    DuplicateId,
    /// A reference value already exists.
    DuplicateReference,
    /// A reference value does not exist.
    UnknownReference,
    /// A reference value is still assigned to students.
    ReferenceInUse,
    /// A record failed validation.
    ValidationError,
    /// The requested status transition is not allowed.
    InvalidTransition,
    /// The delete window for a student has closed.
    DeleteWindowExpired,
    /// A configuration value is invalid.
    InvalidConfig,
    /// IO failure while reading or writing workspace data.
    IoError,
    /// A data file could not be written.
    PersistError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// CSV reading or writing failed.
    CsvError,
    /// The workspace has not been initialized.
    WorkspaceNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Workspace is missing or not initialized.
    #[error("Roster workspace not initialized at {path}. Run 'roster init' first.")]
    WorkspaceNotInitialized {
        /// Path where the data directory was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::WorkspaceNotInitialized { .. } => ErrorCode::WorkspaceNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::DuplicateId(_) => ErrorCode::DuplicateId,
                CoreError::DuplicateReference { .. } => ErrorCode::DuplicateReference,
                CoreError::UnknownReference { .. } => ErrorCode::UnknownReference,
                CoreError::ReferenceInUse { .. } => ErrorCode::ReferenceInUse,
                CoreError::Validation(_) | CoreError::InvalidRow { .. } => {
                    ErrorCode::ValidationError
                }
                CoreError::InvalidTransition(_) => ErrorCode::InvalidTransition,
                CoreError::DeleteWindowExpired { .. } => ErrorCode::DeleteWindowExpired,
                CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Persist { .. } => ErrorCode::PersistError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Csv(_) => ErrorCode::CsvError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::WorkspaceNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::InvalidInput(_) | AppError::Io(_) => None,
            AppError::Core(core) => match core {
                CoreError::ReferenceInUse { kind, value, count } => Some(serde_json::json!({
                    "kind": kind,
                    "value": value,
                    "students": count,
                })),
                CoreError::DeleteWindowExpired {
                    id,
                    limit_minutes,
                    elapsed_minutes,
                } => Some(serde_json::json!({
                    "id": id,
                    "limit_minutes": limit_minutes,
                    "elapsed_minutes": elapsed_minutes,
                })),
                CoreError::Persist { path, .. } => Some(serde_json::json!({
                    "path": path,
                })),
                _ => None,
            },
        }
    }
}
