// Rust guideline compliant 2026-10-19

//! JSON documents printed by `roster --json`.
//!
//! A command that succeeds prints `{"status": "ok", "result": ...}` on
//! stdout. A command that fails prints an [`ErrorEnvelope`] on stderr, so a
//! script can branch on `code` without parsing the message.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

const STATUS_OK: &str = "ok";
const STATUS_ERROR: &str = "error";

/// Wraps a command's payload: a student, a list, a report or the config.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `"ok"`.
    pub status: &'static str,
    /// What the command produced.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Wraps `result`.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self {
            status: STATUS_OK,
            result,
        }
    }
}

/// A failed command, as seen by scripts.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`.
    pub status: &'static str,
    /// Snake-case code such as `duplicate_id` or `invalid_transition`.
    pub code: ErrorCode,
    pub message: String,
    /// Structured context such as the data file path or the delete window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Describes `error` for `--json` output.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            status: STATUS_ERROR,
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_omits_missing_details() {
        let error = AppError::InvalidInput("nothing to update".to_string());
        let json = serde_json::to_value(ErrorEnvelope::from_error(&error)).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], "invalid_input");
        assert!(json["message"].as_str().unwrap().contains("nothing to update"));
        assert!(json.get("details").is_none());
    }
}
