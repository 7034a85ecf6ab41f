// Rust guideline compliant 2026-10-19

//! Implementation of the `roster remove` command.
//!
//! A student can only be removed within `deleteTimeLimit` minutes of being
//! added.

use crate::commands::{open_registrar, print_json};
use crate::output_mode::is_json_output;
use crate::terminal::print_success;
use anyhow::Result;
use std::path::Path;

/// Removes a student.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The ID is unknown
/// - The delete window has closed
/// - The student file cannot be written
pub fn execute(id: &str, data_dir: Option<&Path>) -> Result<()> {
    let mut registrar = open_registrar(data_dir)?;
    let removed = registrar.remove_student(id)?;

    if is_json_output() {
        return print_json(&removed);
    }
    print_success(&format!("Removed student {} ({})", removed.id, removed.name));
    Ok(())
}
