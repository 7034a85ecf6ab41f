// Rust guideline compliant 2026-10-19

//! Implementation of the `roster import` command.
//!
//! Reads 11-field rows from CSV or JSON. Rows with the wrong field count, or
//! that fail validation while it is enforced, are skipped and reported.

use crate::commands::{open_registrar, print_json, FileFormat};
use crate::output_mode::is_json_output;
use crate::terminal::{print_success, print_warning};
use anyhow::Result;
use std::path::Path;

/// Imports students from `path`.
///
/// The format comes from `format` or else from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The format cannot be determined
/// - The file cannot be read or parsed
/// - The student file cannot be written
pub fn execute(path: &Path, format: Option<FileFormat>, data_dir: Option<&Path>) -> Result<()> {
    let mut registrar = open_registrar(data_dir)?;
    let report = registrar.import_students(path, format.map(Into::into))?;

    if is_json_output() {
        return print_json(&report);
    }

    print_success(&format!(
        "Imported {} student(s) from {}",
        report.imported,
        path.display()
    ));
    for skipped in &report.skipped {
        print_warning(&format!("Skipped row {}: {}", skipped.index + 1, skipped.reason));
    }
    if !report.duplicate_ids.is_empty() {
        print_warning(&format!(
            "Imported IDs that already existed: {} (see 'roster doctor')",
            report.duplicate_ids.join(", ")
        ));
    }
    Ok(())
}
