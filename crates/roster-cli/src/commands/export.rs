// Rust guideline compliant 2026-10-19

//! Implementation of the `roster export` command.

use crate::commands::{open_registrar, print_json, FileFormat};
use crate::output_mode::is_json_output;
use crate::terminal::print_success;
use anyhow::Result;
use serde_json::json;
use std::path::Path;

/// Writes every student to `path` as CSV or JSON rows.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized, the format cannot
/// be determined, or the file cannot be written.
pub fn execute(path: &Path, format: Option<FileFormat>, data_dir: Option<&Path>) -> Result<()> {
    let registrar = open_registrar(data_dir)?;
    let written = registrar.export_students(path, format.map(Into::into))?;

    if is_json_output() {
        return print_json(json!({ "path": path, "rows": written }));
    }
    print_success(&format!(
        "Exported {written} student(s) to {}",
        path.display()
    ));
    Ok(())
}
