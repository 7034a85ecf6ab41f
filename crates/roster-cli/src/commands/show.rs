// Rust guideline compliant 2026-10-19

//! Implementation of the `roster show` command.

use crate::commands::open_registrar;
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Shows one student.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized or the ID is unknown.
pub fn execute(id: &str, data_dir: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let registrar = open_registrar(data_dir)?;
    let student = registrar.find_student(id)?;
    println!("{}", formatter.format_student(student));
    Ok(())
}
