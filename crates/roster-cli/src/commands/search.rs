// Rust guideline compliant 2026-10-19

//! Implementation of the `roster search` command.

use crate::commands::open_registrar;
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Finds students whose name contains `name_part`, optionally within one faculty.
///
/// An empty `name_part` matches every name.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized.
pub fn execute(
    name_part: &str,
    faculty: Option<&str>,
    data_dir: Option<&Path>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let registrar = open_registrar(data_dir)?;
    let found = registrar.search_students(faculty, name_part);
    println!("{}", formatter.format_list(&found));
    Ok(())
}
