// Rust guideline compliant 2026-10-19

//! Implementation of the `roster list` command.
//!
//! Lists students in insertion order, optionally filtered by exact faculty,
//! program or status.

use crate::commands::open_registrar;
use crate::OutputFormatter;
use anyhow::Result;
use roster_core::Student;
use std::path::Path;

/// Exact-match filters for `roster list`.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Faculty to keep.
    pub faculty: Option<String>,
    /// Program to keep.
    pub program: Option<String>,
    /// Status to keep.
    pub status: Option<String>,
}

impl ListFilter {
    /// Returns true if `student` passes every filter that is set.
    #[must_use]
    pub fn matches(&self, student: &Student) -> bool {
        let keep = |filter: &Option<String>, value: &str| {
            filter.as_deref().map_or(true, |wanted| wanted == value)
        };
        keep(&self.faculty, &student.faculty)
            && keep(&self.program, &student.program)
            && keep(&self.status, &student.status)
    }
}

/// Lists students.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized.
pub fn execute(
    filter: &ListFilter,
    data_dir: Option<&Path>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let registrar = open_registrar(data_dir)?;
    let students: Vec<&Student> = registrar
        .students()
        .iter()
        .filter(|student| filter.matches(student))
        .collect();
    println!("{}", formatter.format_list(&students));
    Ok(())
}
