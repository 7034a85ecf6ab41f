// Rust guideline compliant 2026-10-19

//! Implementation of the `roster add` command.

use crate::commands::{open_registrar, print_json};
use crate::output_mode::is_json_output;
use crate::terminal::print_success;
use crate::OutputFormatter;
use anyhow::Result;
use roster_app::AppError;
use roster_core::Student;
use std::path::Path;

/// Fields of a new student.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Student ID
    pub id: String,

    /// Full name
    #[arg(long)]
    pub name: String,

    /// Date of birth (DD/MM/YYYY)
    #[arg(long)]
    pub dob: String,

    /// Gender (Male or Female)
    #[arg(long)]
    pub gender: String,

    /// Faculty
    #[arg(long)]
    pub faculty: String,

    /// Intake year (YYYY)
    #[arg(long)]
    pub course: String,

    /// Program
    #[arg(long)]
    pub program: String,

    /// Postal address
    #[arg(long, default_value = "")]
    pub address: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Status
    #[arg(long, default_value = "Active")]
    pub status: String,
}

impl AddArgs {
    /// Returns the fields in tabular row order.
    #[must_use]
    pub fn into_row(self) -> Vec<String> {
        vec![
            self.id,
            self.name,
            self.dob,
            self.gender,
            self.faculty,
            self.course,
            self.program,
            self.address,
            self.email,
            self.phone,
            self.status,
        ]
    }
}

/// Adds a student.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The ID is already taken
/// - The record fails validation while validation is enforced
/// - The student file cannot be written
pub fn execute(
    args: AddArgs,
    data_dir: Option<&Path>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let mut registrar = open_registrar(data_dir)?;
    let student = Student::from_row(&args.into_row()).map_err(AppError::from)?;
    let stored = registrar.add_student(student)?;

    if is_json_output() {
        return print_json(&stored);
    }

    print_success(&format!("Added student {}", stored.id));
    println!("{}", formatter.format_student(&stored));
    Ok(())
}
