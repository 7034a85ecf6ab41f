// Rust guideline compliant 2026-10-19

//! Implementation of the `roster update` command.
//!
//! Only the fields given on the command line change. While validation is
//! enforced, the patched record is validated and a status change must be
//! allowed by the transition rules.

use crate::commands::{open_registrar, print_json};
use crate::output_mode::is_json_output;
use crate::terminal::print_success;
use crate::OutputFormatter;
use anyhow::Result;
use roster_core::StudentPatch;
use std::path::Path;

/// Field changes for `roster update`.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateArgs {
    /// Student ID
    pub id: String,

    /// New full name
    #[arg(long)]
    pub name: Option<String>,

    /// New date of birth (DD/MM/YYYY)
    #[arg(long)]
    pub dob: Option<String>,

    /// New gender
    #[arg(long)]
    pub gender: Option<String>,

    /// New faculty
    #[arg(long)]
    pub faculty: Option<String>,

    /// New intake year
    #[arg(long)]
    pub course: Option<String>,

    /// New program
    #[arg(long)]
    pub program: Option<String>,

    /// New address
    #[arg(long)]
    pub address: Option<String>,

    /// New email
    #[arg(long)]
    pub email: Option<String>,

    /// New phone
    #[arg(long)]
    pub phone: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,
}

impl UpdateArgs {
    /// Splits the arguments into the student ID and the patch.
    #[must_use]
    pub fn into_patch(self) -> (String, StudentPatch) {
        let patch = StudentPatch {
            name: self.name,
            dob: self.dob,
            gender: self.gender,
            faculty: self.faculty,
            course: self.course,
            program: self.program,
            address: self.address,
            email: self.email,
            phone: self.phone,
            status: self.status,
        };
        (self.id, patch)
    }
}

/// Updates a student.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - No field was given or the ID is unknown
/// - The change fails validation or the transition rules
/// - The student file cannot be written
pub fn execute(
    args: UpdateArgs,
    data_dir: Option<&Path>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let mut registrar = open_registrar(data_dir)?;
    let (id, patch) = args.into_patch();
    let updated = registrar.update_student(&id, &patch)?;

    if is_json_output() {
        return print_json(&updated);
    }

    print_success(&format!("Updated student {}", updated.id));
    println!("{}", formatter.format_student(&updated));
    Ok(())
}
