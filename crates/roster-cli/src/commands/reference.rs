// Rust guideline compliant 2026-10-19

//! Implementation of the `roster faculty`, `roster program` and
//! `roster status` commands.
//!
//! All three manage a reference set the same way. Renames cascade to every
//! student holding the old value; deletes are refused while a student still
//! holds the value.

use crate::commands::{open_registrar, print_json};
use crate::output_mode::is_json_output;
use crate::terminal::print_success;
use crate::OutputFormatter;
use anyhow::Result;
use roster_core::ReferenceKind;
use serde_json::json;
use std::path::Path;

/// Reference-set actions.
#[derive(Debug, Clone, clap::Subcommand)]
pub enum ReferenceAction {
    /// List all values
    List,

    /// Add a value
    Add {
        /// New value
        name: String,
    },

    /// Rename a value and every student holding it
    Rename {
        /// Current value
        old: String,

        /// New value
        new: String,
    },

    /// Delete a value no student holds
    Delete {
        /// Value to delete
        name: String,
    },
}

fn plural(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Faculty => "faculties",
        ReferenceKind::Program => "programs",
        ReferenceKind::Status => "statuses",
    }
}

/// Runs a reference-set action.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The value is blank, already exists or is unknown
/// - A delete targets a value still in use
/// - A data file cannot be written
pub fn execute(
    kind: ReferenceKind,
    action: ReferenceAction,
    data_dir: Option<&Path>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let mut registrar = open_registrar(data_dir)?;

    let message = match action {
        ReferenceAction::List => {
            let values = registrar.references(kind).values();
            println!("{}", formatter.format_names(plural(kind), values));
            return Ok(());
        }
        ReferenceAction::Add { name } => {
            registrar.add_reference(kind, &name)?;
            format!("Added {kind} '{name}'")
        }
        ReferenceAction::Rename { old, new } => {
            let affected = registrar.repository().count_using(kind, &old);
            registrar.rename_reference(kind, &old, &new)?;
            format!("Renamed {kind} '{old}' to '{new}' ({affected} student(s) updated)")
        }
        ReferenceAction::Delete { name } => {
            registrar.delete_reference(kind, &name)?;
            format!("Deleted {kind} '{name}'")
        }
    };

    if is_json_output() {
        return print_json(json!({
            "message": message,
            "kind": kind.to_string(),
            "values": registrar.references(kind).values(),
        }));
    }
    print_success(&message);
    Ok(())
}
