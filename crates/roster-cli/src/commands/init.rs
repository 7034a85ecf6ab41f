// Rust guideline compliant 2026-10-19

//! Implementation of the `roster init` command.
//!
//! Creates the `.roster` data directory with default configuration, status
//! rules, seeded reference sets and an empty student file.

use crate::commands::{data_dir_path, print_json};
use crate::output_mode::is_json_output;
use crate::terminal::{print_info, print_success};
use anyhow::Result;
use roster_app::Workspace;
use serde_json::json;
use std::path::Path;

/// Initializes a workspace.
///
/// Files that already exist are kept as they are.
///
/// # Errors
///
/// Returns an error if the directory or a default file cannot be written.
pub fn execute(data_dir: Option<&Path>) -> Result<()> {
    let (workspace, created) = Workspace::init(data_dir_path(data_dir)?)?;

    if is_json_output() {
        return print_json(json!({
            "data_dir": workspace.data_dir(),
            "created": created,
        }));
    }

    print_success(&format!(
        "Roster workspace initialized at {}",
        workspace.data_dir().display()
    ));
    if created.is_empty() {
        print_info("All data files already exist; nothing was changed");
    }
    for name in &created {
        println!("  - Created {name}");
    }
    Ok(())
}
