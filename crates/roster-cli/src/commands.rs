// Rust guideline compliant 2026-10-19

//! Command implementations for the Roster CLI.

pub mod add;
pub mod certificate;
pub mod config;
pub mod doctor;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod reference;
pub mod remove;
pub mod rules;
pub mod search;
pub mod show;
pub mod update;

use anyhow::Result;
use roster_app::{Registrar, SuccessEnvelope, Workspace, DATA_DIR_NAME};
use roster_core::RecordFormat;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Tabular file format selectable on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FileFormat {
    /// Headerless CSV.
    Csv,
    /// JSON array of string arrays.
    Json,
}

impl From<FileFormat> for RecordFormat {
    fn from(format: FileFormat) -> Self {
        match format {
            FileFormat::Csv => RecordFormat::Csv,
            FileFormat::Json => RecordFormat::Json,
        }
    }
}

/// Resolves the data directory: `--data-dir` if given, else `./.roster`.
///
/// # Errors
///
/// Returns an error if the current directory cannot be resolved.
pub fn data_dir_path(data_dir: Option<&Path>) -> Result<PathBuf> {
    match data_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?.join(DATA_DIR_NAME)),
    }
}

/// Opens the registrar of an initialized workspace.
///
/// # Errors
///
/// Returns an error if the workspace has not been initialized.
pub fn open_registrar(data_dir: Option<&Path>) -> Result<Registrar> {
    let workspace = Workspace::at(data_dir_path(data_dir)?)?;
    Ok(Registrar::open(workspace)?)
}

/// Prints `result` inside a success envelope.
///
/// # Errors
///
/// Returns an error if `result` cannot be serialized.
pub fn print_json<T: Serialize>(result: T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&SuccessEnvelope::new(result))?
    );
    Ok(())
}
