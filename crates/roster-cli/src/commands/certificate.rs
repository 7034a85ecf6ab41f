// Rust guideline compliant 2026-10-19

//! Implementation of the `roster certificate` command.

use crate::commands::{open_registrar, print_json};
use crate::output_mode::is_json_output;
use crate::terminal::print_success;
use anyhow::{anyhow, Result};
use chrono::Local;
use roster_app::AppError;
use roster_core::{CertificateFormat, SchoolInfo};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Options for `roster certificate`.
#[derive(Debug, Clone, clap::Args)]
pub struct CertificateArgs {
    /// Student ID
    pub id: String,

    /// Why the certificate is requested
    #[arg(long)]
    pub purpose: String,

    /// Last day the certificate is valid (DD/MM/YYYY)
    #[arg(long)]
    pub valid_until: String,

    /// Document format (md or txt)
    #[arg(long, default_value = "md")]
    pub doc_format: String,

    /// Output file; defaults to certificate_<id>.<ext> in the current directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Builds a status certificate dated today and writes or prints it.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The student does not exist
/// - The document format is unknown
/// - The output file cannot be written
pub fn execute(args: CertificateArgs, data_dir: Option<&Path>) -> Result<()> {
    let registrar = open_registrar(data_dir)?;
    let format: CertificateFormat = args.doc_format.parse().map_err(|err: String| anyhow!(err))?;
    let issue_date = Local::now().format("%d/%m/%Y").to_string();
    let certificate = registrar.certificate(
        &args.id,
        &SchoolInfo::default(),
        &args.purpose,
        &args.valid_until,
        &issue_date,
    )?;

    if args.stdout {
        print!("{}", certificate.render(format));
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("certificate_{}.{}", args.id, format.extension())));
    certificate
        .write_to(&path, format)
        .map_err(AppError::from)?;

    if is_json_output() {
        return print_json(json!({ "path": path, "certificate": certificate }));
    }
    print_success(&format!("Wrote certificate to {}", path.display()));
    Ok(())
}
