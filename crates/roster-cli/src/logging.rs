// Rust guideline compliant 2026-10-19

//! Operation log setup.
//!
//! Events from every crate are written as JSON lines to the workspace's
//! append-only `roster.log`. Nothing is logged to the terminal.

use anyhow::{bail, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Default level when `--log-level` is not given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the global subscriber writing to `log_path`.
///
/// The returned guard flushes buffered lines when dropped, so it must be
/// held until the process exits.
///
/// # Errors
///
/// Returns an error if the level is unknown or the log file cannot be opened.
pub fn init_tracing(log_path: &Path, level: &str) -> Result<WorkerGuard> {
    let level = parse_log_level(level)?;
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .with_writer(writer)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(guard)
}

/// Parses `error`, `warn`, `info` or `debug`, in any case.
///
/// # Errors
///
/// Returns an error for any other value.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => bail!("Invalid log level '{other}' (use error, warn, info or debug)"),
    }
}
