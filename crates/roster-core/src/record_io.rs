// Rust guideline compliant 2026-10-19

//! Tabular record import and export.
//!
//! Rows are plain `Vec<String>` in the 11-field student order. CSV files
//! carry no header row; JSON files hold an array of string arrays. Row length
//! is not checked here so that the repository can report wrong-arity rows.

use crate::storage::to_pretty_json;
use crate::Result;
use serde_json::Value;
use std::path::Path;

/// Supported tabular formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// Comma-separated values, no header.
    Csv,
    /// JSON array of string arrays.
    Json,
}

impl RecordFormat {
    /// Picks a format from a file extension (`csv` or `json`, any case).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(RecordFormat::Csv),
            "json" => Some(RecordFormat::Json),
            _ => None,
        }
    }
}

/// Reads rows from `path` in `format`.
///
/// # Errors
///
/// See [`import_csv`] and [`import_json`].
pub fn import_rows(path: &Path, format: RecordFormat) -> Result<Vec<Vec<String>>> {
    match format {
        RecordFormat::Csv => import_csv(path),
        RecordFormat::Json => import_json(path),
    }
}

/// Writes rows to `path` in `format`.
///
/// # Errors
///
/// See [`export_csv`] and [`export_json`].
pub fn export_rows(path: &Path, rows: &[Vec<String>], format: RecordFormat) -> Result<()> {
    match format {
        RecordFormat::Csv => export_csv(path, rows),
        RecordFormat::Json => export_json(path, rows),
    }
}

/// Writes rows as headerless CSV. Fields containing commas or quotes are quoted.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_csv(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Exported CSV");
    Ok(())
}

/// Reads headerless CSV rows. Rows may have any number of fields.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid CSV.
pub fn import_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "Read CSV");
    Ok(rows)
}

/// Writes rows as a JSON array of string arrays with a 4-space indent.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn export_json(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let mut content = to_pretty_json(rows)?;
    content.push('\n');
    std::fs::write(path, content)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Exported JSON");
    Ok(())
}

/// Reads a JSON array of string arrays.
///
/// Entries that are not arrays, and cells that are not strings, are skipped
/// with a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its top level is not a
/// JSON array.
pub fn import_json(path: &Path) -> Result<Vec<Vec<String>>> {
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<Value> = serde_json::from_str(&content)?;

    let rows: Vec<Vec<String>> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Value::Array(cells) => Some(string_cells(index, cells)),
            _ => {
                tracing::warn!(entry = index, "Skipping JSON entry that is not an array");
                None
            }
        })
        .collect();

    tracing::debug!(path = %path.display(), rows = rows.len(), "Read JSON rows");
    Ok(rows)
}

fn string_cells(row: usize, cells: Vec<Value>) -> Vec<String> {
    cells
        .into_iter()
        .enumerate()
        .filter_map(|(column, cell)| match cell {
            Value::String(value) => Some(value),
            _ => {
                tracing::warn!(row, column, "Skipping JSON cell that is not a string");
                None
            }
        })
        .collect()
}
