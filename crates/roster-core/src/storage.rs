// Rust guideline compliant 2026-10-19

//! Storage module for JSON data files.
//!
//! Every Roster data file is a single pretty-printed JSON document with a
//! 4-space indent. Writes go to a sibling temp file that is renamed over the
//! target, so a failed write never leaves a truncated file behind.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A JSON document stored at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// Path to the JSON file.
    path: PathBuf,
}

impl JsonStore {
    /// Creates a new JsonStore instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        Ok(Self { path })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns a reference to the JSON file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl JsonStore {
    /// Loads and deserializes the document.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the file does not exist, `Ok(Some(value))` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid JSON for `T`
    pub fn load<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    /// Loads the document, recovering from a missing or malformed file.
    ///
    /// A missing file yields `None` silently; a malformed one is logged and
    /// also yields `None`, leaving the file untouched for the operator.
    pub fn load_or_warn<T: DeserializeOwned>(&self) -> Option<T> {
        match self.load() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Ignoring unreadable data file"
                );
                None
            }
        }
    }
}

impl JsonStore {
    /// Serializes `value` and writes it atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Serialization fails
    /// - The temp file cannot be written
    /// - The atomic rename fails
    pub fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let content = to_pretty_json(value)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// Writes `value`, wrapping any failure as [`Error::Persist`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persist`] naming the file that could not be written.
    pub fn persist<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        self.save(value).map_err(|err| {
            tracing::error!(path = %self.path.display(), error = %err, "Failed to write data file");
            Error::Persist {
                path: self.path.clone(),
                source: Box::new(err),
            }
        })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Serializes a value as JSON with a 4-space indent.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|err| {
        Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}
