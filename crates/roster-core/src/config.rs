// Rust guideline compliant 2026-10-19

//! Configuration management for Roster.
//!
//! The configuration lives in a JSON object with the keys `emailSuffix`,
//! `phoneRegex`, `deleteTimeLimit` and `enforceValidation`. Loading merges the
//! keys present in the file over the current values, one key at a time, so a
//! value of the wrong type only loses that key. A file that cannot be parsed
//! is logged and ignored so the tool always starts.

use crate::storage::JsonStore;
use crate::validator::PhonePattern;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Environment variable overriding `emailSuffix`.
pub const ENV_EMAIL_SUFFIX: &str = "ROSTER_EMAIL_SUFFIX";
/// Environment variable overriding `phoneRegex`.
pub const ENV_PHONE_REGEX: &str = "ROSTER_PHONE_REGEX";
/// Environment variable overriding `deleteTimeLimit`.
pub const ENV_DELETE_TIME_LIMIT: &str = "ROSTER_DELETE_TIME_LIMIT";
/// Environment variable overriding `enforceValidation`.
pub const ENV_ENFORCE_VALIDATION: &str = "ROSTER_ENFORCE_VALIDATION";

/// Validation and policy settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Required tail of every student email.
    pub email_suffix: String,

    /// Phone pattern. Without a leading `^` it is a literal required prefix.
    pub phone_regex: String,

    /// Minutes after creation during which a student may be deleted.
    pub delete_time_limit: i64,

    /// Master switch for record validation.
    pub enforce_validation: bool,
}

/// Default email suffix.
fn default_email_suffix() -> String {
    "@student.university.edu.vn".to_string()
}

/// Default phone prefix.
fn default_phone_regex() -> String {
    "+84".to_string()
}

/// Default delete window in minutes.
fn default_delete_time_limit() -> i64 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email_suffix: default_email_suffix(),
            phone_regex: default_phone_regex(),
            delete_time_limit: default_delete_time_limit(),
            enforce_validation: true,
        }
    }
}

/// Reads `key` from a loaded config object, logging a value of the wrong type.
fn file_value<T: DeserializeOwned>(file: &Map<String, Value>, key: &str) -> Option<T> {
    let raw = file.get(key)?;
    match T::deserialize(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, error = %err, "Ignoring config value of the wrong type");
            None
        }
    }
}

impl Config {
    /// Merges each known key of `file` on its own; unknown keys are ignored.
    fn merge(&mut self, file: &Map<String, Value>) {
        if let Some(suffix) = file_value(file, "emailSuffix") {
            self.email_suffix = suffix;
        }
        if let Some(pattern) = file_value(file, "phoneRegex") {
            self.phone_regex = pattern;
        }
        if let Some(limit) = file_value(file, "deleteTimeLimit") {
            self.delete_time_limit = limit;
        }
        if let Some(enforce) = file_value(file, "enforceValidation") {
            self.enforce_validation = enforce;
        }
    }

    /// Validates the configuration values.
    ///
    /// Loading never calls this; persisted values are tolerated as-is.
    /// Interactive changes are checked before they are saved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `delete_time_limit` is negative
    /// - `phone_regex` does not compile once wrapped
    pub fn validate(&self) -> Result<()> {
        if self.delete_time_limit < 0 {
            return Err(Error::InvalidConfig(format!(
                "deleteTimeLimit must be >= 0, got {}",
                self.delete_time_limit
            )));
        }

        PhonePattern::compile(&self.phone_regex)
            .map_err(|err| Error::InvalidConfig(err.to_string()))?;

        Ok(())
    }

    /// Applies overrides supplied by `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean override cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_EMAIL_SUFFIX) {
            self.email_suffix = val;
        }

        if let Some(val) = lookup(ENV_PHONE_REGEX) {
            self.phone_regex = val;
        }

        if let Some(val) = lookup(ENV_DELETE_TIME_LIMIT) {
            self.delete_time_limit = val.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("{ENV_DELETE_TIME_LIMIT} must be a number of minutes"))
            })?;
        }

        if let Some(val) = lookup(ENV_ENFORCE_VALIDATION) {
            self.enforce_validation = val.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("{ENV_ENFORCE_VALIDATION} must be true or false"))
            })?;
        }

        Ok(())
    }
}

/// Configuration bound to the file it was loaded from.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: Config,
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store with default values bound to `path`, without reading it.
    pub fn new(path: PathBuf) -> Self {
        Self {
            config: Config::default(),
            path,
        }
    }

    /// Creates a store from defaults and merges `path` over them.
    pub fn open(path: PathBuf) -> Self {
        let mut store = Self::new(path.clone());
        store.load(&path);
        store
    }

    /// Opens `path` and then applies `ROSTER_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override is malformed.
    pub fn open_with_env(path: PathBuf) -> Result<Self> {
        let mut store = Self::open(path);
        store.config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(store)
    }

    /// Merges the keys found in `path` over the current values.
    ///
    /// Later saves go to `path`. A missing file keeps the current values; a
    /// malformed one is logged and keeps them too.
    pub fn load(&mut self, path: &Path) {
        self.path = path.to_path_buf();

        let store = match JsonStore::new(self.path.clone()) {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!(error = %err, "Invalid config path, using current values");
                return;
            }
        };

        if !store.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            return;
        }

        if let Some(file) = store.load_or_warn::<Map<String, Value>>() {
            self.config.merge(&file);
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }
    }

    /// Writes the current values to the last-loaded path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        JsonStore::new(self.path.clone())?.persist(&self.config)?;
        tracing::info!(path = %self.path.display(), "Saved configuration");
        Ok(())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the path used by [`ConfigStore::save`].
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the configured email suffix.
    #[must_use]
    pub fn email_suffix(&self) -> &str {
        &self.config.email_suffix
    }

    /// Sets the email suffix in memory.
    pub fn set_email_suffix(&mut self, suffix: impl Into<String>) {
        self.config.email_suffix = suffix.into();
    }

    /// Returns the configured phone pattern.
    #[must_use]
    pub fn phone_regex(&self) -> &str {
        &self.config.phone_regex
    }

    /// Sets the phone pattern in memory.
    pub fn set_phone_regex(&mut self, pattern: impl Into<String>) {
        self.config.phone_regex = pattern.into();
    }

    /// Returns the delete window in minutes.
    #[must_use]
    pub fn delete_time_limit(&self) -> i64 {
        self.config.delete_time_limit
    }

    /// Sets the delete window in memory. Negative values are accepted.
    pub fn set_delete_time_limit(&mut self, minutes: i64) {
        self.config.delete_time_limit = minutes;
    }

    /// Returns whether validation is enforced.
    #[must_use]
    pub fn enforce_validation(&self) -> bool {
        self.config.enforce_validation
    }

    /// Sets the validation master switch in memory.
    pub fn set_enforce_validation(&mut self, enforce: bool) {
        self.config.enforce_validation = enforce;
    }
}
