// Rust guideline compliant 2026-10-19

//! Workspace discovery and path management.

use crate::error::{AppError, Result};
use roster_core::config::ConfigStore;
use roster_core::repository::STUDENTS_FILE;
use roster_core::{JsonStore, ReferenceKind, RulesStore, Student};
use std::path::{Path, PathBuf};

/// Name of the data directory inside a workspace root.
pub const DATA_DIR_NAME: &str = ".roster";

const CONFIG_FILE: &str = "config.json";
const RULES_FILE: &str = "status_rules.json";
const LOG_FILE: &str = "roster.log";

/// Paths of one Roster workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
}

impl Workspace {
    /// Discovers a workspace under an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Workspace root; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.roster` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        Self::at(root.join(DATA_DIR_NAME))
    }

    /// Uses `data_dir` directly as the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist.
    pub fn at(data_dir: PathBuf) -> Result<Self> {
        if !data_dir.is_dir() {
            return Err(AppError::WorkspaceNotInitialized { path: data_dir });
        }
        Ok(Self { data_dir })
    }

    /// Creates the data directory and writes any missing default files.
    ///
    /// Existing files are left untouched, so running this twice is safe.
    ///
    /// # Returns
    ///
    /// The workspace and the names of the files that were created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a default file cannot be written.
    pub fn init(data_dir: PathBuf) -> Result<(Self, Vec<String>)> {
        std::fs::create_dir_all(&data_dir)?;
        let workspace = Self { data_dir };
        let missing: Vec<String> = workspace
            .data_files()
            .into_iter()
            .filter(|path| !path.exists())
            .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();

        if !workspace.config_path().exists() {
            ConfigStore::new(workspace.config_path()).save()?;
        }
        if !workspace.rules_path().exists() {
            RulesStore::load(&workspace.rules_path()).save()?;
        }
        for kind in ReferenceKind::ALL {
            let store = JsonStore::new(workspace.data_dir.join(kind.file_name()))?;
            if !store.exists() {
                store.persist(&kind.seed())?;
            }
        }
        if !workspace.students_path().exists() {
            JsonStore::new(workspace.students_path())?.persist(&Vec::<Student>::new())?;
        }

        tracing::info!(dir = %workspace.data_dir.display(), created = missing.len(), "Initialized workspace");
        Ok((workspace, missing))
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the student file path.
    #[must_use]
    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(STUDENTS_FILE)
    }

    /// Returns the configuration file path.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// Returns the status rules file path.
    #[must_use]
    pub fn rules_path(&self) -> PathBuf {
        self.data_dir.join(RULES_FILE)
    }

    /// Returns the operation log path.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    /// Returns every JSON data file of the workspace.
    #[must_use]
    pub fn data_files(&self) -> Vec<PathBuf> {
        let mut files = vec![self.students_path(), self.config_path(), self.rules_path()];
        files.extend(
            ReferenceKind::ALL
                .iter()
                .map(|kind| self.data_dir.join(kind.file_name())),
        );
        files
    }
}
