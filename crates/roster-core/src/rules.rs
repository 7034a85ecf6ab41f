// Rust guideline compliant 2026-10-19

//! Status transition rules.
//!
//! A ruleset maps a status name to the statuses a student may move to next.
//! Statuses with no entry are unconstrained. The default ruleset is:
//!
//! - Active → Leave, Graduated, Absent
//! - Leave → Active, Graduated, Absent
//! - Absent → Active, Leave
//! - Graduated → Post-graduated
//! - Post-graduated → (terminal)

use crate::storage::JsonStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from a status to its allowed destination statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionRules {
    rules: BTreeMap<String, Vec<String>>,
}

impl TransitionRules {
    /// Creates an empty ruleset, in which every transition is allowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default ruleset.
    pub fn seeded() -> Self {
        let mut rules = Self::new();
        rules.set_allowed_transitions("Active", ["Leave", "Graduated", "Absent"]);
        rules.set_allowed_transitions("Leave", ["Active", "Graduated", "Absent"]);
        rules.set_allowed_transitions("Absent", ["Active", "Leave"]);
        rules.set_allowed_transitions("Graduated", ["Post-graduated"]);
        rules.set_allowed_transitions("Post-graduated", Vec::<String>::new());
        rules
    }

    /// Checks whether a student may move from `from` to `to`.
    ///
    /// # Returns
    ///
    /// True if `from` has no entry, otherwise true iff `to` is listed for it.
    #[must_use]
    pub fn is_valid_transition(&self, from: &str, to: &str) -> bool {
        match self.rules.get(from) {
            None => true,
            Some(allowed) => allowed.iter().any(|status| status == to),
        }
    }

    /// Checks a transition and explains a rejection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if the transition is not allowed.
    pub fn check_transition(&self, from: &str, to: &str) -> Result<()> {
        if self.is_valid_transition(from, to) {
            return Ok(());
        }

        let allowed = self.allowed_transitions(from);
        let message = if allowed.is_empty() {
            format!("Cannot transition from {from} to {to}: {from} is terminal")
        } else {
            format!(
                "Cannot transition from {from} to {to}; allowed: {}",
                allowed.join(", ")
            )
        };
        Err(Error::InvalidTransition(message))
    }

    /// Replaces the allowed destinations of `status`.
    pub fn set_allowed_transitions<I, S>(&mut self, status: &str, allowed: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.insert(
            status.to_string(),
            allowed.into_iter().map(Into::into).collect(),
        );
    }

    /// Removes the entry for `status`, making it unconstrained.
    ///
    /// # Returns
    ///
    /// True if an entry was removed.
    pub fn clear_transitions(&mut self, status: &str) -> bool {
        self.rules.remove(status).is_some()
    }

    /// Returns the allowed destinations of `status`, or an empty slice if unknown.
    #[must_use]
    pub fn allowed_transitions(&self, status: &str) -> &[String] {
        self.rules.get(status).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `status` has an entry.
    #[must_use]
    pub fn has_rule(&self, status: &str) -> bool {
        self.rules.contains_key(status)
    }

    /// Iterates entries in status-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.rules.iter()
    }

    /// Returns the number of statuses with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no status is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renames a status everywhere it appears, as a key or as a destination.
    pub fn rename_status(&mut self, old: &str, new: &str) {
        if let Some(allowed) = self.rules.remove(old) {
            self.rules.insert(new.to_string(), allowed);
        }
        for allowed in self.rules.values_mut() {
            for status in allowed.iter_mut().filter(|s| s.as_str() == old) {
                *status = new.to_string();
            }
        }
    }
}

/// A ruleset bound to its JSON file.
#[derive(Debug, Clone)]
pub struct RulesStore {
    rules: TransitionRules,
    path: PathBuf,
}

impl RulesStore {
    /// Loads rules from `path`.
    ///
    /// A missing file is seeded with the default ruleset and written right
    /// away. A malformed file is logged and the default ruleset is used
    /// without overwriting it.
    pub fn load(path: &Path) -> Self {
        let mut store = Self {
            rules: TransitionRules::new(),
            path: path.to_path_buf(),
        };
        store.reload(path);
        store
    }

    /// Replaces the current rules with the contents of `path`.
    ///
    /// See [`RulesStore::load`] for the missing and malformed cases.
    pub fn reload(&mut self, path: &Path) {
        self.path = path.to_path_buf();

        let store = match JsonStore::new(self.path.clone()) {
            Ok(store) => store,
            Err(err) => {
                tracing::warn!(error = %err, "Invalid rules path, using default rules");
                self.rules = TransitionRules::seeded();
                return;
            }
        };

        if !store.exists() {
            tracing::info!(path = %path.display(), "Status rules not found, seeding defaults");
            self.rules = TransitionRules::seeded();
            if let Err(err) = self.save() {
                tracing::warn!(error = %err, "Could not write default status rules");
            }
            return;
        }

        match store.load_or_warn::<TransitionRules>() {
            Some(rules) => self.rules = rules,
            None => self.rules = TransitionRules::seeded(),
        }
    }

    /// Writes the ruleset to the last-loaded path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        JsonStore::new(self.path.clone())?.persist(&self.rules)?;
        tracing::info!(path = %self.path.display(), "Saved status rules");
        Ok(())
    }

    /// Returns the ruleset.
    #[must_use]
    pub fn rules(&self) -> &TransitionRules {
        &self.rules
    }

    /// Returns the ruleset for in-memory changes. Call [`RulesStore::save`] to persist.
    pub fn rules_mut(&mut self) -> &mut TransitionRules {
        &mut self.rules
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_seeded_rules() {
        let rules = TransitionRules::seeded();
        assert!(rules.is_valid_transition("Active", "Leave"));
        assert!(rules.is_valid_transition("Leave", "Active"));
        assert!(rules.is_valid_transition("Graduated", "Post-graduated"));
        assert!(!rules.is_valid_transition("Graduated", "Active"));
        assert!(!rules.is_valid_transition("Absent", "Graduated"));
        assert!(!rules.is_valid_transition("Post-graduated", "Active"));
    }

    #[test]
    fn test_unknown_status_is_open() {
        let rules = TransitionRules::seeded();
        assert!(rules.is_valid_transition("Suspended", "Active"));
        assert!(rules.allowed_transitions("Suspended").is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut rules = TransitionRules::seeded();
        rules.set_allowed_transitions("Active", ["Graduated"]);
        assert_eq!(rules.allowed_transitions("Active"), ["Graduated"]);
        assert!(!rules.is_valid_transition("Active", "Leave"));
    }

    #[test]
    fn test_check_transition_messages() {
        let rules = TransitionRules::seeded();
        let err = rules.check_transition("Post-graduated", "Active").unwrap_err();
        assert!(err.to_string().contains("terminal"));

        let err = rules.check_transition("Absent", "Graduated").unwrap_err();
        assert!(err.to_string().contains("allowed: Active, Leave"));
    }

    #[test]
    fn test_rename_status_updates_keys_and_targets() {
        let mut rules = TransitionRules::seeded();
        rules.rename_status("Leave", "On Leave");
        assert!(rules.has_rule("On Leave"));
        assert!(!rules.has_rule("Leave"));
        assert!(rules.is_valid_transition("Active", "On Leave"));
        assert!(rules.is_valid_transition("Absent", "On Leave"));
    }

    #[test]
    fn test_missing_file_seeds_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("status_rules.json");
        let store = RulesStore::load(&path);

        assert_eq!(store.rules(), &TransitionRules::seeded());
        assert!(path.exists());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"Post-graduated\": []"));
    }

    #[test]
    fn test_load_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("status_rules.json");
        std::fs::write(&path, r#"{ "Active": ["Graduated"] }"#).unwrap();

        let store = RulesStore::load(&path);
        assert_eq!(store.rules().len(), 1);
        assert!(!store.rules().is_valid_transition("Active", "Leave"));
        assert!(store.rules().is_valid_transition("Leave", "Active"));
    }

    #[test]
    fn test_malformed_file_falls_back_without_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("status_rules.json");
        std::fs::write(&path, r#"{ "Active": "Leave" }"#).unwrap();

        let store = RulesStore::load(&path);
        assert_eq!(store.rules(), &TransitionRules::seeded());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{ "Active": "Leave" }"#
        );
    }

    #[test]
    fn test_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("status_rules.json");
        let mut store = RulesStore::load(&path);
        store
            .rules_mut()
            .set_allowed_transitions("Post-graduated", ["Active"]);
        store.save().unwrap();

        let reloaded = RulesStore::load(&path);
        assert!(reloaded
            .rules()
            .is_valid_transition("Post-graduated", "Active"));
    }
}
