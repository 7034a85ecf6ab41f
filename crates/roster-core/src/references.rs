// Rust guideline compliant 2026-10-19

//! Reference sets: the named Faculty, Program and Status values students point into.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three reference sets owned by a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Faculty names.
    Faculty,
    /// Program names.
    Program,
    /// Status names.
    Status,
}

impl ReferenceKind {
    /// All kinds, in display order.
    pub const ALL: [ReferenceKind; 3] = [
        ReferenceKind::Faculty,
        ReferenceKind::Program,
        ReferenceKind::Status,
    ];

    /// Returns the data file name holding this set.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        match self {
            ReferenceKind::Faculty => "faculties.json",
            ReferenceKind::Program => "programs.json",
            ReferenceKind::Status => "statuses.json",
        }
    }

    /// Returns the values a fresh repository starts with.
    #[must_use]
    pub fn seed(&self) -> Vec<String> {
        let values: &[&str] = match self {
            ReferenceKind::Faculty => &["FL", "FBE", "FJPN", "FFR"],
            ReferenceKind::Program => &["Advanced Program", "Formal Program", "High Quality Program"],
            ReferenceKind::Status => &["Active", "Graduated", "Leave", "Absent"],
        };
        values.iter().map(|v| (*v).to_string()).collect()
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceKind::Faculty => "faculty",
            ReferenceKind::Program => "program",
            ReferenceKind::Status => "status",
        })
    }
}

/// An ordered list of unique names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSet {
    kind: ReferenceKind,
    values: Vec<String>,
}

impl ReferenceSet {
    /// Creates a set from existing values, dropping repeated names.
    pub fn new(kind: ReferenceKind, values: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self {
            kind,
            values: unique,
        }
    }

    /// Creates a set holding the kind's seed values.
    pub fn seeded(kind: ReferenceKind) -> Self {
        Self::new(kind, kind.seed())
    }

    /// Returns which set this is.
    #[must_use]
    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    /// Returns true if `value` is a member.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Returns the values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the set has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends a new value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateReference`] if the value already exists.
    pub fn insert(&mut self, value: &str) -> Result<()> {
        if self.contains(value) {
            return Err(Error::DuplicateReference {
                kind: self.kind,
                value: value.to_string(),
            });
        }
        self.values.push(value.to_string());
        Ok(())
    }

    /// Replaces `old` with `new` in place, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `new` already exists
    /// - `old` is not a member
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        if self.contains(new) {
            return Err(Error::DuplicateReference {
                kind: self.kind,
                value: new.to_string(),
            });
        }
        let slot = self
            .values
            .iter_mut()
            .find(|v| v.as_str() == old)
            .ok_or_else(|| Error::UnknownReference {
                kind: self.kind,
                value: old.to_string(),
            })?;
        *slot = new.to_string();
        Ok(())
    }

    /// Removes a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownReference`] if the value is not a member.
    pub fn remove(&mut self, value: &str) -> Result<()> {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        if self.values.len() == before {
            return Err(Error::UnknownReference {
                kind: self.kind,
                value: value.to_string(),
            });
        }
        Ok(())
    }
}

/// Read-only view of the three sets, handed to the validator.
#[derive(Debug, Clone, Copy)]
pub struct References<'a> {
    /// Faculty names.
    pub faculties: &'a ReferenceSet,
    /// Program names.
    pub programs: &'a ReferenceSet,
    /// Status names.
    pub statuses: &'a ReferenceSet,
}

impl References<'_> {
    /// Returns the set for `kind`.
    #[must_use]
    pub fn get(&self, kind: ReferenceKind) -> &ReferenceSet {
        match kind {
            ReferenceKind::Faculty => self.faculties,
            ReferenceKind::Program => self.programs,
            ReferenceKind::Status => self.statuses,
        }
    }
}
