// Rust guideline compliant 2026-10-19

//! Workspace health checks.

use crate::registrar::Registrar;
use roster_core::validator::PhonePattern;
use roster_core::{ReferenceKind, Student};
use serde::Serialize;
use std::collections::BTreeSet;

/// A student field pointing at a value missing from its reference set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Student ID.
    pub id: String,
    /// Which reference set the value belongs to.
    pub kind: ReferenceKind,
    /// The unknown value.
    pub value: String,
}

/// Findings of [`check`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    /// IDs held by more than one student.
    pub duplicate_ids: Vec<String>,
    /// Entries of the student file that could not be read as students.
    pub unreadable_students: usize,
    /// Student fields naming unknown reference values.
    pub dangling: Vec<DanglingReference>,
    /// Statuses named in the transition rules but missing from the status set.
    pub unknown_rule_statuses: Vec<String>,
    /// Why the configured phone pattern does not compile, if it does not.
    pub phone_pattern_error: Option<String>,
    /// Configuration values outside their allowed range.
    pub config_errors: Vec<String>,
}

impl DoctorReport {
    /// Returns true when nothing was found.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.duplicate_ids.is_empty()
            && self.unreadable_students == 0
            && self.dangling.is_empty()
            && self.unknown_rule_statuses.is_empty()
            && self.phone_pattern_error.is_none()
            && self.config_errors.is_empty()
    }
}

/// Inspects a registrar's data without changing it.
#[must_use]
pub fn check(registrar: &Registrar) -> DoctorReport {
    let repo = registrar.repository();
    let config = registrar.config();

    let dangling = repo
        .students()
        .iter()
        .flat_map(|student| {
            ReferenceKind::ALL.into_iter().filter_map(move |kind| {
                let value = field(student, kind);
                (!repo.is_valid_reference(kind, value)).then(|| DanglingReference {
                    id: student.id.clone(),
                    kind,
                    value: value.to_string(),
                })
            })
        })
        .collect();

    let graph = registrar.transition_graph();
    let statuses = repo.reference_set(ReferenceKind::Status);
    let unknown_rule_statuses: BTreeSet<String> = graph
        .unknown_sources(statuses)
        .into_iter()
        .chain(graph.unknown_targets(statuses))
        .collect();

    let report = DoctorReport {
        duplicate_ids: repo.duplicate_ids(),
        unreadable_students: repo.unreadable_entries().len(),
        dangling,
        unknown_rule_statuses: unknown_rule_statuses.into_iter().collect(),
        phone_pattern_error: PhonePattern::compile(&config.phone_regex)
            .err()
            .map(|err| err.to_string()),
        config_errors: config_errors(config.delete_time_limit),
    };
    tracing::info!(healthy = report.is_healthy(), "Doctor check finished");
    report
}

fn config_errors(delete_time_limit: i64) -> Vec<String> {
    let mut errors = Vec::new();
    if delete_time_limit < 0 {
        errors.push(format!("deleteTimeLimit must be >= 0, got {delete_time_limit}"));
    }
    errors
}

fn field(student: &Student, kind: ReferenceKind) -> &str {
    match kind {
        ReferenceKind::Faculty => &student.faculty,
        ReferenceKind::Program => &student.program,
        ReferenceKind::Status => &student.status,
    }
}
