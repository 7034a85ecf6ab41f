// Rust guideline compliant 2026-10-19

//! Implementation of the `roster doctor` command.
//!
//! Reports duplicate IDs, unreadable student entries, students holding unknown reference values, rules
//! naming unknown statuses and broken configuration values.

use crate::commands::{open_registrar, print_json};
use crate::output_mode::is_json_output;
use crate::terminal::{print_error, print_success, print_warning};
use anyhow::Result;
use roster_app::doctor::{self, DoctorReport};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

struct Finding {
    severity: Severity,
    message: String,
}

fn findings(report: &DoctorReport) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !report.duplicate_ids.is_empty() {
        findings.push(Finding {
            severity: Severity::Error,
            message: format!("Duplicate student IDs: {}", report.duplicate_ids.join(", ")),
        });
    }
    if report.unreadable_students > 0 {
        findings.push(Finding {
            severity: Severity::Error,
            message: format!(
                "{} entries of students.json cannot be read and are kept aside untouched",
                report.unreadable_students
            ),
        });
    }
    for dangling in &report.dangling {
        findings.push(Finding {
            severity: Severity::Error,
            message: format!(
                "Student {} has unknown {} '{}'",
                dangling.id, dangling.kind, dangling.value
            ),
        });
    }
    if let Some(err) = &report.phone_pattern_error {
        findings.push(Finding {
            severity: Severity::Error,
            message: format!("phoneRegex does not compile: {err}"),
        });
    }
    for err in &report.config_errors {
        findings.push(Finding {
            severity: Severity::Error,
            message: err.clone(),
        });
    }
    // Unknown rule statuses only matter once a student reaches them.
    for status in &report.unknown_rule_statuses {
        findings.push(Finding {
            severity: Severity::Warning,
            message: format!("Transition rules name status '{status}', which is not in the status list"),
        });
    }

    findings
}

/// Executes the doctor command.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized or any
/// error-level problem was found.
pub fn execute(data_dir: Option<&Path>) -> Result<()> {
    let registrar = open_registrar(data_dir)?;
    let report = doctor::check(&registrar);
    let findings = findings(&report);
    let errors = findings
        .iter()
        .filter(|finding| finding.severity == Severity::Error)
        .count();

    if is_json_output() {
        print_json(&report)?;
    } else if findings.is_empty() {
        print_success("No problems found");
    } else {
        for finding in &findings {
            match finding.severity {
                Severity::Error => print_error(&finding.message),
                Severity::Warning => print_warning(&finding.message),
            }
        }
    }

    if errors > 0 {
        anyhow::bail!("Doctor found {errors} problem(s)");
    }
    Ok(())
}
