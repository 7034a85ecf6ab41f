// Rust guideline compliant 2026-10-19

//! Output formatting module for the Roster CLI.
//!
//! This module provides functionality for formatting student records
//! in various output formats (JSON, table, plain text).

use roster_core::models::iso8601_seconds::FORMAT as TIME_FORMAT;
use roster_core::Student;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting students in different output formats.
pub trait OutputFormatter {
    /// Formats a single student for display.
    fn format_student(&self, student: &Student) -> String;

    /// Formats a list of students for display.
    fn format_list(&self, students: &[&Student]) -> String;

    /// Formats a list of names, such as a reference set.
    fn format_names(&self, title: &str, names: &[String]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats students as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_student(&self, student: &Student) -> String {
        serde_json::to_string_pretty(student)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize student" }).to_string())
    }

    fn format_list(&self, students: &[&Student]) -> String {
        let output = json!({
            "students": students,
            "total": students.len(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize student list" }).to_string())
    }

    fn format_names(&self, title: &str, names: &[String]) -> String {
        let mut output = serde_json::Map::new();
        output.insert(title.to_string(), json!(names));
        output.insert("total".to_string(), json!(names.len()));
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize names" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "status": "error", "message": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats students as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_student(&self, student: &Student) -> String {
        let mut builder = Builder::default();
        for (label, value) in labeled_fields(student) {
            builder.push_record([label.to_string(), value]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_list(&self, students: &[&Student]) -> String {
        if students.is_empty() {
            return "No students found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Faculty", "Program", "Course", "Status"]);
        for student in students {
            builder.push_record([
                student.id.as_str(),
                student.name.as_str(),
                student.faculty.as_str(),
                student.program.as_str(),
                student.course.as_str(),
                student.status.as_str(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        format!("{table}\n{} student(s)", students.len())
    }

    fn format_names(&self, title: &str, names: &[String]) -> String {
        if names.is_empty() {
            return format!("No {title} defined.");
        }

        let mut builder = Builder::default();
        builder.push_record([title]);
        for name in names {
            builder.push_record([name.as_str()]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {error}")
    }
}

/// Plain text output formatter.
///
/// One record per line, tab-separated, for piping into other tools.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_student(&self, student: &Student) -> String {
        labeled_fields(student)
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_list(&self, students: &[&Student]) -> String {
        students
            .iter()
            .map(|student| student.to_row().join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_names(&self, _title: &str, names: &[String]) -> String {
        names.join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {error}")
    }
}

fn labeled_fields(student: &Student) -> Vec<(&'static str, String)> {
    vec![
        ("ID", student.id.clone()),
        ("Name", student.name.clone()),
        ("Date of birth", student.dob.clone()),
        ("Gender", student.gender.clone()),
        ("Faculty", student.faculty.clone()),
        ("Course", student.course.clone()),
        ("Program", student.program.clone()),
        ("Address", student.address.clone()),
        ("Email", student.email.clone()),
        ("Phone", student.phone.clone()),
        ("Status", student.status.clone()),
        (
            "Created",
            student.creation_time.format(TIME_FORMAT).to_string(),
        ),
    ]
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format ("json", "table", or "plain")
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: &str) -> Box<dyn OutputFormatter> {
    match format {
        "json" => Box::new(JsonFormatter),
        "plain" => Box::new(PlainFormatter),
        _ => Box::new(TableFormatter),
    }
}
