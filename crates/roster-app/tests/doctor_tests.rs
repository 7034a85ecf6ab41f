// Rust guideline compliant 2026-10-19

//! Tests for workspace health checks.

use roster_app::doctor::{self, DanglingReference};
use roster_app::{ConfigKey, Registrar, Workspace, DATA_DIR_NAME};
use roster_core::{ReferenceKind, Student};
use std::fs;
use tempfile::TempDir;

fn student(id: &str, faculty: &str) -> Student {
    Student::from_row(
        &[
            id,
            "Alice",
            "01/01/2000",
            "Female",
            faculty,
            "2020",
            "Advanced Program",
            "Address 1",
            "alice@student.university.edu.vn",
            "+84123456789",
            "Active",
        ]
        .map(String::from),
    )
    .expect("Valid row")
}

fn setup() -> (TempDir, Registrar) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let (workspace, _) =
        Workspace::init(temp_dir.path().join(DATA_DIR_NAME)).expect("Failed to init workspace");
    let registrar = Registrar::open(workspace).expect("Failed to open registrar");
    (temp_dir, registrar)
}

#[test]
fn test_default_rules_name_unlisted_status() {
    let (_temp_dir, registrar) = setup();
    let report = doctor::check(&registrar);

    assert_eq!(report.unknown_rule_statuses, vec!["Post-graduated".to_string()]);
    assert!(report.duplicate_ids.is_empty());
    assert!(report.dangling.is_empty());
    assert!(report.phone_pattern_error.is_none());
    assert!(!report.is_healthy());
}

#[test]
fn test_healthy_after_adding_status() {
    let (_temp_dir, mut registrar) = setup();
    registrar
        .add_reference(ReferenceKind::Status, "Post-graduated")
        .expect("Failed to add status");
    registrar.add_student(student("SV001", "FL")).expect("Failed to add");

    assert!(doctor::check(&registrar).is_healthy());
}

#[test]
fn test_reports_dangling_references() {
    let (_temp_dir, mut registrar) = setup();
    registrar
        .set_config(ConfigKey::EnforceValidation, "false")
        .expect("Failed to disable validation");
    registrar
        .add_student(student("SV001", "Mystery"))
        .expect("Accepted without validation");

    let report = doctor::check(&registrar);
    assert_eq!(
        report.dangling,
        vec![DanglingReference {
            id: "SV001".to_string(),
            kind: ReferenceKind::Faculty,
            value: "Mystery".to_string(),
        }]
    );
}

#[test]
fn test_reports_duplicate_ids_from_import() {
    let (temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "FL")).expect("Failed to add");

    let path = temp_dir.path().join("again.json");
    let rows = serde_json::json!([student("SV001", "FBE").to_row()]);
    fs::write(&path, rows.to_string()).expect("Failed to write rows");
    let import = registrar
        .import_students(&path, None)
        .expect("Failed to import");
    assert_eq!(import.duplicate_ids, vec!["SV001".to_string()]);

    let report = doctor::check(&registrar);
    assert_eq!(report.duplicate_ids, vec!["SV001".to_string()]);
}

#[test]
fn test_reports_broken_config_file() {
    let (temp_dir, _) = setup();
    let config_path = temp_dir.path().join(DATA_DIR_NAME).join("config.json");
    fs::write(
        &config_path,
        r#"{ "phoneRegex": "^(broken", "deleteTimeLimit": -3 }"#,
    )
    .expect("Failed to write config");

    let workspace = Workspace::discover(Some(temp_dir.path())).expect("Workspace exists");
    let registrar = Registrar::open(workspace).expect("Broken values are tolerated on load");
    let report = doctor::check(&registrar);

    assert!(report.phone_pattern_error.is_some());
    assert_eq!(report.config_errors.len(), 1);
}

#[test]
fn test_reports_unreadable_student_entries() {
    let (temp_dir, _) = setup();
    let students_path = temp_dir.path().join(DATA_DIR_NAME).join("students.json");
    fs::write(&students_path, r#"[{ "id": "OLD1" }]"#).expect("Failed to write students");

    let workspace = Workspace::discover(Some(temp_dir.path())).expect("Workspace exists");
    let mut registrar = Registrar::open(workspace).expect("Failed to open registrar");
    let report = doctor::check(&registrar);
    assert_eq!(report.unreadable_students, 1);
    assert!(!report.is_healthy());

    registrar
        .add_student(student("SV001", "FL"))
        .expect("Failed to add student");
    let content = fs::read_to_string(&students_path).expect("Failed to read students");
    assert!(content.contains("OLD1"));
    assert!(content.contains("SV001"));
}
