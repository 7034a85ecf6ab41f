// Rust guideline compliant 2026-10-19

//! Integration tests for the registrar.
//!
//! These tests run against a freshly initialized workspace and check that the
//! enforcement switch, the transition rules and the configuration file all
//! take effect through the registrar.

use roster_app::{AppError, ConfigKey, ErrorCode, Registrar, Workspace, DATA_DIR_NAME};
use roster_core::config::ConfigStore;
use roster_core::{ReferenceKind, RecordFormat, SchoolInfo, Student, StudentPatch, TransitionRules};
use std::fs;
use tempfile::TempDir;

fn student(id: &str, name: &str) -> Student {
    Student::from_row(
        &[
            id,
            name,
            "01/01/2000",
            "Female",
            "FL",
            "2020",
            "Advanced Program",
            "Address 1",
            "student@student.university.edu.vn",
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

fn reopen(temp_dir: &TempDir) -> Registrar {
    let workspace = Workspace::discover(Some(temp_dir.path())).expect("Workspace exists");
    Registrar::open(workspace).expect("Failed to reopen registrar")
}

fn status_patch(status: &str) -> StudentPatch {
    StudentPatch {
        status: Some(status.to_string()),
        ..StudentPatch::default()
    }
}

#[test]
fn test_add_and_reload() {
    let (temp_dir, mut registrar) = setup();
    let stored = registrar
        .add_student(student("SV001", "Alice"))
        .expect("Failed to add student");
    assert_eq!(stored.id, "SV001");

    let reloaded = reopen(&temp_dir);
    let found = reloaded.find_student("SV001").expect("Student persisted");
    assert_eq!(found, &stored);
}

#[test]
fn test_add_rejects_invalid_when_enforced() {
    let (_temp_dir, mut registrar) = setup();
    let mut bad = student("SV001", "Alice");
    bad.email = "alice@gmail.com".to_string();

    let err = registrar.add_student(bad).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert!(registrar.students().is_empty());
}

#[test]
fn test_add_accepts_invalid_when_not_enforced() {
    let (_temp_dir, mut registrar) = setup();
    registrar
        .set_config(ConfigKey::EnforceValidation, "false")
        .expect("Failed to disable validation");
    assert!(registrar.validator().is_none());

    let mut bad = student("SV001", "Alice");
    bad.faculty = "Nowhere".to_string();
    registrar.add_student(bad).expect("Accepted without validation");
}

#[test]
fn test_update_follows_transition_rules() {
    let (_temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "Alice")).expect("Failed to add");

    let updated = registrar
        .update_student("SV001", &status_patch("Graduated"))
        .expect("Active -> Graduated is allowed");
    assert_eq!(updated.status, "Graduated");

    let err = registrar
        .update_student("SV001", &status_patch("Active"))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);
    assert_eq!(
        registrar.find_student("SV001").expect("Exists").status,
        "Graduated"
    );
}

#[test]
fn test_update_ignores_rules_when_not_enforced() {
    let (_temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "Alice")).expect("Failed to add");
    registrar
        .update_student("SV001", &status_patch("Graduated"))
        .expect("Failed to graduate");
    registrar
        .set_config(ConfigKey::EnforceValidation, "off")
        .expect("Failed to disable validation");

    let updated = registrar
        .update_student("SV001", &status_patch("Active"))
        .expect("Rules are not enforced");
    assert_eq!(updated.status, "Active");
}

#[test]
fn test_empty_patch_is_rejected() {
    let (_temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "Alice")).expect("Failed to add");

    let err = registrar
        .update_student("SV001", &StudentPatch::default())
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_remove_inside_window() {
    let (_temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "Alice")).expect("Failed to add");

    let removed = registrar.remove_student("SV001").expect("Window is open");
    assert_eq!(removed.name, "Alice");
    assert_eq!(
        registrar.find_student("SV001").unwrap_err().code(),
        ErrorCode::NotFound
    );
}

#[test]
fn test_remove_missing_student() {
    let (_temp_dir, mut registrar) = setup();
    let err = registrar.remove_student("SV404").unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test]
fn test_set_config_writes_only_the_changed_key() {
    let (temp_dir, mut registrar) = setup();
    let config = registrar
        .set_config(ConfigKey::DeleteTimeLimit, "30")
        .expect("Failed to set limit");
    assert_eq!(config.delete_time_limit, 30);

    let on_disk = ConfigStore::open(temp_dir.path().join(DATA_DIR_NAME).join("config.json"));
    assert_eq!(on_disk.delete_time_limit(), 30);
    assert_eq!(on_disk.phone_regex(), "+84");
}

#[test]
fn test_set_config_rejects_bad_values() {
    let (_temp_dir, mut registrar) = setup();

    let err = registrar
        .set_config(ConfigKey::DeleteTimeLimit, "-5")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidConfig);

    let err = registrar
        .set_config(ConfigKey::DeleteTimeLimit, "soon")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    let err = registrar
        .set_config(ConfigKey::PhoneRegex, "^(unclosed")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidConfig);

    assert_eq!(registrar.config().delete_time_limit, 1);
    assert_eq!(registrar.config().phone_regex, "+84");
}

#[test]
fn test_phone_regex_change_applies_to_validation() {
    let (_temp_dir, mut registrar) = setup();
    registrar
        .set_config(ConfigKey::PhoneRegex, "+1")
        .expect("Failed to set phone pattern");

    let err = registrar.add_student(student("SV001", "Alice")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let mut american = student("SV001", "Alice");
    american.phone = "+15551234".to_string();
    registrar.add_student(american).expect("Matches new pattern");
}

#[test]
fn test_import_and_export_round_trip() {
    let (temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "Alice")).expect("Failed to add");
    registrar.add_student(student("SV002", "Bob")).expect("Failed to add");

    let csv_path = temp_dir.path().join("students.csv");
    let written = registrar
        .export_students(&csv_path, None)
        .expect("Failed to export");
    assert_eq!(written, 2);

    let (_other_dir, mut other) = setup();
    let report = other
        .import_students(&csv_path, None)
        .expect("Failed to import");
    assert_eq!(report.imported, 2);
    assert!(report.skipped.is_empty());
    assert_eq!(other.students().len(), 2);
}

#[test]
fn test_import_reports_bad_rows() {
    let (temp_dir, mut registrar) = setup();
    let path = temp_dir.path().join("rows.json");
    let good = student("SV001", "Alice").to_row();
    let mut invalid = student("SV002", "Bob").to_row();
    invalid[8] = "bob@gmail.com".to_string();
    let content = serde_json::json!([good, invalid, ["SV003", "Short"]]);
    fs::write(&path, content.to_string()).expect("Failed to write rows");

    let report = registrar
        .import_students(&path, Some(RecordFormat::Json))
        .expect("Failed to import");
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(registrar.students().len(), 1);
}

#[test]
fn test_unknown_format_is_rejected() {
    let (temp_dir, mut registrar) = setup();
    let path = temp_dir.path().join("students.xlsx");
    fs::write(&path, "").expect("Failed to write file");

    let err = registrar.import_students(&path, None).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);
}

#[test]
fn test_rename_status_updates_rules() {
    let (temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "Alice")).expect("Failed to add");

    registrar
        .rename_reference(ReferenceKind::Status, "Leave", "On Leave")
        .expect("Failed to rename");
    assert!(registrar.rules().is_valid_transition("Active", "On Leave"));
    assert!(registrar.rules().has_rule("On Leave"));
    assert!(!registrar.rules().has_rule("Leave"));

    let reloaded = reopen(&temp_dir);
    assert!(reloaded.rules().has_rule("On Leave"));
    assert!(reloaded
        .references(ReferenceKind::Status)
        .contains("On Leave"));
}

#[test]
fn test_rename_faculty_cascades() {
    let (_temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "Alice")).expect("Failed to add");

    registrar
        .rename_reference(ReferenceKind::Faculty, "FL", "Faculty of Law")
        .expect("Failed to rename");
    assert_eq!(
        registrar.find_student("SV001").expect("Exists").faculty,
        "Faculty of Law"
    );
}

#[test]
fn test_reference_guards() {
    let (_temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "Alice")).expect("Failed to add");

    let err = registrar
        .add_reference(ReferenceKind::Program, "   ")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    let err = registrar
        .add_reference(ReferenceKind::Faculty, "FL")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateReference);

    let err = registrar
        .delete_reference(ReferenceKind::Faculty, "FL")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ReferenceInUse);

    registrar
        .delete_reference(ReferenceKind::Faculty, "FFR")
        .expect("Unused faculty can be deleted");
    assert!(!registrar.references(ReferenceKind::Faculty).contains("FFR"));
}

#[test]
fn test_set_and_clear_transitions() {
    let (temp_dir, mut registrar) = setup();
    registrar
        .set_transitions("Graduated", vec!["Active".to_string()])
        .expect("Failed to set rule");
    assert!(registrar.rules().is_valid_transition("Graduated", "Active"));

    assert!(registrar.clear_transitions("Absent").expect("Failed to clear"));
    assert!(!registrar.clear_transitions("Absent").expect("Failed to clear"));

    let reloaded = reopen(&temp_dir);
    assert!(reloaded.rules().is_valid_transition("Graduated", "Active"));
    assert!(!reloaded.rules().has_rule("Absent"));
    assert_ne!(reloaded.rules(), &TransitionRules::seeded());
}

#[test]
fn test_certificate_snapshot() {
    let (_temp_dir, mut registrar) = setup();
    registrar.add_student(student("SV001", "Alice")).expect("Failed to add");

    let certificate = registrar
        .certificate(
            "SV001",
            &SchoolInfo::default(),
            "Scholarship application",
            "31/12/2026",
            "19/10/2026",
        )
        .expect("Failed to build certificate");
    assert_eq!(certificate.student_name, "Alice");
    assert_eq!(certificate.student_status, "Active");

    let err = registrar
        .certificate("SV404", &SchoolInfo::default(), "x", "y", "z")
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}
