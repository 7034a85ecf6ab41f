// Rust guideline compliant 2026-10-19

//! End-to-end tests that run the `roster` binary against a temporary
//! data directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn roster(data_dir: &Path, args: &[&str]) -> Output {
    roster_with_env(data_dir, args, &[])
}

fn roster_with_env(data_dir: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roster"))
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--no-color")
        .args(args)
        .env_remove("ROSTER_EMAIL_SUFFIX")
        .env_remove("ROSTER_PHONE_REGEX")
        .env_remove("ROSTER_DELETE_TIME_LIMIT")
        .env_remove("ROSTER_ENFORCE_VALIDATION")
        .envs(vars.iter().copied())
        .output()
        .expect("run roster")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got status: {:?}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn init() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("temp dir");
    let data_dir = temp_dir.path().join(".roster");
    assert_success(&roster(&data_dir, &["init"]));
    (temp_dir, data_dir)
}

fn add_alice(data_dir: &Path) -> Output {
    roster(
        data_dir,
        &[
            "add",
            "SV001",
            "--name",
            "Alice",
            "--dob",
            "01/01/2000",
            "--gender",
            "Female",
            "--faculty",
            "FL",
            "--course",
            "2020",
            "--program",
            "Advanced Program",
            "--email",
            "alice@student.university.edu.vn",
            "--phone",
            "+84123456789",
        ],
    )
}

#[test]
fn test_init_creates_data_files() {
    let (_temp_dir, data_dir) = init();
    for name in [
        "students.json",
        "faculties.json",
        "programs.json",
        "statuses.json",
        "config.json",
        "status_rules.json",
    ] {
        assert!(data_dir.join(name).exists(), "{name} should exist");
    }
}

#[test]
fn test_commands_require_workspace() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = roster(&temp_dir.path().join(".roster"), &["list"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("roster init"));
}

#[test]
fn test_add_then_list_json() {
    let (_temp_dir, data_dir) = init();
    assert_success(&add_alice(&data_dir));

    let output = roster(&data_dir, &["list", "--json"]);
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    assert_eq!(parsed["total"], 1);
    assert_eq!(parsed["students"][0]["id"], "SV001");
    assert_eq!(parsed["students"][0]["status"], "Active");
}

#[test]
fn test_add_duplicate_reports_error_code() {
    let (_temp_dir, data_dir) = init();
    assert_success(&add_alice(&data_dir));

    let output = roster(
        &data_dir,
        &[
            "--json",
            "add",
            "SV001",
            "--name",
            "Again",
            "--dob",
            "01/01/2000",
            "--gender",
            "Female",
            "--faculty",
            "FL",
            "--course",
            "2020",
            "--program",
            "Advanced Program",
            "--email",
            "again@student.university.edu.vn",
            "--phone",
            "+84123",
        ],
    );
    assert!(!output.status.success());
    let envelope: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stderr)).expect("JSON error");
    assert_eq!(envelope["status"], "error");
    assert_eq!(envelope["code"], "duplicate_id");
}

#[test]
fn test_invalid_transition_is_rejected() {
    let (_temp_dir, data_dir) = init();
    assert_success(&add_alice(&data_dir));
    assert_success(&roster(&data_dir, &["update", "SV001", "--status", "Graduated"]));

    let output = roster(&data_dir, &["--json", "update", "SV001", "--status", "Active"]);
    assert!(!output.status.success());
    let envelope: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stderr)).expect("JSON error");
    assert_eq!(envelope["code"], "invalid_transition");
}

#[test]
fn test_search_by_name_part() {
    let (_temp_dir, data_dir) = init();
    assert_success(&add_alice(&data_dir));

    let output = roster(&data_dir, &["--format", "plain", "search", "lic", "--faculty", "FL"]);
    assert_success(&output);
    assert!(stdout(&output).starts_with("SV001\tAlice\t"));

    let output = roster(&data_dir, &["--format", "plain", "search", "lic", "--faculty", "FBE"]);
    assert_success(&output);
    assert!(stdout(&output).trim().is_empty());
}

#[test]
fn test_export_then_import_into_new_workspace() {
    let (temp_dir, data_dir) = init();
    assert_success(&add_alice(&data_dir));
    let csv_path = temp_dir.path().join("students.csv");
    assert_success(&roster(
        &data_dir,
        &["export", csv_path.to_str().expect("utf-8 path")],
    ));

    let (_other_dir, other_data) = init();
    let output = roster(
        &other_data,
        &["--json", "import", csv_path.to_str().expect("utf-8 path")],
    );
    assert_success(&output);
    let envelope: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    assert_eq!(envelope["result"]["imported"], 1);
}

#[test]
fn test_faculty_in_use_cannot_be_deleted() {
    let (_temp_dir, data_dir) = init();
    assert_success(&add_alice(&data_dir));

    let output = roster(&data_dir, &["faculty", "delete", "FL"]);
    assert!(!output.status.success());

    assert_success(&roster(&data_dir, &["faculty", "rename", "FL", "Law"]));
    let output = roster(&data_dir, &["show", "SV001", "--format", "json"]);
    assert_success(&output);
    let student: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    assert_eq!(student["faculty"], "Law");
}

#[test]
fn test_config_set_and_get() {
    let (_temp_dir, data_dir) = init();
    assert_success(&roster(&data_dir, &["config", "set", "delete-time-limit", "15"]));

    let output = roster(&data_dir, &["config", "get", "deleteTimeLimit"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "15");

    let output = roster(&data_dir, &["config", "set", "deleteTimeLimit", "-1"]);
    assert!(!output.status.success());
}

#[test]
fn test_env_override_is_not_saved_by_config_set() {
    let (_temp_dir, data_dir) = init();
    let env = [("ROSTER_DELETE_TIME_LIMIT", "99")];

    let output = roster_with_env(
        &data_dir,
        &["--json", "config", "set", "emailSuffix", "@hcmus.edu.vn"],
        &env,
    );
    assert_success(&output);
    let envelope: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    assert_eq!(envelope["result"]["emailSuffix"], "@hcmus.edu.vn");
    assert_eq!(envelope["result"]["deleteTimeLimit"], 99);

    let saved: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(data_dir.join("config.json")).expect("config file"),
    )
    .expect("config JSON");
    assert_eq!(saved["emailSuffix"], "@hcmus.edu.vn");
    assert_eq!(saved["deleteTimeLimit"], 1);

    let output = roster_with_env(&data_dir, &["--json", "config", "show"], &env);
    assert_success(&output);
    let envelope: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    assert_eq!(envelope["result"]["deleteTimeLimit"], 99);

    let output = roster(&data_dir, &["config", "get", "deleteTimeLimit"]);
    assert_eq!(stdout(&output).trim(), "1");
}

#[test]
fn test_config_set_of_overridden_key_reports_effective_value() {
    let (_temp_dir, data_dir) = init();
    let env = [("ROSTER_DELETE_TIME_LIMIT", "99")];

    let output = roster_with_env(&data_dir, &["--json", "config", "set", "deleteTimeLimit", "5"], &env);
    assert_success(&output);
    let envelope: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("JSON output");
    assert_eq!(envelope["result"]["deleteTimeLimit"], 99);

    let output = roster(&data_dir, &["config", "get", "deleteTimeLimit"]);
    assert_eq!(stdout(&output).trim(), "5");
}

#[test]
fn test_rules_set_and_check() {
    let (_temp_dir, data_dir) = init();
    assert!(!roster(&data_dir, &["rules", "check", "Graduated", "Active"])
        .status
        .success());

    assert_success(&roster(&data_dir, &["rules", "set", "Graduated", "Active,Post-graduated"]));
    assert_success(&roster(&data_dir, &["rules", "check", "Graduated", "Active"]));
}

#[test]
fn test_certificate_written_to_file() {
    let (temp_dir, data_dir) = init();
    assert_success(&add_alice(&data_dir));
    let path = temp_dir.path().join("cert.md");

    assert_success(&roster(
        &data_dir,
        &[
            "certificate",
            "SV001",
            "--purpose",
            "Scholarship application",
            "--valid-until",
            "31/12/2026",
            "--output",
            path.to_str().expect("utf-8 path"),
        ],
    ));
    let content = fs::read_to_string(&path).expect("certificate written");
    assert!(content.contains("CERTIFICATE OF STUDENT STATUS"));
    assert!(content.contains("SV001"));
}

#[test]
fn test_operations_are_logged() {
    let (_temp_dir, data_dir) = init();
    assert_success(&add_alice(&data_dir));

    let log = fs::read_to_string(data_dir.join("roster.log")).expect("log file");
    assert!(log.contains("add_student"));
    assert!(log.contains("SV001"));
}

#[test]
fn test_doctor_warns_but_passes_on_fresh_workspace() {
    let (_temp_dir, data_dir) = init();
    let output = roster(&data_dir, &["doctor"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Post-graduated"));
}
