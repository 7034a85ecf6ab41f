// Rust guideline compliant 2026-10-19

//! Unit tests for the student validator.
//!
//! Each test breaks one rule on an otherwise valid record, so the reported
//! failure also pins down the order in which rules are checked.

use roster_core::{
    Config, Error, ReferenceKind, ReferenceSet, References, Student, StudentValidator,
    ValidationError,
};

struct Sets {
    faculties: ReferenceSet,
    programs: ReferenceSet,
    statuses: ReferenceSet,
}

impl Sets {
    fn seeded() -> Self {
        Self {
            faculties: ReferenceSet::seeded(ReferenceKind::Faculty),
            programs: ReferenceSet::seeded(ReferenceKind::Program),
            statuses: ReferenceSet::seeded(ReferenceKind::Status),
        }
    }

    fn refs(&self) -> References<'_> {
        References {
            faculties: &self.faculties,
            programs: &self.programs,
            statuses: &self.statuses,
        }
    }
}

/// Helper to create a record that passes every default rule.
fn valid_student() -> Student {
    Student::from_row(
        &[
            "SV001",
            "Alice",
            "01/01/2000",
            "Female",
            "FL",
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

fn failure(validator: &StudentValidator, student: &Student) -> ValidationError {
    let sets = Sets::seeded();
    match validator.validate(student, sets.refs()) {
        Err(Error::Validation(err)) => err,
        other => panic!("Expected a validation failure, got {other:?}"),
    }
}

#[test]
fn test_valid_record_passes() {
    let validator = StudentValidator::new(&Config::default());
    let sets = Sets::seeded();
    assert!(validator.is_valid(&valid_student(), sets.refs()));
}

#[test]
fn test_email_suffix_is_case_sensitive() {
    let validator = StudentValidator::new(&Config::default());
    let mut student = valid_student();
    student.email = "alice@STUDENT.university.edu.vn".to_string();
    assert!(matches!(
        failure(&validator, &student),
        ValidationError::Email { .. }
    ));
}

#[test]
fn test_email_shorter_than_suffix_fails() {
    let validator = StudentValidator::new(&Config::default());
    let mut student = valid_student();
    student.email = "edu.vn".to_string();
    assert!(matches!(
        failure(&validator, &student),
        ValidationError::Email { .. }
    ));
}

#[test]
fn test_phone_prefix_and_regex() {
    let mut student = valid_student();
    student.phone = "0123456789".to_string();

    let validator = StudentValidator::new(&Config::default());
    assert!(matches!(
        failure(&validator, &student),
        ValidationError::Phone { .. }
    ));

    let config = Config {
        phone_regex: "^0[0-9]{9}$".to_string(),
        ..Config::default()
    };
    let validator = StudentValidator::new(&config);
    let sets = Sets::seeded();
    assert!(validator.is_valid(&student, sets.refs()));
}

#[test]
fn test_uncompilable_phone_pattern_is_a_failure() {
    let config = Config {
        phone_regex: "^[0-9".to_string(),
        ..Config::default()
    };
    let validator = StudentValidator::new(&config);
    assert!(matches!(
        failure(&validator, &valid_student()),
        ValidationError::PhonePattern { .. }
    ));
}

#[test]
fn test_email_is_checked_before_phone() {
    let validator = StudentValidator::new(&Config::default());
    let mut student = valid_student();
    student.email = "alice@example.com".to_string();
    student.phone = "nope".to_string();
    assert!(matches!(
        failure(&validator, &student),
        ValidationError::Email { .. }
    ));
}

#[test]
fn test_reference_order_faculty_status_gender_program() {
    let validator = StudentValidator::new(&Config::default());
    let mut student = valid_student();
    student.faculty = "FXX".to_string();
    student.status = "Expelled".to_string();
    student.gender = "Other".to_string();
    student.program = "Night School".to_string();

    assert_eq!(
        failure(&validator, &student),
        ValidationError::UnknownReference {
            kind: ReferenceKind::Faculty,
            value: "FXX".to_string()
        }
    );

    student.faculty = "FL".to_string();
    assert_eq!(
        failure(&validator, &student),
        ValidationError::UnknownReference {
            kind: ReferenceKind::Status,
            value: "Expelled".to_string()
        }
    );

    student.status = "Active".to_string();
    assert_eq!(
        failure(&validator, &student),
        ValidationError::Gender("Other".to_string())
    );

    student.gender = "Male".to_string();
    assert_eq!(
        failure(&validator, &student),
        ValidationError::UnknownReference {
            kind: ReferenceKind::Program,
            value: "Night School".to_string()
        }
    );
}

#[test]
fn test_course_then_dob() {
    let validator = StudentValidator::new(&Config::default());
    let mut student = valid_student();
    student.course = "K20".to_string();
    student.dob = "2000-01-01".to_string();

    assert_eq!(
        failure(&validator, &student),
        ValidationError::Course("K20".to_string())
    );

    student.course = "2021".to_string();
    assert_eq!(
        failure(&validator, &student),
        ValidationError::DateOfBirth("2000-01-01".to_string())
    );
}

#[test]
fn test_dob_shape_only() {
    let validator = StudentValidator::new(&Config::default());
    let sets = Sets::seeded();
    let mut student = valid_student();
    student.dob = "99/99/2000".to_string();
    assert!(
        validator.is_valid(&student, sets.refs()),
        "Only the DD/MM/YYYY shape is checked"
    );
}

#[test]
fn test_lowercase_gender_rejected() {
    let validator = StudentValidator::new(&Config::default());
    let mut student = valid_student();
    student.gender = "female".to_string();
    assert!(matches!(
        failure(&validator, &student),
        ValidationError::Gender(_)
    ));
}
