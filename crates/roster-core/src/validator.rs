// Rust guideline compliant 2026-10-19

//! Record validation driven by [`Config`] and the repository's reference sets.
//!
//! Checks run in a fixed order and stop at the first failure:
//! email, phone, faculty, status, gender, program, course, date of birth.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;
use crate::models::{Gender, Student};
use crate::references::{ReferenceKind, References};
use crate::{Result, ValidationError};

/// Intake year: exactly four digits.
static COURSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("Invalid course regex"));

/// Date of birth: DD/MM/YYYY shape, no calendar check.
static DOB_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("Invalid dob regex"));

/// A compiled phone pattern.
///
/// A configured pattern that starts with `^` is used as a regex. Anything
/// else, including the empty string, is a literal prefix: it is escaped and
/// wrapped as `^<escaped>.*$`. Matching always covers the whole phone string.
#[derive(Debug, Clone)]
pub struct PhonePattern {
    effective: String,
    regex: Regex,
}

impl PhonePattern {
    /// Compiles a configured phone pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PhonePattern`] if the effective pattern
    /// does not compile.
    pub fn compile(raw: &str) -> std::result::Result<Self, ValidationError> {
        let effective = if raw.starts_with('^') {
            raw.to_string()
        } else {
            format!("^{}.*$", regex::escape(raw))
        };

        let regex = Regex::new(&format!("^(?:{effective})$")).map_err(|err| {
            ValidationError::PhonePattern {
                pattern: effective.clone(),
                reason: err.to_string(),
            }
        })?;

        Ok(Self { effective, regex })
    }

    /// Returns the pattern after literal-prefix wrapping.
    #[must_use]
    pub fn effective(&self) -> &str {
        &self.effective
    }

    /// Returns true if the whole phone string matches.
    #[must_use]
    pub fn matches(&self, phone: &str) -> bool {
        self.regex.is_match(phone)
    }
}

/// Validates student records against configuration and reference sets.
///
/// The validator always checks; whether it is consulted at all is decided by
/// the caller from `enforceValidation`.
#[derive(Debug, Clone)]
pub struct StudentValidator {
    email_suffix: String,
    phone: std::result::Result<PhonePattern, ValidationError>,
}

impl StudentValidator {
    /// Creates a validator from the current configuration.
    ///
    /// A phone pattern that does not compile is kept as an error and reported
    /// for every record, so a bad configuration never aborts the process.
    pub fn new(config: &Config) -> Self {
        let phone = PhonePattern::compile(&config.phone_regex);
        if let Err(err) = &phone {
            tracing::warn!(error = %err, "Configured phone pattern does not compile");
        }
        Self {
            email_suffix: config.email_suffix.clone(),
            phone,
        }
    }

    /// Validates a student and reports the first failed rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Validation`] carrying the failed rule.
    pub fn validate(&self, student: &Student, refs: References<'_>) -> Result<()> {
        self.first_failure(student, refs).map_err(|err| {
            tracing::warn!(id = %student.id, reason = %err, "Student failed validation");
            err.into()
        })
    }

    /// Returns true if `student` passes every rule.
    #[must_use]
    pub fn is_valid(&self, student: &Student, refs: References<'_>) -> bool {
        self.validate(student, refs).is_ok()
    }

    fn first_failure(
        &self,
        student: &Student,
        refs: References<'_>,
    ) -> std::result::Result<(), ValidationError> {
        if !student.email.ends_with(&self.email_suffix) {
            return Err(ValidationError::Email {
                email: student.email.clone(),
                suffix: self.email_suffix.clone(),
            });
        }

        let phone = self.phone.as_ref().map_err(Clone::clone)?;
        if !phone.matches(&student.phone) {
            return Err(ValidationError::Phone {
                phone: student.phone.clone(),
                pattern: phone.effective().to_string(),
            });
        }

        check_reference(refs, ReferenceKind::Faculty, &student.faculty)?;
        check_reference(refs, ReferenceKind::Status, &student.status)?;

        if student.gender.parse::<Gender>().is_err() {
            return Err(ValidationError::Gender(student.gender.clone()));
        }

        check_reference(refs, ReferenceKind::Program, &student.program)?;

        if !COURSE_REGEX.is_match(&student.course) {
            return Err(ValidationError::Course(student.course.clone()));
        }

        if !DOB_REGEX.is_match(&student.dob) {
            return Err(ValidationError::DateOfBirth(student.dob.clone()));
        }

        Ok(())
    }
}

fn check_reference(
    refs: References<'_>,
    kind: ReferenceKind,
    value: &str,
) -> std::result::Result<(), ValidationError> {
    if refs.get(kind).contains(value) {
        Ok(())
    } else {
        Err(ValidationError::UnknownReference {
            kind,
            value: value.to_string(),
        })
    }
}
