// Rust guideline compliant 2026-10-19

//! Core data models for Roster.

use crate::{Error, Result};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of positional fields in a tabular student row.
pub const ROW_FIELDS: usize = 11;

/// Accepted gender values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Returns the canonical spelling stored in records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parses a gender value. Matching is case-sensitive.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(other.to_string()),
        }
    }
}

/// A student record.
///
/// Field values are kept as the operator typed them; business rules are
/// enforced by [`crate::StudentValidator`] rather than by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student ID, unique within a repository.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Date of birth (DD/MM/YYYY).
    pub dob: String,
    /// Gender (Male or Female).
    pub gender: String,
    /// Faculty name, from the faculty reference set.
    pub faculty: String,
    /// Intake year (YYYY).
    pub course: String,
    /// Program name, from the program reference set.
    pub program: String,
    /// Postal address.
    pub address: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Status name, from the status reference set.
    pub status: String,
    /// Creation instant, stamped by the repository.
    #[serde(rename = "creationTime", with = "iso8601_seconds")]
    pub creation_time: DateTime<Utc>,
}

impl Student {
    /// Builds a student from an 11-field row in tabular order.
    ///
    /// Field order: id, name, dob, gender, faculty, course, program,
    /// address, email, phone, status. The creation time is set to now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRow`] if the row does not have exactly 11 fields.
    pub fn from_row(row: &[String]) -> Result<Self> {
        let [id, name, dob, gender, faculty, course, program, address, email, phone, status] =
            row
        else {
            return Err(Error::InvalidRow {
                expected: ROW_FIELDS,
                found: row.len(),
            });
        };

        Ok(Self {
            id: id.clone(),
            name: name.clone(),
            dob: dob.clone(),
            gender: gender.clone(),
            faculty: faculty.clone(),
            course: course.clone(),
            program: program.clone(),
            address: address.clone(),
            email: email.clone(),
            phone: phone.clone(),
            status: status.clone(),
            creation_time: now_seconds(),
        })
    }

    /// Flattens the student into an 11-field row in tabular order.
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.dob.clone(),
            self.gender.clone(),
            self.faculty.clone(),
            self.course.clone(),
            self.program.clone(),
            self.address.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.status.clone(),
        ]
    }
}

/// Field changes to apply to an existing student.
///
/// `None` keeps the current value. The ID and creation time cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    /// New name.
    pub name: Option<String>,
    /// New date of birth.
    pub dob: Option<String>,
    /// New gender.
    pub gender: Option<String>,
    /// New faculty.
    pub faculty: Option<String>,
    /// New course.
    pub course: Option<String>,
    /// New program.
    pub program: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone.
    pub phone: Option<String>,
    /// New status.
    pub status: Option<String>,
}

impl StudentPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the patch onto a student in place.
    pub fn apply_to(&self, student: &mut Student) {
        let fields = [
            (&self.name, &mut student.name),
            (&self.dob, &mut student.dob),
            (&self.gender, &mut student.gender),
            (&self.faculty, &mut student.faculty),
            (&self.course, &mut student.course),
            (&self.program, &mut student.program),
            (&self.address, &mut student.address),
            (&self.email, &mut student.email),
            (&self.phone, &mut student.phone),
            (&self.status, &mut student.status),
        ];
        for (new, current) in fields {
            if let Some(value) = new {
                current.clone_from(value);
            }
        }
    }
}

/// Returns the current UTC instant truncated to whole seconds.
///
/// Persisted timestamps carry second precision, so stamping at that
/// precision keeps in-memory and reloaded records equal.
#[must_use]
pub fn now_seconds() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Serde adapter for `YYYY-MM-DDTHH:MM:SSZ` timestamps.
pub mod iso8601_seconds {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Timestamp layout used in persisted student files.
    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    /// Serializes a UTC instant with second precision.
    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    /// Parses a `YYYY-MM-DDTHH:MM:SSZ` string as a UTC instant.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
