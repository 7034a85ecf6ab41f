// Rust guideline compliant 2026-10-19

//! Student status certificates.
//!
//! A [`CertificateData`] bundle combines school details, a snapshot of the
//! student and the request details, and renders to Markdown or plain text.

use crate::models::Student;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

/// Output format of a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificateFormat {
    /// Markdown document.
    #[default]
    Markdown,
    /// Plain text document.
    Text,
}

impl CertificateFormat {
    /// Returns the conventional file extension.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            CertificateFormat::Markdown => "md",
            CertificateFormat::Text => "txt",
        }
    }
}

impl FromStr for CertificateFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(CertificateFormat::Markdown),
            "txt" | "text" => Ok(CertificateFormat::Text),
            other => Err(format!("Unknown certificate format '{other}' (use md or txt)")),
        }
    }
}

/// Issuing school details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolInfo {
    /// School name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
}

impl Default for SchoolInfo {
    fn default() -> Self {
        Self {
            name: "University of Science".to_string(),
            address: "227 Nguyen Van Cu, District 5, Ho Chi Minh City".to_string(),
            phone: "(028) 3835 4266".to_string(),
            email: "info@university.edu.vn".to_string(),
        }
    }
}

/// Everything printed on a status certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateData {
    /// Issuing school.
    pub school: SchoolInfo,
    /// Student name.
    pub student_name: String,
    /// Student ID.
    pub student_id: String,
    /// Date of birth (DD/MM/YYYY).
    pub student_dob: String,
    /// Gender.
    pub student_gender: String,
    /// Faculty.
    pub student_faculty: String,
    /// Program.
    pub student_program: String,
    /// Intake year.
    pub student_course: String,
    /// Current status.
    pub student_status: String,
    /// Why the certificate was requested.
    pub purpose: String,
    /// Last day the certificate is valid (DD/MM/YYYY).
    pub effective_date: String,
    /// Day of issue (DD/MM/YYYY).
    pub issue_date: String,
}

impl CertificateData {
    /// Builds a certificate for `student`.
    pub fn from_student(
        student: &Student,
        school: &SchoolInfo,
        purpose: &str,
        effective_date: &str,
        issue_date: &str,
    ) -> Self {
        Self {
            school: school.clone(),
            student_name: student.name.clone(),
            student_id: student.id.clone(),
            student_dob: student.dob.clone(),
            student_gender: student.gender.clone(),
            student_faculty: student.faculty.clone(),
            student_program: student.program.clone(),
            student_course: student.course.clone(),
            student_status: student.status.clone(),
            purpose: purpose.to_string(),
            effective_date: effective_date.to_string(),
            issue_date: issue_date.to_string(),
        }
    }

    /// Renders the certificate.
    #[must_use]
    pub fn render(&self, format: CertificateFormat) -> String {
        match format {
            CertificateFormat::Markdown => self.render_markdown(),
            CertificateFormat::Text => self.render_text(),
        }
    }

    /// Renders the certificate and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, path: &Path, format: CertificateFormat) -> Result<()> {
        std::fs::write(path, self.render(format))?;
        tracing::info!(id = %self.student_id, path = %path.display(), "Wrote certificate");
        Ok(())
    }

    fn student_lines(&self) -> [(&'static str, &str); 8] {
        [
            ("Full name", self.student_name.as_str()),
            ("Student ID", self.student_id.as_str()),
            ("Date of birth", self.student_dob.as_str()),
            ("Gender", self.student_gender.as_str()),
            ("Faculty", self.student_faculty.as_str()),
            ("Program", self.student_program.as_str()),
            ("Course", self.student_course.as_str()),
            ("Status", self.student_status.as_str()),
        ]
    }

    // fmt::Write into a String is infallible.
    fn render_markdown(&self) -> String {
        let school = &self.school;
        let mut out = String::new();

        let _ = writeln!(out, "# {}", school.name);
        let _ = writeln!(out, "## Office of Academic Affairs\n");
        let _ = writeln!(out, "**Address:** {}  ", school.address);
        let _ = writeln!(out, "**Phone:** {} | **Email:** {}\n", school.phone, school.email);
        let _ = writeln!(out, "---\n");
        let _ = writeln!(out, "# CERTIFICATE OF STUDENT STATUS\n");
        let _ = writeln!(out, "{} certifies that:\n", school.name);
        let _ = writeln!(out, "## 1. Student information");
        for (label, value) in self.student_lines() {
            let _ = writeln!(out, "- **{label}:** {value}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "## 2. Purpose");
        let _ = writeln!(out, "**Purpose:** {}\n", self.purpose);
        let _ = writeln!(out, "## 3. Validity");
        let _ = writeln!(out, "- Valid until: {}\n", self.effective_date);
        let _ = writeln!(out, "**Issued by {}**\n", school.name);
        let _ = writeln!(out, "**Date of issue:** {}\n", self.issue_date);
        let _ = writeln!(out, "**Head of Academic Affairs**  ");
        let _ = writeln!(out, "(Signature and seal)");
        out
    }

    fn render_text(&self) -> String {
        let school = &self.school;
        let mut out = String::new();

        let _ = writeln!(out, "{}", school.name.to_uppercase());
        let _ = writeln!(out, "OFFICE OF ACADEMIC AFFAIRS");
        let _ = writeln!(out, "Address: {}", school.address);
        let _ = writeln!(out, "Phone: {} | Email: {}", school.phone, school.email);
        let _ = writeln!(out, "{}\n", "-".repeat(45));
        let _ = writeln!(out, "CERTIFICATE OF STUDENT STATUS\n");
        let _ = writeln!(out, "{} certifies that:\n", school.name);
        let _ = writeln!(out, "1. Student information:");
        for (label, value) in self.student_lines() {
            let _ = writeln!(out, "- {label}: {value}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "2. Purpose:");
        let _ = writeln!(out, "- {}\n", self.purpose);
        let _ = writeln!(out, "3. Validity:");
        let _ = writeln!(out, "- Valid until: {}\n", self.effective_date);
        let _ = writeln!(out, "Issued by {}", school.name);
        let _ = writeln!(out, "Date of issue: {}", self.issue_date);
        let _ = writeln!(out, "Head of Academic Affairs");
        let _ = writeln!(out, "(Signature and seal)");
        out
    }
}
