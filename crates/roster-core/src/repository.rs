// Rust guideline compliant 2026-10-19

//! Student repository.
//!
//! Owns the student list and the faculty, program and status reference sets,
//! and persists each of them to its own JSON file in the data directory.
//! Every mutation is applied in memory first and then written; a failed write
//! is reported as [`Error::Persist`] while the in-memory change is kept.

use crate::models::{now_seconds, Student, StudentPatch, ROW_FIELDS};
use crate::references::{ReferenceKind, ReferenceSet, References};
use crate::rules::TransitionRules;
use crate::storage::JsonStore;
use crate::validator::StudentValidator;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name of the persisted student list.
pub const STUDENTS_FILE: &str = "students.json";

/// Student count above which searches run in parallel.
const PARALLEL_THRESHOLD: usize = 1_000;

/// A row rejected during bulk import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Zero-based position of the row in the input.
    pub index: usize,
    /// Why the row was skipped.
    pub reason: String,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Number of rows added.
    pub imported: usize,
    /// Rows that were not added.
    pub skipped: Vec<SkippedRow>,
    /// IDs that were imported although a student with that ID already existed.
    pub duplicate_ids: Vec<String>,
}

/// In-memory student store backed by JSON files.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    students: Vec<Student>,
    /// Raw entries of the student file that could not be read as students.
    unreadable: Vec<serde_json::Value>,
    faculties: ReferenceSet,
    programs: ReferenceSet,
    statuses: ReferenceSet,
    data_dir: PathBuf,
}

impl StudentRepository {
    /// Loads the repository from `data_dir`.
    ///
    /// A missing student file yields an empty list. A missing reference file
    /// is seeded with its defaults and written. Malformed files are logged
    /// and treated as missing without being overwritten. Student entries
    /// that cannot be read are left out of the list but written back
    /// unchanged on every save.
    pub fn open(data_dir: &Path) -> Self {
        let (students, unreadable) = load_students(&data_dir.join(STUDENTS_FILE));
        let repo = Self {
            students,
            unreadable,
            faculties: load_reference_set(data_dir, ReferenceKind::Faculty),
            programs: load_reference_set(data_dir, ReferenceKind::Program),
            statuses: load_reference_set(data_dir, ReferenceKind::Status),
            data_dir: data_dir.to_path_buf(),
        };
        tracing::debug!(
            students = repo.students.len(),
            unreadable = repo.unreadable.len(),
            dir = %data_dir.display(),
            "Loaded student repository"
        );
        repo
    }

    /// Returns the directory holding the data files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns every student in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Returns the student file entries that could not be read.
    #[must_use]
    pub fn unreadable_entries(&self) -> &[serde_json::Value] {
        &self.unreadable
    }

    /// Returns a read-only view of the reference sets.
    #[must_use]
    pub fn references(&self) -> References<'_> {
        References {
            faculties: &self.faculties,
            programs: &self.programs,
            statuses: &self.statuses,
        }
    }

    /// Returns the reference set for `kind`.
    #[must_use]
    pub fn reference_set(&self, kind: ReferenceKind) -> &ReferenceSet {
        match kind {
            ReferenceKind::Faculty => &self.faculties,
            ReferenceKind::Program => &self.programs,
            ReferenceKind::Status => &self.statuses,
        }
    }

    fn reference_set_mut(&mut self, kind: ReferenceKind) -> &mut ReferenceSet {
        match kind {
            ReferenceKind::Faculty => &mut self.faculties,
            ReferenceKind::Program => &mut self.programs,
            ReferenceKind::Status => &mut self.statuses,
        }
    }
}

impl StudentRepository {
    /// Adds a new student and stamps its creation time.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A student with the same ID exists
    /// - `validator` is given and the record fails it
    /// - The student file cannot be written
    pub fn add_student(
        &mut self,
        mut student: Student,
        validator: Option<&StudentValidator>,
    ) -> Result<()> {
        if self.find_student(&student.id).is_some() {
            return Err(Error::DuplicateId(student.id));
        }
        if let Some(validator) = validator {
            validator.validate(&student, self.references())?;
        }

        student.creation_time = now_seconds();
        tracing::info!(id = %student.id, "Added student");
        self.students.push(student);
        self.persist_students()
    }

    /// Removes a student if its delete window is still open.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::remove_student_at`].
    pub fn remove_student(&mut self, id: &str, delete_time_limit: i64) -> Result<Student> {
        self.remove_student_at(id, delete_time_limit, Utc::now())
    }

    /// Removes a student, measuring its delete window up to `now`.
    ///
    /// The window is closed once the whole minutes elapsed since creation
    /// exceed `delete_time_limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No student has this ID
    /// - The delete window has closed
    /// - The student file cannot be written
    pub fn remove_student_at(
        &mut self,
        id: &str,
        delete_time_limit: i64,
        now: DateTime<Utc>,
    ) -> Result<Student> {
        let index = self.index_of(id)?;

        let elapsed = (now - self.students[index].creation_time).num_minutes();
        if elapsed > delete_time_limit {
            return Err(Error::DeleteWindowExpired {
                id: id.to_string(),
                limit_minutes: delete_time_limit,
                elapsed_minutes: elapsed,
            });
        }

        let removed = self.students.remove(index);
        tracing::info!(id = %id, "Removed student");
        self.persist_students()?;
        Ok(removed)
    }

    /// Looks up a student by ID.
    #[must_use]
    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Applies `patch` to a student and returns the updated record.
    ///
    /// The patched record is validated as a whole before it replaces the
    /// stored one. When the status changes and `rules` is given, the
    /// transition must be allowed. Rejections leave the stored record as it
    /// was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No student has this ID
    /// - The patched record fails validation
    /// - The status transition is not allowed
    /// - The student file cannot be written
    pub fn update_student(
        &mut self,
        id: &str,
        patch: &StudentPatch,
        validator: Option<&StudentValidator>,
        rules: Option<&TransitionRules>,
    ) -> Result<Student> {
        let index = self.index_of(id)?;
        let current = &self.students[index];

        let mut updated = current.clone();
        patch.apply_to(&mut updated);

        if let Some(validator) = validator {
            validator.validate(&updated, self.references())?;
        }
        if let Some(rules) = rules {
            if updated.status != current.status {
                rules.check_transition(&current.status, &updated.status)?;
            }
        }

        self.students[index] = updated.clone();
        tracing::info!(id = %id, "Updated student");
        self.persist_students()?;
        Ok(updated)
    }

    /// Finds students by faculty and name.
    ///
    /// `faculty` must match exactly when given. `name_part` is a
    /// case-sensitive substring of the name; an empty string matches all.
    #[must_use]
    pub fn search_students(&self, faculty: Option<&str>, name_part: &str) -> Vec<&Student> {
        let predicate = |s: &&Student| {
            faculty.map_or(true, |f| s.faculty == f) && s.name.contains(name_part)
        };

        if self.students.len() >= PARALLEL_THRESHOLD {
            self.students.par_iter().filter(predicate).collect()
        } else {
            self.students.iter().filter(predicate).collect()
        }
    }

    /// Adds students from 11-field rows.
    ///
    /// Rows with the wrong number of fields or that fail `validator` are
    /// skipped and reported. IDs that already exist are imported anyway and
    /// listed in [`ImportReport::duplicate_ids`]. The student file is written
    /// once for the whole batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the student file cannot be written.
    pub fn import_students_from_strings(
        &mut self,
        rows: &[Vec<String>],
        validator: Option<&StudentValidator>,
    ) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        let mut seen: HashSet<String> = self.students.iter().map(|s| s.id.clone()).collect();

        for (index, row) in rows.iter().enumerate() {
            let student = match Student::from_row(row) {
                Ok(student) => student,
                Err(err) => {
                    tracing::warn!(
                        row = index,
                        fields = row.len(),
                        expected = ROW_FIELDS,
                        "Skipping row with wrong field count"
                    );
                    report.skipped.push(SkippedRow {
                        index,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            if let Some(validator) = validator {
                if let Err(err) = validator.validate(&student, self.references()) {
                    tracing::warn!(row = index, id = %student.id, "Skipping invalid row");
                    report.skipped.push(SkippedRow {
                        index,
                        reason: err.to_string(),
                    });
                    continue;
                }
            }

            if !seen.insert(student.id.clone()) {
                tracing::warn!(id = %student.id, "Imported student with an existing ID");
                report.duplicate_ids.push(student.id.clone());
            }
            self.students.push(student);
            report.imported += 1;
        }

        tracing::info!(
            imported = report.imported,
            skipped = report.skipped.len(),
            "Imported students"
        );
        if report.imported > 0 {
            self.persist_students()?;
        }
        Ok(report)
    }

    /// Flattens every student to an 11-field row.
    #[must_use]
    pub fn all_students_as_strings(&self) -> Vec<Vec<String>> {
        self.students.iter().map(Student::to_row).collect()
    }

    /// Returns IDs held by more than one student, sorted.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut duplicates: Vec<String> = self
            .students
            .iter()
            .filter(|s| !seen.insert(s.id.as_str()))
            .map(|s| s.id.clone())
            .collect();
        duplicates.sort();
        duplicates.dedup();
        duplicates
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn persist_students(&self) -> Result<()> {
        let entries: Vec<StoredEntry<'_>> = self
            .students
            .iter()
            .map(StoredEntry::Student)
            .chain(self.unreadable.iter().map(StoredEntry::Raw))
            .collect();
        JsonStore::new(self.data_dir.join(STUDENTS_FILE))?.persist(&entries)
    }
}

impl StudentRepository {
    /// Adds a value to a reference set.
    ///
    /// # Errors
    ///
    /// Returns an error if the value exists or the set cannot be written.
    pub fn add_reference(&mut self, kind: ReferenceKind, value: &str) -> Result<()> {
        self.reference_set_mut(kind).insert(value)?;
        tracing::info!(%kind, value, "Added reference value");
        self.persist_reference_set(kind)
    }

    /// Renames a reference value and every student that uses it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `new` already exists
    /// - `old` does not exist
    /// - A data file cannot be written
    pub fn rename_reference(&mut self, kind: ReferenceKind, old: &str, new: &str) -> Result<()> {
        self.reference_set_mut(kind).rename(old, new)?;

        let mut updated = 0usize;
        for student in &mut self.students {
            let field = reference_field_mut(student, kind);
            if field == old {
                *field = new.to_string();
                updated += 1;
            }
        }
        tracing::info!(%kind, old, new, students = updated, "Renamed reference value");

        if updated > 0 {
            self.persist_students()?;
        }
        self.persist_reference_set(kind)
    }

    /// Deletes a reference value that no student uses.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any student uses the value
    /// - The value does not exist
    /// - The set cannot be written
    pub fn delete_reference(&mut self, kind: ReferenceKind, value: &str) -> Result<()> {
        let count = self.count_using(kind, value);
        if count > 0 {
            return Err(Error::ReferenceInUse {
                kind,
                value: value.to_string(),
                count,
            });
        }

        self.reference_set_mut(kind).remove(value)?;
        tracing::info!(%kind, value, "Deleted reference value");
        self.persist_reference_set(kind)
    }

    /// Returns true if `value` belongs to the `kind` set.
    #[must_use]
    pub fn is_valid_reference(&self, kind: ReferenceKind, value: &str) -> bool {
        self.reference_set(kind).contains(value)
    }

    /// Returns how many students use `value` for `kind`.
    #[must_use]
    pub fn count_using(&self, kind: ReferenceKind, value: &str) -> usize {
        self.students
            .iter()
            .filter(|s| reference_field(s, kind) == value)
            .count()
    }

    /// Adds a faculty.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::add_reference`].
    pub fn add_faculty(&mut self, name: &str) -> Result<()> {
        self.add_reference(ReferenceKind::Faculty, name)
    }

    /// Renames a faculty and cascades to students.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::rename_reference`].
    pub fn rename_faculty(&mut self, old: &str, new: &str) -> Result<()> {
        self.rename_reference(ReferenceKind::Faculty, old, new)
    }

    /// Deletes an unused faculty.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::delete_reference`].
    pub fn delete_faculty(&mut self, name: &str) -> Result<()> {
        self.delete_reference(ReferenceKind::Faculty, name)
    }

    /// Returns true if `name` is a known faculty.
    #[must_use]
    pub fn is_valid_faculty(&self, name: &str) -> bool {
        self.is_valid_reference(ReferenceKind::Faculty, name)
    }

    /// Adds a program.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::add_reference`].
    pub fn add_program(&mut self, name: &str) -> Result<()> {
        self.add_reference(ReferenceKind::Program, name)
    }

    /// Renames a program and cascades to students.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::rename_reference`].
    pub fn rename_program(&mut self, old: &str, new: &str) -> Result<()> {
        self.rename_reference(ReferenceKind::Program, old, new)
    }

    /// Deletes an unused program.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::delete_reference`].
    pub fn delete_program(&mut self, name: &str) -> Result<()> {
        self.delete_reference(ReferenceKind::Program, name)
    }

    /// Returns true if `name` is a known program.
    #[must_use]
    pub fn is_valid_program(&self, name: &str) -> bool {
        self.is_valid_reference(ReferenceKind::Program, name)
    }

    /// Adds a status.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::add_reference`].
    pub fn add_status(&mut self, name: &str) -> Result<()> {
        self.add_reference(ReferenceKind::Status, name)
    }

    /// Renames a status and cascades to students.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::rename_reference`].
    pub fn rename_status(&mut self, old: &str, new: &str) -> Result<()> {
        self.rename_reference(ReferenceKind::Status, old, new)
    }

    /// Deletes an unused status.
    ///
    /// # Errors
    ///
    /// See [`StudentRepository::delete_reference`].
    pub fn delete_status(&mut self, name: &str) -> Result<()> {
        self.delete_reference(ReferenceKind::Status, name)
    }

    /// Returns true if `name` is a known status.
    #[must_use]
    pub fn is_valid_status(&self, name: &str) -> bool {
        self.is_valid_reference(ReferenceKind::Status, name)
    }

    fn persist_reference_set(&self, kind: ReferenceKind) -> Result<()> {
        JsonStore::new(self.data_dir.join(kind.file_name()))?
            .persist(self.reference_set(kind).values())
    }
}

fn reference_field(student: &Student, kind: ReferenceKind) -> &str {
    match kind {
        ReferenceKind::Faculty => &student.faculty,
        ReferenceKind::Program => &student.program,
        ReferenceKind::Status => &student.status,
    }
}

fn reference_field_mut(student: &mut Student, kind: ReferenceKind) -> &mut String {
    match kind {
        ReferenceKind::Faculty => &mut student.faculty,
        ReferenceKind::Program => &mut student.program,
        ReferenceKind::Status => &mut student.status,
    }
}

/// One element of the persisted student array.
#[derive(Serialize)]
#[serde(untagged)]
enum StoredEntry<'a> {
    Student(&'a Student),
    Raw(&'a serde_json::Value),
}

fn load_students(path: &Path) -> (Vec<Student>, Vec<serde_json::Value>) {
    let mut students = Vec::new();
    let mut unreadable = Vec::new();

    let Ok(store) = JsonStore::new(path.to_path_buf()) else {
        return (students, unreadable);
    };
    let Some(entries) = store.load_or_warn::<Vec<serde_json::Value>>() else {
        return (students, unreadable);
    };

    for (index, entry) in entries.into_iter().enumerate() {
        match Student::deserialize(&entry) {
            Ok(student) => students.push(student),
            Err(err) => {
                tracing::warn!(entry = index, error = %err, "Keeping unreadable student entry aside");
                unreadable.push(entry);
            }
        }
    }
    (students, unreadable)
}

fn load_reference_set(data_dir: &Path, kind: ReferenceKind) -> ReferenceSet {
    let path = data_dir.join(kind.file_name());
    let Ok(store) = JsonStore::new(path) else {
        return ReferenceSet::seeded(kind);
    };

    if !store.exists() {
        let set = ReferenceSet::seeded(kind);
        if let Err(err) = store.persist(set.values()) {
            tracing::warn!(%kind, error = %err, "Could not write default reference values");
        }
        return set;
    }

    match store.load_or_warn::<Vec<String>>() {
        Some(values) => ReferenceSet::new(kind, values),
        None => ReferenceSet::seeded(kind),
    }
}
