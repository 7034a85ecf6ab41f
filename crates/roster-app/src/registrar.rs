// Rust guideline compliant 2026-10-19

//! The registrar: one workspace's configuration, rules and students.
//!
//! Every operation the CLI offers goes through [`Registrar`]. It decides once,
//! in [`Registrar::validator`], whether validation is enforced, and applies
//! that decision to adds, updates, imports and status transitions alike.
//! Every state-changing operation logs its outcome.

use crate::error::{AppError, Result};
use crate::workspace::Workspace;
use roster_core::config::{
    ConfigStore, ENV_DELETE_TIME_LIMIT, ENV_EMAIL_SUFFIX, ENV_ENFORCE_VALIDATION, ENV_PHONE_REGEX,
};
use roster_core::record_io::{self, RecordFormat};
use roster_core::{
    CertificateData, Config, Error as CoreError, ImportReport, ReferenceKind, ReferenceSet,
    RulesStore, SchoolInfo, Student, StudentPatch, StudentRepository, StudentValidator,
    TransitionGraph, TransitionRules,
};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A configuration key settable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// `emailSuffix`.
    EmailSuffix,
    /// `phoneRegex`.
    PhoneRegex,
    /// `deleteTimeLimit`.
    DeleteTimeLimit,
    /// `enforceValidation`.
    EnforceValidation,
}

impl ConfigKey {
    /// All keys, in file order.
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::EmailSuffix,
        ConfigKey::PhoneRegex,
        ConfigKey::DeleteTimeLimit,
        ConfigKey::EnforceValidation,
    ];

    /// Returns the key as written in `config.json`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::EmailSuffix => "emailSuffix",
            ConfigKey::PhoneRegex => "phoneRegex",
            ConfigKey::DeleteTimeLimit => "deleteTimeLimit",
            ConfigKey::EnforceValidation => "enforceValidation",
        }
    }

    /// Returns the environment variable that overrides this key.
    #[must_use]
    pub fn env_var(&self) -> &'static str {
        match self {
            ConfigKey::EmailSuffix => ENV_EMAIL_SUFFIX,
            ConfigKey::PhoneRegex => ENV_PHONE_REGEX,
            ConfigKey::DeleteTimeLimit => ENV_DELETE_TIME_LIMIT,
            ConfigKey::EnforceValidation => ENV_ENFORCE_VALIDATION,
        }
    }

    /// Returns the current value of this key, rendered as text.
    #[must_use]
    pub fn value_in(&self, config: &Config) -> String {
        match self {
            ConfigKey::EmailSuffix => config.email_suffix.clone(),
            ConfigKey::PhoneRegex => config.phone_regex.clone(),
            ConfigKey::DeleteTimeLimit => config.delete_time_limit.to_string(),
            ConfigKey::EnforceValidation => config.enforce_validation.to_string(),
        }
    }

    fn apply(&self, store: &mut ConfigStore, raw: &str) -> Result<()> {
        match self {
            ConfigKey::EmailSuffix => store.set_email_suffix(raw),
            ConfigKey::PhoneRegex => store.set_phone_regex(raw),
            ConfigKey::DeleteTimeLimit => {
                let minutes = raw.trim().parse().map_err(|_| {
                    AppError::InvalidInput(format!("deleteTimeLimit must be a whole number of minutes, got '{raw}'"))
                })?;
                store.set_delete_time_limit(minutes);
            }
            ConfigKey::EnforceValidation => {
                let enforce = match raw.trim().to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => {
                        return Err(AppError::InvalidInput(format!(
                            "enforceValidation must be true or false, got '{raw}'"
                        )))
                    }
                };
                store.set_enforce_validation(enforce);
            }
        }
        Ok(())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = AppError;

    /// Accepts the file spelling (`emailSuffix`) as well as kebab and snake case.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = value
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "Unknown config key '{value}'. Expected one of: emailSuffix, phoneRegex, deleteTimeLimit, enforceValidation"
                ))
            })
    }
}

/// Logs the outcome of a state-changing operation and passes it through.
fn logged<T>(operation: &'static str, subject: &str, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => tracing::info!(operation, subject, "Operation succeeded"),
        Err(err) => tracing::warn!(
            operation,
            subject,
            code = ?err.code(),
            error = %err,
            "Operation failed"
        ),
    }
    result
}

/// Owns the configuration, rules and repository of one workspace.
#[derive(Debug)]
pub struct Registrar {
    workspace: Workspace,
    config: ConfigStore,
    rules: RulesStore,
    repo: StudentRepository,
}

impl Registrar {
    /// Loads every store of `workspace`.
    ///
    /// Configuration is read from the file and then overridden by any
    /// `ROSTER_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override is malformed.
    pub fn open(workspace: Workspace) -> Result<Self> {
        let config = ConfigStore::open_with_env(workspace.config_path())?;
        let rules = RulesStore::load(&workspace.rules_path());
        let repo = StudentRepository::open(workspace.data_dir());
        Ok(Self {
            workspace,
            config,
            rules,
            repo,
        })
    }

    /// Returns the workspace.
    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Returns the effective configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        self.config.config()
    }

    /// Returns the status transition rules.
    #[must_use]
    pub fn rules(&self) -> &TransitionRules {
        self.rules.rules()
    }

    /// Returns the student repository.
    #[must_use]
    pub fn repository(&self) -> &StudentRepository {
        &self.repo
    }

    /// Returns a validator when validation is enforced, `None` otherwise.
    #[must_use]
    pub fn validator(&self) -> Option<StudentValidator> {
        self.config
            .enforce_validation()
            .then(|| StudentValidator::new(self.config.config()))
    }

    /// Builds the graph view of the current rules.
    #[must_use]
    pub fn transition_graph(&self) -> TransitionGraph {
        TransitionGraph::from_rules(self.rules.rules())
    }
}

impl Registrar {
    /// Adds a student and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID exists, the record is invalid while
    /// validation is enforced, or the student file cannot be written.
    pub fn add_student(&mut self, student: Student) -> Result<Student> {
        let id = student.id.clone();
        let validator = self.validator();
        let result = self
            .repo
            .add_student(student, validator.as_ref())
            .map_err(AppError::from)
            .and_then(|()| self.find_student(&id).cloned());
        logged("add_student", &id, result)
    }

    /// Applies `patch` to a student and returns the updated record.
    ///
    /// While validation is enforced the patched record is validated and a
    /// status change must follow the transition rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the patch is empty, the student is missing, the
    /// change is rejected, or the student file cannot be written.
    pub fn update_student(&mut self, id: &str, patch: &StudentPatch) -> Result<Student> {
        let result = if patch.is_empty() {
            Err(AppError::InvalidInput("Nothing to update".to_string()))
        } else {
            let validator = self.validator();
            let rules = validator.as_ref().map(|_| self.rules.rules());
            self.repo
                .update_student(id, patch, validator.as_ref(), rules)
                .map_err(AppError::from)
        };
        logged("update_student", id, result)
    }

    /// Removes a student while its delete window is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the student is missing, the window has closed, or
    /// the student file cannot be written.
    pub fn remove_student(&mut self, id: &str) -> Result<Student> {
        let limit = self.config.delete_time_limit();
        let result = self.repo.remove_student(id, limit).map_err(AppError::from);
        logged("remove_student", id, result)
    }

    /// Looks up a student.
    ///
    /// # Errors
    ///
    /// Returns an error if no student has this ID.
    pub fn find_student(&self, id: &str) -> Result<&Student> {
        self.repo
            .find_student(id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()).into())
    }

    /// Returns every student.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        self.repo.students()
    }

    /// Finds students by optional faculty and name substring.
    #[must_use]
    pub fn search_students(&self, faculty: Option<&str>, name_part: &str) -> Vec<&Student> {
        self.repo.search_students(faculty, name_part)
    }

    /// Imports students from a CSV or JSON file.
    ///
    /// The format is taken from `format` or else from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown, the file cannot be read,
    /// or the student file cannot be written.
    pub fn import_students(
        &mut self,
        path: &Path,
        format: Option<RecordFormat>,
    ) -> Result<ImportReport> {
        let subject = path.display().to_string();
        let result = resolve_format(path, format).and_then(|format| {
            let rows = record_io::import_rows(path, format)?;
            let validator = self.validator();
            Ok(self
                .repo
                .import_students_from_strings(&rows, validator.as_ref())?)
        });
        logged("import_students", &subject, result)
    }

    /// Exports every student to a CSV or JSON file.
    ///
    /// # Returns
    ///
    /// The number of rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown or the file cannot be written.
    pub fn export_students(&self, path: &Path, format: Option<RecordFormat>) -> Result<usize> {
        let subject = path.display().to_string();
        let result = resolve_format(path, format).and_then(|format| {
            let rows = self.repo.all_students_as_strings();
            record_io::export_rows(path, &rows, format)?;
            Ok(rows.len())
        });
        logged("export_students", &subject, result)
    }

    /// Builds a status certificate for a student.
    ///
    /// # Errors
    ///
    /// Returns an error if no student has this ID.
    pub fn certificate(
        &self,
        id: &str,
        school: &SchoolInfo,
        purpose: &str,
        effective_date: &str,
        issue_date: &str,
    ) -> Result<CertificateData> {
        let student = self.find_student(id)?;
        Ok(CertificateData::from_student(
            student,
            school,
            purpose,
            effective_date,
            issue_date,
        ))
    }
}

impl Registrar {
    /// Returns the reference set for `kind`.
    #[must_use]
    pub fn references(&self, kind: ReferenceKind) -> &ReferenceSet {
        self.repo.reference_set(kind)
    }

    /// Adds a reference value.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, already exists, or cannot be saved.
    pub fn add_reference(&mut self, kind: ReferenceKind, value: &str) -> Result<()> {
        let result = non_blank(kind, value)
            .and_then(|()| self.repo.add_reference(kind, value).map_err(AppError::from));
        logged("add_reference", value, result)
    }

    /// Renames a reference value, cascading to students.
    ///
    /// Renaming a status also renames it in the transition rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the new name is blank or taken, the old name is
    /// unknown, or a data file cannot be saved.
    pub fn rename_reference(&mut self, kind: ReferenceKind, old: &str, new: &str) -> Result<()> {
        let result = non_blank(kind, new).and_then(|()| {
            self.repo.rename_reference(kind, old, new)?;
            if kind == ReferenceKind::Status {
                let before = self.rules.rules().clone();
                self.rules.rules_mut().rename_status(old, new);
                if *self.rules.rules() != before {
                    self.rules.save()?;
                }
            }
            Ok(())
        });
        logged("rename_reference", old, result)
    }

    /// Deletes a reference value no student uses.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is in use, unknown, or cannot be saved.
    pub fn delete_reference(&mut self, kind: ReferenceKind, value: &str) -> Result<()> {
        let result = self.repo.delete_reference(kind, value).map_err(AppError::from);
        logged("delete_reference", value, result)
    }

    /// Replaces the allowed destinations of `status` and saves the rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the status name is blank or the rules cannot be saved.
    pub fn set_transitions(&mut self, status: &str, allowed: Vec<String>) -> Result<()> {
        let result = non_blank(ReferenceKind::Status, status).and_then(|()| {
            self.rules.rules_mut().set_allowed_transitions(status, allowed);
            Ok(self.rules.save()?)
        });
        logged("set_transitions", status, result)
    }

    /// Removes the rule for `status`, making it unconstrained.
    ///
    /// # Returns
    ///
    /// True if a rule existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules cannot be saved.
    pub fn clear_transitions(&mut self, status: &str) -> Result<bool> {
        let result = if self.rules.rules_mut().clear_transitions(status) {
            self.rules.save().map(|()| true).map_err(AppError::from)
        } else {
            Ok(false)
        };
        logged("clear_transitions", status, result)
    }

    /// Changes one configuration value and saves the file.
    ///
    /// The change is made against the file contents, so environment
    /// overrides never leak into `config.json`. The resulting configuration
    /// must pass [`Config::validate`]. The returned configuration is the
    /// effective one, with overrides reapplied.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be parsed, the resulting
    /// configuration is invalid, or the file cannot be saved.
    pub fn set_config(&mut self, key: ConfigKey, value: &str) -> Result<Config> {
        let result = self.write_config(key, value);
        logged("set_config", key.as_str(), result)
    }

    fn write_config(&mut self, key: ConfigKey, value: &str) -> Result<Config> {
        let mut file_store = ConfigStore::open(self.workspace.config_path());
        key.apply(&mut file_store, value)?;
        file_store.config().validate()?;
        file_store.save()?;
        self.config = ConfigStore::open_with_env(self.workspace.config_path())?;
        Ok(self.config.config().clone())
    }
}

fn resolve_format(path: &Path, format: Option<RecordFormat>) -> Result<RecordFormat> {
    format
        .or_else(|| RecordFormat::from_path(path))
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Cannot tell the format of {}; use a .csv or .json file or pass --format",
                path.display()
            ))
        })
}

fn non_blank(kind: ReferenceKind, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{kind} name cannot be empty")));
    }
    Ok(())
}
