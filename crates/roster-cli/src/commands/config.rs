// Rust guideline compliant 2026-10-19

//! Implementation of the `roster config` command.
//!
//! Values shown are the effective ones, after `ROSTER_*` environment
//! overrides. `set` writes only the file.

use crate::commands::{open_registrar, print_json};
use crate::output_mode::is_json_output;
use crate::terminal::{print_success, print_warning};
use anyhow::Result;
use roster_app::ConfigKey;
use serde_json::json;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Configuration actions.
#[derive(Debug, Clone, clap::Subcommand)]
pub enum ConfigAction {
    /// Show every setting
    Show,

    /// Show one setting
    Get {
        /// Key (emailSuffix, phoneRegex, deleteTimeLimit, enforceValidation)
        key: String,
    },

    /// Change one setting
    Set {
        /// Key (emailSuffix, phoneRegex, deleteTimeLimit, enforceValidation)
        key: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

/// Runs a configuration action.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized, the key is
/// unknown, or the new value is rejected.
pub fn execute(action: ConfigAction, data_dir: Option<&Path>) -> Result<()> {
    let mut registrar = open_registrar(data_dir)?;

    match action {
        ConfigAction::Show => {
            if is_json_output() {
                return print_json(registrar.config());
            }
            let mut builder = Builder::default();
            builder.push_record(["Key", "Value"]);
            for key in ConfigKey::ALL {
                builder.push_record([key.as_str().to_string(), key.value_in(registrar.config())]);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            println!("{table}");
        }
        ConfigAction::Get { key } => {
            let key: ConfigKey = key.parse()?;
            let value = key.value_in(registrar.config());
            if is_json_output() {
                return print_json(json!({ "key": key.as_str(), "value": value }));
            }
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let key: ConfigKey = key.parse()?;
            let config = registrar.set_config(key, &value)?;
            if is_json_output() {
                return print_json(&config);
            }
            print_success(&format!("Saved {key} = {value}"));
            if std::env::var_os(key.env_var()).is_some() {
                print_warning(&format!(
                    "{} overrides it; effective value is {}",
                    key.env_var(),
                    key.value_in(&config)
                ));
            }
        }
    }
    Ok(())
}
