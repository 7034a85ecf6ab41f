// Rust guideline compliant 2026-10-19

//! Implementation of the `roster rules` command.
//!
//! A status with no rule may move to any status. A status whose rule lists
//! nothing is terminal.

use crate::commands::{open_registrar, print_json};
use crate::output_mode::is_json_output;
use crate::terminal::{print_info, print_success};
use anyhow::Result;
use roster_app::AppError;
use serde_json::json;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Transition-rule actions.
#[derive(Debug, Clone, clap::Subcommand)]
pub enum RulesAction {
    /// Show every rule
    Show,

    /// Replace the allowed destinations of a status
    Set {
        /// Source status
        status: String,

        /// Allowed destinations; pass none to make the status terminal
        #[arg(value_delimiter = ',')]
        allowed: Vec<String>,
    },

    /// Remove the rule of a status so it may move anywhere
    Clear {
        /// Source status
        status: String,
    },

    /// Check whether one transition is allowed
    Check {
        /// Current status
        from: String,

        /// Requested status
        to: String,
    },

    /// Summarize the rules as a graph
    Graph {
        /// Also list every status reachable from this one
        #[arg(long)]
        from: Option<String>,
    },
}

/// Runs a rules action.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized, the rules file
/// cannot be written, or a checked transition is not allowed.
pub fn execute(action: RulesAction, data_dir: Option<&Path>) -> Result<()> {
    let mut registrar = open_registrar(data_dir)?;

    match action {
        RulesAction::Show => {
            if is_json_output() {
                return print_json(registrar.rules());
            }
            if registrar.rules().is_empty() {
                print_info("No rules defined; every transition is allowed");
                return Ok(());
            }
            let mut builder = Builder::default();
            builder.push_record(["Status", "Allowed next"]);
            for (status, allowed) in registrar.rules().iter() {
                let next = if allowed.is_empty() {
                    "(terminal)".to_string()
                } else {
                    allowed.join(", ")
                };
                builder.push_record([status.clone(), next]);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            println!("{table}");
        }
        RulesAction::Set { status, allowed } => {
            let allowed: Vec<String> = allowed
                .into_iter()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .collect();
            let summary = if allowed.is_empty() {
                format!("{status} is now terminal")
            } else {
                format!("{status} may move to {}", allowed.join(", "))
            };
            registrar.set_transitions(&status, allowed)?;
            if is_json_output() {
                return print_json(registrar.rules());
            }
            print_success(&summary);
        }
        RulesAction::Clear { status } => {
            let removed = registrar.clear_transitions(&status)?;
            if is_json_output() {
                return print_json(json!({ "status": status, "removed": removed }));
            }
            if removed {
                print_success(&format!("{status} may now move to any status"));
            } else {
                print_info(&format!("{status} had no rule"));
            }
        }
        RulesAction::Check { from, to } => {
            registrar
                .rules()
                .check_transition(&from, &to)
                .map_err(AppError::from)?;
            if is_json_output() {
                return print_json(json!({ "from": from, "to": to, "allowed": true }));
            }
            print_success(&format!("{from} -> {to} is allowed"));
        }
        RulesAction::Graph { from } => {
            let graph = registrar.transition_graph();
            let reachable = from.as_deref().map(|status| graph.reachable_from(status));
            if is_json_output() {
                return print_json(json!({
                    "statuses": graph.statuses(),
                    "transitions": graph.edge_count(),
                    "terminal": graph.terminal_statuses(),
                    "from": from,
                    "reachable": reachable,
                }));
            }
            println!(
                "{} status(es), {} allowed transition(s)",
                graph.node_count(),
                graph.edge_count()
            );
            println!("Terminal: {}", graph.terminal_statuses().join(", "));
            if let (Some(from), Some(reachable)) = (from, reachable) {
                println!("Reachable from {from}: {}", reachable.join(", "));
            }
        }
    }
    Ok(())
}
