//! Status command implementation.
//!
//! The `devhush status` command classifies every target without writing
//! anything. With `--json` it emits a machine-readable report instead of
//! per-target lines.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::patch::{PatchEngine, Target, TargetOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    install_root: PathBuf,
    args: StatusArgs,
}

/// Machine-readable status report, one entry per target.
#[derive(Debug, Serialize)]
struct StatusReport {
    install_root: String,
    targets: Vec<TargetStatus>,
}

/// One target's entry in the JSON report.
#[derive(Debug, Serialize)]
struct TargetStatus {
    target: &'static str,
    package: &'static str,
    state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TargetStatus {
    fn new(target: &Target, outcome: &TargetOutcome) -> Self {
        let error = match outcome {
            TargetOutcome::Failed(message) => Some(message.clone()),
            _ => None,
        };
        Self {
            target: target.relative_path,
            package: target.package,
            state: outcome.label(),
            error,
        }
    }
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(install_root: &Path, args: StatusArgs) -> Self {
        Self {
            install_root: install_root.to_path_buf(),
            args,
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = PatchEngine::new(self.install_root.clone());
        let summary = engine.classify_all();

        if self.args.json {
            let report = StatusReport {
                install_root: engine.install_root().display().to_string(),
                targets: summary
                    .reports()
                    .iter()
                    .map(|(target, outcome)| TargetStatus::new(target, outcome))
                    .collect(),
            };
            // The report is the command's output, not status chatter, so it
            // bypasses the UI and its verbosity gating.
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            ui.detail(&format!("Install root: {}", engine.install_root().display()));
            for (target, outcome) in summary.reports() {
                let line = format!("{}: {}", target.relative_path, outcome.label());
                match outcome {
                    TargetOutcome::Unrecognized => ui.warning(&line),
                    TargetOutcome::Failed(message) => {
                        ui.error(&format!("{}: {}", target.relative_path, message))
                    }
                    _ => ui.message(&line),
                }
            }
        }

        Ok(CommandResult::with_exit_code(
            summary.exit_code(self.args.strict),
        ))
    }
}
