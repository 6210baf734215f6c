//! Revert command implementation.
//!
//! The `devhush revert` command restores the bare banner call in targets
//! a previous patch run rewrote.

use std::path::{Path, PathBuf};

use crate::cli::args::RevertArgs;
use crate::error::Result;
use crate::patch::{PatchEngine, PatchMode};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The revert command implementation.
pub struct RevertCommand {
    install_root: PathBuf,
    args: RevertArgs,
}

impl RevertCommand {
    /// Create a new revert command.
    pub fn new(install_root: &Path, args: RevertArgs) -> Self {
        Self {
            install_root: install_root.to_path_buf(),
            args,
        }
    }
}

impl Command for RevertCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = PatchEngine::new(self.install_root.clone());
        ui.detail(&format!("Install root: {}", engine.install_root().display()));

        let summary = engine.run(PatchMode::Revert, ui);
        tracing::debug!(
            "revert run: {} rewritten, {} unrecognized, {} failed",
            summary.rewritten(),
            summary.unrecognized(),
            summary.failed()
        );

        Ok(CommandResult::with_exit_code(
            summary.exit_code(self.args.strict),
        ))
    }
}
