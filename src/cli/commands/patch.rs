//! Patch command implementation.
//!
//! The `devhush patch` command (also the default when no subcommand is
//! given) wraps the banner call in every installed target behind the
//! suppression guard.

use std::path::{Path, PathBuf};

use crate::cli::args::PatchArgs;
use crate::error::Result;
use crate::patch::{PatchEngine, PatchMode};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The patch command implementation.
pub struct PatchCommand {
    install_root: PathBuf,
    args: PatchArgs,
}

impl PatchCommand {
    /// Create a new patch command.
    pub fn new(install_root: &Path, args: PatchArgs) -> Self {
        Self {
            install_root: install_root.to_path_buf(),
            args,
        }
    }
}

impl Command for PatchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = PatchEngine::new(self.install_root.clone());
        ui.detail(&format!("Install root: {}", engine.install_root().display()));

        let summary = engine.run(PatchMode::Apply, ui);
        tracing::debug!(
            "patch run: {} rewritten, {} unrecognized, {} failed",
            summary.rewritten(),
            summary.unrecognized(),
            summary.failed()
        );

        Ok(CommandResult::with_exit_code(
            summary.exit_code(self.args.strict),
        ))
    }
}
