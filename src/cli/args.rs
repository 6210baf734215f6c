//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// devhush - Suppressible development warnings for Clusterio installs.
#[derive(Debug, Parser)]
#[command(name = "devhush")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory the Clusterio packages are installed under
    /// (defaults to ./node_modules)
    #[arg(short, long, global = true, env = "NODE_PATH")]
    pub install_root: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Guard the development warning banner (default if no command specified)
    Patch(PatchArgs),

    /// Classify every target without writing anything
    Status(StatusArgs),

    /// Remove a previously inserted guard
    Revert(RevertArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `patch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PatchArgs {
    /// Exit non-zero when any target's content is unrecognized
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Emit a machine-readable JSON report on stdout
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when any target's content is unrecognized
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `revert` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RevertArgs {
    /// Exit non-zero when any target's content is unrecognized
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses_to_none() {
        let cli = Cli::parse_from(["devhush"]);
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn install_root_flag_is_global() {
        let cli = Cli::parse_from(["devhush", "status", "--install-root", "/tmp/deps"]);
        assert_eq!(cli.install_root.as_deref(), Some(std::path::Path::new("/tmp/deps")));
    }

    #[test]
    fn strict_flag_parses_on_patch() {
        let cli = Cli::parse_from(["devhush", "patch", "--strict"]);
        match cli.command {
            Some(Commands::Patch(args)) => assert!(args.strict),
            other => panic!("expected patch command, got {:?}", other),
        }
    }
}
