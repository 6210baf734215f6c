//! Integration tests for CLI argument parsing.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A devhush invocation isolated from the ambient NODE_PATH and RUST_LOG.
fn devhush() -> Command {
    let mut cmd = Command::new(cargo_bin("devhush"));
    cmd.env_remove("NODE_PATH");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = devhush();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("development warnings"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = devhush();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_runs_patch() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = devhush();
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains(
                "Skipping @clusterio/controller/dist/node/controller.js (not installed)",
            )
            .and(predicate::str::contains(
                "Skipping @clusterio/ctl/dist/node/ctl.js (not installed)",
            ))
            .and(predicate::str::contains(
                "Skipping @clusterio/host/dist/node/host.js (not installed)",
            )),
        );
    Ok(())
}

#[test]
fn cli_quiet_suppresses_skip_lines() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = devhush();
    cmd.current_dir(temp.path());
    cmd.arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Skipping").not());
    Ok(())
}

#[test]
fn cli_verbose_shows_install_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = devhush();
    cmd.current_dir(temp.path());
    cmd.arg("--verbose");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Install root:"));
    Ok(())
}

#[test]
fn cli_status_accepts_install_root_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = devhush();
    cmd.args(["status", "--install-root"]);
    cmd.arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not installed"));
    Ok(())
}

#[test]
fn cli_generates_bash_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = devhush();
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("devhush"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = devhush();
    cmd.arg("upgrade");
    cmd.assert().failure();
    Ok(())
}
