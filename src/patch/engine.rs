//! Sequential patch engine.
//!
//! The I/O shell around [`classify`]: resolves each target under the
//! install root, reads it, asks the pure classifier what the bytes mean,
//! performs the single whole-file write a patch needs, and reports one
//! line per target through the UI. Targets are processed strictly in list
//! order and independently; no outcome on one target stops the remaining
//! ones, and no target's write can touch another target's file.
//!
//! There are no retries, no backups, and no rollback.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DevhushError;
use crate::ui::UserInterface;

use super::classify::{classify, classify_revert, Classification, RevertClassification};
use super::targets::{Target, TARGETS};

/// Direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchMode {
    /// Wrap the banner call in the suppression guard.
    Apply,
    /// Restore a previously wrapped banner call.
    Revert,
}

/// Outcome for a single target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    /// No file at the resolved path.
    NotInstalled,
    /// Guard marker already present.
    AlreadyPatched,
    /// Banner present; a patch run would rewrite the file (read-only
    /// classification, nothing written yet).
    Patchable,
    /// Banner found and the guarded form written out.
    Patched,
    /// No guard marker present, nothing to revert.
    NotPatched,
    /// Guard removed and the bare banner call restored.
    Reverted,
    /// Neither expected form present in the file.
    Unrecognized,
    /// Read or write failed; carries the rendered I/O error.
    Failed(String),
}

impl TargetOutcome {
    /// Short lower-case label, used by `status` output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotInstalled => "not installed",
            Self::AlreadyPatched => "already patched",
            Self::Patchable => "patchable",
            Self::Patched => "patched",
            Self::NotPatched => "not patched",
            Self::Reverted => "reverted",
            Self::Unrecognized => "unrecognized",
            Self::Failed(_) => "failed",
        }
    }
}

/// Aggregate of one run over the full target list.
#[derive(Debug, Default)]
pub struct RunSummary {
    reports: Vec<(Target, TargetOutcome)>,
}

impl RunSummary {
    /// Per-target outcomes in processing order.
    pub fn reports(&self) -> &[(Target, TargetOutcome)] {
        &self.reports
    }

    /// Number of targets that hit a filesystem error.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Failed(_)))
    }

    /// Number of targets whose content matched neither expected form.
    pub fn unrecognized(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Unrecognized))
    }

    /// Number of targets rewritten this run.
    pub fn rewritten(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Patched | TargetOutcome::Reverted))
    }

    /// Map the summary to a process exit code.
    ///
    /// Filesystem failures exit 1. Unrecognized content exits 0 unless
    /// `strict` asked for it to be fatal, in which case it exits 2.
    /// Missing and already-patched targets are never failures.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if self.failed() > 0 {
            1
        } else if strict && self.unrecognized() > 0 {
            2
        } else {
            0
        }
    }

    fn count(&self, pred: impl Fn(&TargetOutcome) -> bool) -> usize {
        self.reports.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Runs the substitution over the fixed target list.
pub struct PatchEngine {
    install_root: PathBuf,
}

impl PatchEngine {
    /// Create an engine rooted at `install_root`.
    pub fn new(install_root: PathBuf) -> Self {
        Self { install_root }
    }

    /// The install root this engine resolves targets under.
    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// Process every target in list order, reporting through `ui`.
    pub fn run(&self, mode: PatchMode, ui: &mut dyn UserInterface) -> RunSummary {
        let mut summary = RunSummary::default();
        for target in &TARGETS {
            let outcome = self.process_target(target, mode, ui);
            summary.reports.push((*target, outcome));
        }
        summary
    }

    /// Read-only classification of every target, for `status`.
    pub fn classify_all(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for target in &TARGETS {
            summary.reports.push((*target, self.classify_target(target)));
        }
        summary
    }

    /// Read-only classification of a single target.
    pub fn classify_target(&self, target: &Target) -> TargetOutcome {
        let path = target.resolve(&self.install_root);
        if !path.exists() {
            return TargetOutcome::NotInstalled;
        }
        match self.read_target(&path) {
            Ok(contents) => match classify(&contents) {
                Classification::AlreadyPatched => TargetOutcome::AlreadyPatched,
                Classification::Patchable { .. } => TargetOutcome::Patchable,
                Classification::Unrecognized => TargetOutcome::Unrecognized,
            },
            Err(err) => TargetOutcome::Failed(err.to_string()),
        }
    }

    fn process_target(
        &self,
        target: &Target,
        mode: PatchMode,
        ui: &mut dyn UserInterface,
    ) -> TargetOutcome {
        let path = target.resolve(&self.install_root);
        tracing::debug!("processing {} ({:?})", path.display(), mode);
        ui.detail(&format!("  {}", path.display()));

        if !path.exists() {
            ui.message(&format!("Skipping {} (not installed)", target.relative_path));
            return TargetOutcome::NotInstalled;
        }

        let contents = match self.read_target(&path) {
            Ok(contents) => contents,
            Err(err) => {
                ui.error(&err.to_string());
                return TargetOutcome::Failed(err.to_string());
            }
        };

        match mode {
            PatchMode::Apply => self.apply(target, &path, &contents, ui),
            PatchMode::Revert => self.revert(target, &path, &contents, ui),
        }
    }

    fn apply(
        &self,
        target: &Target,
        path: &Path,
        contents: &str,
        ui: &mut dyn UserInterface,
    ) -> TargetOutcome {
        match classify(contents) {
            Classification::AlreadyPatched => {
                ui.message(&format!("Already patched: {}", target.relative_path));
                TargetOutcome::AlreadyPatched
            }
            Classification::Unrecognized => {
                ui.warning(&format!(
                    "Unable to locate banner in {} - skipping",
                    target.relative_path
                ));
                TargetOutcome::Unrecognized
            }
            Classification::Patchable { patched } => match self.write_target(path, &patched) {
                Ok(()) => {
                    ui.success(&format!("Patched: {}", target.relative_path));
                    TargetOutcome::Patched
                }
                Err(err) => {
                    ui.error(&err.to_string());
                    TargetOutcome::Failed(err.to_string())
                }
            },
        }
    }

    fn revert(
        &self,
        target: &Target,
        path: &Path,
        contents: &str,
        ui: &mut dyn UserInterface,
    ) -> TargetOutcome {
        match classify_revert(contents) {
            RevertClassification::NotPatched => {
                ui.message(&format!("Not patched: {}", target.relative_path));
                TargetOutcome::NotPatched
            }
            RevertClassification::Unrecognized => {
                ui.warning(&format!(
                    "Unable to locate guarded banner in {} - skipping",
                    target.relative_path
                ));
                TargetOutcome::Unrecognized
            }
            RevertClassification::Revertible { restored } => {
                match self.write_target(path, &restored) {
                    Ok(()) => {
                        ui.success(&format!("Reverted: {}", target.relative_path));
                        TargetOutcome::Reverted
                    }
                    Err(err) => {
                        ui.error(&err.to_string());
                        TargetOutcome::Failed(err.to_string())
                    }
                }
            }
        }
    }

    fn read_target(&self, path: &Path) -> Result<String, DevhushError> {
        fs::read_to_string(path).map_err(|source| DevhushError::TargetRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_target(&self, path: &Path, contents: &str) -> Result<(), DevhushError> {
        fs::write(path, contents).map_err(|source| DevhushError::TargetWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
