//! Banner patching core.
//!
//! This module splits the patcher the way it is tested: classification of
//! file contents is pure ([`classify`]), the filesystem work is a thin
//! shell around it ([`engine`]).
//!
//! - [`banner`] - literal fragments and the guard marker
//! - [`classify`] - pure content classification
//! - [`targets`] - the fixed target list and install-root resolution
//! - [`engine`] - sequential read/substitute/write shell

pub mod banner;
pub mod classify;
pub mod engine;
pub mod targets;

pub use banner::{ASCII_BANNER, GUARD_VAR, ORIGINAL_FRAGMENT, WRAPPED_FRAGMENT};
pub use classify::{classify, classify_revert, Classification, RevertClassification};
pub use engine::{PatchEngine, PatchMode, RunSummary, TargetOutcome};
pub use targets::{resolve_install_root, Target, TARGETS};
