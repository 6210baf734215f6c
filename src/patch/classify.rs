//! Pure per-file classification.
//!
//! Classification is a function of a file's contents plus the literal
//! fragments in [`banner`](super::banner); the filesystem never enters
//! here. The I/O shell in [`engine`](super::engine) decides what to read
//! and write, this module decides what the bytes mean.

use super::banner::{GUARD_VAR, ORIGINAL_FRAGMENT, WRAPPED_FRAGMENT};

/// What a target file's contents look like to the patcher.
///
/// The states are mutually exclusive and checked in declaration order:
/// the guard-marker check comes first so idempotence never depends on the
/// wrapped form still matching verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The guard marker is present; an earlier run patched this file.
    AlreadyPatched,
    /// The unpatched fragment is present verbatim. Carries the contents
    /// with the first occurrence substituted, ready to write back.
    Patchable { patched: String },
    /// Neither form is present. Upstream content drifted, so touching the
    /// file would be unsafe.
    Unrecognized,
}

/// Classify `contents` for the forward (patch) direction.
pub fn classify(contents: &str) -> Classification {
    if contents.contains(GUARD_VAR) {
        return Classification::AlreadyPatched;
    }
    if contents.contains(ORIGINAL_FRAGMENT.as_str()) {
        let patched = contents.replacen(ORIGINAL_FRAGMENT.as_str(), WRAPPED_FRAGMENT.as_str(), 1);
        return Classification::Patchable { patched };
    }
    Classification::Unrecognized
}

/// What a target file's contents look like to a revert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevertClassification {
    /// No guard marker, nothing to undo.
    NotPatched,
    /// The wrapped fragment is present verbatim. Carries the contents
    /// with the first occurrence restored to the bare call.
    Revertible { restored: String },
    /// The marker is present but the wrapped form no longer matches
    /// verbatim (edited by hand, or patched by a different version).
    Unrecognized,
}

/// Classify `contents` for the reverse (revert) direction.
pub fn classify_revert(contents: &str) -> RevertClassification {
    if !contents.contains(GUARD_VAR) {
        return RevertClassification::NotPatched;
    }
    if contents.contains(WRAPPED_FRAGMENT.as_str()) {
        let restored = contents.replacen(WRAPPED_FRAGMENT.as_str(), ORIGINAL_FRAGMENT.as_str(), 1);
        return RevertClassification::Revertible { restored };
    }
    RevertClassification::Unrecognized
}
