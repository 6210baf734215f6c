//! Error types for devhush operations.
//!
//! This module defines [`DevhushError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DevhushError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DevhushError::Other`) for unexpected errors
//! - A failure on one target never aborts the run; the engine reports it
//!   and moves on to the next target

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devhush operations.
#[derive(Debug, Error)]
pub enum DevhushError {
    /// Failed to read a target file that exists.
    #[error("Failed to read {path}: {source}")]
    TargetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a target file back.
    #[error("Failed to write {path}: {source}")]
    TargetWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the status report.
    #[error("Failed to encode status report: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devhush operations.
pub type Result<T> = std::result::Result<T, DevhushError>;
