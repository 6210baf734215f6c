//! devhush - Suppressible development warnings for Clusterio installs.
//!
//! devhush patches the development-branch warning banner inside
//! already-installed Clusterio package files, wrapping the banner print
//! in a check on `CLUSTERIO_SUPPRESS_DEV_WARNING` so the warning can be
//! silenced at runtime. The patch is a byte-exact substring substitution
//! over a fixed list of three bundled entry points; it is idempotent and
//! leaves any file it does not recognize untouched.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`patch`] - Fragments, classification, targets, and the patch engine
//! - [`ui`] - Terminal output and the capturing mock used in tests
//!
//! # Example
//!
//! ```
//! use devhush::patch::{classify, Classification};
//!
//! // Content without the expected banner is never rewritten.
//! let classification = classify("console.log(\"unrelated\");\n");
//! assert_eq!(classification, Classification::Unrecognized);
//! ```

pub mod cli;
pub mod error;
pub mod patch;
pub mod ui;

pub use error::{DevhushError, Result};
