//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use devhush::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.message("suppressed in quiet mode");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for target-status output.
///
/// The patch engine reports through this trait so its behavior is
/// assertable in tests without capturing process output.
pub trait UserInterface {
    /// Display an informational status line (stdout).
    fn message(&mut self, msg: &str);

    /// Display a status line for a rewritten target (stdout).
    fn success(&mut self, msg: &str);

    /// Display a resolved-path detail line (stdout, verbose only).
    fn detail(&mut self, msg: &str);

    /// Display a warning line (stderr, never suppressed).
    fn warning(&mut self, msg: &str);

    /// Display an error line (stderr, never suppressed).
    fn error(&mut self, msg: &str);
}

/// Create the UI for a run.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
