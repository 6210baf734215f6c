//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use devhush::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Skipping x (not installed)");
//! ui.warning("Unable to locate banner in x - skipping");
//!
//! assert_eq!(ui.messages().len(), 1);
//! assert_eq!(ui.warnings().len(), 1);
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
///
/// Captures everything regardless of output mode, so tests can assert on
/// lines a quiet terminal would drop.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    details: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured informational lines.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success lines.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Captured warning lines.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured error lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind_separately() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.detail("d");
        ui.warning("w");
        ui.error("e");

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.details(), ["d"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
    }
}
