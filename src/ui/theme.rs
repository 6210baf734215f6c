//! Visual theme and styling.

use console::Style;

/// devhush's visual theme.
///
/// Status lines keep the exact wording the engine emits; the theme only
/// adds color, so output stays greppable with or without a TTY.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for rewritten-target lines (green).
    pub success: Style,
    /// Style for warning lines (orange).
    pub warning: Style,
    /// Style for error lines (red bold).
    pub error: Style,
    /// Style for resolved-path detail lines (dim).
    pub detail: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            detail: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            detail: Style::new(),
        }
    }

    /// Format a rewritten-target line.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    /// Format a warning line.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("WARNING: {}", msg)))
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("ERROR: {}", msg)))
    }

    /// Format a detail line.
    pub fn format_detail(&self, msg: &str) -> String {
        format!("{}", self.detail.apply_to(msg))
    }
}

/// Determine whether colored output should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_warning_keeps_the_warning_prefix() {
        let theme = Theme::plain();
        assert_eq!(theme.format_warning("banner missing"), "WARNING: banner missing");
    }

    #[test]
    fn plain_success_is_the_bare_message() {
        let theme = Theme::plain();
        assert_eq!(theme.format_success("Patched: x"), "Patched: x");
    }

    #[test]
    fn plain_error_keeps_the_error_prefix() {
        let theme = Theme::plain();
        assert_eq!(theme.format_error("boom"), "ERROR: boom");
    }
}
