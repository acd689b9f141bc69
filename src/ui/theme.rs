//! Visual theme and styling.

use console::Style;

/// Styles for terminal output.
#[derive(Debug, Clone)]
pub struct ReportTheme {
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
        }
    }

    /// Format an error message as `Error: <msg>` in red bold.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("Error: {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
