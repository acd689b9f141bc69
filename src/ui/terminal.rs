//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, ReportTheme, UserInterface};

/// Writes messages to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ReportTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(colors: bool) -> Self {
        let theme = if colors {
            ReportTheme::new()
        } else {
            ReportTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI for this process.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(!no_color && should_use_colors()))
}
