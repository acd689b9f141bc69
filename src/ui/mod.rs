//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for writing to the terminal
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use engine_report::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("engine-report : 0.4.0");
//! assert!(ui.has_message("0.4.0"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ReportTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message on standard output.
    fn message(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
