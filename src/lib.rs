//! engine-report - Locate the bundled engines and report their versions.
//!
//! Each engine role can be overridden through an environment variable;
//! otherwise the bundled binary is used. Every engine is asked for its
//! version and the results are rendered as an aligned table or as JSON,
//! together with the client library version and any preview features
//! declared in the schema.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`engines`] - Engine roles, binary location and version probing
//! - [`error`] - Error types and result aliases
//! - [`report`] - Report assembly and rendering
//! - [`schema`] - Schema discovery and preview feature lookup
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use engine_report::report::{render_text, ReportRow};
//!
//! let rows = vec![
//!     ReportRow::new("Tool", "1.2.3"),
//!     ReportRow::new("Query Engine (Binary)", "4.0.0 (at ./qe)"),
//! ];
//! let table = render_text(&rows);
//! assert_eq!(table.lines().next(), Some("Tool                  : 1.2.3"));
//! ```

pub mod cli;
pub mod engines;
pub mod error;
pub mod report;
pub mod schema;
pub mod ui;

pub use error::{ReportError, Result};
