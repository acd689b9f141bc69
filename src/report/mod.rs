//! Version report assembly and rendering.
//!
//! - [`metadata`] - Tool, client and bundled-version metadata
//! - [`assembler`] - Builds the ordered report rows
//! - [`render`] - Text table and JSON output

pub mod assembler;
pub mod metadata;
pub mod render;

pub use assembler::{display_path, format_engine_value, ReportAssembler};
pub use metadata::{detect_client_version, engines_hash, ReportConfig};
pub use render::{render, render_json, render_text, slugify};

/// One `label : value` line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Display label.
    pub label: String,
    /// Display value.
    pub value: String,
}

impl ReportRow {
    /// Create a row.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
