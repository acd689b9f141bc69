//! Error types for engine report operations.
//!
//! This module defines [`ReportError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Locating or probing an engine fails the whole report
//! - Schema problems never surface here; see [`crate::schema::SchemaError`]
//! - Process-level failures carry `anyhow` context and arrive as `ReportError::Other`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for engine report operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No bundled binary exists for an engine.
    #[error("Could not find the {engine} binary (searched: {})", display_paths(.searched))]
    EngineNotFound {
        engine: String,
        searched: Vec<PathBuf>,
    },

    /// An engine binary could not be executed or exited unsuccessfully.
    #[error("Failed to get version of {engine} at {}: {message}", .path.display())]
    ProbeFailed {
        engine: String,
        path: PathBuf,
        message: String,
    },

    /// An engine ran but its output held no version token.
    #[error("Could not parse {engine} version from output: {output:?}")]
    VersionParse { engine: String, output: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Process-level failure with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for engine report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
