//! Engine version probing.
//!
//! Engines answer `--version` with a single line such as
//! `migration-engine-cli 4.0.0`. The probe runs the binary, takes the first
//! non-empty line of its output and pulls the version token out of it.
//! Failures are returned to the caller; nothing here degrades silently.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::engines::role::EngineRole;
use crate::error::{ReportError, Result};

/// Queries a binary for its self-reported version.
pub trait VersionProbe {
    /// Return the version reported by the binary at `path`.
    fn probe(&self, path: &Path, role: EngineRole) -> Result<String>;
}

/// Probes engines by running `<binary> --version`.
///
/// No timeout is applied: a binary that never exits blocks the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProbe;

impl CommandProbe {
    /// Create a new command probe.
    pub fn new() -> Self {
        Self
    }
}

impl VersionProbe for CommandProbe {
    fn probe(&self, path: &Path, role: EngineRole) -> Result<String> {
        tracing::debug!("Probing {} at {}", role, path.display());

        let output = Command::new(path)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ReportError::ProbeFailed {
                engine: role.label().to_string(),
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            let detail = stderr.trim();
            let message = if detail.is_empty() {
                format!("exited with code {}", code)
            } else {
                format!("exited with code {}: {}", code, detail)
            };
            return Err(ReportError::ProbeFailed {
                engine: role.label().to_string(),
                path: path.to_path_buf(),
                message,
            });
        }

        let text = if stdout.trim().is_empty() {
            stderr
        } else {
            stdout
        };

        parse_version_output(&text).ok_or_else(|| ReportError::VersionParse {
            engine: role.label().to_string(),
            output: text.trim().to_string(),
        })
    }
}

/// Extract the version token from `--version` output.
///
/// Uses the first non-empty line. A lone token is the version; otherwise the
/// token after the binary name is.
pub fn parse_version_output(output: &str) -> Option<String> {
    let line = output.lines().map(str::trim).find(|l| !l.is_empty())?;
    let mut tokens = line.split_whitespace();
    let first = tokens.next()?;
    let version = tokens.next().unwrap_or(first);
    Some(version.to_string())
}
