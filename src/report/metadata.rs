//! Package metadata shown alongside the engines.
//!
//! Everything the report needs to know about the tool itself is gathered
//! once into a [`ReportConfig`] and handed to the assembler.

use std::fs;
use std::path::Path;

/// Version of the bundled engines, `<release>-<build>.<commit hash>`.
pub const ENGINES_VERSION: &str = "4.3.0-32.c875e43600dfe042452e0b868f7a48b817b9640b";

/// Version of the bundled studio.
pub const STUDIO_VERSION: &str = "0.473.0";

/// Client library package looked up in `node_modules`.
pub const CLIENT_PACKAGE: &str = "@prisma/client";

/// Shown in place of a client version that could not be found.
pub const NOT_FOUND: &str = "Not found";

/// Static metadata injected into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Name of the tool, used as the first row's label.
    pub tool_name: String,
    /// Version of the tool.
    pub tool_version: String,
    /// Package name of the client library.
    pub client_package: String,
    /// Installed client library version, if any.
    pub client_version: Option<String>,
    /// Version of the companion studio.
    pub studio_version: String,
    /// Version string of the bundled engines.
    pub engines_version: String,
}

impl ReportConfig {
    /// Build the config for this build of the tool, detecting the client
    /// library from `cwd`.
    pub fn from_build(cwd: &Path) -> Self {
        Self {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            client_package: CLIENT_PACKAGE.to_string(),
            client_version: detect_client_version(cwd, CLIENT_PACKAGE),
            studio_version: STUDIO_VERSION.to_string(),
            engines_version: ENGINES_VERSION.to_string(),
        }
    }

    /// Client version, or the "Not found" sentinel.
    pub fn client_version_display(&self) -> &str {
        self.client_version.as_deref().unwrap_or(NOT_FOUND)
    }

    /// Commit hash of the bundled engines.
    pub fn engines_hash(&self) -> &str {
        engines_hash(&self.engines_version)
    }
}

/// The trailing `.`-separated segment of an engines version.
pub fn engines_hash(version: &str) -> &str {
    version.rsplit('.').next().unwrap_or(version)
}

/// Find the installed version of `package` by walking up from `cwd`.
///
/// The first `node_modules/<package>/package.json` with a string `version`
/// wins. Unreadable or malformed manifests are skipped.
pub fn detect_client_version(cwd: &Path, package: &str) -> Option<String> {
    cwd.ancestors().find_map(|dir| {
        let manifest = dir.join("node_modules").join(package).join("package.json");
        let content = fs::read_to_string(&manifest).ok()?;
        let value: serde_json::Value = serde_json::from_str(&content).ok()?;
        let version = value["version"].as_str()?.to_string();
        tracing::debug!("Found {} {} at {}", package, version, manifest.display());
        Some(version)
    })
}
