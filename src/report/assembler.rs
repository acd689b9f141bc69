//! Report assembly.
//!
//! The assembler locates and probes each engine in turn and lays the rows
//! out in a fixed order:
//!
//! 1. Tool name and version
//! 2. Client library version
//! 3. Current platform
//! 4. One row per engine, in role order
//! 5. Default engines hash
//! 6. Studio version
//! 7. Preview features, only when there are any
//!
//! Any engine that cannot be located or probed fails the whole report.

use std::path::{Path, PathBuf};

use super::metadata::ReportConfig;
use super::ReportRow;
use crate::engines::{BinaryLocator, BinaryTarget, EngineInfo, EngineRole, VersionProbe};
use crate::error::Result;

/// Builds report rows from engine lookups and injected metadata.
pub struct ReportAssembler<'a> {
    config: &'a ReportConfig,
    locator: BinaryLocator<'a>,
    probe: &'a dyn VersionProbe,
    platform: BinaryTarget,
    cwd: PathBuf,
}

impl<'a> ReportAssembler<'a> {
    /// Create an assembler.
    ///
    /// `cwd` is the directory engine paths are shown relative to.
    pub fn new(
        config: &'a ReportConfig,
        locator: BinaryLocator<'a>,
        probe: &'a dyn VersionProbe,
        platform: BinaryTarget,
        cwd: &Path,
    ) -> Self {
        Self {
            config,
            locator,
            probe,
            platform,
            cwd: cwd.to_path_buf(),
        }
    }

    /// Locate and probe a single engine.
    pub fn engine_info(&self, role: EngineRole) -> Result<EngineInfo> {
        let located = self.locator.locate(role)?;
        let version = self.probe.probe(&located.path, role)?;
        Ok(EngineInfo {
            path: located.path,
            version,
            override_variable: located.override_variable,
        })
    }

    /// Build the full report.
    pub fn assemble(
        &self,
        roles: &[EngineRole],
        preview_features: &[String],
    ) -> Result<Vec<ReportRow>> {
        let mut rows = vec![
            ReportRow::new(&self.config.tool_name, &self.config.tool_version),
            ReportRow::new(
                &self.config.client_package,
                self.config.client_version_display(),
            ),
            ReportRow::new("Current platform", self.platform.to_string()),
        ];

        for &role in roles {
            let info = self.engine_info(role)?;
            rows.push(ReportRow::new(
                role.label(),
                format_engine_value(&info, &self.cwd),
            ));
        }

        rows.push(ReportRow::new(
            "Default Engines Hash",
            self.config.engines_hash(),
        ));
        rows.push(ReportRow::new("Studio", &self.config.studio_version));

        if !preview_features.is_empty() {
            rows.push(ReportRow::new(
                "Preview Features",
                preview_features.join(", "),
            ));
        }

        Ok(rows)
    }
}

/// Format an engine as `<version> (at <path>[, resolved by <VAR>])`.
pub fn format_engine_value(info: &EngineInfo, cwd: &Path) -> String {
    let path = display_path(&info.path, cwd);
    match info.override_variable {
        Some(var) => format!("{} (at {}, resolved by {})", info.version, path, var),
        None => format!("{} (at {})", info.version, path),
    }
}

/// Show `path` relative to `cwd` when it lives below it, unchanged otherwise.
pub fn display_path(path: &Path, cwd: &Path) -> String {
    match path.strip_prefix(cwd) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}
