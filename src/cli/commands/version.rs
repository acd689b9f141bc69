//! Version command implementation.
//!
//! The `engine-report version` command (also the default command) prints
//! the tool, client and engine versions as a table or as JSON.

use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::cli::args::VersionArgs;
use crate::engines::{BinaryLocator, BinaryTarget, BundledResolver, CommandProbe, EngineRole};
use crate::error::Result;
use crate::report::{render, ReportAssembler, ReportConfig};
use crate::schema::{find_schema, read_flags};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand {
    cwd: PathBuf,
    args: VersionArgs,
}

impl VersionCommand {
    /// Create a new version command.
    pub fn new(cwd: &Path, args: VersionArgs) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            args,
        }
    }

    /// Get the working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the command arguments.
    pub fn args(&self) -> &VersionArgs {
        &self.args
    }

    /// Build the rendered report using the process environment.
    pub fn report(&self) -> Result<String> {
        self.report_with_env(|key: &str| std::env::var(key))
    }

    /// Build the rendered report with a custom env var lookup function.
    pub fn report_with_env<F>(&self, env_fn: F) -> Result<String>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let config = ReportConfig::from_build(&self.cwd);
        let target = BinaryTarget::current();
        let resolver = BundledResolver::new(self.engines_dir()?, target.clone());
        let probe = CommandProbe::new();

        let schema = find_schema(self.args.schema.as_deref(), &self.cwd);
        let features = read_flags(schema.as_deref());

        let assembler = ReportAssembler::new(
            &config,
            BinaryLocator::with_env(&resolver, env_fn).relative_to(&self.cwd),
            &probe,
            target,
            &self.cwd,
        );
        let rows = assembler.assemble(&EngineRole::ALL, &features)?;

        render(&rows, self.args.json)
    }

    fn engines_dir(&self) -> Result<PathBuf> {
        match &self.args.engines_dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(self.cwd.join(dir)),
            None => BundledResolver::default_engines_dir(),
        }
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let output = self.report()?;
        ui.message(&output);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn no_env(_: &str) -> std::result::Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    #[test]
    fn version_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = VersionCommand::new(temp.path(), VersionArgs::default());
        assert_eq!(cmd.cwd(), temp.path());
        assert!(!cmd.args().json);
    }

    #[test]
    fn relative_engines_dir_resolves_against_cwd() {
        let temp = TempDir::new().unwrap();
        let args = VersionArgs {
            engines_dir: Some(PathBuf::from("engines")),
            ..Default::default()
        };
        let cmd = VersionCommand::new(temp.path(), args);
        assert_eq!(cmd.engines_dir().unwrap(), temp.path().join("engines"));
    }

    #[test]
    fn missing_engines_fail_the_report() {
        let temp = TempDir::new().unwrap();
        let args = VersionArgs {
            engines_dir: Some(temp.path().join("empty")),
            ..Default::default()
        };
        let cmd = VersionCommand::new(temp.path(), args);

        let result = cmd.report_with_env(no_env);
        assert!(matches!(
            result,
            Err(ReportError::EngineNotFound { ref engine, .. }) if engine == "Query Engine (Binary)"
        ));
    }

    #[test]
    fn execute_propagates_errors_without_output() {
        let temp = TempDir::new().unwrap();
        let args = VersionArgs {
            engines_dir: Some(temp.path().join("empty")),
            ..Default::default()
        };
        let cmd = VersionCommand::new(temp.path(), args);
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
        assert!(ui.messages().is_empty());
    }

    #[cfg(unix)]
    mod with_engines {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        fn install_engines(dir: &Path) {
            fs::create_dir_all(dir).unwrap();
            for role in EngineRole::ALL {
                let path = dir.join(role.binary_name());
                fs::write(
                    &path,
                    format!("#!/bin/sh\necho \"{} 4.3.0\"\n", role.binary_name()),
                )
                .unwrap();
                fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            }
        }

        fn setup() -> (TempDir, VersionArgs) {
            let temp = TempDir::new().unwrap();
            install_engines(&temp.path().join("engines"));
            let args = VersionArgs {
                engines_dir: Some(PathBuf::from("engines")),
                ..Default::default()
            };
            (temp, args)
        }

        #[test]
        fn text_report_lists_engines_relative_to_cwd() {
            let (temp, args) = setup();
            let cmd = VersionCommand::new(temp.path(), args);

            let output = cmd.report_with_env(no_env).unwrap();

            assert!(output.contains("Query Engine (Binary) : 4.3.0 (at engines/query-engine)"));
            assert!(output.contains("Format Binary         : 4.3.0 (at engines/prisma-fmt)"));
            assert!(output.contains("@prisma/client        : Not found"));
            assert!(!output.contains("Preview Features"));
            assert!(!output.contains("resolved by"));
        }

        #[test]
        fn json_report_has_slugified_keys() {
            let (temp, mut args) = setup();
            args.json = true;
            let cmd = VersionCommand::new(temp.path(), args);

            let output = cmd.report_with_env(no_env).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

            assert_eq!(parsed["migration-engine"], "4.3.0 (at engines/migration-engine)");
            assert_eq!(parsed["current-platform"], BinaryTarget::current().to_string());
            assert!(parsed.get("preview-features").is_none());
        }

        #[test]
        fn preview_features_come_from_schema() {
            let (temp, args) = setup();
            fs::create_dir_all(temp.path().join("prisma")).unwrap();
            fs::write(
                temp.path().join("prisma/schema.prisma"),
                "generator client {\n  provider        = \"prisma-client-js\"\n  previewFeatures = [\"metrics\", \"views\"]\n}\n",
            )
            .unwrap();
            let cmd = VersionCommand::new(temp.path(), args);

            let output = cmd.report_with_env(no_env).unwrap();
            assert!(output.ends_with("Preview Features      : metrics, views"));
        }

        #[test]
        fn override_variable_is_reported() {
            let (temp, args) = setup();
            let custom = temp.path().join("custom-qe");
            fs::write(&custom, "#!/bin/sh\necho \"query-engine 3.1.0\"\n").unwrap();
            fs::set_permissions(&custom, fs::Permissions::from_mode(0o755)).unwrap();
            let custom_str = custom.to_string_lossy().to_string();
            let cmd = VersionCommand::new(temp.path(), args);

            let output = cmd
                .report_with_env(move |key: &str| {
                    if key == "PRISMA_QUERY_ENGINE_BINARY" {
                        Ok(custom_str.clone())
                    } else {
                        Err(VarError::NotPresent)
                    }
                })
                .unwrap();

            assert!(output.contains(
                "3.1.0 (at custom-qe, resolved by PRISMA_QUERY_ENGINE_BINARY)"
            ));
        }

        #[test]
        fn bare_relative_override_runs_file_in_cwd() {
            let (temp, args) = setup();
            let custom = temp.path().join("qe");
            fs::write(&custom, "#!/bin/sh\necho \"query-engine 3.2.0\"\n").unwrap();
            fs::set_permissions(&custom, fs::Permissions::from_mode(0o755)).unwrap();
            let cmd = VersionCommand::new(temp.path(), args);

            let output = cmd
                .report_with_env(|key: &str| {
                    if key == "PRISMA_QUERY_ENGINE_BINARY" {
                        Ok("qe".to_string())
                    } else {
                        Err(VarError::NotPresent)
                    }
                })
                .unwrap();

            assert!(output.contains("3.2.0 (at qe, resolved by PRISMA_QUERY_ENGINE_BINARY)"));
        }

        #[test]
        fn execute_prints_report() {
            let (temp, args) = setup();
            let cmd = VersionCommand::new(temp.path(), args);
            let mut ui = MockUI::new();

            let result = cmd.execute(&mut ui).unwrap();

            assert_eq!(result.exit_code, 0);
            assert!(ui.has_message("Studio"));
        }
    }
}
