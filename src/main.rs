//! engine-report CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use engine_report::cli::{Cli, CommandDispatcher, CommandResult};
use engine_report::ui::{create_ui, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so the report on stdout stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("engine_report=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("engine_report=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolve the working directory and run the requested command.
fn run(cli: &Cli, ui: &mut dyn UserInterface) -> engine_report::Result<CommandResult> {
    let cwd = std::env::current_dir().context("cannot read current directory")?;
    let dispatcher = CommandDispatcher::new(cwd);
    dispatcher.dispatch(cli, ui)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("engine-report starting with args: {:?}", cli);

    let mut ui = create_ui(cli.no_color);

    match run(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("{:#}", e));
            ExitCode::from(1)
        }
    }
}
