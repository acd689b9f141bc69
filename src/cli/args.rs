//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Report the versions of the installed engines.
#[derive(Debug, Parser)]
#[command(name = "engine-report")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Report options when no subcommand is given
    #[command(flatten)]
    pub report: VersionArgs,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show engine versions (default if no command specified)
    Version(VersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to the schema file (defaults to ./schema.prisma or ./prisma/schema.prisma)
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Directory holding the bundled engines (defaults to engines/ next to the executable)
    #[arg(long, value_name = "DIR", env = "ENGINE_REPORT_ENGINES_DIR")]
    pub engines_dir: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
