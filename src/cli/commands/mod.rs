//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running the binary without a
//! subcommand produces the version report.

pub mod completions;
pub mod dispatcher;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
