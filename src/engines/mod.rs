//! Engine binaries: roles, location and version probing.
//!
//! - [`role`] - The closed set of engine roles and their override variables
//! - [`platform`] - Binary target detection
//! - [`locator`] - Override-then-default binary location
//! - [`probe`] - `--version` probing

pub mod locator;
pub mod platform;
pub mod probe;
pub mod role;

pub use locator::{
    locate_with_env, BinaryLocator, BundledResolver, DefaultResolver, EnvLookup, LocatedBinary,
};
pub use platform::BinaryTarget;
pub use probe::{parse_version_output, CommandProbe, VersionProbe};
pub use role::EngineRole;

use std::path::PathBuf;

/// A located and probed engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    /// Path of the binary that was probed.
    pub path: PathBuf,
    /// Version reported by the binary.
    pub version: String,
    /// Variable that selected the path, if it was overridden.
    pub override_variable: Option<&'static str>,
}
