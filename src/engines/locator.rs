//! Binary location for engine roles.
//!
//! Every role can be pointed at a custom binary through its override
//! variable. When the variable is unset, empty, or names a path that does
//! not exist, the role falls back to the bundled binary found by a
//! [`DefaultResolver`].
//!
//! # Example
//!
//! ```no_run
//! use engine_report::engines::{BinaryLocator, BinaryTarget, BundledResolver, EngineRole};
//!
//! let resolver = BundledResolver::new("/opt/engines", BinaryTarget::current());
//! let locator = BinaryLocator::new(&resolver);
//! let located = locator.locate(EngineRole::QueryEngine).unwrap();
//! println!("{}", located.path.display());
//! ```

use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::engines::platform::BinaryTarget;
use crate::engines::role::EngineRole;
use crate::error::{ReportError, Result};

/// Where the binary for a role lives, and whether an override chose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedBinary {
    /// Path of the binary that services the role.
    pub path: PathBuf,
    /// Variable that selected the path, if it was overridden.
    pub override_variable: Option<&'static str>,
}

/// Finds the bundled binary for a role when no override applies.
pub trait DefaultResolver {
    /// Resolve the default path for a role.
    fn resolve(&self, role: EngineRole) -> Result<PathBuf>;
}

/// Resolves binaries shipped in an engines directory.
///
/// Platform-suffixed names (`query-engine-linux-x86_64`) are preferred over
/// plain names (`query-engine`).
#[derive(Debug, Clone)]
pub struct BundledResolver {
    engines_dir: PathBuf,
    target: BinaryTarget,
}

impl BundledResolver {
    /// Create a resolver for the given engines directory and target.
    pub fn new(engines_dir: impl Into<PathBuf>, target: BinaryTarget) -> Self {
        Self {
            engines_dir: engines_dir.into(),
            target,
        }
    }

    /// Default engines directory: `engines/` next to the running executable.
    pub fn default_engines_dir() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(dir.join("engines"))
    }

    /// The engines directory searched by this resolver.
    pub fn engines_dir(&self) -> &Path {
        &self.engines_dir
    }

    /// Candidate paths for a role, in search order.
    pub fn candidates(&self, role: EngineRole) -> Vec<PathBuf> {
        let ext = if self.target.is_windows() { ".exe" } else { "" };
        let name = role.binary_name();
        vec![
            self.engines_dir
                .join(format!("{}-{}{}", name, self.target, ext)),
            self.engines_dir.join(format!("{}{}", name, ext)),
        ]
    }
}

impl DefaultResolver for BundledResolver {
    fn resolve(&self, role: EngineRole) -> Result<PathBuf> {
        let candidates = self.candidates(role);
        if let Some(found) = candidates.iter().find(|p| p.is_file()) {
            return Ok(found.clone());
        }
        Err(ReportError::EngineNotFound {
            engine: role.label().to_string(),
            searched: candidates,
        })
    }
}

/// Locate a role's binary, checking its override variable before the default.
///
/// The override wins whenever the variable is set and its path exists; no
/// version or compatibility check is made. A relative override is taken
/// relative to `base_dir`, so the path checked here is the path later run.
/// Default resolver errors propagate.
pub fn locate_with_env<R, F>(
    role: EngineRole,
    resolver: &R,
    base_dir: &Path,
    env_fn: &F,
) -> Result<LocatedBinary>
where
    R: DefaultResolver + ?Sized,
    F: Fn(&str) -> std::result::Result<String, VarError> + ?Sized,
{
    let var = role.override_variable();

    // 1. Check env var first
    if let Ok(val) = env_fn(var) {
        if !val.is_empty() {
            let path = base_dir.join(&val);
            if path.exists() {
                tracing::debug!("{} resolved by {} to {}", role, var, path.display());
                return Ok(LocatedBinary {
                    path,
                    override_variable: Some(var),
                });
            }
            tracing::debug!("{} is set to missing path {}, ignoring", var, val);
        }
    }

    // 2. Fall back to the bundled binary
    let path = resolver.resolve(role)?;
    tracing::debug!("{} resolved to bundled {}", role, path.display());
    Ok(LocatedBinary {
        path,
        override_variable: None,
    })
}

/// Type of the environment lookup used by [`BinaryLocator`].
pub type EnvLookup<'a> = dyn Fn(&str) -> std::result::Result<String, VarError> + 'a;

/// Locates binaries for roles using a default resolver and an env lookup.
pub struct BinaryLocator<'a> {
    resolver: &'a dyn DefaultResolver,
    base_dir: PathBuf,
    env_fn: Box<EnvLookup<'a>>,
}

impl<'a> BinaryLocator<'a> {
    /// Create a locator that reads the process environment.
    pub fn new(resolver: &'a dyn DefaultResolver) -> Self {
        Self::with_env(resolver, |key: &str| std::env::var(key))
    }

    /// Create a locator with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn with_env<F>(resolver: &'a dyn DefaultResolver, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError> + 'a,
    {
        Self {
            resolver,
            base_dir: PathBuf::from("."),
            env_fn: Box::new(env_fn),
        }
    }

    /// Resolve relative overrides against `dir` instead of `.`.
    pub fn relative_to(mut self, dir: &Path) -> Self {
        self.base_dir = dir.to_path_buf();
        self
    }

    /// Locate the binary servicing a role.
    pub fn locate(&self, role: EngineRole) -> Result<LocatedBinary> {
        locate_with_env(role, self.resolver, &self.base_dir, &*self.env_fn)
    }
}
