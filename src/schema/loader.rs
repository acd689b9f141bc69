//! Schema file discovery and loading.
//!
//! Lookup order for the schema:
//! 1. An explicit `--schema` path (returned even if it does not exist)
//! 2. The `prisma.schema` entry of `package.json` in the working directory
//! 3. `schema.prisma` in the working directory
//! 4. `prisma/schema.prisma` in the working directory

use std::fs;
use std::path::{Path, PathBuf};

use super::generators::parse_generators;
use super::{SchemaError, SchemaFile};

/// Default schema locations relative to the working directory.
const DEFAULT_LOCATIONS: &[&str] = &["schema.prisma", "prisma/schema.prisma"];

/// Find the schema file for the working directory.
pub fn find_schema(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        return Some(path);
    }

    if let Some(path) = schema_from_package_json(cwd) {
        return Some(path);
    }

    DEFAULT_LOCATIONS
        .iter()
        .map(|loc| cwd.join(loc))
        .find(|p| p.is_file())
}

/// Read the `prisma.schema` entry of `package.json`, if it names an existing file.
fn schema_from_package_json(cwd: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(cwd.join("package.json")).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;
    let relative = manifest["prisma"]["schema"].as_str()?;
    let path = cwd.join(relative);
    path.is_file().then_some(path)
}

/// Load and parse a schema file.
///
/// # Errors
///
/// Returns `SchemaError::Read` if the file cannot be read.
/// Returns `SchemaError::Parse` if a block is malformed.
pub fn load_schema(path: &Path) -> Result<SchemaFile, SchemaError> {
    let content = fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(SchemaFile {
        path: path.to_path_buf(),
        generators: parse_generators(&content)?,
    })
}
