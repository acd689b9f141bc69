//! Schema file discovery and generator parsing.
//!
//! Only generator declarations are read from a schema, and only so that
//! their preview features can be shown in the version report:
//! - File discovery and loading in [`loader`]
//! - Block parsing in [`generators`]
//! - Best-effort preview feature lookup in [`features`]

pub mod features;
pub mod generators;
pub mod loader;

pub use features::read_flags;
pub use generators::parse_generators;
pub use loader::{find_schema, load_schema};

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading a schema file.
///
/// These never fail a report; [`read_flags`] turns them into an empty list.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file could not be read.
    #[error("Failed to read schema at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The schema file is malformed.
    #[error("Failed to parse schema at line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// A `generator` block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Generator {
    /// Block name (`client` in `generator client { .. }`).
    pub name: String,
    /// The `provider` value, if declared.
    pub provider: Option<String>,
    /// The `previewFeatures` list, empty when not declared.
    pub preview_features: Vec<String>,
}

/// A loaded schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    /// Where the schema was read from.
    pub path: PathBuf,
    /// Generators in declaration order.
    pub generators: Vec<Generator>,
}

impl SchemaFile {
    /// Preview features of the first generator that declares any.
    pub fn preview_features(&self) -> &[String] {
        self.generators
            .iter()
            .map(|g| g.preview_features.as_slice())
            .find(|features| !features.is_empty())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(name: &str, features: &[&str]) -> Generator {
        Generator {
            name: name.to_string(),
            provider: None,
            preview_features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn first_non_empty_generator_wins() {
        let schema = SchemaFile {
            path: PathBuf::from("schema.prisma"),
            generators: vec![
                generator("docs", &[]),
                generator("client", &["metrics", "tracing"]),
                generator("other", &["views"]),
            ],
        };
        assert_eq!(schema.preview_features(), ["metrics", "tracing"]);
    }

    #[test]
    fn no_generators_means_no_features() {
        let schema = SchemaFile {
            path: PathBuf::from("schema.prisma"),
            generators: vec![],
        };
        assert!(schema.preview_features().is_empty());
    }

    #[test]
    fn read_error_displays_path() {
        let err = SchemaError::Read {
            path: PathBuf::from("/project/schema.prisma"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/project/schema.prisma"));
    }

    #[test]
    fn parse_error_displays_line() {
        let err = SchemaError::Parse {
            line: 7,
            message: "unterminated block".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("unterminated block"));
    }
}
