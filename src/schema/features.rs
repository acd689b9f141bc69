//! Best-effort preview feature lookup.

use std::path::Path;

use super::loader::load_schema;
use super::SchemaError;

/// Preview features declared by the schema at `schema_path`.
///
/// Returns the list of the first generator that declares a non-empty one.
/// A missing path, an unreadable file, or a malformed schema all yield an
/// empty list.
pub fn read_flags(schema_path: Option<&Path>) -> Vec<String> {
    let Some(path) = schema_path else {
        return Vec::new();
    };

    match load_schema(path) {
        Ok(schema) => schema.preview_features().to_vec(),
        Err(e @ SchemaError::Read { .. }) | Err(e @ SchemaError::Parse { .. }) => {
            tracing::debug!("Ignoring schema for preview features: {}", e);
            Vec::new()
        }
    }
}
