//! Report rendering as an aligned table or a JSON object.

use serde_json::{Map, Value};

use super::ReportRow;
use crate::error::Result;

/// Render rows as text or JSON.
pub fn render(rows: &[ReportRow], as_json: bool) -> Result<String> {
    if as_json {
        render_json(rows)
    } else {
        Ok(render_text(rows))
    }
}

/// Render rows as `label : value` lines with labels padded to the widest one.
pub fn render_text(rows: &[ReportRow]) -> String {
    let width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|row| format!("{:<width$} : {}", row.label, row.value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render rows as a JSON object keyed by slugified labels.
///
/// Keys keep row order. A later row whose slug collides with an earlier one
/// overwrites its value.
pub fn render_json(rows: &[ReportRow]) -> Result<String> {
    let mut object = Map::new();
    for row in rows {
        object.insert(slugify(&row.label), Value::String(row.value.clone()));
    }
    Ok(serde_json::to_string_pretty(&Value::Object(object))?)
}

/// Lowercase a label and collapse whitespace runs into single hyphens.
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
