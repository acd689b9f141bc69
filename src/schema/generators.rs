//! Generator block parsing.
//!
//! The parser is line oriented. A block opens with `<keyword> <name> {` on
//! its own line and closes with a line holding only `}`. Inside `generator`
//! blocks the `provider` and `previewFeatures` assignments are read; every
//! other block is skipped.

use std::sync::LazyLock;

use regex::Regex;

use super::{Generator, SchemaError};

static BLOCK_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s+(\w+)\s*\{$").expect("valid block regex"));

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*=\s*(.+)$").expect("valid assignment regex"));

/// Block currently being read.
struct OpenBlock {
    line: usize,
    generator: Option<Generator>,
}

/// A `previewFeatures` array spanning several lines.
struct PendingArray {
    line: usize,
    text: String,
}

/// Parse all generator blocks from schema source.
pub fn parse_generators(source: &str) -> Result<Vec<Generator>, SchemaError> {
    let mut generators = Vec::new();
    let mut open: Option<OpenBlock> = None;
    let mut pending: Option<PendingArray> = None;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw).trim();

        if let Some(mut array) = pending.take() {
            array.text.push_str(line);
            if line.ends_with(']') {
                let features = parse_features(&array.text, array.line)?;
                if let Some(generator) = open.as_mut().and_then(|b| b.generator.as_mut()) {
                    generator.preview_features = features;
                }
            } else {
                pending = Some(array);
            }
            continue;
        }

        if line.is_empty() {
            continue;
        }

        if let Some(caps) = BLOCK_START.captures(line) {
            if let Some(block) = &open {
                return Err(SchemaError::Parse {
                    line: line_no,
                    message: format!("block opened before block at line {} was closed", block.line),
                });
            }
            let generator = (&caps[1] == "generator").then(|| Generator {
                name: caps[2].to_string(),
                ..Default::default()
            });
            open = Some(OpenBlock {
                line: line_no,
                generator,
            });
            continue;
        }

        if line == "}" {
            match open.take() {
                Some(block) => generators.extend(block.generator),
                None => {
                    return Err(SchemaError::Parse {
                        line: line_no,
                        message: "closing brace outside of a block".to_string(),
                    })
                }
            }
            continue;
        }

        let Some(generator) = open.as_mut().and_then(|b| b.generator.as_mut()) else {
            continue;
        };
        let Some(caps) = ASSIGNMENT.captures(line) else {
            continue;
        };
        let value = caps[2].trim();

        match &caps[1] {
            "provider" => generator.provider = Some(parse_string(value)),
            "previewFeatures" => {
                if value.starts_with('[') && !value.ends_with(']') {
                    pending = Some(PendingArray {
                        line: line_no,
                        text: value.to_string(),
                    });
                } else {
                    generator.preview_features = parse_features(value, line_no)?;
                }
            }
            _ => {}
        }
    }

    if let Some(array) = pending {
        return Err(SchemaError::Parse {
            line: array.line,
            message: "unterminated previewFeatures list".to_string(),
        });
    }
    if let Some(block) = open {
        return Err(SchemaError::Parse {
            line: block.line,
            message: "unterminated block".to_string(),
        });
    }

    Ok(generators)
}

fn parse_features(value: &str, line: usize) -> Result<Vec<String>, SchemaError> {
    serde_json::from_str::<Vec<String>>(value).map_err(|e| SchemaError::Parse {
        line,
        message: format!("invalid previewFeatures list: {}", e),
    })
}

/// Quoted values are unquoted; anything else (`env("X")`) is kept verbatim.
fn parse_string(value: &str) -> String {
    serde_json::from_str::<String>(value).unwrap_or_else(|_| value.to_string())
}

/// Remove a trailing `//` comment that is not inside a string literal.
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    let mut escaped = false;
    let mut prev_slash = false;

    for (i, c) in line.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                prev_slash = false;
            }
            '/' if prev_slash => return &line[..i - 1],
            '/' => prev_slash = true,
            _ => prev_slash = false,
        }
    }
    line
}
