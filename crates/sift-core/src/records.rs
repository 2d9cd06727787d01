//! Record loading. Parses a record collection from JSON or JSON Lines.
//!
//! This is the only part of sift-core that reads from disk. The search
//! stages take the resulting `Vec<Value>` by reference.

use crate::error::{Result, SiftError};
use serde_json::Value;
use std::path::Path;

/// Parse a JSON document whose top level is an array of records.
pub fn from_json_str(src: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(src)? {
        Value::Array(items) => Ok(items),
        other => Err(SiftError::NotACollection(crate::value::kind(&other))),
    }
}

/// Parse one record per non-blank line.
pub fn from_jsonl_str(src: &str) -> Result<Vec<Value>> {
    src.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|source| SiftError::JsonLine { line: i + 1, source })
        })
        .collect()
}

/// Load records from `path`. Files ending in `.jsonl` or `.ndjson` are read
/// as JSON Lines, anything else as a JSON array.
pub fn load_path(path: &Path) -> Result<Vec<Value>> {
    let src = std::fs::read_to_string(path).map_err(|source| SiftError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = match path.extension().and_then(|e| e.to_str()) {
        Some("jsonl") | Some("ndjson") => from_jsonl_str(&src)?,
        _ => from_json_str(&src)?,
    };
    tracing::debug!(path = %path.display(), count = records.len(), "records: loaded");
    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
