//! Bucket name files.
//!
//! Accepted layouts, tried in order:
//! 1. JSON array of strings: `["a", "b"]`
//! 2. JSON array of objects with a `name` field: `[{"name": "a"}]`
//!    (the `s3 list --output json` format)
//! 3. Plain text, one bucket per line; blank lines are skipped
//!
//! Content that opens with `[` or `{` is JSON or nothing: it never falls
//! through to the plain-text layout.

use crate::error::{StorageToolError, StorageToolResult};
use crate::types::Bucket;
use log::debug;
use std::path::Path;

type ParseAttempt = fn(&str) -> Option<Vec<String>>;

const PARSE_ATTEMPTS: &[(&str, ParseAttempt)] = &[
    ("JSON array of strings", parse_json_strings),
    ("JSON array of bucket objects", parse_json_objects),
    ("plain text", parse_plain_text),
];

fn parse_json_strings(content: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(content).ok()
}

fn parse_json_objects(content: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<Bucket>>(content)
        .ok()
        .map(|buckets| buckets.into_iter().map(|b| b.name).collect())
}

fn looks_like_json(content: &str) -> bool {
    content.trim_start().starts_with(['[', '{'])
}

fn parse_plain_text(content: &str) -> Option<Vec<String>> {
    if looks_like_json(content) {
        return None;
    }
    Some(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Parse bucket names from file content using the first layout that accepts it.
pub fn parse_bucket_names(content: &str) -> StorageToolResult<Vec<String>> {
    let (layout, names) = PARSE_ATTEMPTS
        .iter()
        .find_map(|(layout, attempt)| attempt(content).map(|names| (*layout, names)))
        .ok_or_else(|| {
            StorageToolError::invalid_input(
                "malformed JSON bucket file: expected an array of strings or of {\"name\": ...} objects",
            )
        })?;

    debug!("Parsed {} bucket names as {}", names.len(), layout);

    if names.is_empty() {
        return Err(StorageToolError::invalid_input(
            "bucket file contains no bucket names",
        ));
    }
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(StorageToolError::invalid_input(
            "bucket file contains an empty bucket name",
        ));
    }
    Ok(names)
}

/// Read and parse a bucket file.
pub fn load_bucket_file(path: &Path) -> StorageToolResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        StorageToolError::invalid_input(format!(
            "failed to read bucket file '{}': {e}",
            path.display()
        ))
    })?;

    parse_bucket_names(&content).map_err(|e| match e {
        StorageToolError::InvalidInput { message } => StorageToolError::invalid_input(format!(
            "{message} in '{}'",
            path.display()
        )),
        other => other,
    })
}
