//! Metadata modification operations.

use super::parser::{parse, parse_header_line};
use super::serializer::serialize;
use super::types::{MetaValue, Metadata};
use thiserror::Error;

/// Errors that can occur when parsing a `key=value` field assignment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldAssignmentError {
    #[error("expected key=value, got '{0}'")]
    MissingEquals(String),
    #[error("invalid field name '{0}': only ASCII letters are allowed")]
    InvalidKey(String),
    #[error("field '{0}' has an empty value")]
    EmptyValue(String),
}

/// Merge `partial` over the header of `content` and re-serialize.
///
/// Keys present in `partial` overwrite, every other field is kept. The body
/// is carried over untouched; the header itself is normalized by the
/// serializer.
pub fn update_fields(content: &str, partial: &Metadata) -> String {
    let doc = parse(content);
    let mut metadata = doc.metadata;
    metadata.merge(partial);
    tracing::debug!(updated = partial.len(), total = metadata.len(), "merged post fields");
    serialize(&metadata, &doc.body)
}

/// Parse a `key=value` assignment with the same rules as a header line.
///
/// The key is lower-cased, the value trimmed and unquoted, and `tags` is split
/// on commas.
pub fn parse_assignment(input: &str) -> Result<(String, MetaValue), FieldAssignmentError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| FieldAssignmentError::MissingEquals(input.to_string()))?;
    let key = key.trim();

    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FieldAssignmentError::InvalidKey(key.to_string()));
    }

    match parse_header_line(&format!("{key}: {value}")) {
        Some((key, Some(value))) => Ok((key, value)),
        Some((key, None)) => Err(FieldAssignmentError::EmptyValue(key)),
        None => Err(FieldAssignmentError::InvalidKey(key.to_string())),
    }
}
