//! Metadata header parsing.
//!
//! A post starts with a run of `Key: Value` lines, terminated by the first
//! blank line:
//! ```text
//! Title: "My Post"
//! Date: 2025-07-16
//! Tags: rust, pelican
//!
//! # Body starts here
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::types::{MetaValue, Metadata, ParsedDocument};

static HEADER_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+):\s*(.*)$").unwrap());

/// The only field split into a list.
const LIST_FIELD: &str = "tags";

/// Split a post into its metadata header and body.
///
/// Never fails. Text whose first non-blank line is not a header line has no
/// metadata and the whole text as body. Once a key has been captured, lines
/// that do not match the header grammar are skipped rather than ending the
/// header. Without a terminating blank line the body is empty.
pub fn parse(content: &str) -> ParsedDocument {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut metadata = Metadata::new();
    let mut body_start = None;

    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            body_start = Some(i + 1);
            break;
        }

        match parse_header_line(line) {
            Some((key, value)) => {
                if let Some(value) = value {
                    metadata.insert(key, value);
                }
            }
            None if metadata.is_empty() => {
                // Not a post header at all
                return ParsedDocument { metadata, body: content.to_string() };
            }
            None => {}
        }
    }

    let body = match body_start {
        Some(start) => lines[start..].join("\n"),
        None => String::new(),
    };

    tracing::debug!(fields = metadata.len(), body_len = body.len(), "parsed post header");
    ParsedDocument { metadata, body }
}

/// Match a single header line.
///
/// Returns `None` if the line is not a header line, and `Some((key, None))` for
/// a header line whose value is empty once trimmed and unquoted.
pub(crate) fn parse_header_line(line: &str) -> Option<(String, Option<MetaValue>)> {
    let caps = HEADER_LINE_RE.captures(line)?;
    let key = caps[1].to_lowercase();
    let value = unquote(caps[2].trim());

    if value.is_empty() {
        return Some((key, None));
    }

    let value = if key == LIST_FIELD {
        MetaValue::List(value.split(',').map(|s| s.trim().to_string()).collect())
    } else {
        MetaValue::Scalar(value.to_string())
    };
    Some((key, Some(value)))
}

/// Strip one matching pair of outer quotes.
///
/// A lone quote character counts as both the opening and the closing quote.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return if value.len() == 1 { "" } else { &value[1..value.len() - 1] };
        }
    }
    value
}
