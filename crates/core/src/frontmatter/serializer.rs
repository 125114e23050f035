//! Metadata serialization back to post text.

use super::types::{MetaValue, Metadata, ParsedDocument};

/// Render metadata and body back into post text.
///
/// Keys are written with their first character upper-cased, one per line, in
/// insertion order, followed by a single blank line and the body verbatim.
/// Original key casing and quoting are not preserved.
pub fn serialize(metadata: &Metadata, body: &str) -> String {
    let lines: Vec<String> = metadata
        .iter()
        .map(|(key, value)| format!("{}: {}", format_key(key), format_value(value)))
        .collect();

    format!("{}\n\n{}", lines.join("\n"), body)
}

/// Serialize a parsed document.
pub fn serialize_document(doc: &ParsedDocument) -> String {
    serialize(&doc.metadata, &doc.body)
}

/// Upper-case only the first character: `title` -> `Title`.
pub fn format_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lists are comma-joined; scalars containing a space or colon are double-quoted.
pub fn format_value(value: &MetaValue) -> String {
    match value {
        MetaValue::List(items) => items.join(", "),
        MetaValue::Scalar(s) if s.contains(' ') || s.contains(':') => format!("\"{s}\""),
        MetaValue::Scalar(s) => s.clone(),
    }
}
