//! Post metadata parsing, modification, and serialization.
//!
//! This module provides functionality to:
//! - Parse the `Key: Value` header block at the top of a post
//! - Merge field updates into an existing header
//! - Serialize metadata and body back into post text

pub mod modifier;
pub mod parser;
pub mod serializer;
pub mod types;

pub use modifier::{FieldAssignmentError, parse_assignment, update_fields};
pub use parser::parse;
pub use serializer::{format_key, format_value, serialize, serialize_document};
pub use types::{MetaValue, Metadata, ParsedDocument};
