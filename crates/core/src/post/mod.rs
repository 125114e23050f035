//! Post-level operations built on the metadata parser and serializer.
//!
//! Everything here works on in-memory text. Reading and writing files is left
//! to [`store`], which is also where the read-modify-write race between two
//! concurrent writers lives: the last writer wins.

pub mod store;
pub mod walker;

use std::fmt;
use std::str::FromStr;

use crate::frontmatter::{Metadata, parse, update_fields};

pub use store::{
    PostStoreError, is_post_file, post_file_status, read_post, toggle_post_file,
    update_post_file, write_post,
};
pub use walker::{PostEntry, PostWalker, PostWalkerError};

/// Status reported for posts without a `Status:` field.
pub const DEFAULT_STATUS: &str = "draft";

/// The two publication states a post is toggled between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }

    /// Status after a toggle from `current`: only `draft` becomes `published`.
    pub fn toggled_from(current: &str) -> Self {
        if current == PostStatus::Draft.as_str() {
            PostStatus::Published
        } else {
            PostStatus::Draft
        }
    }

    pub fn toggled(self) -> Self {
        Self::toggled_from(self.as_str())
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            other => {
                Err(format!("unknown post status '{other}' (expected draft or published)"))
            }
        }
    }
}

/// Result of [`toggle_draft_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggledStatus {
    pub new_text: String,
    pub new_status: PostStatus,
}

/// The post's `status` field, or [`DEFAULT_STATUS`] when absent.
///
/// Any value is returned as-is; there is no check that it is a known status.
pub fn get_status(content: &str) -> String {
    parse(content)
        .metadata
        .get("status")
        .map_or_else(|| DEFAULT_STATUS.to_string(), ToString::to_string)
}

/// Flip `draft` to `published` and anything else to `draft`.
pub fn toggle_draft_status(content: &str) -> ToggledStatus {
    let current = get_status(content);
    let new_status = PostStatus::toggled_from(&current);

    let mut partial = Metadata::new();
    partial.insert("status", new_status.as_str());

    tracing::debug!(from = %current, to = %new_status, "toggled post status");
    ToggledStatus { new_text: update_fields(content, &partial), new_status }
}

/// Whether the text has at least one header field.
///
/// A heuristic: prose whose first line happens to look like `Word: text` is
/// classified as a post.
pub fn is_recognized_post(content: &str) -> bool {
    !parse(content).metadata.is_empty()
}

/// Title used in commit messages for posts without one.
pub const UNTITLED_POST: &str = "Untitled Post";

/// Render a commit message template, replacing the first `{title}` with the
/// post title.
pub fn commit_message(template: &str, content: &str) -> String {
    let doc = parse(content);
    let title = doc.metadata.title().filter(|t| !t.is_empty()).unwrap_or(UNTITLED_POST);
    template.replacen("{title}", title, 1)
}
