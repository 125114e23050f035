//! Reading and writing post files.
//!
//! Updates are a read, parse, merge, serialize, write cycle with no locking,
//! so two concurrent updates to one file lose one of the edits. Writes go
//! through a temporary sibling file and a rename, so a reader never sees a
//! half-written post.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{PostStatus, get_status, is_recognized_post, toggle_draft_status};
use crate::frontmatter::{Metadata, update_fields};

#[derive(Debug, Error)]
pub enum PostStoreError {
    #[error("failed to read post {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write post {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a Pelican post")]
    NotAPost { path: PathBuf },
}

pub fn read_post(path: &Path) -> Result<String, PostStoreError> {
    fs::read_to_string(path)
        .map_err(|e| PostStoreError::Read { path: path.to_path_buf(), source: e })
}

/// Replace the contents of `path` with `content`.
///
/// The temporary file is synced before the rename, so the target holds
/// either the old or the complete new text.
pub fn write_post(path: &Path, content: &str) -> Result<(), PostStoreError> {
    let write_err = |e| PostStoreError::Write { path: path.to_path_buf(), source: e };

    let tmp = temp_sibling(path);
    if let Err(e) = write_synced(&tmp, content).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote post");
    Ok(())
}

/// Merge `partial` into the header of the post at `path`.
pub fn update_post_file(path: &Path, partial: &Metadata) -> Result<(), PostStoreError> {
    let content = read_post(path)?;
    write_post(path, &update_fields(&content, partial))
}

/// Toggle the draft status of the post at `path`, returning the new status.
///
/// A file without a metadata header is left untouched.
pub fn toggle_post_file(path: &Path) -> Result<PostStatus, PostStoreError> {
    let content = read_post(path)?;
    if !is_recognized_post(&content) {
        return Err(PostStoreError::NotAPost { path: path.to_path_buf() });
    }
    let toggled = toggle_draft_status(&content);
    write_post(path, &toggled.new_text)?;
    Ok(toggled.new_status)
}

pub fn post_file_status(path: &Path) -> Result<String, PostStoreError> {
    Ok(get_status(&read_post(path)?))
}

/// Whether `path` holds a post. Unreadable or missing files are not posts.
pub fn is_post_file(path: &Path) -> bool {
    read_post(path).is_ok_and(|content| is_recognized_post(&content))
}

fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
