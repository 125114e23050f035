//! Recursive post discovery under a content directory.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::frontmatter::{Metadata, parse};

use super::DEFAULT_STATUS;

#[derive(Debug, Error)]
pub enum PostWalkerError {
    #[error("content directory does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk content directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// A markdown file with a recognized metadata header.
#[derive(Debug, Clone)]
pub struct PostEntry {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to the content directory.
    pub relative_path: PathBuf,
    pub metadata: Metadata,
}

impl PostEntry {
    pub fn status(&self) -> &str {
        self.metadata.status().unwrap_or(DEFAULT_STATUS)
    }

    /// Title from the header, falling back to the file stem.
    pub fn title(&self) -> String {
        match self.metadata.title() {
            Some(title) => title.to_string(),
            None => self
                .relative_path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Walker for discovering posts in a content directory.
#[derive(Debug)]
pub struct PostWalker {
    root: PathBuf,
}

impl PostWalker {
    pub fn new(root: &Path) -> Result<Self, PostWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| PostWalkerError::MissingRoot(root.display().to_string()))?;
        Ok(Self { root })
    }

    /// Walk the content directory and return every recognized post.
    ///
    /// Hidden entries are skipped. Files that cannot be read, or that have no
    /// metadata header, are left out.
    pub fn walk(&self) -> Result<Vec<PostEntry>, PostWalkerError> {
        let mut posts = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry.map_err(|e| {
                PostWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let content = match std::fs::read_to_string(path) {
                Ok(c) => c,
                Err(e) => {
                    tracing::warn!("Skipping unreadable post {}: {}", path.display(), e);
                    continue;
                }
            };

            let doc = parse(&content);
            if doc.metadata.is_empty() {
                continue;
            }

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
            posts.push(PostEntry {
                absolute_path: path.to_path_buf(),
                relative_path,
                metadata: doc.metadata,
            });
        }

        posts.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(posts)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
