//! Shared output formatting for post listings.

use pelipost_core::frontmatter::Metadata;
use pelipost_core::post::PostEntry;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

/// Formatted post for JSON output.
#[derive(Debug, Serialize)]
pub struct PostOutput<'a> {
    pub path: String,
    pub title: String,
    pub status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'a str>,
    pub metadata: &'a Metadata,
}

impl<'a> From<&'a PostEntry> for PostOutput<'a> {
    fn from(post: &'a PostEntry) -> Self {
        Self {
            path: post.relative_path.to_string_lossy().to_string(),
            title: post.title(),
            status: post.status(),
            date: post.metadata.date(),
            metadata: &post.metadata,
        }
    }
}

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Date")]
    date: String,
}

pub fn print_posts_table(posts: &[PostEntry]) {
    if posts.is_empty() {
        println!("(no posts found)");
        return;
    }

    let rows: Vec<PostRow> = posts
        .iter()
        .map(|p| PostRow {
            path: p.relative_path.display().to_string(),
            title: truncate(&p.title(), 40),
            status: p.status().to_string(),
            date: p.metadata.date().unwrap_or("-").to_string(),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::rounded()));
    println!("-- {} posts --", posts.len());
}

pub fn print_posts_json(posts: &[PostEntry]) {
    let output: Vec<PostOutput<'_>> = posts.iter().map(PostOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

pub fn print_posts_quiet(posts: &[PostEntry]) {
    for post in posts {
        println!("{}", post.absolute_path.display());
    }
}

/// Truncate string with ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_strings_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_long_strings() {
        assert_eq!(truncate("a very long post title", 10), "a very ...");
    }
}
