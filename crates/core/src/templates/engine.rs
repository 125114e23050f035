use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

pub type RenderContext = HashMap<String, String>;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Category: ([A-Za-z0-9_]+)").unwrap());

/// Category used when a template names none.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Build the context for rendering a new post.
///
/// Provides `title`, `slug`, `date` (`YYYY-MM-DD`), `description` (the
/// lower-cased title) and `product` (the title).
pub fn build_context(title: &str, slug: &str, date: NaiveDate) -> RenderContext {
    let mut ctx = RenderContext::new();
    ctx.insert("title".into(), title.to_string());
    ctx.insert("slug".into(), slug.to_string());
    ctx.insert("date".into(), date.format("%Y-%m-%d").to_string());
    ctx.insert("description".into(), title.to_lowercase());
    ctx.insert("product".into(), title.to_string());
    ctx
}

/// Replace `{name}` placeholders found in `ctx`. Unknown placeholders are kept.
pub fn render(template: &str, ctx: &RenderContext) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            ctx.get(&caps[1]).cloned().unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Turn a title into a URL slug: `"Hello, World!"` -> `"hello-world"`.
pub fn title_to_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_SLUG_RE.replace_all(&lowered, "-").trim_matches('-').to_string()
}

/// The first `Category: Name` in a template, or [`DEFAULT_CATEGORY`].
pub fn extract_category(content: &str) -> &str {
    CATEGORY_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or(DEFAULT_CATEGORY, |m| m.as_str())
}

/// Content subdirectory for a category.
pub fn category_directory(category: &str) -> &'static str {
    match category {
        "Articles" => "articles",
        "Notes" => "notes",
        "Books" => "books",
        _ => "other",
    }
}

/// `<content_dir>/<category dir>/<slug>.md` for a post made from `template`.
pub fn new_post_path(content_dir: &Path, template: &str, slug: &str) -> PathBuf {
    content_dir
        .join(category_directory(extract_category(template)))
        .join(format!("{slug}.md"))
}
