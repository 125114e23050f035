//! Templates for creating new posts.

mod builtin;
pub mod engine;
pub mod repository;

pub use engine::{
    RenderContext, build_context, category_directory, extract_category, new_post_path,
    render, title_to_slug,
};
pub use repository::{PostTemplate, TemplateError, TemplateRepository, TemplateSource};
