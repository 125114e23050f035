//! Core library for pelipost: parsing, editing, and writing the `Key: Value`
//! metadata header of Pelican blog posts.

pub mod config;
pub mod frontmatter;
pub mod post;
pub mod templates;
