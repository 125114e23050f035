use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use super::builtin::BUILTIN_TEMPLATES;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(String),

    #[error("failed to read templates directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where a template came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct PostTemplate {
    pub name: String,
    pub description: String,
    pub content: String,
    pub source: TemplateSource,
}

/// Built-in templates plus any `*.md` files found in a templates directory.
pub struct TemplateRepository {
    templates: Vec<PostTemplate>,
}

impl TemplateRepository {
    /// Load built-ins and, when `templates_dir` exists, the user templates in it.
    ///
    /// User templates are named after their file stem and listed after the
    /// built-ins, sorted by path.
    pub fn new(templates_dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut templates: Vec<PostTemplate> = BUILTIN_TEMPLATES
            .iter()
            .map(|(name, description, content)| PostTemplate {
                name: (*name).to_string(),
                description: (*description).to_string(),
                content: (*content).to_string(),
                source: TemplateSource::Builtin,
            })
            .collect();

        if let Some(dir) = templates_dir
            && dir.is_dir()
        {
            templates.extend(discover_templates(dir)?);
        }

        Ok(Self { templates })
    }

    pub fn list_all(&self) -> &[PostTemplate] {
        &self.templates
    }

    /// Exact name match first, then a case-insensitive one.
    pub fn get_by_name(&self, name: &str) -> Result<&PostTemplate, TemplateError> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .or_else(|| self.templates.iter().find(|t| t.name.eq_ignore_ascii_case(name)))
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }
}

fn discover_templates(root: &Path) -> Result<Vec<PostTemplate>, TemplateError> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry
            .map_err(|e| TemplateError::WalkError(root.display().to_string(), e))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let content = fs::read_to_string(path)
            .map_err(|e| TemplateError::Io { path: path.to_path_buf(), source: e })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let rel = path.strip_prefix(root).unwrap_or(path);

        found.push(PostTemplate {
            name,
            description: format!("Custom template ({})", rel.display()),
            content,
            source: TemplateSource::File(path.to_path_buf()),
        });
    }

    Ok(found)
}
