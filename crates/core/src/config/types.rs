use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub publish: PublishConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub site_root: String,
    /// Directory holding the posts (supports `{{site_root}}`).
    pub content_dir: String,
    /// Optional directory of extra `*.md` post templates.
    pub templates_dir: Option<String>,
}

/// Settings for publishing a post: the commit message and the CI workflow.
#[derive(Debug, Deserialize, Clone)]
pub struct PublishConfig {
    #[serde(default = "default_commit_message_template")]
    pub commit_message_template: String,
    #[serde(default)]
    pub github_token: Option<String>,
    #[serde(default)]
    pub github_owner: Option<String>,
    #[serde(default)]
    pub github_repo: Option<String>,
    #[serde(default)]
    pub workflow_id: Option<String>,
}

impl PublishConfig {
    /// True when every setting needed to trigger the CI workflow is present.
    pub fn is_configured(&self) -> bool {
        [&self.github_token, &self.github_owner, &self.github_repo, &self.workflow_id]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            commit_message_template: default_commit_message_template(),
            github_token: None,
            github_owner: None,
            github_repo: None,
            workflow_id: None,
        }
    }
}

fn default_commit_message_template() -> String {
    "add blog post: {title}".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub site_root: PathBuf,
    pub content_dir: PathBuf,
    pub templates_dir: Option<PathBuf>,
    pub publish: PublishConfig,
    pub logging: LoggingConfig,
}
