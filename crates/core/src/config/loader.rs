use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use dirs::home_dir;
use std::path::{Path, PathBuf};
use std::{env, fs};
use thiserror::Error;

/// Placeholder for the profile's site root inside other path settings.
const SITE_ROOT_VAR: &str = "{{site_root}}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("cannot expand '{0}': home directory or variable not available")]
    NoHome(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config at `config_path` (or the default location) and
    /// resolve the selected profile.
    ///
    /// Profile precedence: `profile_override`, then the file's `profile`
    /// key, then `"default"`.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = config_path.map_or_else(default_config_path, Path::to_path_buf);
        let file = read_config_file(&path)?;

        let active = profile_override
            .or(file.profile.as_deref())
            .unwrap_or("default")
            .to_string();
        let profile = file
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        let resolved = resolve(active, profile, &file)?;
        tracing::debug!(
            profile = %resolved.active_profile,
            content_dir = %resolved.content_dir.display(),
            "loaded config from {}",
            path.display()
        );
        Ok(resolved)
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let shown = || path.display().to_string();
    if !path.exists() {
        return Err(ConfigError::NotFound(shown()));
    }

    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError(shown(), e))?;
    let file: ConfigFile =
        toml::from_str(&text).map_err(|e| ConfigError::ParseError(shown(), e))?;

    if file.version != 1 {
        return Err(ConfigError::BadVersion(file.version));
    }
    if file.profiles.is_empty() {
        return Err(ConfigError::NoProfiles);
    }
    Ok(file)
}

fn resolve(
    active: String,
    profile: &Profile,
    file: &ConfigFile,
) -> Result<ResolvedConfig, ConfigError> {
    let site_root = expand_path(&profile.site_root)?;
    let in_site = |raw: &str| expand_path(&substitute_site_root(raw, &site_root));

    let content_dir = in_site(&profile.content_dir)?;
    let templates_dir = profile.templates_dir.as_deref().map(&in_site).transpose()?;
    let log_file = file
        .logging
        .file
        .as_deref()
        .map(|f| in_site(&f.to_string_lossy()))
        .transpose()?;

    Ok(ResolvedConfig {
        active_profile: active,
        site_root,
        content_dir,
        templates_dir,
        publish: file.publish.clone(),
        logging: LoggingConfig { file: log_file, ..file.logging.clone() },
    })
}

fn substitute_site_root(raw: &str, site_root: &Path) -> String {
    raw.replace(SITE_ROOT_VAR, &site_root.to_string_lossy())
}

/// `$XDG_CONFIG_HOME/pelipost/config.toml`, else `~/.config/pelipost/config.toml`.
pub fn default_config_path() -> PathBuf {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".config"),
    };
    base.join("pelipost").join("config.toml")
}

/// Expand `~` and environment variables.
fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    shellexpand::full(input)
        .map(|expanded| PathBuf::from(expanded.into_owned()))
        .map_err(|_| ConfigError::NoHome(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_root_is_substituted_everywhere() {
        let root = Path::new("/srv/blog");
        assert_eq!(substitute_site_root("{{site_root}}/content", root), "/srv/blog/content");
        assert_eq!(
            substitute_site_root("{{site_root}}/a/{{site_root}}", root),
            "/srv/blog/a//srv/blog"
        );
        assert_eq!(substitute_site_root("/elsewhere", root), "/elsewhere");
    }

    #[test]
    fn expand_plain_path_is_unchanged() {
        assert_eq!(expand_path("/tmp/blog").unwrap(), PathBuf::from("/tmp/blog"));
    }

    #[test]
    fn expand_unknown_variable_fails() {
        let err = expand_path("$PELIPOST_SURELY_UNSET_VAR/blog").unwrap_err();
        assert!(matches!(err, ConfigError::NoHome(ref s) if s.contains("PELIPOST")));
    }
}
