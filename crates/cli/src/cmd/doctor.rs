use pelipost_core::config::loader::{ConfigError, default_config_path};
use pelipost_core::config::types::ResolvedConfig;
use std::path::Path;

/// Report the loaded configuration. `config` is the `--config` path, if given.
pub fn run(config: Option<&Path>, loaded: Result<ResolvedConfig, ConfigError>) {
    match loaded {
        Ok(rc) => {
            println!("OK   pelipost doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("site_root: {}", rc.site_root.display());
            println!("content_dir: {}", rc.content_dir.display());
            match rc.templates_dir {
                Some(ref dir) => println!("templates_dir: {}", dir.display()),
                None => println!("templates_dir: (built-in templates only)"),
            }
            if !rc.content_dir.is_dir() {
                println!("warning: content_dir does not exist yet");
            }
            println!("publish.commit_message_template: {}", rc.publish.commit_message_template);
            println!(
                "publish.configured: {}",
                if rc.publish.is_configured() { "yes" } else { "no" }
            );
        }
        Err(e) => {
            println!("FAIL pelipost doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
