pub mod commit_msg;
pub mod doctor;
pub mod list;
pub mod new;
pub mod output;
pub mod set;
pub mod show;
pub mod status;
pub mod templates;

use pelipost_core::config::loader::ConfigError;
use pelipost_core::config::types::ResolvedConfig;
use pelipost_core::post::{PostStoreError, read_post};
use std::path::Path;

/// The loaded configuration, or exit with status 1.
pub(crate) fn require_config(loaded: Result<ResolvedConfig, ConfigError>) -> ResolvedConfig {
    match loaded {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    }
}

/// Read a post file or exit with status 1.
pub(crate) fn read_post_or_exit(path: &Path) -> String {
    read_post(path).unwrap_or_else(|e| exit_with(&e))
}

pub(crate) fn exit_with(e: &PostStoreError) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}
