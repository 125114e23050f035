use pelipost_core::config::types::ResolvedConfig;
use pelipost_core::post::{commit_message, is_recognized_post};
use std::path::Path;

use super::read_post_or_exit;

/// Print the commit message for `file`, using the default template when no
/// configuration is available.
pub fn run(cfg: Option<ResolvedConfig>, file: &Path) {
    let publish = cfg.map(|rc| rc.publish).unwrap_or_default();

    let content = read_post_or_exit(file);
    if !is_recognized_post(&content) {
        eprintln!("Error: {} is not a Pelican post", file.display());
        std::process::exit(1);
    }
    println!("{}", commit_message(&publish.commit_message_template, &content));
}
