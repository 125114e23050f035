//! List command: posts under the content directory.

use pelipost_core::config::types::ResolvedConfig;
use pelipost_core::post::PostWalker;

use super::output::{print_posts_json, print_posts_quiet, print_posts_table};
use crate::{ListArgs, OutputFormat};

pub fn run(rc: ResolvedConfig, args: ListArgs) {
    let walker = match PostWalker::new(&rc.content_dir) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut posts = match walker.walk() {
        Ok(posts) => posts,
        Err(e) => {
            eprintln!("Error listing posts: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(ref status) = args.status {
        posts.retain(|p| p.status() == status);
    }

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_posts_table(&posts),
        OutputFormat::Json => print_posts_json(&posts),
        OutputFormat::Quiet => print_posts_quiet(&posts),
    }
}

fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}
