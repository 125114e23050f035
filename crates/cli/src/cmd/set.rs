//! Set command: merge field assignments into a post header.

use pelipost_core::frontmatter::{Metadata, parse_assignment};
use pelipost_core::post::update_post_file;
use tracing::debug;

use super::exit_with;
use crate::SetArgs;

pub fn run(args: SetArgs) {
    let mut partial = Metadata::new();
    for field in &args.fields {
        match parse_assignment(field) {
            Ok((key, value)) => {
                debug!("setting {} = {}", key, value);
                partial.insert(key, value);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(2);
            }
        }
    }

    if let Err(e) = update_post_file(&args.file, &partial) {
        exit_with(&e);
    }

    let keys: Vec<&str> = partial.keys().collect();
    println!("Updated {}: {}", args.file.display(), keys.join(", "));
}
