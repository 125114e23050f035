//! New command: render a template into a fresh post file.

use chrono::Local;
use pelipost_core::config::types::ResolvedConfig;
use pelipost_core::post::write_post;
use pelipost_core::templates::{
    TemplateRepository, build_context, new_post_path, render, title_to_slug,
};
use std::fs;
use tracing::debug;

use crate::NewArgs;
use crate::prompt::{self, PromptOptions};

pub fn run(cfg: ResolvedConfig, args: NewArgs) {
    let options = PromptOptions { batch_mode: args.batch };

    let repo = match TemplateRepository::new(cfg.templates_dir.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            println!("FAIL pelipost new");
            println!("{e}");
            std::process::exit(1);
        }
    };

    let names: Vec<&str> = repo.list_all().iter().map(|t| t.name.as_str()).collect();
    let collected = prompt::choose_template(args.template, &names, &options).and_then(|name| {
        let title = prompt::title(args.title, &options)?;
        let slug = prompt::slug(args.slug, &title_to_slug(&title), &options)?;
        Ok((name, title, slug))
    });
    let (template_name, title, slug) = match collected {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let template = match repo.get_by_name(&template_name) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: run 'pelipost templates' to see available templates");
            std::process::exit(1);
        }
    };
    debug!("Creating post from template '{}'", template.name);

    let ctx = build_context(&title, &slug, Local::now().date_naive());
    let content = render(&template.content, &ctx);
    let output = new_post_path(&cfg.content_dir, &template.content, &slug);

    if output.exists() {
        eprintln!("Error: refusing to overwrite existing file: {}", output.display());
        std::process::exit(1);
    }

    if let Some(parent) = output.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        eprintln!("Error: failed to create directory {}: {}", parent.display(), e);
        std::process::exit(1);
    }

    if let Err(e) = write_post(&output, &content) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let shown = output.strip_prefix(&cfg.content_dir).unwrap_or(&output);
    println!("OK   pelipost new");
    println!("New post created: {}", shown.display());
    println!("path: {}", output.display());
}
