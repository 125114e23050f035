use pelipost_core::config::types::ResolvedConfig;
use pelipost_core::templates::{TemplateRepository, TemplateSource, extract_category};

/// List templates. Without a loadable config only the built-ins are shown.
pub fn run(cfg: Option<ResolvedConfig>) {
    let templates_dir = cfg.and_then(|rc| rc.templates_dir);

    let repo = match TemplateRepository::new(templates_dir.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading templates: {}", e);
            std::process::exit(1);
        }
    };

    for t in repo.list_all() {
        let origin = match t.source {
            TemplateSource::Builtin => "builtin",
            TemplateSource::File(_) => "custom",
        };
        println!(
            "{}\t[{}] {} (category: {})",
            t.name,
            origin,
            t.description,
            extract_category(&t.content)
        );
    }
    println!("-- {} templates --", repo.list_all().len());
}
