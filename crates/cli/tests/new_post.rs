use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn config(tmp: &TempDir, templates_dir: bool) -> PathBuf {
    let site = tmp.path().join("blog");
    let cfg = tmp.path().join("config.toml");
    let mut toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
site_root = "{}"
content_dir = "{{{{site_root}}}}/content"
"#,
        site.display()
    );
    if templates_dir {
        toml.push_str("templates_dir = \"{{site_root}}/templates\"\n");
    }
    write(&cfg, &toml);
    cfg
}

#[test]
fn new_renders_builtin_template() {
    let tmp = tempdir().unwrap();
    let cfg = config(&tmp, false);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["new", "--config", cfg.to_str().unwrap(), "--batch"])
        .args(["--template", "Basic Post", "--title", "Hello World"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   pelipost new"))
        .stdout(predicate::str::contains("New post created: articles/hello-world.md"));

    let path = tmp.path().join("blog/content/articles/hello-world.md");
    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("Title: \"Hello World\"\nDate: "));
    assert!(content.contains("Slug: hello-world\n"));
    assert!(content.contains("Status: draft\n"));
    assert!(content.contains("# Hello World"));
    assert!(!content.contains("{title}"));
}

#[test]
fn new_uses_custom_template_and_slug() {
    let tmp = tempdir().unwrap();
    let cfg = config(&tmp, true);
    write(
        &tmp.path().join("blog/templates/recipe.md"),
        "Title: \"{title}\"\nSlug: {slug}\nCategory: Notes\n\n# {title}\n",
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["new", "--config", cfg.to_str().unwrap(), "--batch"])
        .args(["--template", "recipe", "--title", "Pancakes", "--slug", "best-pancakes"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("New post created: notes/best-pancakes.md"));

    let content =
        fs::read_to_string(tmp.path().join("blog/content/notes/best-pancakes.md")).unwrap();
    assert_eq!(content, "Title: \"Pancakes\"\nSlug: best-pancakes\nCategory: Notes\n\n# Pancakes\n");
}

#[test]
fn new_refuses_to_overwrite() {
    let tmp = tempdir().unwrap();
    let cfg = config(&tmp, false);
    let existing = tmp.path().join("blog/content/articles/hello-world.md");
    write(&existing, "Title: Keep me\n\nBody");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["new", "--config", cfg.to_str().unwrap(), "--batch"])
        .args(["--template", "Basic Post", "--title", "Hello World"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite"));
    assert_eq!(fs::read_to_string(existing).unwrap(), "Title: Keep me\n\nBody");
}

#[test]
fn new_batch_without_title_fails() {
    let tmp = tempdir().unwrap();
    let cfg = config(&tmp, false);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["new", "--config", cfg.to_str().unwrap(), "--batch", "--template", "Basic Post"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("missing required value: title"));
}

#[test]
fn new_unknown_template_fails() {
    let tmp = tempdir().unwrap();
    let cfg = config(&tmp, false);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["new", "--config", cfg.to_str().unwrap(), "--batch"])
        .args(["--template", "nope", "--title", "X"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("pelipost templates"));
}
