use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{TempDir, tempdir};

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn setup_site() -> (TempDir, std::path::PathBuf) {
    let tmp = tempdir().unwrap();
    let site = tmp.path().join("blog");
    let cfg = tmp.path().join("config.toml");
    write(
        &cfg,
        &format!(
            r#"
version = 1
profile = "default"

[profiles.default]
site_root = "{}"
content_dir = "{{{{site_root}}}}/content"
"#,
            site.display()
        ),
    );

    let content = site.join("content");
    write(
        &content.join("articles/first.md"),
        "Title: First Post\nDate: 2025-07-16\nStatus: published\n\nHello.",
    );
    write(&content.join("notes/second.md"), "Title: Second\nDate: 2025-07-20\n\nDraft body.");
    write(&content.join("README.md"), "# Not a post\n\nJust text.");
    write(&content.join(".hidden/secret.md"), "Title: Hidden\n\nBody");

    (tmp, cfg)
}

#[test]
fn list_shows_recognized_posts() {
    let (_tmp, cfg) = setup_site();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["list", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("First Post"))
        .stdout(predicate::str::contains("Second"))
        .stdout(predicate::str::contains("README").not())
        .stdout(predicate::str::contains("Hidden").not())
        .stdout(predicate::str::contains("-- 2 posts --"));
}

#[test]
fn list_filters_by_status_as_json() {
    let (_tmp, cfg) = setup_site();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["list", "--config", cfg.to_str().unwrap(), "--status", "draft", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let posts = json.as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["path"], "notes/second.md");
    assert_eq!(posts[0]["title"], "Second");
    assert_eq!(posts[0]["status"], "draft");
    assert_eq!(posts[0]["date"], "2025-07-20");
}

#[test]
fn list_quiet_prints_paths() {
    let (_tmp, cfg) = setup_site();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["list", "--config", cfg.to_str().unwrap(), "-q"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("articles/first.md"))
        .stdout(predicate::str::contains("notes/second.md"));
}

#[test]
fn list_fails_without_content_dir() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write(
        &cfg,
        r#"
version = 1
profile = "default"

[profiles.default]
site_root = "/definitely/not/here"
content_dir = "{{site_root}}/content"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["list", "--config", cfg.to_str().unwrap()]);
    cmd.assert().failure();
}

#[test]
fn list_uses_selected_profile() {
    let (tmp, cfg) = setup_site();
    let other = tmp.path().join("other");
    write(&other.join("only.md"), "Title: Only Here\n\nBody");
    let mut toml = fs::read_to_string(&cfg).unwrap();
    toml.push_str(&format!(
        "\n[profiles.other]\nsite_root = \"{}\"\ncontent_dir = \"{{{{site_root}}}}\"\n",
        other.display()
    ));
    fs::write(&cfg, toml).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["list", "--config", cfg.to_str().unwrap(), "--profile", "other", "-q"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("only.md"))
        .stdout(predicate::str::contains("first.md").not());
}

#[test]
fn list_without_config_fails() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("list");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error loading config"));
}
