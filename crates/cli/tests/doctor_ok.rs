use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
site_root = "/tmp/blog"
content_dir = "{{site_root}}/content"
templates_dir = "{{site_root}}/.pelipost/templates"
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   pelipost doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains("site_root: /tmp/blog"))
        .stdout(predicate::str::contains("content_dir: /tmp/blog/content"))
        .stdout(predicate::str::contains(
            "publish.commit_message_template: add blog post: {title}",
        ))
        .stdout(predicate::str::contains("publish.configured: no"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("pelipost").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
profile = "default"
[profiles.default]
site_root = "/tmp/blog"
content_dir = "{{site_root}}/content"

[publish]
github_token = "secret-token"
github_owner = "me"
github_repo = "blog"
workflow_id = "deploy.yml"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   pelipost doctor"))
        .stdout(predicate::str::contains("templates_dir: (built-in templates only)"))
        .stdout(predicate::str::contains("publish.configured: yes"))
        .stdout(predicate::str::contains("secret-token").not());
}
