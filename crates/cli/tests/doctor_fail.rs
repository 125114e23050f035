use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn doctor_fails_without_config() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL pelipost doctor"))
        .stdout(predicate::str::contains("config file not found"))
        .stdout(predicate::str::contains("looked for:"))
        .stdout(predicate::str::contains("pelipost/config.toml"));
}

#[test]
fn doctor_reports_unknown_profile() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    fs::write(
        &cfg,
        "version = 1\n[profiles.default]\nsite_root = \"/tmp/blog\"\ncontent_dir = \"/tmp/blog\"\n",
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pelipost"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap(), "--profile", "travel"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL pelipost doctor"))
        .stdout(predicate::str::contains("profile 'travel' not found"))
        .stdout(predicate::str::contains("looked for:").not());
}
