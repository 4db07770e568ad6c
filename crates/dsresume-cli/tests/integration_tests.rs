//! Integration tests for the dsresume binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's config directory and log settings.
fn dsresume(home: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dsresume");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("record"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_render_html_to_stdout() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("TONY ZHAROFF"))
        .stdout(predicate::str::contains("GAME / XR DEVELOPER &amp; EDUCATOR"))
        .stdout(predicate::str::contains("class=\"buttons\""));
}

#[test]
fn test_render_print_media_hides_buttons() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .args(["render", "--media", "print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<body class=\"print\">"))
        .stdout(predicate::str::contains("class=\"buttons\"").not())
        .stdout(predicate::str::contains("NINTENDO-STYLE").not());
}

#[test]
fn test_render_text_format() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .args(["render", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("⭐ SKILLS"))
        .stdout(predicate::str::contains("Unity / C#"))
        .stdout(predicate::str::contains("  • #2"));
}

#[test]
fn test_render_json_format() {
    let home = TempDir::new().unwrap();
    let assert = dsresume(&home)
        .args(["render", "-f", "json", "-m", "print"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["media"], "print");
    assert_eq!(value["sections"].as_array().unwrap().len(), 4);
    assert!(value.get("buttons").is_none());
}

#[test]
fn test_render_unknown_format_is_usage_error() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .args(["render", "--format", "docx"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("docx"));
}

#[test]
fn test_render_to_file_and_refuse_overwrite() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("site/resume.html");
    let out_arg = out.to_str().unwrap();

    dsresume(&home)
        .args(["render", "-o", out_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let page = std::fs::read_to_string(&out).unwrap();
    assert!(page.contains("TONY ZHAROFF"));

    dsresume(&home)
        .args(["render", "-o", out_arg])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    dsresume(&home)
        .args(["render", "-o", out_arg, "--force", "--media", "print"])
        .assert()
        .success();

    let page = std::fs::read_to_string(&out).unwrap();
    assert!(page.contains("<body class=\"print\">"));
}

#[test]
fn test_record_prints_json() {
    let home = TempDir::new().unwrap();
    let assert = dsresume(&home).arg("record").assert().success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["name"], "TONY ZHAROFF");
    assert_eq!(value["skills"].as_array().unwrap().len(), 7);
    assert_eq!(value["experience"].as_array().unwrap().len(), 4);
}

#[test]
fn test_config_file_sets_render_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("dsresume.toml");
    std::fs::write(&config, "[render]\nformat = \"text\"\n").unwrap();

    dsresume(&home)
        .args(["--config", config.to_str().unwrap(), "render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE").not())
        .stdout(predicate::str::contains("⭐ SKILLS"));
}

#[test]
fn test_env_overrides_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("dsresume.toml");
    std::fs::write(&config, "[render]\nformat = \"text\"\n").unwrap();

    dsresume(&home)
        .env("DSRESUME_RENDER__FORMAT", "json")
        .args(["--config", config.to_str().unwrap(), "render"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("⭐ SKILLS").not());
}

#[test]
fn test_quiet_still_writes_the_page() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .args(["-q", "render", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TONY ZHAROFF"));
}

#[test]
fn test_help_explains_status_line_flags() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("page still written"))
        .stdout(predicate::str::contains("(not the page)"));
}

#[test]
fn test_missing_config_file_is_config_error() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.toml");
    dsresume(&home)
        .args(["--config", missing.to_str().unwrap(), "render"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_init_then_config_get() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("conf/dsresume.toml");
    let config_arg = config.to_str().unwrap();

    dsresume(&home)
        .args(["--config", config_arg, "init"])
        .assert()
        .success();
    assert!(config.exists());

    dsresume(&home)
        .args(["--config", config_arg, "config", "get", "render.media"])
        .assert()
        .success()
        .stdout(predicate::str::contains("render.media = screen"));

    dsresume(&home)
        .args(["--config", config_arg, "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dsresume.toml"));
}

#[test]
fn test_init_refuses_existing_config_without_force() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("dsresume.toml");
    std::fs::write(&config, "[render]\nformat = \"text\"\n").unwrap();
    let config_arg = config.to_str().unwrap();

    dsresume(&home)
        .args(["--config", config_arg, "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
    assert!(std::fs::read_to_string(&config).unwrap().contains("\"text\""));

    dsresume(&home)
        .args(["--config", config_arg, "init", "--force"])
        .assert()
        .success();
    assert!(std::fs::read_to_string(&config).unwrap().contains("\"html\""));
}

#[test]
fn test_config_get_unknown_key_is_not_found() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .args(["config", "get", "render.colour"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dsresume"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let home = TempDir::new().unwrap();
    dsresume(&home)
        .args(["-q", "-v", "record"])
        .assert()
        .code(2);
}
