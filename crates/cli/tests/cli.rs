use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn studio_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("creator-studio");
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env("CREATOR_STUDIO__STORAGE__DATABASE_PATH", dir.join("studio.sqlite"));
    cmd
}

#[test]
fn config_init_writes_example_file() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("config.toml");

    studio_cmd(dir.path())
        .args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).expect("read config");
    assert!(content.contains("[storage]"));
    assert!(content.contains("port = 8000"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "# mine\n").expect("write config");

    studio_cmd(dir.path())
        .args(["config", "init", "--path"])
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_show_applies_env_overrides() {
    let dir = TempDir::new().expect("temp dir");

    studio_cmd(dir.path())
        .env("CREATOR_STUDIO__SERVER__PORT", "9123")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 9123"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().expect("temp dir");

    studio_cmd(dir.path())
        .args(["--config", "nope.toml", "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn caption_outputs_valid_json() {
    let dir = TempDir::new().expect("temp dir");

    let output = studio_cmd(dir.path())
        .args([
            "caption",
            "--topic",
            "sunset shoot",
            "--tone",
            "playful",
            "--keyword",
            "golden hour",
            "--json",
        ])
        .output()
        .expect("run caption");

    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(
        value["caption"],
        "Sunset Shoot — behind the scenes in a playful tone. Crafted with passion, captured with intention. #goldenhour"
    );
}

#[test]
fn hashtags_prints_suggestions() {
    let dir = TempDir::new().expect("temp dir");

    studio_cmd(dir.path())
        .args([
            "hashtags",
            "--text",
            "amazing sunset photography session",
            "--max-tags",
            "3",
        ])
        .assert()
        .success()
        .stdout("#amazing #sunset #photography\n");
}

#[test]
fn hashtags_reads_stdin() {
    let dir = TempDir::new().expect("temp dir");

    let output = studio_cmd(dir.path())
        .args(["hashtags", "--file", "-", "--max-tags", "2", "--json"])
        .write_stdin("Wonderful mountains!")
        .output()
        .expect("run hashtags");

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["hashtags"][0], "#wonderful");
    assert_eq!(value["hashtags"][1], "#mountains");
}

#[test]
fn posts_add_then_list() {
    let dir = TempDir::new().expect("temp dir");
    let post_path = dir.path().join("post.json");
    fs::write(
        &post_path,
        r##"{"title": "Studio day", "hashtags": ["#studio"], "status": "scheduled"}"##,
    )
    .expect("write post");

    let added = studio_cmd(dir.path())
        .args(["posts", "add", "--file"])
        .arg(&post_path)
        .output()
        .expect("run posts add");
    assert!(added.status.success());
    let id = String::from_utf8(added.stdout).expect("utf8");
    let id = id.trim();
    assert!(!id.is_empty());

    let output = studio_cmd(dir.path())
        .args(["posts", "list", "--status", "scheduled", "--json"])
        .output()
        .expect("run posts list");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let items = value["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id);
    assert_eq!(items[0]["title"], "Studio day");
    assert!(items[0]["created_at"].is_string());

    studio_cmd(dir.path())
        .args(["posts", "list", "--status", "published"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts found."));
}

#[test]
fn posts_add_rejects_invalid_post() {
    let dir = TempDir::new().expect("temp dir");

    studio_cmd(dir.path())
        .args(["posts", "add", "--file", "-"])
        .write_stdin(r#"{"title": "x", "image_url": "ftp://example.com/a.jpg"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("http or https"));
}

#[test]
fn posts_list_rejects_unknown_status() {
    let dir = TempDir::new().expect("temp dir");

    studio_cmd(dir.path())
        .args(["posts", "list", "--status", "archived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown status"));
}

#[test]
fn doctor_reports_json() {
    let dir = TempDir::new().expect("temp dir");

    let output = studio_cmd(dir.path())
        .env("CREATOR_STUDIO__STORAGE__BACKEND", "memory")
        .args(["doctor", "--json"])
        .output()
        .expect("run doctor");

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["config"]["status"], "ok");
    assert_eq!(value["storage"]["status"], "warn");
    assert_eq!(value["overall"], "warn");
}

#[test]
fn doctor_fails_on_bad_limits() {
    let dir = TempDir::new().expect("temp dir");

    studio_cmd(dir.path())
        .env("CREATOR_STUDIO__POSTS__MAX_LIMIT", "0")
        .args(["doctor"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Overall: ERROR"));
}
