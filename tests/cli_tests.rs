//! CLI integration tests.
//!
//! Every command here works offline: none of them reach the catalog.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"
[catalog]
request_delay_ms = 0
default_branch = "141001"
branches = [
    { code = "141001", name = "Central Library" },
    { code = "141321", name = "Sangdong Library" },
]

[storage]
status_file = "status.json"
watch_list = "watchlist.toml"
"#;

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("bookwatch.toml"), CONFIG).expect("write config");
    dir
}

/// The binary, run inside `dir` with no ambient secrets.
fn bookwatch(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("bookwatch");
    cmd.current_dir(dir)
        .env_remove("LIBRARY_API_KEY")
        .env_remove("TELEGRAM_BOT_TOKEN")
        .env_remove("TELEGRAM_CHAT_ID")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    let dir = workspace();
    bookwatch(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("bot"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_version() {
    let dir = workspace();
    bookwatch(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookwatch"));
}

#[test]
fn add_list_and_remove_round_trip() {
    let dir = workspace();

    bookwatch(dir.path())
        .args(["add", "Cosmos", "--isbn", "9788983711892"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Watching 'Cosmos' @ Central Library"));
    bookwatch(dir.path())
        .args(["add", "Demian", "--branch", "141321"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sangdong Library"));

    let watch_list = fs::read_to_string(dir.path().join("watchlist.toml")).unwrap();
    assert!(watch_list.contains("catalog_id = \"9788983711892\""));
    assert!(watch_list.contains("branch_code = \"141321\""));

    bookwatch(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cosmos"))
        .stdout(predicate::str::contains("Demian"));

    bookwatch(dir.path())
        .args(["remove", "cosmos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 removed"));

    let watch_list = fs::read_to_string(dir.path().join("watchlist.toml")).unwrap();
    assert!(!watch_list.contains("Cosmos"));
    assert!(watch_list.contains("Demian"));
}

#[test]
fn add_rejects_malformed_isbn() {
    let dir = workspace();
    bookwatch(dir.path())
        .args(["add", "Cosmos", "--isbn", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("isbn"));
    assert!(!dir.path().join("watchlist.toml").exists());
}

#[test]
fn add_warns_about_unknown_branch() {
    let dir = workspace();
    bookwatch(dir.path())
        .args(["add", "Cosmos", "--branch", "999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not in the configured directory"));
}

#[test]
fn list_emits_json_rows() {
    let dir = workspace();
    bookwatch(dir.path())
        .args(["add", "Cosmos"])
        .assert()
        .success();

    bookwatch(dir.path())
        .args(["--json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"row""#))
        .stdout(predicate::str::contains(r#""title":"Cosmos""#));
}

#[test]
fn status_reads_stored_snapshot() {
    let dir = workspace();
    fs::write(
        dir.path().join("watchlist.toml"),
        "[[book]]\ntitle = \"Cosmos\"\nbranch_code = \"141001\"\ncatalog_id = \"9788983711892\"\n\n[[book]]\ntitle = \"Demian\"\nbranch_code = \"141001\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("status.json"),
        r#"{
  "version": 1,
  "records": {
    "catalog:9788983711892@141001": {
      "available": true,
      "last_checked_at": "2024-05-01T09:00:00Z",
      "catalog_id": "9788983711892"
    }
  }
}
"#,
    )
    .unwrap();

    bookwatch(dir.path())
        .args(["--json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""state":"available""#))
        .stdout(predicate::str::contains(r#""state":"never_checked""#))
        .stdout(predicate::str::contains(r#""records":1"#));
}

#[test]
fn check_config_reports_missing_api_key() {
    let dir = workspace();
    bookwatch(dir.path())
        .args(["check", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LIBRARY_API_KEY is not set"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = workspace();
    fs::write(
        dir.path().join("bookwatch.toml"),
        "[catalog]\nmax_concurrency = 0\n",
    )
    .unwrap();

    bookwatch(dir.path())
        .args(["check", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_concurrency"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = workspace();
    bookwatch(dir.path())
        .args(["--config", "absent.toml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn run_without_api_key_fails() {
    let dir = workspace();
    bookwatch(dir.path())
        .args(["run", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LIBRARY_API_KEY"));
}
