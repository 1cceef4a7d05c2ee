use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

fn qfpl() -> Command {
    Command::new(env!("CARGO_BIN_EXE_qfpl"))
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(&dir, "[api]\ntimeout_ms = 0\n");

    qfpl()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_ms"));
}

#[test]
fn cli_validates_good_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(&dir, "[leagues]\nnfo_mini = 4242\n");

    qfpl()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}

#[test]
fn validate_requires_the_file_to_exist() {
    let dir = tempfile::tempdir().expect("tempdir");

    qfpl()
        .args(["config", "validate", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure();
}

#[test]
fn config_show_works_offline_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");

    qfpl()
        .args(["config", "show", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("65689"))
        .stdout(predicate::str::contains("fantasy.premierleague.com"));
}

#[test]
fn config_show_emits_json_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(&dir, "[cache]\npicks_ttl_secs = 15\n");

    let output = qfpl()
        .args(["--json", "config", "show", "--config"])
        .arg(&path)
        .output()
        .expect("run qfpl");
    assert!(output.status.success());

    let line = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(line.trim()).expect("one JSON line on stdout");
    assert_eq!(value["type"], "config");
    assert_eq!(value["payload"]["cache"]["picks_ttl_secs"], 15);
}

#[test]
fn unreachable_upstream_exits_nonzero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_temp_config(
        &dir,
        "[api]\nbase_url = \"http://127.0.0.1:9/api/\"\ntimeout_ms = 500\nconnect_timeout_ms = 500\n",
    );

    qfpl()
        .args(["--quiet", "league", "qfpl", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("unavailable"));
}

#[test]
fn unknown_league_alias_is_rejected() {
    qfpl()
        .args(["league", "villa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive league id"));
}
