//! Tests for the `standup` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MESSAGE: &str = "Friday: ibm, slack\nToday:\n  - halo\n  - blockers: none\nLP: up to date\n";

/// A command isolated from the user's real config.
fn standup(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("standup").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("STANDUP_CONFIG")
        .env_remove("STANDUP_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_parse_stdin_json() {
    let home = TempDir::new().unwrap();
    let output = standup(&home)
        .args(["parse", "-o", "json"])
        .write_stdin(MESSAGE)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["yesterday"]["key"], "Friday");
    assert_eq!(value["yesterday"]["val"], "ibm, slack");
    assert_eq!(value["today"]["val"], "- halo");
    assert_eq!(value["blockers"]["key"], "- blockers");
    assert_eq!(value["lp"]["val"], true);
    assert_eq!(value["lp"]["valid"], true);
    assert_eq!(value["jira"]["valid"], false);
}

#[test]
fn test_parse_stdin_invalid_utf8() {
    let home = TempDir::new().unwrap();
    let output = standup(&home)
        .args(["parse", "-o", "json"])
        .write_stdin(b"Today: caf\xe9 work\nLP: yes\n".as_slice())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["today"]["val"], "caf\u{FFFD} work");
    assert_eq!(value["lp"]["val"], true);
}

#[test]
fn test_parse_file_pretty() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("standup.txt");
    std::fs::write(&path, MESSAGE).unwrap();

    standup(&home)
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Standup (4 fields)"))
        .stdout(predicate::str::contains("ibm, slack"));
}

#[test]
fn test_parse_missing_file_fails() {
    let home = TempDir::new().unwrap();

    standup(&home)
        .args(["parse", "/nonexistent/standup.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_strict_mode_flags_review() {
    let home = TempDir::new().unwrap();

    standup(&home)
        .args(["parse", "--strict", "-o", "json"])
        .write_stdin("Today: halo\nJira: maybe")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"jira\""))
        .stderr(predicate::str::contains("Fields need review: jira"));
}

#[test]
fn test_strict_mode_passes_clean_message() {
    let home = TempDir::new().unwrap();

    standup(&home)
        .args(["parse", "--strict"])
        .write_stdin(MESSAGE)
        .assert()
        .success();
}

#[test]
fn test_config_default_output_and_indicators() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("standup.yaml");
    std::fs::write(
        &config,
        "general:\n  default_output: json\nindicators:\n  positive:\n    - logged\n",
    )
    .unwrap();

    standup(&home)
        .arg("--config")
        .arg(&config)
        .args(["classify", "logged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"clear\""));
}

#[test]
fn test_config_from_home_directory() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".standup")).unwrap();
    std::fs::write(
        home.path().join(".standup").join("config.yaml"),
        "general:\n  default_output: json\n",
    )
    .unwrap();

    standup(&home)
        .args(["classify", "not yet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"val\": false"));
}

#[test]
fn test_bad_config_pattern_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("standup.yaml");
    std::fs::write(&config, "indicators:\n  negative:\n    - \"(\"\n").unwrap();

    standup(&home)
        .arg("--config")
        .arg(&config)
        .args(["classify", "yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid indicator pattern"));
}

#[test]
fn test_tokens_command() {
    let home = TempDir::new().unwrap();

    standup(&home)
        .args(["tokens", "-o", "json"])
        .write_stdin("LP: yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"time_log\""))
        .stdout(predicate::str::contains("\"count\": 4"));
}

#[test]
fn test_completions_command() {
    let home = TempDir::new().unwrap();

    standup(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standup"));
}
