//! Integration tests for `envforge setup`.
//!
//! Responsibilities:
//! - Prove the exit code contract: 0 when everything resolves, 1 when a
//!   required variable is missing or the input is malformed.
//! - Prove both files are written even when setup fails.
//! - Prove `.env` loading feeds resolution unless disabled.

mod common;

use common::envforge_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DESCRIPTORS: &str = r#"
- key: APP_PORT
  default: "8080"
  description: http port
- key: APP_SECRET
  is_required: true
  description: signing secret
"#;

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("env.yaml");
    fs::write(&path, DESCRIPTORS).unwrap();
    path
}

#[test]
fn test_success_returns_exit_code_0() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir);

    envforge_cmd()
        .env("APP_SECRET", "s3cr3t")
        .env_remove("APP_PORT")
        .arg("setup")
        .arg("--config")
        .arg(&config)
        .arg("--dir")
        .arg(temp_dir.path())
        .assert()
        .code(0);

    let env_file = fs::read_to_string(temp_dir.path().join(".env")).unwrap();
    assert!(env_file.contains("APP_SECRET=\"s3cr3t\""));
    assert!(env_file.contains("APP_PORT=\"8080\""));
    let example = fs::read_to_string(temp_dir.path().join(".env.example")).unwrap();
    assert!(!example.contains("s3cr3t"));
}

#[test]
fn test_missing_required_returns_exit_code_1_after_writing_files() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir);

    envforge_cmd()
        .env_remove("APP_SECRET")
        .arg("setup")
        .arg("--config")
        .arg(&config)
        .arg("--dir")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("APP_SECRET"));

    let env_file = fs::read_to_string(temp_dir.path().join(".env")).unwrap();
    assert!(env_file.contains("# REQUIRED"));
    assert!(temp_dir.path().join(".env.example").exists());
}

#[test]
fn test_malformed_config_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("env.yaml");
    fs::write(&config, "- key: [unterminated").unwrap();

    envforge_cmd()
        .arg("setup")
        .arg("--config")
        .arg(&config)
        .arg("--dir")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse"));

    assert!(!temp_dir.path().join(".env").exists());
    assert!(!temp_dir.path().join(".env.example").exists());
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    envforge_cmd()
        .arg("setup")
        .arg("--config")
        .arg(temp_dir.path().join("nope.yaml"))
        .arg("--dir")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_dotenv_supplies_required_value() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir);
    fs::write(temp_dir.path().join(".env"), "APP_SECRET=from-file\n").unwrap();

    envforge_cmd()
        .env_remove("DOTENV_DISABLED")
        .env_remove("APP_SECRET")
        .arg("setup")
        .arg("--config")
        .arg(&config)
        .arg("--dir")
        .arg(temp_dir.path())
        .assert()
        .code(0);

    let env_file = fs::read_to_string(temp_dir.path().join(".env")).unwrap();
    assert!(env_file.contains("APP_SECRET=\"from-file\""));
}

#[test]
fn test_no_dotenv_flag_skips_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir);
    fs::write(temp_dir.path().join(".env"), "APP_SECRET=from-file\n").unwrap();

    envforge_cmd()
        .env_remove("DOTENV_DISABLED")
        .env_remove("APP_SECRET")
        .arg("setup")
        .arg("--config")
        .arg(&config)
        .arg("--dir")
        .arg(temp_dir.path())
        .arg("--no-dotenv")
        .assert()
        .code(1);
}

#[test]
fn test_rerun_reports_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir);

    for _ in 0..2 {
        envforge_cmd()
            .env("APP_SECRET", "s3cr3t")
            .env_remove("APP_PORT")
            .arg("setup")
            .arg("--config")
            .arg(&config)
            .arg("--dir")
            .arg(temp_dir.path())
            .assert()
            .code(0);
    }

    envforge_cmd()
        .env("APP_SECRET", "s3cr3t")
        .env_remove("APP_PORT")
        .arg("setup")
        .arg("--config")
        .arg(&config)
        .arg("--dir")
        .arg(temp_dir.path())
        .assert()
        .code(0)
        .stderr(predicate::str::contains("unchanged"));
}

#[test]
fn test_json_log_format() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(&temp_dir);

    envforge_cmd()
        .env("APP_SECRET", "s3cr3t")
        .arg("--log-format")
        .arg("json")
        .arg("setup")
        .arg("--config")
        .arg(&config)
        .arg("--dir")
        .arg(temp_dir.path())
        .assert()
        .code(0)
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
}
