use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".savvyspend").join("config.json")
}

const BINARY_NAME: &str = "savvyspend";

/// Nothing listens on the discard port, so any request fails fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

fn savvyspend(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()) // simulate different $HOME
        .env_remove("SAVVYSPEND_API_URL");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// set-api-url writes the config file and reset deletes it.
fn set_api_url_then_reset() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    savvyspend(&tmp)
        .args(["set-api-url", "https://budget.example.com/api/"])
        .assert()
        .success()
        .stdout(contains("https://budget.example.com/api"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"https://budget.example.com/api\""));

    savvyspend(&tmp)
        .arg("reset")
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));
    assert!(!config_path.exists());
}

#[test]
/// A URL without a scheme is refused and nothing is saved.
fn set_api_url_rejects_garbage() {
    let tmp = temp_home_dir();
    savvyspend(&tmp).args(["set-api-url", "budget"]).assert().failure();
    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Unusable feature text fails before any request is made.
fn predict_with_garbage_features_fails_locally() {
    let tmp = temp_home_dir();
    savvyspend(&tmp)
        .args(["--api-url", UNREACHABLE_API, "predict", "--features", "abc"])
        .assert()
        .failure()
        .stdout(contains("Enter features as: 1.0,2.0;3.0,4.0"));
}

#[test]
/// An incomplete expense is rejected without contacting the backend.
fn add_with_empty_description_fails_locally() {
    let tmp = temp_home_dir();
    savvyspend(&tmp)
        .args([
            "--api-url",
            UNREACHABLE_API,
            "add",
            "--description",
            "",
            "--amount",
            "12",
            "--date",
            "2024-07-04",
        ])
        .assert()
        .failure()
        .stdout(contains("Description is required"));
}

#[test]
/// A backend that cannot be reached makes list fail with a network error.
fn list_against_unreachable_backend_fails() {
    let tmp = temp_home_dir();
    savvyspend(&tmp)
        .args(["--api-url", UNREACHABLE_API, "list"])
        .assert()
        .failure()
        .stdout(contains("Network Error"));
}

#[test]
/// With RUST_LOG=debug, request diagnostics go to stderr and stay off stdout.
fn debug_logging_goes_to_stderr() {
    let tmp = temp_home_dir();
    savvyspend(&tmp)
        .env("RUST_LOG", "savvyspend=debug")
        .args(["--api-url", UNREACHABLE_API, "list"])
        .assert()
        .failure()
        .stderr(contains("GET http://127.0.0.1:9/api/expenses/"))
        .stdout(contains("GET http").not());
}

#[test]
/// A training failure names the prefix once.
fn train_failure_is_reported_once() {
    let tmp = temp_home_dir();
    let output = savvyspend(&tmp)
        .args(["--api-url", UNREACHABLE_API, "train"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Training failed: Network Error"));
    assert_eq!(stdout.matches("Training failed").count(), 1);
}
