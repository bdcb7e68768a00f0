//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with config and data dirs redirected into `home`
fn harvester_meter(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("harvester-meter").expect("binary builds");
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("HARVESTER_LANGUAGE")
        .env_remove("HARVESTER_LOG");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--language"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--rate"))
        .stdout(predicate::str::contains("--no-voice"))
        .stdout(predicate::str::contains("--web"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("harvester-meter"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("harvester-meter"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .args(["config", "set", "language", "english"])
        .assert()
        .success();

    harvester_meter(&home)
        .args(["config", "get", "language"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en-US"));

    harvester_meter(&home)
        .args(["config", "get", "rate_per_hour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .args(["config", "set", "api_key", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_rejects_invalid_timeout() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .args(["config", "set", "listen_timeout", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("listen_timeout"));
}

#[test]
fn config_init_only_once() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .args(["config", "init"])
        .assert()
        .success();

    harvester_meter(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("te-IN"))
        .stdout(predicate::str::contains("7s"));

    harvester_meter(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_timeout_is_usage_error() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .args(["--timeout", "forever"])
        .write_stdin("quit\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid timeout"));
}

#[test]
fn history_starts_empty() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .args(["history", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No saved bills"));
}

#[test]
fn session_saves_bill_to_history() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .args(["--no-voice", "--rate", "1200"])
        .write_stdin("start\npause\nresume\nfinish\nRavi Kumar\nGuntur\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ravi Kumar"))
        .stdout(predicate::str::contains("Amount: ₹"));

    harvester_meter(&home)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ravi Kumar"))
        .stdout(predicate::str::contains("Guntur"));

    harvester_meter(&home)
        .args(["history", "clear"])
        .assert()
        .success();

    harvester_meter(&home)
        .args(["history", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No saved bills"));
}

#[test]
fn blank_speech_times_out() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .args(["--no-voice", "--timeout", "300ms"])
        .write_stdin("listen farmer\n\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing heard"));
}

#[test]
fn unknown_command_keeps_session_alive() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .arg("--no-voice")
        .write_stdin("harvest\nstatus\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command"))
        .stdout(predicate::str::contains("language"));
}

#[test]
fn lang_command_speaks_in_new_language() {
    let home = TempDir::new().unwrap();
    harvester_meter(&home)
        .write_stdin("lang en\nstart\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[en-US] Work started"));
}
