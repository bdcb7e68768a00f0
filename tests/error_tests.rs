//! Error scenario integration tests

use std::process::Command;

fn harvester_meter_bin(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_harvester-meter"));
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("HARVESTER_LANGUAGE");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let output = harvester_meter_bin(&home)
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key"),
        "Expected unknown key error, got: {}",
        stderr
    );
}

#[test]
fn invalid_language_flag_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let output = harvester_meter_bin(&home)
        .args(["--language", "klingon"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid language"),
        "Expected invalid language error, got: {}",
        stderr
    );
}

#[test]
fn invalid_language_from_env_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let output = harvester_meter_bin(&home)
        .env("HARVESTER_LANGUAGE", "fr-FR")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn corrupt_bill_history_is_reported() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("data").join("harvester-meter");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("preferences.json"), r#"{"bills": "not a list"}"#).unwrap();

    let output = harvester_meter_bin(&home)
        .args(["history", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("malformed"),
        "Expected malformed history error, got: {}",
        stderr
    );
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("config").join("harvester-meter");
    std::fs::create_dir_all(&config).unwrap();
    std::fs::write(config.join("config.toml"), "language = [").unwrap();

    let output = harvester_meter_bin(&home)
        .arg("--no-voice")
        .stdin(std::process::Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
}
