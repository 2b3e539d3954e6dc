//! Tests for TOML configuration loading, validation and CLI overrides.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use connect_four_ui::{AppConfig, Cli, EngineConfig, EngineConnector, Player};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("connect_four.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(*config.default_difficulty(), 5);
    assert_eq!(*config.min_difficulty(), 2);
    assert_eq!(*config.max_difficulty(), 10);
    assert_eq!(*config.starting_player(), Player::PlayerOne);
    assert_eq!(config.log_file(), &PathBuf::from("connect_four_ui.log"));
    // No engine configured yet.
    assert!(config.validate().is_err());
}

#[test]
fn test_load_process_engine() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"default_difficulty = 7
starting_player = "player_two"

[engine]
command = ["connect-four-engine", "--stdio"]
"#,
    );

    let config = AppConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.default_difficulty(), 7);
    assert_eq!(*config.starting_player(), Player::PlayerTwo);
    assert_eq!(
        config.engine(),
        &EngineConfig::process(vec![
            "connect-four-engine".to_string(),
            "--stdio".to_string()
        ])
    );
    config.validate().expect("Config should be valid");

    let connector = config.connector().expect("Connector failed");
    assert_eq!(connector.describe(), "connect-four-engine --stdio");

    let settings = config.game_settings();
    assert_eq!(*settings.default_difficulty(), 7);
    assert_eq!(*settings.starting_player(), Player::PlayerTwo);
}

#[test]
fn test_load_tcp_engine() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "[engine]\naddress = \"127.0.0.1:4000\"\n");

    let config = AppConfig::from_file(&path).expect("Load failed");
    let connector = config.connector().expect("Connector failed");
    assert_eq!(connector.describe(), "tcp://127.0.0.1:4000");
}

#[test]
fn test_rejects_both_engine_kinds() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "[engine]\ncommand = [\"engine\"]\naddress = \"127.0.0.1:4000\"\n",
    );

    let config = AppConfig::from_file(&path).expect("Load failed");
    let err = config.validate().expect_err("Both engines accepted");
    assert!(err.message.contains("mutually exclusive"));
}

#[test]
fn test_rejects_empty_command() {
    let mut config = AppConfig::default();
    config.set_engine(EngineConfig::process(vec![]));
    assert!(config.validate().is_err());
    assert!(config.connector().is_err());
}

#[test]
fn test_rejects_inverted_bounds() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "min_difficulty = 8\nmax_difficulty = 3\n[engine]\naddress = \"localhost:1\"\n",
    );

    let config = AppConfig::from_file(&path).expect("Load failed");
    let err = config.validate().expect_err("Inverted bounds accepted");
    assert!(err.message.contains("min_difficulty"));
}

#[test]
fn test_rejects_default_outside_bounds() {
    let mut config = AppConfig::default();
    config.set_engine(EngineConfig::tcp("localhost:1"));
    config.set_default_difficulty(11);
    let err = config.validate().expect_err("Out-of-range default accepted");
    assert!(err.message.contains("default_difficulty"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "this is not valid toml !!!@@@");
    let err = AppConfig::from_file(&path).expect_err("Garbage parsed");
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = AppConfig::from_file(dir.path().join("absent.toml")).expect_err("Missing file loaded");
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_cli_overrides_file_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "default_difficulty = 4\n[engine]\naddress = \"127.0.0.1:4000\"\n",
    );
    let mut config = AppConfig::from_file(&path).expect("Load failed");

    let cli = Cli::parse_from([
        "connect_four_ui",
        "--difficulty",
        "9",
        "--engine-command",
        "engine",
        "--depth",
        "3",
    ]);
    cli.apply_overrides(&mut config);

    assert_eq!(*config.default_difficulty(), 9);
    assert_eq!(
        config.engine().command().as_deref(),
        Some(&["engine".to_string(), "--depth".to_string(), "3".to_string()][..])
    );
    assert_eq!(config.engine().address(), &None);
    config.validate().expect("Overridden config should be valid");
}

#[test]
fn test_cli_rejects_both_engine_flags() {
    let result = Cli::try_parse_from([
        "connect_four_ui",
        "--engine-address",
        "127.0.0.1:4000",
        "--engine-command",
        "engine",
    ]);
    assert!(result.is_err());
}
