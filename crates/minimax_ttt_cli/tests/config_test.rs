//! Tests for loading the front-end config from disk.

use minimax_ttt_cli::{AppConfig, FirstPlayer, ModeChoice};
use std::io::Write;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_mode = \"minimax\"").unwrap();
    writeln!(file, "human_first = false").unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.default_mode(), ModeChoice::Minimax);
    assert_eq!(config.first_player(), FirstPlayer::Machine);
    assert!(!config.show_child_scores());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_first = \"sometimes\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
