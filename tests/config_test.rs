//! Tests for loading the TUI config from disk.

use std::io::Write;
use strictly_tictactoe::TuiConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();
    writeln!(file, "show_cell_numbers = false").unwrap();

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_filter(), "debug");
    assert!(!config.show_cell_numbers());
    assert_eq!(config.log_file().to_str(), Some("strictly_tictactoe.log"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TuiConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_load_without_path_uses_defaults() {
    assert_eq!(TuiConfig::load(None).unwrap(), TuiConfig::default());
}
