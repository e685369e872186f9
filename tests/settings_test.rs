//! Tests for loading settings from disk.

use five_in_a_row::Settings;
use std::io::Write;
use std::path::Path;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();
    writeln!(file, "show_history = false").unwrap();
    writeln!(file, "x_color = \"#00ff00\"").unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();
    assert_eq!(settings.log_filter(), "debug");
    assert!(!*settings.show_history());
    assert_eq!(settings.o_color(), "red");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_no_path_uses_defaults() {
    assert_eq!(Settings::load(None::<&Path>).unwrap(), Settings::default());
}

#[test]
fn test_bad_color_in_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x_color = \"plaid\"").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Unknown color: plaid"));
}
