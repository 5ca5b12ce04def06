//! Tests for settings loading.

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tictactoe::{MIN_POLL_INTERVAL_MS, Settings};

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.log_file(), &PathBuf::from("tictactoe.log"));
    assert_eq!(settings.log_filter(), "info");
    assert!(*settings.show_hints());
    assert_eq!(*settings.poll_interval_ms(), 100);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = config_file("show_hints = false\npoll_interval_ms = 50\n");
    let settings = Settings::from_file(file.path()).expect("Load failed");
    assert!(!*settings.show_hints());
    assert_eq!(*settings.poll_interval_ms(), 50);
    assert_eq!(settings.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_full_file() {
    let file = config_file(
        r#"
log_file = "/tmp/ttt.log"
log_filter = "debug"
show_hints = true
poll_interval_ms = 250
"#,
    );
    let settings = Settings::from_file(file.path()).expect("Load failed");
    assert_eq!(settings.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(settings.log_filter(), "debug");
    assert_eq!(*settings.poll_interval_ms(), 250);
}

#[test]
fn test_invalid_toml_fails() {
    let file = config_file("show_hints = \"maybe\"\n");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_fails_when_explicit() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = Settings::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_missing_file_defaults_when_optional() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let settings = Settings::load_or_default(dir.path().join("nope.toml")).expect("Load failed");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_setters_override() {
    let settings = Settings::default()
        .with_show_hints(false)
        .with_log_file(PathBuf::from("other.log"));
    assert!(!*settings.show_hints());
    assert_eq!(settings.log_file(), &PathBuf::from("other.log"));
}

#[test]
fn test_no_hints_flag_overrides_file() {
    let file = config_file("show_hints = true\n");
    let settings = Settings::from_file(file.path())
        .expect("Load failed")
        .with_cli_overrides(None, true);
    assert!(!*settings.show_hints());
}

#[test]
fn test_log_file_flag_overrides_file() {
    let file = config_file("log_file = \"from_config.log\"\nshow_hints = true\n");
    let settings = Settings::from_file(file.path())
        .expect("Load failed")
        .with_cli_overrides(Some(PathBuf::from("from_flag.log")), false);
    assert_eq!(settings.log_file(), &PathBuf::from("from_flag.log"));
    assert!(*settings.show_hints());
}

#[test]
fn test_no_flags_keep_file_values() {
    let file = config_file("log_file = \"from_config.log\"\nshow_hints = false\n");
    let loaded = Settings::from_file(file.path()).expect("Load failed");
    assert_eq!(loaded.clone().with_cli_overrides(None, false), loaded);
}

#[test]
fn test_zero_poll_interval_rejected() {
    let file = config_file("poll_interval_ms = 0\n");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("poll_interval_ms must be at least"));
}

#[test]
fn test_minimum_poll_interval_accepted() {
    let file = config_file(&format!("poll_interval_ms = {}\n", MIN_POLL_INTERVAL_MS));
    let settings = Settings::from_file(file.path()).expect("Load failed");
    assert_eq!(*settings.poll_interval_ms(), MIN_POLL_INTERVAL_MS);
}
