//! Loading configuration from disk.

use noughts::AppConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "frame_rate = 30\nlog_file = \"game.log\"\nlog_level = \"debug\"\n\n[theme]\no_color = \"#00ff00\""
    )
    .unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert_eq!(*config.frame_rate(), 30);
    assert_eq!(config.frame_duration(), Duration::from_millis(33));
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_level(), "debug");
    assert_eq!(config.theme().x_color(), "red");
    assert!(config.theme().palette().is_ok());
}

#[test]
fn test_invalid_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "frame_rate = 1000").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("frame_rate must be between 1 and 240"), "{err}");
}

#[test]
fn test_log_level_override() {
    let config = AppConfig::default().with_log_level("trace");
    assert_eq!(config.log_level(), "trace");
}
