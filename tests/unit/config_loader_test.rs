use std::fs;

use tempfile::TempDir;

use subtitle_shell::services::config_loader::{default_config_path, ConfigLoader, ConfigLoaderTrait};
use subtitle_shell::types::errors::ConfigError;
use subtitle_shell::types::settings::{ShellConfig, WindowKind};

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    (dir, path)
}

#[test]
fn test_missing_file_yields_defaults() {
    let (_dir, path) = setup();
    let mut loader = ConfigLoader::new(Some(path.clone()));
    let config = loader.load().unwrap();
    assert_eq!(config, ShellConfig::default());
    assert_eq!(loader.config_path(), path.as_path());
    assert!(!path.exists());
}

#[test]
fn test_defaults_match_shell_window() {
    let config = ShellConfig::default();
    assert_eq!(config.window.title, "Subtitle Manipulator");
    assert_eq!(config.chrome.resize_margin, 5);
    assert_eq!(config.chrome.chrome_height, 38);
    assert_eq!(config.startup.default_file_tool, "srt_editor");
    assert!(config.chrome.resizable(WindowKind::Main));
    assert!(!config.chrome.resizable(WindowKind::Dialog));
    assert!(config.chrome.resizable(WindowKind::Settings));
}

#[test]
fn test_partial_file_overrides_named_fields() {
    let (_dir, path) = setup();
    fs::write(&path, r#"{"chrome": {"resize_margin": 8, "resize_dialogs": true}, "window": {"width": 1024}}"#).unwrap();

    let mut loader = ConfigLoader::new(Some(path));
    let config = loader.load().unwrap();
    assert_eq!(config.chrome.resize_margin, 8);
    assert!(config.chrome.resizable(WindowKind::Dialog));
    assert_eq!(config.chrome.chrome_height, 38);
    assert_eq!(config.window.width, 1024);
    assert_eq!(config.window.height, 600);
    assert_eq!(loader.get_config(), &config);
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let (_dir, path) = setup();
    fs::write(&path, "{ not json").unwrap();
    let mut loader = ConfigLoader::new(Some(path));
    assert!(matches!(loader.load(), Err(ConfigError::Serialization(_))));
}

#[test]
fn test_unreadable_path_is_io_error() {
    let (dir, _path) = setup();
    // A directory exists at the path but cannot be read as a file.
    let mut loader = ConfigLoader::new(Some(dir.path().to_path_buf()));
    assert!(matches!(loader.load(), Err(ConfigError::Io(_))));
}

#[test]
fn test_default_path_is_under_app_dir() {
    let path = default_config_path();
    assert!(path.ends_with("subtitle-shell/config.json"));
}

#[test]
fn test_missing_explicit_path_still_yields_defaults() {
    let (_dir, path) = setup();
    let mut loader = ConfigLoader::new(Some(path));
    assert!(loader.is_explicit());
    assert_eq!(loader.load().unwrap(), ShellConfig::default());
}

#[test]
fn test_derived_path_is_not_explicit() {
    let loader = ConfigLoader::new(None);
    assert!(!loader.is_explicit());
    assert_eq!(loader.config_path(), default_config_path().as_path());
}
