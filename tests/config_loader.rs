use std::fs;
use std::path::PathBuf;

use pagefeed::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn load_full_config() {
    let (_dir, path) = write_config(
        r#"
[paging]
page_size = 25

[source]
corpus_path = "/data/articles.json"
latency_ms = 250
fetch_timeout_ms = 2000

[view]
viewport_rows = 15
near_bottom_rows = 4
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.paging.page_size, 25);
    assert_eq!(
        config.source.corpus_path,
        Some(PathBuf::from("/data/articles.json"))
    );
    assert_eq!(config.source.latency_ms, 250);
    assert_eq!(config.source.fetch_timeout_ms, Some(2000));
    assert_eq!(config.view.viewport_rows, 15);
    assert_eq!(config.view.near_bottom_rows, 4);
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let (_dir, path) = write_config("[paging]\npage_size = 5\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.paging.page_size, 5);
    assert_eq!(config.source, Config::default().source);
    assert_eq!(config.view, Config::default().view);
}

#[test]
fn zero_page_size_is_rejected() {
    let (_dir, path) = write_config("[paging]\npage_size = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("page_size"));
}

#[test]
fn zero_timeout_is_rejected() {
    let (_dir, path) = write_config("[source]\nfetch_timeout_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[paging\npage_size = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn config_path_is_under_pagefeed_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("pagefeed/config.toml"));
}
