//! Loading configuration and maze files from disk.

mod common;

use std::fs;

use disha_path::{ConfigLoadError, DishaConfig, MazeFile, Position, SearchConfig};
use tempfile::TempDir;

#[test]
fn load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "search:\n  check_endpoints: true\n").unwrap();

    let config = DishaConfig::load(&path).unwrap();
    assert!(config.search.check_endpoints);
    assert_eq!(
        config.to_search_config(),
        SearchConfig::default().with_endpoint_checks()
    );
}

#[test]
fn shipped_config_matches_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/config.yaml");
    let config = DishaConfig::load(&path).unwrap();
    assert_eq!(config, DishaConfig::default());
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = DishaConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io(_)));

    let err = MazeFile::load(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Io(_)));
}

#[test]
fn maze_file_roundtrip_on_disk() {
    let file = MazeFile::load(&common::maze_path("reference.yaml")).unwrap();
    assert_eq!(file.mazes.len(), 3);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("copy.yaml");
    fs::write(&path, serde_yaml::to_string(&file).unwrap()).unwrap();

    let reloaded = MazeFile::load(&path).unwrap();
    assert_eq!(reloaded, file);
    assert_eq!(reloaded.get("2").unwrap().start, Some(Position::new(0, 2)));
}

#[test]
fn malformed_maze_file_is_parse_error() {
    let err = MazeFile::from_yaml("mazes:\n  - name: x\n    grid: [[0, 300]]\n").unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse(_)));
}
