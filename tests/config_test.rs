//! Tests for loading configuration files.

use grid_arcade::{ArcadeConfig, Dimensions, Heading, Lattice, Point};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
[turn]
columns = 4
rows = 4

[motion]
width = 400
height = 300
step = 20
tick_ms = 120
start_x = 100
start_y = 40
heading = "Up"
length = 3
"#,
    );

    let config = ArcadeConfig::from_file(file.path()).unwrap();
    assert_eq!(config.turn().dimensions(), Dimensions::new(4, 4));
    assert_eq!(config.motion().lattice(), Lattice::new(400, 300, 20));
    assert_eq!(config.motion().tick_period(), Duration::from_millis(120));
    assert_eq!(config.motion().start(), Point::new(100, 40));
    assert_eq!(*config.motion().heading(), Heading::Up);
    assert_eq!(config.motion().initial_body().len(), 3);
}

#[test]
fn test_missing_sections_use_defaults() {
    let file = write_config("[turn]\ncolumns = 5\n");
    let config = ArcadeConfig::from_file(file.path()).unwrap();
    assert_eq!(config.turn().dimensions(), Dimensions::new(5, 3));
    assert_eq!(config.motion(), ArcadeConfig::default().motion());
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config("[motion]\nstep = 0\n");
    let error = ArcadeConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.contains("step"));
}

#[test]
fn test_malformed_toml_is_rejected() {
    let file = write_config("[motion\nwidth = ");
    let error = ArcadeConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let error = ArcadeConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(error.message.starts_with("Failed to read config file"));
}
