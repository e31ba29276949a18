use std::io::Write;

use teacup::config::{Config, ConfigError, OutputFormat};
use teacup::samples::SampleKind;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.patches);
    assert_eq!(config.demo.sample, SampleKind::Counter);
    assert_eq!(config.demo.format, OutputFormat::Tree);
}

/// Test that Config::config_path() ends with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("teacup/config.toml"));
}

/// Test loading a complete file.
#[test]
fn test_load_from_full_file() {
    let file = write_config(
        r#"
[logging]
level = "debug"
patches = true

[demo]
sample = "todo-history"
format = "json"
"#,
    );

    let config = Config::load_from(file.path()).unwrap();

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.patches);
    assert_eq!(config.demo.sample, SampleKind::TodoHistory);
    assert_eq!(config.demo.format, OutputFormat::Json);
}

/// Test that an empty file is all defaults.
#[test]
fn test_load_from_empty_file() {
    let file = write_config("");
    assert_eq!(Config::load_from(file.path()).unwrap(), Config::default());
}

/// Test that a malformed file reports a parse error with its path.
#[test]
fn test_load_from_invalid_toml() {
    let file = write_config("[demo\nsample = ");

    match Config::load_from(file.path()) {
        Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

/// Test that an unknown sample name is a parse error.
#[test]
fn test_load_from_unknown_sample() {
    let file = write_config("[demo]\nsample = \"tetris\"\n");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ParseError { .. })
    ));
}

/// Test that validation runs on load.
#[test]
fn test_load_from_rejects_unknown_level() {
    let file = write_config("[logging]\nlevel = \"chatty\"\n");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}

/// Test that a missing explicit file is a read error.
#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    match Config::load_from(&missing) {
        Err(ConfigError::ReadError { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected ReadError, got {other:?}"),
    }
}

/// Test that a config survives a serialize/parse cycle.
#[test]
fn test_config_toml_roundtrip() {
    let mut config = Config::default();
    config.demo.sample = SampleKind::CounterList;
    config.logging.patches = true;

    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();

    assert_eq!(parsed, config);
}
