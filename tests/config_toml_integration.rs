use std::path::PathBuf;
use tempfile::NamedTempFile;
use todo_heap::cli::{ConfigError, LoadMode, TodoConfig};

#[test]
fn test_config_serialization_roundtrip() {
    let original_config = TodoConfig::default();

    let toml_str = original_config
        .to_toml_string()
        .expect("Should be able to serialize config to TOML");

    assert!(!toml_str.is_empty(), "TOML string should not be empty");
    assert!(toml_str.contains("task_file"), "Should contain task_file field");

    let deserialized_config =
        TodoConfig::from_toml_str(&toml_str).expect("Should be able to deserialize TOML string");

    assert_eq!(original_config, deserialized_config);
}

#[test]
fn test_config_file_operations() {
    let original_config = TodoConfig {
        task_file: PathBuf::from("/srv/lists/work.txt"),
        initial_capacity: 64,
        load_mode: LoadMode::Lenient,
        log_filter: "todo_heap=warn".to_string(),
    };

    let temp_file = NamedTempFile::new().expect("Should be able to create temporary file");
    let temp_path = temp_file.path();

    original_config
        .to_toml_file(temp_path)
        .expect("Should be able to save config to file");

    let content = std::fs::read_to_string(temp_path).unwrap();
    assert!(content.contains("load_mode = \"lenient\""));

    let loaded_config =
        TodoConfig::from_toml_file(temp_path).expect("Should be able to load config from file");
    assert_eq!(original_config, loaded_config);
}

#[test]
fn test_config_error_handling() {
    let result = TodoConfig::from_toml_file("non_existent_file.toml");
    assert!(
        matches!(result, Err(ConfigError::Read { .. })),
        "Should fail when loading non-existent file"
    );

    let result = TodoConfig::from_toml_str("invalid toml content [[[");
    assert!(result.is_err(), "Should fail when parsing invalid TOML");

    let result = TodoConfig::from_toml_str("load_mode = \"sloppy\"");
    assert!(result.is_err(), "Should reject unknown load modes");
}
