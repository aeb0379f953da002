use tasklist::config::{Config, ConfigError};
use tasklist::icons::IconTheme;
use tasklist::todo::Filter;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_filter, "all");
    assert_eq!(config.ui.filter(), Filter::All);
    assert!(config.ui.show_key_hints);
    assert_eq!(config.ui.icon_theme, IconTheme::Unicode);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown filter should fail
    config.ui.default_filter = "done".to_string();
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidFilter("done".to_string()))
    );

    // Reset and test an unknown log level
    config.ui.default_filter = "active".to_string();
    config.logging.level = "loud".to_string();
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidLogLevel("loud".to_string()))
    );

    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_filter = \"all\""));
    assert!(toml_str.contains("icon_theme = \"unicode\""));
    assert!(toml_str.contains("enabled = false"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
default_filter = "completed"
icon_theme = "ascii"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.filter(), Filter::Completed);
    assert_eq!(config.ui.icon_theme, IconTheme::Ascii);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.show_key_hints);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_filter, default_config.ui.default_filter);
    assert_eq!(config.ui.icon_theme, default_config.ui.icon_theme);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let temp_dir = std::env::temp_dir().join("tasklist_test_invalid_config");
    std::fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    std::fs::write(&config_path, "[ui]\ndefault_filter = \"someday\"\n").unwrap();

    let err = Config::load_from_file(&config_path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("someday"), "unexpected error: {}", message);

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("tasklist_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // The generated file loads back into a valid config
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# tasklist configuration file"));
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.ui.default_filter, "all");

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
