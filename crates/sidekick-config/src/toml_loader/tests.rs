//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::AgentRole;
use sidekick_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_sidekick_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[agent]
name = "Juniper"
role = "creative_writer"
creativity = 0.9

[provider]
model = "gpt-4o-mini"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.agent.name, "Juniper");
    assert_eq!(config.agent.role, AgentRole::CreativeWriter);
    assert!((config.agent.creativity - 0.9).abs() < f64::EPSILON);
    assert_eq!(config.provider.model, "gpt-4o-mini");
    // Defaults preserved
    assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
    assert!(config.agent.capabilities.code_assistance);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[agent]
creativity = 3.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.agent.creativity - 3.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sidekick").join("config.toml");

    assert!(create_default_config(&path).unwrap());
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.agent.name, "Assistant");
    assert_eq!(config.provider.model, "gpt-3.5-turbo");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::SidekickConfig;

    let config: SidekickConfig = toml::from_str(&default_config_toml()).unwrap();
    assert_eq!(config, SidekickConfig::default());
}

#[test]
fn default_config_path_is_reasonable() {
    // May be unavailable in stripped-down CI environments
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("sidekick"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[agent]\nname = \"Mine\"\n").unwrap();

    assert!(!create_default_config(&path).unwrap());
    assert_eq!(load_from_path(&path).unwrap().agent.name, "Mine");
}

#[test]
fn create_default_config_reports_io_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("config.toml");

    match create_default_config(&path) {
        Err(ConfigError::Io { path: failed, .. }) => assert_eq!(failed, blocker),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn unreadable_config_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    let result = load_from_path(dir.path());
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}
