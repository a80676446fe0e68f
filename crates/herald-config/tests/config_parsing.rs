use std::{env, fs};

use herald_config::loader::load_config;
use herald_config::{ConfigError, HeraldConfig};

#[test]
fn config_parsing_and_env_overrides_and_validation() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("herald.toml");

    let toml_content = r#"
[api]
url = "http://127.0.0.1:8081"
api_key = "file-key"
timeout_ms = 1000

[logging]
level = "debug"

[matching]
empty_target_wildcard = true
"#;
    fs::write(&path, toml_content).expect("write toml");

    // 1) Valid config parses
    let cfg = load_config(path.to_str()).expect("should parse config");
    assert_eq!(cfg.api.url, "http://127.0.0.1:8081");
    assert_eq!(cfg.api.api_key.as_deref(), Some("file-key"));
    assert_eq!(cfg.api.timeout_ms, 1000);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.matching.empty_target_wildcard);

    // 2) Env override should win over file
    unsafe {
        env::set_var("HERALD__API__TIMEOUT_MS", "9000");
    }
    let cfg_env = load_config(path.to_str()).expect("should parse config with env overrides");
    assert_eq!(cfg_env.api.timeout_ms, 9000);
    unsafe {
        env::remove_var("HERALD__API__TIMEOUT_MS");
    }

    // 3) Invalid config should error
    let invalid_path = dir.path().join("invalid.toml");
    fs::write(&invalid_path, "[logging]\nlevel = \"shouting\"\n").expect("write invalid toml");
    let err = load_config(invalid_path.to_str()).expect_err("expected validation error");
    assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("logging.level")));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("absent.toml");

    let cfg = load_config(path.to_str()).expect("defaults should load");
    assert_eq!(cfg.logging.level, HeraldConfig::default().logging.level);
    assert!(!cfg.matching.empty_target_wildcard);
}

#[test]
fn serialized_defaults_load_back() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("herald.toml");
    let rendered = toml::to_string_pretty(&HeraldConfig::default()).expect("render toml");
    fs::write(&path, rendered).expect("write toml");

    let cfg = HeraldConfig::load(path.to_str()).expect("should load rendered defaults");
    assert_eq!(cfg.api.url, HeraldConfig::default().api.url);
}
