// Config loading tests - AppConfig::load against files on disk

use ollama_playground::config::{AppConfig, ConfigError};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("playground.toml");
    fs::write(&path, content).expect("Failed to write playground.toml");
    path
}

#[test]
fn returns_error_when_explicit_file_not_found() {
    let result = AppConfig::load(Some(Path::new("/nonexistent/path/playground.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn loads_full_configuration() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
bind = "0.0.0.0:9000"
ollama_url = "http://gpu-box:11434"
api_base = "http://gpu-box:11434/v1"
credential_env = "PLAYGROUND_KEY"
session_ttl_secs = 120
cors_origins = ["http://localhost:3000"]
"#,
    );

    let config = AppConfig::load(Some(&path)).unwrap();

    assert_eq!(config.bind.to_string(), "0.0.0.0:9000");
    assert_eq!(config.ollama_url, "http://gpu-box:11434");
    assert_eq!(config.api_base, "http://gpu-box:11434/v1");
    assert_eq!(config.credential_env, "PLAYGROUND_KEY");
    assert_eq!(config.session_ttl, Duration::from_secs(120));
    assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "credential_env = \"MY_KEY\"\n");

    let config = AppConfig::load(Some(&path)).unwrap();

    assert_eq!(config.credential_env, "MY_KEY");
    assert_eq!(config.ollama_url, "http://localhost:11434");
    assert_eq!(config.api_base, "http://localhost:11434/v1");
    assert_eq!(config.bind.to_string(), "127.0.0.1:8501");
}

#[test]
fn rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "bind = [unterminated");

    let result = AppConfig::load(Some(&path));

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn rejects_unknown_fields() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "api_key = \"ollama\"\n");

    let result = AppConfig::load(Some(&path));

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn rejects_non_http_endpoint() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "api_base = \"localhost:11434/v1\"\n");

    let result = AppConfig::load(Some(&path));

    assert!(matches!(
        result,
        Err(ConfigError::InvalidUrl { field: "api_base", .. })
    ));
}

#[test]
fn rejects_invalid_bind_and_zero_ttl() {
    let dir = tempdir().unwrap();

    let bind = write_config(dir.path(), "bind = \"localhost\"\n");
    assert!(matches!(
        AppConfig::load(Some(&bind)),
        Err(ConfigError::InvalidBind { .. })
    ));

    let ttl = write_config(dir.path(), "session_ttl_secs = 0\n");
    assert!(matches!(
        AppConfig::load(Some(&ttl)),
        Err(ConfigError::InvalidSessionTtl)
    ));
}

#[test]
fn rejects_blank_credential_env() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "credential_env = \"  \"\n");

    let result = AppConfig::load(Some(&path));

    assert!(matches!(result, Err(ConfigError::EmptyCredentialEnv)));
}

#[test]
fn cli_overrides_replace_loaded_values() {
    let config = AppConfig::default()
        .with_bind("127.0.0.1:7000".parse().unwrap())
        .with_ollama_url("http://other:11434")
        .with_api_base("http://other:11434/v1");

    assert_eq!(config.bind.port(), 7000);
    assert_eq!(config.ollama_url, "http://other:11434");
    assert_eq!(config.api_base, "http://other:11434/v1");
}
