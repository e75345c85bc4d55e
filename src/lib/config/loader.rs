use super::app::AppConfig;
use super::defaults;
use super::error::ConfigError;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    #[serde(default = "defaults::bind")]
    pub bind: String,
    #[serde(default = "defaults::ollama_url")]
    pub ollama_url: String,
    #[serde(default = "defaults::api_base")]
    pub api_base: String,
    #[serde(default = "defaults::credential_env")]
    pub credential_env: String,
    #[serde(default = "defaults::session_ttl_secs")]
    pub session_ttl_secs: u64,
    #[serde(default = "defaults::cors_origins")]
    pub cors_origins: Vec<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        if from_filename(ENV_PATH).is_ok() {
            debug!(path = ENV_PATH, "Loaded environment file");
        }
    });
}

/// Load and validate configuration.
///
/// Without an explicit path a missing default file yields the built-in
/// defaults; an explicitly named file must exist.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { .. }) => {
                debug!(path = CONFIG_PATH, "No configuration file, using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading playground configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(path, &content)
}

pub(super) fn parse_config(path: &Path, content: &str) -> Result<AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<AppConfig, ConfigError> {
    let bind: SocketAddr = parsed
        .bind
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidBind {
            value: parsed.bind.clone(),
            source,
        })?;

    let ollama_url = require_http_url("ollama_url", parsed.ollama_url)?;
    let api_base = require_http_url("api_base", parsed.api_base)?;

    let credential_env = parsed.credential_env.trim().to_string();
    if credential_env.is_empty() {
        return Err(ConfigError::EmptyCredentialEnv);
    }

    if parsed.session_ttl_secs == 0 {
        return Err(ConfigError::InvalidSessionTtl);
    }

    Ok(AppConfig {
        bind,
        ollama_url,
        api_base,
        credential_env,
        session_ttl: Duration::from_secs(parsed.session_ttl_secs),
        cors_origins: parsed.cors_origins,
    })
}

fn require_http_url(field: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl { field, value })
    }
}
