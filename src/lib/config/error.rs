use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid bind address '{value}': {source}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("field '{field}' must be an http(s) URL, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    #[error("field 'credential_env' must name an environment variable")]
    EmptyCredentialEnv,

    #[error("field 'session_ttl_secs' must be greater than zero")]
    InvalidSessionTtl,
}
