use super::error::ConfigError;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from playground.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the web UI listens on
    pub bind: SocketAddr,
    /// Native Ollama API root, used to list installed models
    pub ollama_url: String,
    /// OpenAI-compatible API root, used for chat completions
    pub api_base: String,
    /// Name of the environment variable holding the credential
    pub credential_env: String,
    /// Sessions idle for longer than this are destroyed
    pub session_ttl: Duration,
    /// Origins allowed to call the JSON API from a browser
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_ollama_url(mut self, url: impl Into<String>) -> Self {
        self.ollama_url = url.into();
        self
    }

    pub fn with_api_base(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: crate::constants::DEFAULT_BIND
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8501))),
            ollama_url: super::defaults::ollama_url(),
            api_base: super::defaults::api_base(),
            credential_env: super::defaults::credential_env(),
            session_ttl: Duration::from_secs(super::defaults::session_ttl_secs()),
            cors_origins: super::defaults::cors_origins(),
        }
    }
}
