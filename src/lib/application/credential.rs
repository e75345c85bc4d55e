//! Credential loading from the process environment

use super::errors::ChatError;
use crate::types::ApiKey;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use tracing::warn;

/// Where credential values are read from
pub trait CredentialSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the live process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl CredentialSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl CredentialSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Reads one named credential on every render cycle.
#[derive(Clone)]
pub struct CredentialLoader {
    var_name: String,
    source: Arc<dyn CredentialSource>,
}

impl CredentialLoader {
    pub fn new(var_name: impl Into<String>, source: Arc<dyn CredentialSource>) -> Self {
        Self {
            var_name: var_name.into(),
            source,
        }
    }

    pub fn from_env(var_name: impl Into<String>) -> Self {
        Self::new(var_name, Arc::new(ProcessEnv))
    }

    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    /// Absent, empty and whitespace-only values all count as missing.
    pub fn load(&self) -> Result<ApiKey, ChatError> {
        match self.source.var(&self.var_name) {
            Some(value) if !value.trim().is_empty() => Ok(ApiKey::new(value)),
            _ => {
                warn!(var = self.var_name.as_str(), "Credential not found in environment");
                Err(ChatError::missing_credential(&self.var_name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader(entries: &[(&str, &str)]) -> CredentialLoader {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CredentialLoader::new("OLLAMA_API_KEY", Arc::new(map))
    }

    #[test]
    fn returns_value_when_present() {
        let key = loader(&[("OLLAMA_API_KEY", "ollama")]).load().unwrap();
        assert_eq!(key.expose(), "ollama");
    }

    #[test]
    fn absent_value_is_missing() {
        let result = loader(&[("OTHER", "x")]).load();
        assert!(matches!(result, Err(ChatError::MissingCredential { var }) if var == "OLLAMA_API_KEY"));
    }

    #[test]
    fn blank_value_is_missing() {
        assert!(loader(&[("OLLAMA_API_KEY", "")]).load().is_err());
        assert!(loader(&[("OLLAMA_API_KEY", "   ")]).load().is_err());
    }
}
