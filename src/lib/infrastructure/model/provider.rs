//! Local model provider backed by a single Ollama instance

use async_trait::async_trait;
use reqwest::Client;

use super::clients::{OllamaClient, OpenAIClient};
use super::traits::ModelProvider;
use super::types::{ModelError, ModelRequest, ModelResponse};
use crate::config::AppConfig;
use crate::types::ModelName;

/// Lists models through the native API and chats through the
/// OpenAI-compatible one. Both clients share one connection pool.
#[derive(Clone)]
pub struct LocalModelProvider {
    inventory: OllamaClient,
    completions: OpenAIClient,
}

impl LocalModelProvider {
    pub fn new(ollama_url: impl Into<String>, api_base: impl Into<String>) -> Self {
        let http = Client::new();
        Self {
            inventory: OllamaClient::with_client(ollama_url, http.clone()),
            completions: OpenAIClient::with_client(api_base, http),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.ollama_url.clone(), config.api_base.clone())
    }

    pub fn ollama_url(&self) -> &str {
        self.inventory.endpoint()
    }

    pub fn api_base(&self) -> &str {
        self.completions.endpoint()
    }
}

#[async_trait]
impl ModelProvider for LocalModelProvider {
    async fn list_models(&self) -> Result<Vec<ModelName>, ModelError> {
        self.inventory.list_models().await
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        self.completions.chat(request).await
    }
}
