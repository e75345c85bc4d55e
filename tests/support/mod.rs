//! Shared fixtures for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use ollama_playground::application::{ChatLoop, CredentialLoader, SessionStore};
use ollama_playground::model::{ModelError, ModelProvider, ModelRequest, ModelResponse};
use ollama_playground::types::ModelName;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

pub const CREDENTIAL_ENV: &str = "OLLAMA_API_KEY";

/// A `reqwest::Error` built without touching the network.
pub fn transport_error(provider: &str) -> ModelError {
    let source = reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("invalid URL must fail to build");
    ModelError::network(provider, source)
}

pub enum Reply {
    Text(String),
    Fail,
}

/// Scripted provider that records every call.
#[derive(Default)]
pub struct MockProvider {
    models: Mutex<Option<Vec<ModelName>>>,
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ModelRequest>>,
    list_calls: AtomicUsize,
    chat_calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl MockProvider {
    pub fn with_models(models: &[&str]) -> Self {
        Self {
            models: Mutex::new(Some(models.iter().map(|m| ModelName::from(*m)).collect())),
            ..Self::default()
        }
    }

    /// Model listing fails on every call
    pub fn failing_inventory() -> Self {
        Self::default()
    }

    /// Chat calls block until the returned gate is notified
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Text(text.to_string()));
        self
    }

    pub fn fail_next_chat(self) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Fail);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelProvider for MockProvider {
    async fn list_models(&self) -> Result<Vec<ModelName>, ModelError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let models = self.models.lock().unwrap().clone();
        match models {
            Some(models) => Ok(models),
            None => Err(transport_error("ollama")),
        }
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(ModelResponse::new(text)),
            Some(Reply::Fail) | None => Err(transport_error("ollama-openai")),
        }
    }
}

pub fn credentials(value: Option<&str>) -> CredentialLoader {
    let mut env = HashMap::new();
    if let Some(value) = value {
        env.insert(CREDENTIAL_ENV.to_string(), value.to_string());
    }
    CredentialLoader::new(CREDENTIAL_ENV, Arc::new(env))
}

pub fn chat_loop(provider: Arc<MockProvider>, credential: Option<&str>) -> ChatLoop<MockProvider> {
    ChatLoop::new(provider, credentials(credential), SessionStore::new())
}
