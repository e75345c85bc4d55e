//! Model types - Request, Response, and Error types

use crate::types::{ApiKey, ChatMessage, ModelName};
use reqwest::StatusCode;
use thiserror::Error;

/// Chat completion request for the inference server
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub model: ModelName,
    pub messages: Vec<ChatMessage>,
    pub api_key: ApiKey,
}

/// Chat completion reply from the inference server
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub message: ChatMessage,
}

impl ModelResponse {
    pub fn new(content: String) -> Self {
        Self {
            message: ChatMessage::assistant(content),
        }
    }
}

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request to provider '{provider}' failed: {source}")]
    Network {
        provider: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ModelError {
    pub fn network(provider: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            provider: provider.into(),
            source,
        }
    }

    /// Short, non-technical description suitable for log summaries
    pub fn summary(&self) -> String {
        match self {
            ModelError::Network { provider, source } => {
                if source.is_connect() {
                    format!("cannot connect to '{provider}'")
                } else if source.is_timeout() {
                    format!("request to '{provider}' timed out")
                } else if source.is_decode() {
                    format!("'{provider}' sent an unreadable response")
                } else if let Some(status) = source.status() {
                    match status {
                        StatusCode::NOT_FOUND => format!("endpoint on '{provider}' not found"),
                        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                            format!("'{provider}' rejected the credential")
                        }
                        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                            format!("'{provider}' is currently unavailable")
                        }
                        _ => format!("request to '{provider}' failed: {}", status.as_u16()),
                    }
                } else {
                    format!("network error talking to '{provider}'")
                }
            }
        }
    }
}
