//! OpenAI-compatible client implementation

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::base::HttpClientBase;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};
use crate::types::ChatMessage;

/// OpenAI-compatible client (Ollama exposes this under `/v1`)
#[derive(Clone)]
pub struct OpenAIClient {
    base: HttpClientBase,
    api_path: String,
}

impl OpenAIClient {
    pub fn with_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            base: HttpClientBase::new("ollama-openai", endpoint, http),
            api_path: "/chat/completions".to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.base.endpoint
    }

    pub async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.base.build_url(&self.api_path);

        let payload = OpenAIRequest {
            model: request.model.as_str(),
            messages: &request.messages,
            stream: false,
        };

        info!(
            provider = self.base.id.as_str(),
            model = request.model.as_str(),
            messages = request.messages.len(),
            "Sending request to OpenAI-compatible provider"
        );

        let response: OpenAIResponse = self
            .base
            .post_with_bearer(&url, &request.api_key, &payload)
            .await?;
        debug!("Received response from OpenAI-compatible provider");

        Ok(ModelResponse::new(response.into_first_content()))
    }
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIMessage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

impl OpenAIResponse {
    /// Text of the first choice; an absent field degrades to an empty reply.
    fn into_first_content(self) -> String {
        let content = self
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        match content {
            Some(content) => content,
            None => {
                warn!("Completion response carried no first-choice content");
                String::new()
            }
        }
    }
}
