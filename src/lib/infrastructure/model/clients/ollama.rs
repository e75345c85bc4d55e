//! Ollama native API client (model inventory)

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::infrastructure::model::types::ModelError;
use crate::types::ModelName;

/// Client for the native Ollama API
#[derive(Clone)]
pub struct OllamaClient {
    base: HttpClientBase,
}

impl OllamaClient {
    pub fn with_client(endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            base: HttpClientBase::new("ollama", endpoint, http),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.base.endpoint
    }

    /// Lists installed models via `GET /api/tags`, preserving server order.
    pub async fn list_models(&self) -> Result<Vec<ModelName>, ModelError> {
        let url = self.base.build_url("/api/tags");
        info!(provider = self.base.id.as_str(), url = %url, "Listing installed models");

        let response: TagsResponse = self.base.get_no_auth(&url).await?;
        let models: Vec<ModelName> = response
            .models
            .unwrap_or_default()
            .into_iter()
            .map(|model| ModelName::from(model.name))
            .collect();

        debug!(count = models.len(), "Received model inventory");
        Ok(models)
    }
}

/// Raw `/api/tags` response shape
#[derive(Debug, Deserialize)]
struct TagsResponse {
    models: Option<Vec<TagModel>>,
}

#[derive(Debug, Deserialize)]
struct TagModel {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_without_models_field_parse_as_empty() {
        let parsed: TagsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.models.unwrap_or_default().is_empty());
    }

    #[test]
    fn tags_ignore_extra_fields() {
        let parsed: TagsResponse = serde_json::from_str(
            r#"{"models":[{"name":"llama3:latest","size":4661224676,"details":{"family":"llama"}}]}"#,
        )
        .unwrap();
        let names: Vec<_> = parsed.models.unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["llama3:latest"]);
    }
}
