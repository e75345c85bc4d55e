//! Base HTTP client with shared logic

use crate::infrastructure::model::types::ModelError;
use crate::types::ApiKey;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Base HTTP client with shared functionality
#[derive(Clone)]
pub struct HttpClientBase {
    pub id: String,
    pub endpoint: String,
    pub http: Client,
}

impl HttpClientBase {
    pub fn new(id: impl Into<String>, endpoint: impl Into<String>, http: Client) -> Self {
        Self {
            id: id.into(),
            endpoint: endpoint.into(),
            http,
        }
    }

    /// Build URL from endpoint and path
    pub fn build_url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Get JSON without auth (local Ollama endpoints)
    pub async fn get_no_auth<Res>(&self, url: &str) -> Result<Res, ModelError>
    where
        Res: DeserializeOwned,
    {
        self.http
            .get(url)
            .send()
            .await
            .map_err(|e| ModelError::network(&self.id, e))?
            .error_for_status()
            .map_err(|e| ModelError::network(&self.id, e))?
            .json()
            .await
            .map_err(|e| ModelError::network(&self.id, e))
    }

    /// Post JSON with bearer auth
    pub async fn post_with_bearer<Req, Res>(
        &self,
        url: &str,
        api_key: &ApiKey,
        body: &Req,
    ) -> Result<Res, ModelError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        self.http
            .post(url)
            .bearer_auth(api_key.expose())
            .json(body)
            .send()
            .await
            .map_err(|e| ModelError::network(&self.id, e))?
            .error_for_status()
            .map_err(|e| ModelError::network(&self.id, e))?
            .json()
            .await
            .map_err(|e| ModelError::network(&self.id, e))
    }
}
