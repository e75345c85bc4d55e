//! Model traits

use super::types::{ModelError, ModelRequest, ModelResponse};
use crate::types::ModelName;
use async_trait::async_trait;

/// The two inference-server operations the playground consumes
#[async_trait]
pub trait ModelProvider: Send + Sync + 'static {
    /// List installed models in server order
    async fn list_models(&self) -> Result<Vec<ModelName>, ModelError>;

    /// Send one non-streaming chat completion request
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}
