use super::super::dto::{ErrorResponse, ModelListResponse};
use super::super::error::ApiError;
use super::super::state::ServerState;
use crate::infrastructure::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/api/models",
    tag = "models",
    responses(
        (status = 200, description = "Installed models in server order", body = ModelListResponse),
        (status = 502, description = "Inference server could not be queried", body = ErrorResponse),
        (status = 503, description = "Credential is not configured", body = ErrorResponse)
    )
)]
pub async fn list_models_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
) -> Result<Json<ModelListResponse>, ApiError> {
    let models = state.chat().models().await?;
    debug!(count = models.len(), "Serving /api/models request");
    Ok(Json(ModelListResponse {
        models: models.into_iter().map(|m| m.to_string()).collect(),
    }))
}
