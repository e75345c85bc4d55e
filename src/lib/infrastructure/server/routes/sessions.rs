use super::super::dto::{ErrorResponse, SendMessageRequest, SendMessageResponse, SessionResponse};
use super::super::error::ApiError;
use super::super::state::ServerState;
use crate::application::{ChatError, SessionHandle, SessionId};
use crate::infrastructure::model::ModelProvider;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::info;

async fn lookup<P: ModelProvider>(
    state: &ServerState<P>,
    raw_id: &str,
) -> Result<(SessionId, SessionHandle), ApiError> {
    let id: SessionId = raw_id
        .parse()
        .map_err(|_| ChatError::session_not_found(raw_id))?;
    let handle = state
        .chat()
        .sessions()
        .get(&id)
        .await
        .ok_or_else(|| ChatError::session_not_found(raw_id))?;
    Ok((id, handle))
}

#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = "sessions",
    responses(
        (status = 201, description = "Session created", body = SessionResponse)
    )
)]
pub async fn create_session_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
) -> (StatusCode, Json<SessionResponse>) {
    let (_, handle) = state.chat().sessions().create().await;
    let session = handle.lock().await;
    (StatusCode::CREATED, Json(SessionResponse::from(&*session)))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    tag = "sessions",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session transcript", body = SessionResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse)
    )
)]
pub async fn get_session_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (_, handle) = lookup(&*state, &id).await?;
    let session = handle.lock().await;
    Ok(Json(SessionResponse::from(&*session)))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    tag = "sessions",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 204, description = "Session ended"),
        (status = 404, description = "Unknown session", body = ErrorResponse)
    )
)]
pub async fn end_session_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let (id, _) = lookup(&*state, &id).await?;
    state.chat().sessions().remove(&id).await;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/messages",
    tag = "sessions",
    params(("id" = String, Path, description = "Session id")),
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Assistant reply", body = SendMessageResponse),
        (status = 400, description = "Blank prompt or unknown model", body = ErrorResponse),
        (status = 404, description = "Unknown session", body = ErrorResponse),
        (status = 409, description = "Session busy or no models installed", body = ErrorResponse),
        (status = 500, description = "Chat turn was interrupted", body = ErrorResponse),
        (status = 502, description = "Inference server failed", body = ErrorResponse),
        (status = 503, description = "Credential is not configured", body = ErrorResponse)
    )
)]
pub async fn send_message_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    Path(id): Path<String>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let (id, handle) = lookup(&*state, &id).await?;
    info!(session_id = %id, model = payload.model.as_deref(), "Received message via API");

    let reply = state
        .chat()
        .send(&handle, payload.model, payload.prompt)
        .await?;
    let transcript_length = handle.lock().await.transcript().len();

    Ok(Json(SendMessageResponse {
        session_id: id.to_string(),
        reply,
        transcript_length,
    }))
}
