use super::dto::ErrorResponse;
use crate::application::ChatError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// JSON API error: a status code plus `{ "error": ... }`
#[derive(Debug)]
pub struct ApiError(pub ChatError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ChatError::EmptyPrompt | ChatError::UnknownModel { .. } => StatusCode::BAD_REQUEST,
            ChatError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
            ChatError::SessionBusy | ChatError::NoModelsAvailable => StatusCode::CONFLICT,
            ChatError::MissingCredential { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ChatError::ModelListFailure(_) | ChatError::CompletionFailure(_) => {
                StatusCode::BAD_GATEWAY
            }
            ChatError::TurnInterrupted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(error: ChatError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.0.user_message(),
        };
        (status, Json(body)).into_response()
    }
}
