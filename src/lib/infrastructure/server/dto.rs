use crate::application::session::{LoopState, Session};
use crate::types::ChatMessage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ModelListResponse {
    pub models: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub awaiting_response: bool,
    pub selected_model: Option<String>,
    pub messages: Vec<ChatMessage>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id().to_string(),
            created_at: session.created_at(),
            awaiting_response: session.state() == LoopState::AwaitingResponse,
            selected_model: session.selected_model().map(|m| m.to_string()),
            messages: session.transcript().messages().to_vec(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub prompt: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageResponse {
    pub session_id: String,
    pub reply: ChatMessage,
    pub transcript_length: usize,
}

/// Fields posted by the playground page form
#[derive(Debug, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}
