use super::dto::{
    ErrorResponse, ModelListResponse, SendMessageRequest, SendMessageResponse, SessionResponse,
};
use super::routes;
use crate::types::{ChatMessage, MessageRole};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::models::list_models_handler,
        routes::sessions::create_session_handler,
        routes::sessions::get_session_handler,
        routes::sessions::end_session_handler,
        routes::sessions::send_message_handler
    ),
    components(
        schemas(
            ErrorResponse,
            ModelListResponse,
            SessionResponse,
            SendMessageRequest,
            SendMessageResponse,
            ChatMessage,
            MessageRole
        )
    ),
    tags(
        (name = "models", description = "Models installed on the local inference server"),
        (name = "sessions", description = "Chat sessions and their transcripts")
    )
)]
pub(super) struct ApiDoc;
