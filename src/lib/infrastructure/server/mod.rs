mod cookie;
mod docs;
mod dto;
mod error;
mod render;
mod router;
mod routes;
mod state;

pub use dto::{
    ErrorResponse, ModelListResponse, SendMessageRequest, SendMessageResponse, SessionResponse,
};
pub use error::{ApiError, ServerError};
pub use router::build_router;
pub use state::{ServerState, SettingsInfo};

use crate::infrastructure::model::ModelProvider;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

pub async fn serve<P>(
    state: Arc<ServerState<P>>,
    addr: SocketAddr,
    cors_origins: &[String],
    session_ttl: Duration,
) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    router::serve(state, addr, cors_origins, session_ttl).await
}
