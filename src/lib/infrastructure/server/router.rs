use super::docs::ApiDoc;
use super::error::ServerError;
use super::routes;
use super::state::ServerState;
use crate::infrastructure::model::ModelProvider;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn build_router<P>(state: Arc<ServerState<P>>, cors_origins: &[String]) -> Router
where
    P: ModelProvider + 'static,
{
    let api = ApiDoc::openapi();

    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| {
            if origin.trim() == "*" {
                warn!("Wildcard CORS origin not supported, list origins explicitly");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = origin.as_str(), "Ignoring invalid CORS origin");
                    None
                }
            }
        })
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/api/models", get(routes::models::list_models_handler::<P>))
        .route(
            "/api/sessions",
            post(routes::sessions::create_session_handler::<P>),
        )
        .route(
            "/api/sessions/{id}",
            get(routes::sessions::get_session_handler::<P>)
                .delete(routes::sessions::end_session_handler::<P>),
        )
        .route(
            "/api/sessions/{id}/messages",
            post(routes::sessions::send_message_handler::<P>),
        )
        .layer(cors);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", api))
        .route(
            "/",
            get(routes::page::page_handler::<P>).post(routes::page::page_event_handler::<P>),
        )
        .route(
            "/session/end",
            post(routes::page::end_session_handler::<P>),
        )
        .route("/settings", get(routes::page::settings_handler::<P>))
        .merge(api_routes)
        .with_state(state)
}

pub(super) async fn serve<P>(
    state: Arc<ServerState<P>>,
    addr: SocketAddr,
    cors_origins: &[String],
    session_ttl: Duration,
) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    info!(%addr, "Binding playground server");

    let sweeper = spawn_session_sweeper(Arc::clone(&state), session_ttl);
    let app = build_router(state, cors_origins);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "Playground ready to accept connections");

    let result = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve);

    sweeper.abort();
    info!("Playground server stopped");
    result
}

fn spawn_session_sweeper<P>(
    state: Arc<ServerState<P>>,
    ttl: Duration,
) -> tokio::task::JoinHandle<()>
where
    P: ModelProvider + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(
            crate::constants::SESSION_SWEEP_INTERVAL_SECS,
        ));
        loop {
            interval.tick().await;
            state.chat().sessions().purge_idle(ttl).await;
        }
    })
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
