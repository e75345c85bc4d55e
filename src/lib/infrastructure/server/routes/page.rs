use super::super::cookie;
use super::super::dto::PageForm;
use super::super::render::{render_page, render_settings};
use super::super::state::ServerState;
use crate::application::UserAction;
use crate::infrastructure::model::ModelProvider;
use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;
use tracing::{debug, info};

pub async fn page_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    headers: HeaderMap,
) -> Response {
    dispatch(&*state, &headers, UserAction::PageLoad).await
}

pub async fn page_event_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    headers: HeaderMap,
    Form(form): Form<PageForm>,
) -> Response {
    let action = match form.action.as_deref() {
        Some("select") => UserAction::SelectModel {
            model: form.model.unwrap_or_default(),
        },
        _ => UserAction::Submit {
            model: form.model,
            prompt: form.prompt.unwrap_or_default(),
        },
    };
    dispatch(&*state, &headers, action).await
}

async fn dispatch<P: ModelProvider>(
    state: &ServerState<P>,
    headers: &HeaderMap,
    action: UserAction,
) -> Response {
    let chat = state.chat();
    let (session_id, session, created) = chat
        .sessions()
        .get_or_create(cookie::session_from_headers(headers))
        .await;
    debug!(session_id = %session_id, ?action, "Handling page event");

    let view = chat.handle(&session, action).await;
    let mut response = Html(render_page(&view)).into_response();
    if created {
        cookie::attach(&mut response, &cookie::session_cookie(session_id));
    }
    response
}

pub async fn end_session_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    headers: HeaderMap,
) -> Response {
    if let Some(id) = cookie::session_from_headers(&headers) {
        if state.chat().sessions().remove(&id).await {
            info!(session_id = %id, "Session ended from the page");
        }
    }
    let mut response = StatusCode::SEE_OTHER.into_response();
    response
        .headers_mut()
        .insert(LOCATION, HeaderValue::from_static("/"));
    cookie::attach(&mut response, &cookie::expired_cookie());
    response
}

pub async fn settings_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
) -> Html<String> {
    Html(render_settings(state.settings()))
}
