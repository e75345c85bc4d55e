//! Chat session loop
//!
//! [`ChatLoop::handle`] is the page event handler: it receives the session
//! and the user's action, runs credential loading and model listing for the
//! cycle, applies the action, and returns the [`PageView`] to render.
//! [`ChatLoop::send`] and [`ChatLoop::models`] expose the same steps to the
//! JSON API.

use super::credential::CredentialLoader;
use super::errors::ChatError;
use super::page::{Banner, PageView, preselect};
use super::session::{SessionHandle, SessionId, SessionStore};
use crate::infrastructure::model::{ModelError, ModelProvider, ModelRequest, ModelResponse};
use crate::types::{ApiKey, ChatMessage, ModelName};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A single user interaction with the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    PageLoad,
    SelectModel { model: String },
    Submit { model: Option<String>, prompt: String },
}

pub struct ChatLoop<P: ModelProvider> {
    provider: Arc<P>,
    credentials: CredentialLoader,
    sessions: SessionStore,
}

impl<P: ModelProvider> ChatLoop<P> {
    pub fn new(provider: Arc<P>, credentials: CredentialLoader, sessions: SessionStore) -> Self {
        Self {
            provider,
            credentials,
            sessions,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn credentials(&self) -> &CredentialLoader {
        &self.credentials
    }

    pub async fn handle(&self, session: &SessionHandle, action: UserAction) -> PageView {
        let (api_key, models) = match self.prepare().await {
            Ok(prepared) => prepared,
            Err(error) => return PageView::halted(&error),
        };

        let mut banners = Vec::new();
        if models.is_empty() {
            debug!(?action, "No models installed, skipping action");
        } else {
            let result = match action {
                UserAction::PageLoad => Ok(()),
                UserAction::SelectModel { model } => self.select(session, &models, model).await,
                // A blank send from a form that changed the selector still
                // records the selection.
                UserAction::Submit {
                    model: Some(model),
                    prompt,
                } if prompt.trim().is_empty() && !model.trim().is_empty() => {
                    self.select(session, &models, model).await
                }
                UserAction::Submit { model, prompt } => self
                    .submit(session, &models, model, prompt, api_key)
                    .await
                    .map(|_| ()),
            };
            match result {
                Ok(()) | Err(ChatError::EmptyPrompt) => {}
                Err(error) => banners.push(Banner::from(&error)),
            }
        }

        let session = session.lock().await;
        PageView::build(&session, &models, banners)
    }

    /// Lists installed models after checking the credential.
    pub async fn models(&self) -> Result<Vec<ModelName>, ChatError> {
        self.prepare().await.map(|(_, models)| models)
    }

    /// Runs one submission and returns the assistant reply.
    pub async fn send(
        &self,
        session: &SessionHandle,
        model: Option<String>,
        prompt: String,
    ) -> Result<ChatMessage, ChatError> {
        if prompt.trim().is_empty() {
            return Err(ChatError::EmptyPrompt);
        }
        let (api_key, models) = self.prepare().await?;
        if models.is_empty() {
            return Err(ChatError::NoModelsAvailable);
        }
        self.submit(session, &models, model, prompt, api_key).await
    }

    async fn prepare(&self) -> Result<(ApiKey, Vec<ModelName>), ChatError> {
        let api_key = self.credentials.load()?;
        let models = self.provider.list_models().await.map_err(|source| {
            error!(error = %source, summary = %source.summary(), "Model listing failed");
            ChatError::ModelListFailure(source)
        })?;
        Ok((api_key, models))
    }

    async fn select(
        &self,
        session: &SessionHandle,
        models: &[ModelName],
        requested: String,
    ) -> Result<(), ChatError> {
        let model = resolve_model(models, Some(requested), None)?;
        let mut session = session.lock().await;
        debug!(session_id = %session.id(), model = model.as_str(), "Model selected");
        session.select_model(model);
        Ok(())
    }

    async fn submit(
        &self,
        session: &SessionHandle,
        models: &[ModelName],
        requested: Option<String>,
        prompt: String,
        api_key: ApiKey,
    ) -> Result<ChatMessage, ChatError> {
        if prompt.trim().is_empty() {
            return Err(ChatError::EmptyPrompt);
        }

        let (session_id, model, messages) = {
            let mut session = session.lock().await;
            let model = resolve_model(models, requested, session.selected_model())?;
            let messages = session.begin_turn(model.clone(), prompt)?;
            (session.id(), model, messages)
        };

        info!(
            session_id = %session_id,
            model = model.as_str(),
            history = messages.len(),
            "Submitting chat turn"
        );

        // Once issued, the request runs to completion and settles the turn even
        // if the caller stops waiting.
        let provider = Arc::clone(&self.provider);
        let owner = Arc::clone(session);
        let turn = tokio::spawn(async move {
            let result = provider
                .chat(ModelRequest {
                    model,
                    messages,
                    api_key,
                })
                .await;
            settle_turn(&owner, session_id, result).await
        });

        match turn.await {
            Ok(outcome) => outcome,
            Err(join_error) => {
                error!(session_id = %session_id, error = %join_error, "Chat turn task aborted");
                session.lock().await.fail_turn();
                Err(ChatError::TurnInterrupted)
            }
        }
    }
}

async fn settle_turn(
    session: &SessionHandle,
    session_id: SessionId,
    result: Result<ModelResponse, ModelError>,
) -> Result<ChatMessage, ChatError> {
    let mut session = session.lock().await;
    match result {
        Ok(response) => {
            let reply = response.message;
            session.complete_turn(reply.clone());
            info!(
                session_id = %session_id,
                transcript = session.transcript().len(),
                "Chat turn completed"
            );
            Ok(reply)
        }
        Err(source) => {
            session.fail_turn();
            warn!(
                session_id = %session_id,
                error = %source,
                summary = %source.summary(),
                "Chat turn failed"
            );
            Err(ChatError::CompletionFailure(source))
        }
    }
}

/// Picks the model for an action: an explicitly requested model must be
/// installed; otherwise the remembered or first listed model is used.
fn resolve_model(
    models: &[ModelName],
    requested: Option<String>,
    remembered: Option<&ModelName>,
) -> Result<ModelName, ChatError> {
    match requested.map(|name| name.trim().to_string()).filter(|name| !name.is_empty()) {
        Some(name) => {
            let name = ModelName::from(name);
            if models.contains(&name) {
                Ok(name)
            } else {
                Err(ChatError::unknown_model(name.as_str()))
            }
        }
        None => preselect(models, remembered).ok_or(ChatError::NoModelsAvailable),
    }
}
