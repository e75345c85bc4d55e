//! Session-scoped chat state
//!
//! Each browser tab (or API client) owns one [`Session`], addressed by a
//! [`SessionId`]. Sessions are created on first contact and destroyed
//! explicitly or after sitting idle past the configured TTL.

use super::errors::ChatError;
use crate::types::{ChatMessage, ModelName, Transcript};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Whether a completion request is in flight for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    AwaitingResponse,
}

#[derive(Debug)]
pub struct Session {
    id: SessionId,
    transcript: Transcript,
    selected_model: Option<ModelName>,
    state: LoopState,
    created_at: DateTime<Utc>,
    last_active: Instant,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            transcript: Transcript::new(),
            selected_model: None,
            state: LoopState::Idle,
            created_at: Utc::now(),
            last_active: Instant::now(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn selected_model(&self) -> Option<&ModelName> {
        self.selected_model.as_ref()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn idle_for(&self) -> Duration {
        self.last_active.elapsed()
    }

    pub fn touch(&mut self) {
        self.last_active = Instant::now();
    }

    pub fn select_model(&mut self, model: ModelName) {
        self.selected_model = Some(model);
        self.touch();
    }

    /// `Idle -> AwaitingResponse`: records the user message and returns the
    /// history to send upstream.
    pub fn begin_turn(
        &mut self,
        model: ModelName,
        prompt: String,
    ) -> Result<Vec<ChatMessage>, ChatError> {
        if self.state == LoopState::AwaitingResponse {
            return Err(ChatError::SessionBusy);
        }
        self.transcript.push(ChatMessage::user(prompt));
        self.selected_model = Some(model);
        self.state = LoopState::AwaitingResponse;
        self.touch();
        Ok(self.transcript.messages().to_vec())
    }

    /// `AwaitingResponse -> Idle` with a reply.
    pub fn complete_turn(&mut self, reply: ChatMessage) {
        self.transcript.push(reply);
        self.state = LoopState::Idle;
        self.touch();
    }

    /// `AwaitingResponse -> Idle` without a reply; the user message stays.
    pub fn fail_turn(&mut self) {
        self.state = LoopState::Idle;
        self.touch();
    }
}

pub type SessionHandle = Arc<Mutex<Session>>;

/// Explicit session-id to session-state map shared by all handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> (SessionId, SessionHandle) {
        let id = SessionId::new();
        let handle = Arc::new(Mutex::new(Session::new(id)));
        self.sessions.write().await.insert(id, Arc::clone(&handle));
        info!(session_id = %id, "Session created");
        (id, handle)
    }

    pub async fn get(&self, id: &SessionId) -> Option<SessionHandle> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Returns the known session for `id`, or a fresh one when the id is
    /// absent or stale. The flag is `true` when a session was created.
    pub async fn get_or_create(&self, id: Option<SessionId>) -> (SessionId, SessionHandle, bool) {
        if let Some(id) = id {
            if let Some(handle) = self.get(&id).await {
                return (id, handle, false);
            }
            debug!(session_id = %id, "Unknown session id, starting a new session");
        }
        let (id, handle) = self.create().await;
        (id, handle, true)
    }

    pub async fn remove(&self, id: &SessionId) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!(session_id = %id, "Session ended");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Destroys sessions idle for at least `ttl`. Sessions that are locked or
    /// awaiting a response are kept.
    pub async fn purge_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => session.state() == LoopState::AwaitingResponse || session.idle_for() < ttl,
            Err(_) => true,
        });
        let purged = before - sessions.len();
        if purged > 0 {
            info!(purged, remaining = sessions.len(), "Purged idle sessions");
        }
        purged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_round_trips_through_display() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn begin_turn_appends_user_message_before_reply() {
        let mut session = Session::new(SessionId::new());
        let history = session
            .begin_turn(ModelName::from("llama3"), "hello".into())
            .unwrap();

        assert_eq!(history, vec![ChatMessage::user("hello")]);
        assert_eq!(session.state(), LoopState::AwaitingResponse);
        assert_eq!(session.selected_model(), Some(&ModelName::from("llama3")));
    }

    #[test]
    fn busy_session_refuses_second_turn() {
        let mut session = Session::new(SessionId::new());
        session
            .begin_turn(ModelName::from("llama3"), "one".into())
            .unwrap();
        let second = session.begin_turn(ModelName::from("llama3"), "two".into());

        assert!(matches!(second, Err(ChatError::SessionBusy)));
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn failed_turn_keeps_user_message() {
        let mut session = Session::new(SessionId::new());
        session
            .begin_turn(ModelName::from("llama3"), "hello".into())
            .unwrap();
        session.fail_turn();

        assert_eq!(session.state(), LoopState::Idle);
        assert_eq!(session.transcript().messages(), &[ChatMessage::user("hello")]);
    }

    #[tokio::test]
    async fn get_or_create_reuses_known_and_replaces_stale_ids() {
        let store = SessionStore::new();
        let (id, _, created) = store.get_or_create(None).await;
        assert!(created);

        let (same, _, created) = store.get_or_create(Some(id)).await;
        assert_eq!(same, id);
        assert!(!created);

        let stale = SessionId::new();
        let (fresh, _, created) = store.get_or_create(Some(stale)).await;
        assert!(created);
        assert_ne!(fresh, stale);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn remove_destroys_session() {
        let store = SessionStore::new();
        let (id, _) = store.create().await;
        assert!(store.remove(&id).await);
        assert!(!store.remove(&id).await);
        assert!(store.get(&id).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn purge_idle_spares_active_and_in_flight_sessions() {
        let store = SessionStore::new();
        let (idle, _) = store.create().await;
        let (busy, busy_handle) = store.create().await;
        busy_handle
            .lock()
            .await
            .begin_turn(ModelName::from("llama3"), "hi".into())
            .unwrap();

        tokio::time::advance(Duration::from_secs(120)).await;
        let (fresh, _) = store.create().await;

        let purged = store.purge_idle(Duration::from_secs(60)).await;

        assert_eq!(purged, 1);
        assert!(store.get(&idle).await.is_none());
        assert!(store.get(&busy).await.is_some());
        assert!(store.get(&fresh).await.is_some());
    }
}
