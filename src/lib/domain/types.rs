use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single transcript entry. Only role and content travel on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Ordered chat history for one session.
///
/// Append-only: entries are never reordered, edited or removed while the
/// owning session is alive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

/// Opaque model identifier as reported by the inference server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ModelName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ModelName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Credential sent as a bearer token to the inference server.
///
/// `Debug` is redacted so the value never reaches the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_as_role_content_pair() {
        let message = ChatMessage::user("hello");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "user", "content": "hello" }));
    }

    #[test]
    fn transcript_keeps_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::user("first"));
        transcript.push(ChatMessage::assistant("second"));
        transcript.push(ChatMessage::user("first"));

        let contents: Vec<_> = transcript.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "first"]);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("sk-local-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        assert_eq!(key.expose(), "sk-local-secret");
    }

    #[test]
    fn model_name_is_transparent_on_the_wire() {
        let name = ModelName::from("llama3:8b");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"llama3:8b\"");
    }
}
