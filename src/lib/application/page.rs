//! Render instructions produced by the chat loop

use super::errors::ChatError;
use super::session::{LoopState, Session};
use crate::constants::{ASSISTANT_AVATAR, USER_AVATAR};
use crate::types::{ChatMessage, MessageRole, ModelName};

pub const MODEL_SELECTOR_LABEL: &str = "Pick a model available locally on your system ↓";
pub const CHAT_INPUT_PLACEHOLDER: &str = "Enter a prompt here...";
pub const BUSY_INDICATOR: &str = "Model is working...";
pub const SETTINGS_LINK_LABEL: &str = "Go to settings to download a model";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLevel {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub level: BannerLevel,
    pub text: String,
}

impl Banner {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: BannerLevel::Error,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: BannerLevel::Warning,
            text: text.into(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            BannerLevel::Error => "⛔️",
            BannerLevel::Warning => "⚠️",
        }
    }
}

impl From<&ChatError> for Banner {
    fn from(error: &ChatError) -> Self {
        match error {
            ChatError::NoModelsAvailable => Banner::warning(error.user_message()),
            _ => Banner::error(error.user_message()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelector {
    pub options: Vec<ModelName>,
    pub selected: ModelName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub role: MessageRole,
    pub content: String,
}

impl Bubble {
    pub fn avatar(&self) -> &'static str {
        avatar_for(self.role)
    }
}

impl From<&ChatMessage> for Bubble {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

pub fn avatar_for(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => USER_AVATAR,
        MessageRole::Assistant => ASSISTANT_AVATAR,
    }
}

/// Everything the page shows after one event.
///
/// `selector`, `transcript` and `chat_input` are absent when the cycle was
/// halted by a missing credential or a failed model listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub banners: Vec<Banner>,
    pub selector: Option<ModelSelector>,
    pub transcript: Option<Vec<Bubble>>,
    pub chat_input: bool,
    pub settings_link: bool,
    pub busy: bool,
}

impl PageView {
    /// A cycle that stopped before model selection.
    pub fn halted(error: &ChatError) -> Self {
        Self {
            banners: vec![Banner::from(error)],
            ..Self::default()
        }
    }

    pub fn build(session: &Session, models: &[ModelName], mut banners: Vec<Banner>) -> Self {
        let selector = preselect(models, session.selected_model()).map(|selected| ModelSelector {
            options: models.to_vec(),
            selected,
        });

        let settings_link = models.is_empty();
        if settings_link {
            banners.insert(0, Banner::from(&ChatError::NoModelsAvailable));
        }

        Self {
            banners,
            chat_input: selector.is_some(),
            selector,
            transcript: Some(session.transcript().iter().map(Bubble::from).collect()),
            settings_link,
            busy: session.state() == LoopState::AwaitingResponse,
        }
    }

    pub fn is_halted(&self) -> bool {
        self.transcript.is_none()
    }
}

/// The remembered model when still installed, otherwise the first listed.
pub fn preselect(models: &[ModelName], remembered: Option<&ModelName>) -> Option<ModelName> {
    remembered
        .filter(|name| models.contains(name))
        .or_else(|| models.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::SessionId;

    fn names(values: &[&str]) -> Vec<ModelName> {
        values.iter().map(|v| ModelName::from(*v)).collect()
    }

    #[test]
    fn preselect_prefers_remembered_installed_model() {
        let models = names(&["llama3", "mistral"]);
        let remembered = ModelName::from("mistral");
        assert_eq!(preselect(&models, Some(&remembered)), Some(remembered));
    }

    #[test]
    fn preselect_falls_back_to_first_listed() {
        let models = names(&["llama3", "mistral"]);
        let gone = ModelName::from("phi3");
        assert_eq!(preselect(&models, Some(&gone)), Some(ModelName::from("llama3")));
        assert_eq!(preselect(&[], None), None);
    }

    #[test]
    fn empty_inventory_offers_settings_instead_of_input() {
        let session = Session::new(SessionId::new());
        let view = PageView::build(&session, &[], Vec::new());

        assert!(!view.chat_input);
        assert!(view.selector.is_none());
        assert!(view.settings_link);
        assert_eq!(view.banners[0].level, BannerLevel::Warning);
        assert_eq!(view.transcript, Some(Vec::new()));
    }

    #[test]
    fn halted_view_shows_only_the_banner() {
        let view = PageView::halted(&ChatError::missing_credential("OLLAMA_API_KEY"));
        assert!(view.is_halted());
        assert!(!view.chat_input);
        assert!(view.selector.is_none());
        assert_eq!(view.banners.len(), 1);
        assert_eq!(view.banners[0].icon(), "⛔️");
    }

    #[test]
    fn bubbles_carry_distinct_avatars() {
        let user = Bubble::from(&ChatMessage::user("hello"));
        let assistant = Bubble::from(&ChatMessage::assistant("hi there"));
        assert_eq!(user.avatar(), "😎");
        assert_eq!(assistant.avatar(), "🤖");
    }
}
