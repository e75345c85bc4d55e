use crate::application::ChatLoop;
use crate::infrastructure::model::ModelProvider;

/// Endpoint details shown on the settings page. Never holds the credential value.
#[derive(Debug, Clone)]
pub struct SettingsInfo {
    pub ollama_url: String,
    pub api_base: String,
    pub credential_env: String,
}

pub struct ServerState<P: ModelProvider> {
    chat: ChatLoop<P>,
    settings: SettingsInfo,
}

impl<P: ModelProvider> ServerState<P> {
    pub fn new(chat: ChatLoop<P>, settings: SettingsInfo) -> Self {
        Self { chat, settings }
    }

    pub fn chat(&self) -> &ChatLoop<P> {
        &self.chat
    }

    pub fn settings(&self) -> &SettingsInfo {
        &self.settings
    }
}
