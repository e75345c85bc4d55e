//! Conditions raised while handling a user action

use crate::infrastructure::model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("credential environment variable '{var}' is not set")]
    MissingCredential { var: String },

    #[error("failed to list models: {0}")]
    ModelListFailure(#[source] ModelError),

    #[error("no models are installed on the inference server")]
    NoModelsAvailable,

    #[error("chat completion failed: {0}")]
    CompletionFailure(#[source] ModelError),

    #[error("prompt cannot be empty")]
    EmptyPrompt,

    #[error("model '{model}' is not installed")]
    UnknownModel { model: String },

    #[error("session is awaiting a response")]
    SessionBusy,

    #[error("session '{id}' not found")]
    SessionNotFound { id: String },

    #[error("chat turn was interrupted before the reply arrived")]
    TurnInterrupted,
}

impl ChatError {
    pub fn missing_credential(var: impl Into<String>) -> Self {
        Self::MissingCredential { var: var.into() }
    }

    pub fn unknown_model(model: impl Into<String>) -> Self {
        Self::UnknownModel {
            model: model.into(),
        }
    }

    pub fn session_not_found(id: impl Into<String>) -> Self {
        Self::SessionNotFound { id: id.into() }
    }

    /// Text shown to the user in a banner or API error body
    pub fn user_message(&self) -> String {
        match self {
            ChatError::MissingCredential { var } => {
                format!("Ollama API key not found. Please set the {var} environment variable.")
            }
            ChatError::ModelListFailure(source) => format!("Failed to retrieve models: {source}"),
            ChatError::NoModelsAvailable => {
                "You have not pulled any model from Ollama yet!".to_string()
            }
            ChatError::CompletionFailure(source) => format!("An error occurred: {source}"),
            ChatError::EmptyPrompt => "Prompt cannot be empty.".to_string(),
            ChatError::UnknownModel { model } => {
                format!("Model '{model}' is not installed on the inference server.")
            }
            ChatError::SessionBusy => {
                "A response is still being generated for this session.".to_string()
            }
            ChatError::SessionNotFound { id } => format!("Session '{id}' does not exist."),
            ChatError::TurnInterrupted => {
                "The request was interrupted. Please send your message again.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_the_variable() {
        let error = ChatError::missing_credential("OLLAMA_API_KEY");
        assert_eq!(
            error.user_message(),
            "Ollama API key not found. Please set the OLLAMA_API_KEY environment variable."
        );
    }

    #[test]
    fn unknown_model_mentions_model() {
        let error = ChatError::unknown_model("mistral");
        assert!(error.user_message().contains("'mistral'"));
    }
}
