//! Model infrastructure module
//!
//! Talks to a local Ollama instance.
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - ModelProvider trait
//! - `clients` - HTTP clients for the native and OpenAI-compatible APIs
//! - `provider` - LocalModelProvider combining both clients

pub mod clients;
pub mod provider;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use provider::LocalModelProvider;
pub use traits::ModelProvider;
pub use types::{ModelError, ModelRequest, ModelResponse};
