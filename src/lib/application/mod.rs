//! # Application Module
//!
//! Session state and the chat loop that drives the playground page.
//!
//! ## Submodules
//!
//! - [`credential`] - Reads the inference server credential from the environment
//! - [`session`] - Per-session transcript and the session store
//! - [`chat`] - The event handler invoked once per user action
//! - [`page`] - Render instructions returned by the event handler
//! - [`errors`] - Conditions surfaced to the user

pub mod chat;
pub mod credential;
pub mod errors;
pub mod page;
pub mod session;

pub use chat::{ChatLoop, UserAction};
pub use credential::{CredentialLoader, CredentialSource, ProcessEnv};
pub use errors::ChatError;
pub use page::PageView;
pub use session::{SessionHandle, SessionId, SessionStore};
