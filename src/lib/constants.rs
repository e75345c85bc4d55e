//! Application constants
//!
//! Single source of truth for paths, endpoints and UI strings.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/playground.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable holding the inference server credential
pub const DEFAULT_CREDENTIAL_ENV: &str = "OLLAMA_API_KEY";

/// Native Ollama API root (used for `/api/tags`)
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// OpenAI-compatible API root exposed by Ollama
pub const DEFAULT_API_BASE: &str = "http://localhost:11434/v1";

/// Address the playground binds to
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Idle sessions older than this are destroyed
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

/// Interval between idle-session sweeps
pub const SESSION_SWEEP_INTERVAL_SECS: u64 = 60;

/// Cookie carrying the browser session id
pub const SESSION_COOKIE: &str = "playground_session";

pub const PAGE_TITLE: &str = "Chat Playground";
pub const PAGE_HEADER: &str = "Ollama Playground";
pub const USER_AVATAR: &str = "😎";
pub const ASSISTANT_AVATAR: &str = "🤖";
