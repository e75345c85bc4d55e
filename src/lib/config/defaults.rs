use crate::constants::{
    DEFAULT_API_BASE, DEFAULT_BIND, DEFAULT_CREDENTIAL_ENV, DEFAULT_OLLAMA_URL,
    DEFAULT_SESSION_TTL_SECS,
};

pub fn bind() -> String {
    DEFAULT_BIND.to_string()
}

pub fn ollama_url() -> String {
    DEFAULT_OLLAMA_URL.to_string()
}

pub fn api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

pub fn credential_env() -> String {
    DEFAULT_CREDENTIAL_ENV.to_string()
}

pub fn session_ttl_secs() -> u64 {
    DEFAULT_SESSION_TTL_SECS
}

pub fn cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}
