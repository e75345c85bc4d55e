pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{chat, session};
pub use cli::Cli;
pub use config::AppConfig;
pub use domain::types;
pub use infrastructure::{model, server};

use application::{ChatLoop, CredentialLoader, SessionStore};
use infrastructure::model::LocalModelProvider;
use infrastructure::server::{ServerState, SettingsInfo};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting ollama playground");
    debug!(?cli, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let config = apply_cli_overrides(&cli, AppConfig::load(config_path)?);
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path or defaults");
    }
    debug!(
        ollama_url = config.ollama_url.as_str(),
        api_base = config.api_base.as_str(),
        credential_env = config.credential_env.as_str(),
        "Inference server endpoints resolved"
    );

    let provider = Arc::new(LocalModelProvider::from_config(&config));
    let chat = ChatLoop::new(
        provider,
        CredentialLoader::from_env(config.credential_env.clone()),
        SessionStore::new(),
    );
    let settings = SettingsInfo {
        ollama_url: config.ollama_url.clone(),
        api_base: config.api_base.clone(),
        credential_env: config.credential_env.clone(),
    };
    let state = Arc::new(ServerState::new(chat, settings));

    info!(addr = %config.bind, "Playground server starting");
    server::serve(state, config.bind, &config.cors_origins, config.session_ttl).await?;

    info!("Playground finished");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn apply_cli_overrides(cli: &Cli, mut config: AppConfig) -> AppConfig {
    if let Some(addr) = cli.addr {
        info!(%addr, "Overriding bind address based on CLI flag");
        config = config.with_bind(addr);
    }
    if let Some(url) = &cli.ollama_url {
        info!(url = url.as_str(), "Overriding Ollama endpoint based on CLI flag");
        config = config.with_ollama_url(url.clone());
    }
    if let Some(url) = &cli.api_base {
        info!(url = url.as_str(), "Overriding API base based on CLI flag");
        config = config.with_api_base(url.clone());
    }
    config
}
