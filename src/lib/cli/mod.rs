use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "playground",
    version,
    about = "Web chat playground for models served by a local Ollama instance"
)]
pub struct Cli {
    /// Configuration file path (defaults to config/playground.toml when present)
    #[arg(long, short)]
    pub config: Option<String>,
    /// Address to serve the playground on (overrides config)
    #[arg(long)]
    pub addr: Option<SocketAddr>,
    /// Native Ollama API root used to list models (overrides config)
    #[arg(long)]
    pub ollama_url: Option<String>,
    /// OpenAI-compatible API root used for chat completions (overrides config)
    #[arg(long)]
    pub api_base: Option<String>,
}
