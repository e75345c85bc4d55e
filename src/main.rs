use clap::Parser;
use ollama_playground::{Cli, run};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    run(Cli::parse()).await
}
