//! Grid Skirmish - turn-based board game coordinator over WebSocket.

use anyhow::Result;
use clap::Parser;
use grid_skirmish::cli::{Cli, Command};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            host,
            static_dir,
        } => run_server(host, port, static_dir).await,
    }
}

/// Run the WebSocket game server
async fn run_server(host: String, port: u16, static_dir: PathBuf) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Grid Skirmish server");
    info!(port, "Server will listen on http://{}:{}", host, port);

    grid_skirmish::server::serve(&host, port, static_dir).await
}
