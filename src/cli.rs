//! Command-line interface for grid_skirmish.

use clap::{Parser, Subcommand};

/// Grid Skirmish - turn-based board game coordinator
#[derive(Parser, Debug)]
#[command(name = "grid_skirmish")]
#[command(about = "Turn-based 5x5 board game server over WebSocket", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the WebSocket game server
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory of static client files to serve
        #[arg(long, default_value = "public")]
        static_dir: std::path::PathBuf,
    },
}
