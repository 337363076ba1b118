//! Tally server binary
//!
//! Usage:
//!   tally-server --db tally.db --port 8000
//!
//! The AI backend is configured from the environment (`AI_BACKEND`,
//! `OLLAMA_HOST`, `OLLAMA_MODEL`); pass `--no-ai` to disable it outright.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tally_core::ai::AIClient;
use tally_core::db::Database;
use tally_server::run_server;

#[derive(Parser)]
#[command(name = "tally-server", version, about = "Monthly spending analytics API")]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, default_value = "tally.db")]
    db: String,

    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Disable AI insights even if a backend is configured
    #[arg(long)]
    no_ai: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let db = Database::new(&cli.db)?;
    let ai = if cli.no_ai { None } else { AIClient::from_env() };

    run_server(db, ai, &cli.host, cli.port).await
}
