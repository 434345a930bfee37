//! Strictly Minimax - command-line front end
//!
//! Play against the engine, let it play itself, or ask for the best move in
//! a position.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;
mod solve;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::EngineConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = EngineConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    debug!(?config, "Configuration resolved");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match cli.command {
        Command::Play {
            human,
            strategy,
            stats,
        } => {
            let config = config.with_overrides(human, strategy, stats);
            let status = session::play(&config, stdin.lock(), stdout.lock())?;
            info!(%status, "Session ended");
        }
        Command::Solve {
            board,
            strategy,
            json,
        } => {
            let strategy = strategy.unwrap_or(*config.strategy());
            solve::solve(&board, strategy, json, stdout.lock())?;
        }
        Command::SelfPlay { strategy, stats } => {
            let config = config.with_overrides(None, strategy, stats);
            session::self_play(&config, stdout.lock())?;
        }
    }

    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
