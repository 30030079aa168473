use anyhow::Context;
use clap::Parser;
use kanji_config::Config;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod state;

use self::cli::Cli;
use self::commands::run_command;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path).context("Failed to load config")?,
        None => Config::new(),
    };

    init_tracing(&config.log_level);
    let mut state = AppState::new(config);
    tracing::debug!("Using data dir {}", state.collection.store().root().display());

    let output = run_command(&mut state, cli.command)?;
    println!("{output}");

    Ok(())
}

/// RUST_LOG wins over the configured level
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
