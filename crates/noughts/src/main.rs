//! Noughts - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{AppConfig, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config = config.with_log_level(level);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file_tracing(&config)?;
            info!(config = ?config, "Configuration resolved");
            let palette = config.theme().palette()?;
            tui::run_tui(&config, palette)
        }
        Command::Replay { moves, json } => {
            logging::init_stderr_tracing(&config);
            let game = replay::replay(&moves)?;
            println!("{}", replay::report(&game, json)?);
            Ok(())
        }
    }
}
