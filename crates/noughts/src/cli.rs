//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player noughts and crosses in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses with mouse input", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "noughts.toml", global = true)]
    pub config: PathBuf,

    /// Log filter override, e.g. "debug" or "noughts_rules=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of moves headlessly and print the result
    Replay {
        /// Moves as ROW,COL pairs (zero-based), X first
        #[arg(value_parser = parse_cell, required = true)]
        moves: Vec<(usize, usize)>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses `"row,col"` into a coordinate pair.
///
/// Range is not checked here; the engine reports off-board cells.
pub fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got {:?}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row in {:?}: {}", s, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column in {:?}: {}", s, e))?;
    Ok((row, col))
}
