//! Noughts - two-player noughts and crosses in the terminal.
//!
//! The rules live in [`noughts_rules`]; this crate wraps them with
//! configuration, logging, a headless replay command and a mouse-driven
//! terminal UI.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for frame rate, logging and colours
//! - **Replay**: apply moves without a terminal and print the result
//! - **TUI**: poll input, hand actions to the engine, redraw

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{AppConfig, ConfigError, MAX_FRAME_RATE, Palette, Theme};
