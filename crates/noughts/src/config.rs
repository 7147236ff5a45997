//! Application configuration, loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Highest frame rate accepted from the config file.
pub const MAX_FRAME_RATE: u32 = 240;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Redraws per second; also bounds how long the loop waits for input.
    frame_rate: u32,

    /// File the tracing subscriber writes to while the TUI owns the terminal.
    log_file: PathBuf,

    /// Fallback filter when `RUST_LOG` is unset.
    log_level: String,

    /// Colours used to draw the board.
    theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            log_file: PathBuf::from("noughts.log"),
            log_level: "info".to_string(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(frame_rate = config.frame_rate, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges and that every theme colour parses.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::new(format!(
                "frame_rate must be between 1 and {}, got {}",
                MAX_FRAME_RATE, self.frame_rate
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::new("log_level must not be empty".to_string()));
        }
        self.theme.palette()?;
        Ok(())
    }

    /// Replaces the fallback log filter, e.g. from a command-line flag.
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// How long one frame lasts at the configured rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.frame_rate.max(1)))
    }
}

/// Colour names for the board, as accepted by ratatui (`"red"`, `"#ff8800"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Crosses.
    x_color: String,
    /// Noughts.
    o_color: String,
    /// Lines between cells.
    grid_color: String,
    /// Background of the winning line.
    highlight_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: "red".to_string(),
            o_color: "blue".to_string(),
            grid_color: "gray".to_string(),
            highlight_color: "yellow".to_string(),
        }
    }
}

impl Theme {
    /// Resolves the colour names.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("theme.x_color", &self.x_color)?,
            o: parse_color("theme.o_color", &self.o_color)?,
            grid: parse_color("theme.grid_color", &self.grid_color)?,
            highlight: parse_color("theme.highlight_color", &self.highlight_color)?,
        })
    }
}

#[track_caller]
fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("{} is not a colour: {:?}", key, value)))
}

/// Resolved theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Crosses.
    pub x: Color,
    /// Noughts.
    pub o: Color,
    /// Lines between cells.
    pub grid: Color,
    /// Background of the winning line.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Red,
            o: Color::Blue,
            grid: Color::Gray,
            highlight: Color::Yellow,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_duration(), Duration::from_millis(16));
        assert_eq!(config.theme().palette().unwrap(), Palette::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("frame_rate = 30\n[theme]\nx_color = \"green\"\n").unwrap();
        assert_eq!(*config.frame_rate(), 30);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.theme().palette().unwrap().x, Color::Green);
        assert_eq!(config.theme().palette().unwrap().o, Color::Blue);
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let err = AppConfig::from_toml("frame_rate = 0").unwrap_err();
        assert!(err.message.contains("frame_rate"), "{}", err);
    }

    #[test]
    fn test_bad_colour_rejected() {
        let err = AppConfig::from_toml("[theme]\ngrid_color = \"plaid\"").unwrap_err();
        assert!(err.message.contains("theme.grid_color"), "{}", err);
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml("frame_rate = ").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
