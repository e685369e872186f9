//! Display and logging settings.
//!
//! Board size and line length are fixed; settings only cover how the game
//! is shown and where diagnostics go.

use crate::games::gomoku::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Settings loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Color name for X marks (e.g. "blue", "lightred", "#ff8800").
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color name for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Whether the move list is shown next to the board.
    #[serde(default = "default_show_history")]
    show_history: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("five_in_a_row.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

fn default_show_history() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            x_color: default_x_color(),
            o_color: default_o_color(),
            show_history: default_show_history(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!("Settings loaded successfully");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.palette()?;
        Ok(settings)
    }

    /// Loads settings from `path` if given, falling back to defaults when
    /// no path is given or the file does not exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                debug!(path = %path.display(), "Settings file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolves the configured mark colors.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color(&self.x_color)?,
            o: parse_color(&self.o_color)?,
        })
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::new(format!("Unknown color: {}", name)))
}

/// Colors used to draw each player's marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
}

impl Palette {
    /// Color for a player's marks.
    pub fn color(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
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
    fn test_defaults_resolve() {
        let settings = Settings::default();
        assert_eq!(settings.palette().unwrap(), Palette::default());
        assert!(*settings.show_history());
    }

    #[test]
    fn test_palette_covers_every_player() {
        use strum::IntoEnumIterator;
        let palette = Palette::default();
        let colors: Vec<_> = Player::iter().map(|p| palette.color(p)).collect();
        assert_eq!(colors, vec![Color::Blue, Color::Red]);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings = Settings::from_toml("x_color = \"green\"\n").unwrap();
        assert_eq!(settings.palette().unwrap().x, Color::Green);
        assert_eq!(settings.o_color(), "red");
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        let err = Settings::from_toml("o_color = \"no-such-color\"\n").unwrap_err();
        assert!(err.message.contains("no-such-color"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = Settings::from_toml("show_history = maybe").unwrap_err();
        assert!(err.message.starts_with("Failed to parse settings"));
    }
}
