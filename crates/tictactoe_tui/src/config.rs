//! Configuration for the terminal game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::Player;
use tracing::{debug, instrument};

use crate::cli::Cli;

/// Config file read when `--config` is not given and the file exists.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Seed for the starting-player draw. Entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Fixed starter for the opening round. Random when absent.
    #[serde(default)]
    starting_player: Option<Player>,

    /// Directory searched for X and O glyph files.
    #[serde(default)]
    assets_dir: Option<PathBuf>,

    /// Log output file.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Inline glyph text, taking precedence over files and built-ins.
    #[serde(default)]
    glyphs: GlyphOverrides,
}

/// Inline glyph text for each mark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GlyphOverrides {
    /// Glyph for X.
    #[serde(default)]
    x: Option<String>,
    /// Glyph for O.
    #[serde(default)]
    o: Option<String>,
}

impl GlyphOverrides {
    /// Override text for `player`, if any.
    pub fn for_player(&self, player: Player) -> Option<&str> {
        match player {
            Player::X => self.x.as_deref(),
            Player::O => self.o.as_deref(),
        }
    }
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            starting_player: None,
            assets_dir: None,
            log_file: default_log_file(),
            glyphs: GlyphOverrides::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the effective configuration for a CLI invocation.
    ///
    /// An explicit `--config` must exist. Otherwise [`DEFAULT_CONFIG_PATH`]
    /// is read when present and defaults are used when not. CLI flags
    /// override file values.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };

        Ok(base.with_overrides(cli))
    }

    /// Applies CLI flags over this configuration.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(player) = cli.first {
            self.starting_player = Some(player);
        }
        if let Some(dir) = &cli.assets_dir {
            self.assets_dir = Some(dir.clone());
        }
        if let Some(file) = &cli.log_file {
            self.log_file = file.clone();
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for player in Player::ALL {
            if let Some(text) = self.glyphs.for_player(player)
                && text.trim().is_empty()
            {
                return Err(ConfigError::new(format!("Glyph for {} must not be empty", player)));
            }
        }
        Ok(())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
