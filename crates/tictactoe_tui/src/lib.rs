//! Terminal shell for two-player tic-tac-toe.
//!
//! Wraps a [`tictactoe_engine::GameEngine`] with everything the engine
//! leaves out:
//!
//! - **Glyphs**: resolving how X and O look, optionally from an assets directory
//! - **Input**: keys and mouse clicks translated into board coordinates
//! - **Rendering**: board, turn, outcome, and score labels via `ratatui`
//! - **Config/CLI**: TOML config file with command-line overrides
//! - **Logging**: `tracing` output to a file so the screen stays clean

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod glyphs;
mod input;
mod logging;
mod terminal;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{Config, ConfigError, GlyphOverrides};
pub use glyphs::{AssetError, CELL_HEIGHT, CELL_WIDTH, Glyph, GlyphSet};
pub use input::{Command, command_for_key, move_cursor};
pub use logging::init_logging;
pub use terminal::run;
pub use ui::{BoardLayout, draw};
