//! Two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_engine::GameEngine;
use tictactoe_tui::{App, Cli, Config, GlyphSet, init_logging, run};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::resolve(&cli).context("Failed to load configuration")?;
    init_logging(config.log_file())?;
    info!(?config, "Config resolved");

    let glyphs = GlyphSet::resolve(&config).context("Failed to resolve mark glyphs")?;

    let engine = match config.seed() {
        Some(seed) => GameEngine::with_seed(*seed),
        None => GameEngine::new(),
    };
    let engine = match config.starting_player() {
        Some(player) => engine.with_starting_player(*player),
        None => engine,
    };
    info!(starter = %engine.current_player(), "Session ready");

    run(App::new(engine, glyphs))
}
