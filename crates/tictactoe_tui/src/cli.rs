//! Command-line interface for the tic-tac-toe terminal.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Player;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for choosing who starts each round
    #[arg(long)]
    pub seed: Option<u64>,

    /// Player who moves first in the opening round (X or O)
    #[arg(long, value_parser = parse_player)]
    pub first: Option<Player>,

    /// Directory holding X and O glyph files
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_player(s: &str) -> Result<Player, String> {
    match s.trim() {
        "x" | "X" => Ok(Player::X),
        "o" | "O" => Ok(Player::O),
        other => Err(format!("expected X or O, got '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--seed",
            "7",
            "--first",
            "o",
            "--assets-dir",
            "assets/characters",
        ])
        .expect("valid args");
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.first, Some(Player::O));
        assert_eq!(cli.assets_dir, Some(PathBuf::from("assets/characters")));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_rejects_unknown_player() {
        assert!(Cli::try_parse_from(["tictactoe", "--first", "Z"]).is_err());
    }
}
