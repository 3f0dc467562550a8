//! Round outcome.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::types::Player;

/// Three board coordinates forming a row, column, or diagonal, in order.
pub type WinningLine = [Position; 3];

/// Result classification of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Round is ongoing.
    #[default]
    InProgress,
    /// Round ended with `player` completing `line`.
    Win {
        /// The winning player.
        player: Player,
        /// The cells forming the win, for highlighting.
        line: WinningLine,
    },
    /// Board filled with no winning line.
    Tie,
}

impl Outcome {
    /// Returns true once the round reached a terminal state.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns true if the round ended in a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "{} wins!", player),
            Outcome::Tie => write!(f, "Tie!"),
        }
    }
}
