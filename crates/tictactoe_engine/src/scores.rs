//! Running score tally across rounds.

use serde::{Deserialize, Serialize};

use crate::types::Player;

/// Win counts per player, plus the number of tied rounds.
///
/// Survives [`GameEngine::reset`](crate::GameEngine::reset); only a new
/// engine starts from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
    ties: u32,
}

impl Scores {
    /// Creates an all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Rounds that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total wins across both players.
    pub fn total(&self) -> u32 {
        self.x + self.o
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    pub(crate) fn record_tie(&mut self) {
        self.ties += 1;
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}   O: {}   Ties: {}", self.x, self.o, self.ties)
    }
}
