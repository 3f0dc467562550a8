//! Aggregate game state.

use serde::{Deserialize, Serialize};

use crate::action::Move;
use crate::outcome::Outcome;
use crate::position::Position;
use crate::scores::Scores;
use crate::types::{Board, Player};

/// Board, turn, outcome, and scores for one game session.
///
/// Mutated only by [`GameEngine`](crate::GameEngine); shells read it to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    scores: Scores,
    history: Vec<Move>,
    round: u32,
}

impl GameState {
    /// Creates a fresh session with `starting_player` to move.
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: starting_player,
            outcome: Outcome::InProgress,
            scores: Scores::new(),
            history: Vec::new(),
            round: 1,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or who made the final move once over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the running scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Successful moves of the current round, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// 1-based number of the current round.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Places the current player's mark. Callers check legality first.
    pub(crate) fn apply_move(&mut self, pos: Position) {
        self.board.place(pos, self.current_player);
        self.history.push(Move::new(self.current_player, pos));
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }

    pub(crate) fn scores_mut(&mut self) -> &mut Scores {
        &mut self.scores
    }

    /// Clears board, history, and outcome for a new round. Scores are kept.
    pub(crate) fn start_round(&mut self, starting_player: Player) {
        self.board = Board::new();
        self.history.clear();
        self.outcome = Outcome::InProgress;
        self.current_player = starting_player;
        self.round += 1;
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }
}
