//! Turn and scoring state machine for tic-tac-toe.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::action::Move;
use crate::error::EngineError;
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::outcome::Outcome;
use crate::position::Position;
use crate::rules;
use crate::scores::Scores;
use crate::state::GameState;
use crate::types::{Board, Mark, Player};

/// Tic-tac-toe game engine.
///
/// Holds one session's [`GameState`] and the randomness used to pick who
/// starts each round. States are `InProgress`, `Win`, and `Tie`; `Win` and
/// `Tie` are terminal until [`GameEngine::reset`].
///
/// The randomness is injected: use [`GameEngine::with_seed`] or
/// [`GameEngine::with_rng`] for reproducible rounds.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    state: GameState,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates an engine seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an engine whose starting players follow a fixed seed.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GameEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine drawing starting players from `rng`.
    ///
    /// The board starts empty, the outcome `InProgress`, scores at zero.
    #[instrument(skip(rng))]
    pub fn with_rng(mut rng: R) -> Self {
        let starter = draw_starter(&mut rng);
        info!(starter = %starter, "New game session");
        Self {
            state: GameState::new(starter),
            rng,
        }
    }

    /// Fixes who moves first in the current round.
    ///
    /// Has no effect once a move has been played. Rounds started by
    /// [`GameEngine::reset`] still draw their starter from the RNG.
    #[instrument(skip(self))]
    pub fn with_starting_player(mut self, player: Player) -> Self {
        if self.state.history().is_empty() {
            self.state.set_current_player(player);
        }
        self
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// Clicking an occupied cell, or any cell once the round is over, is a
    /// no-op that returns the unchanged outcome.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if `row` or `col` is
    /// outside `0..=2`. State is untouched in that case.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn play_move(&mut self, row: usize, col: usize) -> Result<Outcome, EngineError> {
        let pos = Position::new(row, col)?;
        Ok(self.play(pos))
    }

    /// Plays the current player's mark at an already-validated position.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn play(&mut self, pos: Position) -> Outcome {
        if self.state.outcome().is_over() {
            debug!(outcome = %self.state.outcome(), "Round is over, ignoring move");
            return *self.state.outcome();
        }

        if !self.state.board().is_empty(pos) {
            debug!(position = %pos, "Cell already occupied, ignoring move");
            return *self.state.outcome();
        }

        self.state.apply_move(pos);

        if let Some((player, line)) = rules::find_winning_line(self.state.board()) {
            info!(winner = %player, ?line, "Round won");
            self.state.set_outcome(Outcome::Win { player, line });
            self.state.scores_mut().record_win(player);
        } else if rules::is_full(self.state.board()) {
            info!("Round tied");
            self.state.set_outcome(Outcome::Tie);
            self.state.scores_mut().record_tie();
        } else {
            self.state.pass_turn();
            debug!(next = %self.state.current_player(), "Turn passed");
        }

        debug_assert!(
            <RoundInvariants as InvariantSet<GameState>>::check_all(&self.state).is_ok(),
            "round invariants violated after {}",
            pos
        );

        *self.state.outcome()
    }

    /// Starts a new round: empty board, `InProgress`, random starter.
    ///
    /// Scores carry over.
    #[instrument(skip(self), fields(round = self.state.round() + 1))]
    pub fn reset(&mut self) {
        let starter = draw_starter(&mut self.rng);
        self.state.start_round(starter);
        info!(starter = %starter, scores = %self.state.scores(), "Round reset");
    }

    /// Mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] for out-of-range input.
    pub fn cell_mark(&self, row: usize, col: usize) -> Result<Mark, EngineError> {
        Ok(self.state.board().get(Position::new(row, col)?))
    }
}

impl<R> GameEngine<R> {
    /// Outcome of the current round.
    pub fn current_outcome(&self) -> &Outcome {
        self.state.outcome()
    }

    /// Player to move. After a win or tie, the player who moved last.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Wins recorded for `player` this session.
    pub fn score_of(&self, player: Player) -> u32 {
        self.state.scores().get(player)
    }

    /// Full score tally.
    pub fn scores(&self) -> &Scores {
        self.state.scores()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Successful moves of the current round, in order.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// 1-based number of the current round.
    pub fn round(&self) -> u32 {
        self.state.round()
    }

    /// Snapshot of the whole session state.
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

fn draw_starter<R: Rng + ?Sized>(rng: &mut R) -> Player {
    if rng.gen_bool(0.5) { Player::X } else { Player::O }
}
