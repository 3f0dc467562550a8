//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::state::GameState;
use crate::types::Board;

/// Invariant: the board is exactly the replay of the round's history.
///
/// Every recorded move landed on an empty cell, and no mark exists that a
/// recorded move did not place. Rejected moves therefore leave no trace.
pub struct MonotonicBoard;

impl Invariant<GameState> for MonotonicBoard {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.place(mov.position, mov.player);
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten, only set by recorded moves)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_fresh_state_holds() {
        assert!(MonotonicBoard::holds(&GameState::new(Player::O)));
    }

    #[test]
    fn test_recorded_moves_hold() {
        let mut state = GameState::new(Player::X);
        state.apply_move(Position::CENTER);
        state.pass_turn();
        state.apply_move(Position::at(0, 0));
        assert!(MonotonicBoard::holds(&state));
    }
}
