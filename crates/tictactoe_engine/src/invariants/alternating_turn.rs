//! Alternating turn invariant: players take turns.

use super::Invariant;
use crate::state::GameState;

/// Invariant: consecutive moves alternate players, and the turn marker
/// follows the last move.
///
/// While the round is in progress the player to move is the opponent of
/// the last mover. Once the round is over the marker stays on the player
/// who made the final move.
pub struct AlternatingTurns;

impl Invariant<GameState> for AlternatingTurns {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match history.last() {
            None => !state.outcome().is_over(),
            Some(last) if state.outcome().is_over() => state.current_player() == last.player,
            Some(last) => state.current_player() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_fresh_state_holds() {
        assert!(AlternatingTurns::holds(&GameState::new(Player::X)));
    }

    #[test]
    fn test_double_move_violates() {
        let mut state = GameState::new(Player::X);
        state.apply_move(Position::CENTER);
        state.apply_move(Position::at(0, 0));
        assert!(!AlternatingTurns::holds(&state));
    }

    #[test]
    fn test_turn_marker_follows_last_mover() {
        let mut state = GameState::new(Player::O);
        state.apply_move(Position::CENTER);
        assert!(!AlternatingTurns::holds(&state));
        state.pass_turn();
        assert!(AlternatingTurns::holds(&state));
    }
}
