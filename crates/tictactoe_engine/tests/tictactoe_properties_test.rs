//! Property-based tests for the game engine.
//!
//! Random click sequences (including repeats, occupied cells, and resets)
//! must keep the engine's guarantees.

use proptest::prelude::*;
use tictactoe_engine::invariants::{AlternatingTurns, Invariant, MonotonicBoard};
use tictactoe_engine::rules::{LINES, find_winning_line, is_tie};
use tictactoe_engine::{GameEngine, Outcome, Player, Position};

#[derive(Debug, Clone, Copy)]
enum Action {
    Click(usize, usize),
    Reset,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        10 => (0usize..3, 0usize..3).prop_map(|(row, col)| Action::Click(row, col)),
        1 => Just(Action::Reset),
    ]
}

fn arb_clicks() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..3, 0usize..3), 0..30)
}

proptest! {
    #[test]
    fn board_never_holds_more_marks_than_accepted_moves(
        seed in any::<u64>(),
        clicks in arb_clicks()
    ) {
        let mut engine = GameEngine::with_seed(seed);
        let mut accepted = 0usize;

        for (row, col) in clicks {
            let before = engine.board().occupied_count();
            engine.play_move(row, col).unwrap();
            if engine.board().occupied_count() > before {
                accepted += 1;
            }
            prop_assert_eq!(engine.board().occupied_count(), accepted);
            prop_assert_eq!(engine.history().len(), accepted);
        }
    }

    #[test]
    fn rejected_moves_leave_state_unchanged(seed in any::<u64>(), clicks in arb_clicks()) {
        let mut engine = GameEngine::with_seed(seed);

        for (row, col) in clicks {
            let pos = Position::new(row, col).unwrap();
            let before = engine.state().clone();
            let illegal = !before.board().is_empty(pos) || before.outcome().is_over();

            let outcome = engine.play_move(row, col).unwrap();

            if illegal {
                prop_assert_eq!(engine.state(), &before);
                prop_assert_eq!(&outcome, before.outcome());
            }
        }
    }

    #[test]
    fn turns_alternate_and_invariants_hold(
        seed in any::<u64>(),
        actions in prop::collection::vec(arb_action(), 0..60)
    ) {
        let mut engine = GameEngine::with_seed(seed);

        for action in actions {
            match action {
                Action::Click(row, col) => {
                    let mover = engine.current_player();
                    let accepted_before = engine.history().len();
                    let outcome = engine.play_move(row, col).unwrap();
                    let accepted = engine.history().len() > accepted_before;

                    if accepted && outcome == Outcome::InProgress {
                        prop_assert_eq!(engine.current_player(), mover.opponent());
                    } else {
                        prop_assert_eq!(engine.current_player(), mover);
                    }
                }
                Action::Reset => engine.reset(),
            }
            prop_assert!(MonotonicBoard::holds(engine.state()));
            prop_assert!(AlternatingTurns::holds(engine.state()));
        }
    }

    #[test]
    fn scores_change_only_on_win_transitions(
        seed in any::<u64>(),
        actions in prop::collection::vec(arb_action(), 0..80)
    ) {
        let mut engine = GameEngine::with_seed(seed);
        let mut expected_x = 0u32;
        let mut expected_o = 0u32;

        for action in actions {
            match action {
                Action::Click(row, col) => {
                    let was_over = engine.current_outcome().is_over();
                    let outcome = engine.play_move(row, col).unwrap();
                    if !was_over {
                        match outcome.winner() {
                            Some(Player::X) => expected_x += 1,
                            Some(Player::O) => expected_o += 1,
                            None => {}
                        }
                    }
                }
                Action::Reset => {
                    engine.reset();
                    prop_assert_eq!(engine.current_outcome(), &Outcome::InProgress);
                    prop_assert_eq!(engine.board().occupied_count(), 0);
                }
            }
            prop_assert_eq!(engine.score_of(Player::X), expected_x);
            prop_assert_eq!(engine.score_of(Player::O), expected_o);
        }
    }

    #[test]
    fn outcome_agrees_with_rules(seed in any::<u64>(), clicks in arb_clicks()) {
        let mut engine = GameEngine::with_seed(seed);

        for (row, col) in clicks {
            let outcome = engine.play_move(row, col).unwrap();
            match outcome {
                Outcome::Win { player, line } => {
                    prop_assert!(LINES.contains(&line));
                    prop_assert_eq!(find_winning_line(engine.board()), Some((player, line)));
                }
                Outcome::Tie => prop_assert!(is_tie(engine.board())),
                Outcome::InProgress => {
                    prop_assert_eq!(find_winning_line(engine.board()), None);
                    prop_assert!(!engine.board().is_full());
                }
            }
        }
    }
}
