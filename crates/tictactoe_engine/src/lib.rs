//! Two-player tic-tac-toe game engine.
//!
//! The engine owns a single round's board, whose turn it is, the round's
//! outcome, and the running scores across rounds. A UI shell feeds it cell
//! clicks and restart requests, then re-renders from the engine's queries.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Player`], [`Board`], [`Position`]
//! - **Rules**: pure win/tie detection over a [`Board`]
//! - **Engine**: [`GameEngine`] turn alternation, outcome transitions, scoring
//! - **Invariants**: checkable guarantees over a round's [`GameState`]
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::with_seed(7).with_starting_player(Player::X);
//! engine.play_move(0, 0)?;
//! engine.play_move(1, 1)?;
//! engine.play_move(0, 1)?;
//! engine.play_move(2, 2)?;
//! let outcome = engine.play_move(0, 2)?;
//!
//! assert_eq!(outcome.winner(), Some(Player::X));
//! assert_eq!(engine.score_of(Player::X), 1);
//!
//! engine.reset();
//! assert_eq!(engine.current_outcome(), &Outcome::InProgress);
//! assert_eq!(engine.score_of(Player::X), 1);
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod scores;
mod state;
mod types;

pub use action::Move;
pub use engine::GameEngine;
pub use error::EngineError;
pub use outcome::{Outcome, WinningLine};
pub use position::Position;
pub use scores::Scores;
pub use state::GameState;
pub use types::{Board, Mark, Player};
