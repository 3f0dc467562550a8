//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a [`Board`](crate::Board). Rules are kept apart
//! from the engine so shells and invariants can evaluate any board without
//! driving a round.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, find_winning_line};
