//! Engine error types.

use derive_more::{Display, Error};

/// Errors raised by the engine for contract violations by the caller.
///
/// Playing into an occupied cell or after the round ended is not an error;
/// those calls are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Row or column outside `0..=2`.
    #[display("Invalid coordinate ({}, {}): row and column must be in 0..=2", row, col)]
    InvalidCoordinate {
        /// Row supplied by the caller.
        row: usize,
        /// Column supplied by the caller.
        col: usize,
    },
}
