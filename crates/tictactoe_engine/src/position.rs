//! Board coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::EngineError;

/// A cell coordinate on the 3x3 board.
///
/// Row 0 is the top row, column 0 the leftmost column. A `Position` is
/// always in range; construction from raw integers goes through
/// [`Position::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// The center cell.
    pub const CENTER: Position = Position::at(1, 1);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a position from row and column.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCoordinate`] if either value is outside `0..=2`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row > 2 || col > 2 {
            return Err(EngineError::InvalidCoordinate { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Row index (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 = left).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts position to row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates position from row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = EngineError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_to_index() {
        assert_eq!(Position::new(0, 0).unwrap().index(), 0);
        assert_eq!(Position::CENTER.index(), 4);
        assert_eq!(Position::new(2, 2).unwrap().index(), 8);
    }

    #[test]
    fn test_position_from_index() {
        assert_eq!(Position::from_index(0), Some(Position::at(0, 0)));
        assert_eq!(Position::from_index(5), Some(Position::at(1, 2)));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Position::new(3, 0),
            Err(EngineError::InvalidCoordinate { row: 3, col: 0 })
        );
        assert_eq!(
            Position::try_from((1, 7)),
            Err(EngineError::InvalidCoordinate { row: 1, col: 7 })
        );
    }

    #[test]
    fn test_all_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }
}
