//! Win detection logic for tic-tac-toe.

use crate::outcome::WinningLine;
use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// The 8 winning lines in scan order.
///
/// Rows top to bottom, then columns left to right, then the main diagonal
/// and the anti-diagonal. When one move completes two lines at once, the
/// earlier line in this order is the one reported.
pub const LINES: [WinningLine; 8] = [
    // Rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // Columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // Diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Finds the first completed line on the board.
///
/// Returns the owning player and the line, or `None` if no line has three
/// equal non-empty marks.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((player, line))
    })
}
