//! Keyboard translation and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::Position;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell in the direction of the arrow key.
    Cursor(KeyCode),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a specific cell.
    PlayAt(Position),
    /// Start a new round.
    Restart,
    /// Leave the game.
    Quit,
}

/// Maps a key press to a command, or `None` for unbound keys.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Cursor(KeyCode::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Cursor(KeyCode::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Cursor(KeyCode::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Cursor(KeyCode::Down)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::PlayAt),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };

    Position::new(row, col).unwrap_or(cursor)
}
