//! Keyboard bindings.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cursor direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous row.
    Up,
    /// Next row.
    Down,
    /// Previous column.
    Left,
    /// Next column.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    Cursor(Direction),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark at a specific cell.
    Place(Position),
    /// Select the previous history entry.
    HistoryUp,
    /// Select the next history entry.
    HistoryDown,
    /// Jump to the selected history entry.
    JumpToSelected,
    /// Jump to the empty starting board.
    JumpToStart,
    /// Start a new game.
    NewGame,
    /// Leave the app.
    Quit,
}

/// Maps a key event to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right => Some(Action::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Action::Place),
        KeyCode::PageUp | KeyCode::Char('[') => Some(Action::HistoryUp),
        KeyCode::PageDown | KeyCode::Char(']') => Some(Action::HistoryDown),
        KeyCode::Char('g') => Some(Action::JumpToSelected),
        KeyCode::Home => Some(Action::JumpToStart),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}
