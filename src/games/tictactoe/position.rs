//! Named board positions for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board, indexed 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index; `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from zero-based row and column.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Parses a label (case-insensitive) or an index 0-8.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Positions still empty on `board`, in index order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
