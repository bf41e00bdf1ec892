//! Core domain types for tic-tac-toe.

use super::error::GameError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The symbol a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// X always moves first.
    X,
    /// O moves second.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark of the player to move after `step` plies.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board snapshot. Cells are stored in row-major order (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells, including positions no real game reaches.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Returns a copy of this board with one cell replaced.
    pub fn with(mut self, pos: Position, cell: Cell) -> Self {
        self.set(pos, cell);
        self
    }

    /// Checks if the cell at `pos` is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

/// Parses nine cell characters, row-major: `X`, `O`, and `.`, `-`, `_` or a
/// space for empty. Whitespace between rows (`/`, newlines) is ignored.
///
/// ```
/// use tictactoe_history::{Board, Cell, Mark, Position};
///
/// let board: Board = "XO./.X./..O".parse().unwrap();
/// assert_eq!(board.get(Position::Center), Cell::Occupied(Mark::X));
/// ```
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;
        for ch in s.chars().filter(|c| !matches!(c, '/' | '\n' | '\r')) {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                other => return Err(GameError::InvalidBoard(format!("unexpected {:?}", other))),
            };
            if count == 9 {
                return Err(GameError::InvalidBoard("more than nine cells".to_string()));
            }
            cells[count] = cell;
            count += 1;
        }
        if count != 9 {
            return Err(GameError::InvalidBoard(format!("expected nine cells, found {}", count)));
        }
        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            let symbols: Vec<String> = chunk
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => "   ".to_string(),
                    Cell::Occupied(mark) => format!(" {} ", mark),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
