//! Outcome of evaluating a board snapshot.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Three positions whose marks decide a win.
pub type WinningLine = [Position; 3];

/// What a board snapshot says about the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell.
    InProgress,
    /// A player completed a line.
    Win {
        /// The repeated mark.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full, no line.
    Draw,
}

impl Outcome {
    /// Returns true once the game accepts no further moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if `pos` is on the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&pos))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { mark, line } => write!(
                f,
                "{} wins on {}, {}, {}",
                mark,
                line[0].to_index(),
                line[1].to_index(),
                line[2].to_index()
            ),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
