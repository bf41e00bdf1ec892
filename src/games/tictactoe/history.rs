//! Board snapshots recorded after each ply.

use super::{Board, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the board after some number of plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct HistoryEntry {
    /// Board after the ply.
    board: Board,
    /// Cell marked by the ply; `None` for the starting board.
    placed: Option<Position>,
}

impl HistoryEntry {
    /// The empty board every game starts from.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }
}

/// Label shown for the history entry at `step`.
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(move_label(0), "Go to game start");
        assert_eq!(move_label(1), "Go to move #1");
        assert_eq!(move_label(9), "Go to move #9");
    }
}
