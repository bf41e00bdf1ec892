//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no winner is a draw.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with(Position::Center, Cell::Occupied(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = Position::ALL
            .iter()
            .fold(Board::new(), |b, &pos| b.with(pos, Cell::Occupied(Mark::X)));
        assert!(is_full(&board));
    }
}
