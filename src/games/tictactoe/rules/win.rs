//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position, WinningLine};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark and line of the first completed line, if any.
///
/// Boards with several completed lines report the earliest in [`LINES`].
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Cell::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::X));
        board.set(Position::TopCenter, Cell::Occupied(Mark::X));
        board.set(Position::TopRight, Cell::Occupied(Mark::X));
        assert_eq!(check_winner(&board), Some((Mark::X, LINES[0])));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".O./.O./.O.".parse().unwrap();
        assert_eq!(check_winner(&board), Some((Mark::O, LINES[4])));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XXO/.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_on_impossible_board() {
        // Both X and O hold complete rows; the row enumerated first wins.
        let board: Board = "OOO/XXX/...".parse().unwrap();
        assert_eq!(check_winner(&board), Some((Mark::O, LINES[0])));

        // X completes a column and a diagonal; the column is checked first.
        let board: Board = "X.O/XXO/X.X".parse().unwrap();
        assert_eq!(check_winner(&board), Some((Mark::X, LINES[3])));
    }
}
