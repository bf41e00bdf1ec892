//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They hold no state and
//! accept any board, including ones no legal game can reach.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board: first completed line in [`LINES`] order wins,
/// otherwise a full board is a draw, otherwise the game is in progress.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        Outcome::Win { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Position};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_reports_line() {
        let board: Board = "OOX/.X./X..".parse().unwrap();
        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: Mark::X,
                line: [Position::TopRight, Position::Center, Position::BottomLeft],
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(evaluate(&board).winner(), Some(Mark::X));
    }
}
