//! Errors raised by the game core.

use super::Position;

/// Error from validating a move, a history jump, or parsing game input.
///
/// Move errors never escape [`GameState::apply_move`](super::GameState::apply_move),
/// which treats them as ignored clicks; they surface only through
/// [`GameState::try_move`](super::GameState::try_move).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Cell index outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    PositionOutOfRange(usize),

    /// The cell is already taken.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The board at the current step is already decided.
    #[display("Game is already over")]
    GameOver,

    /// History jump target outside the recorded history.
    #[display("Cannot jump to step {step}: history has {len} entries")]
    JumpOutOfRange {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// Unparseable board text.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),

    /// Unparseable token in a play script.
    #[display("Invalid script token {:?}", _0)]
    InvalidScriptToken(String),
}

impl std::error::Error for GameError {}
