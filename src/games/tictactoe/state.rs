//! Game state with a time-travel history.
//!
//! A [`GameState`] is an immutable value: every transition borrows the
//! current state and returns the next one, so earlier states and their
//! history entries stay inspectable.

use super::error::GameError;
use super::history::HistoryEntry;
use super::invariants::assert_invariants;
use super::rules::evaluate;
use super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board history plus the step currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Entry k is the board after k plies; entry 0 is the empty board.
    history: Vec<HistoryEntry>,
    /// Index into `history` of the board in play.
    current_step: usize,
}

impl GameState {
    /// Creates a game at the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
        }
    }

    /// Plays `indices` in order from a fresh game, ignoring rejected moves.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Self {
        indices
            .into_iter()
            .fold(Self::new(), |state, index| state.apply_move(index))
    }

    /// Recorded snapshots, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the snapshot in play.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_step].board()
    }

    /// X on even steps, O on odd steps. Only meaningful while in progress.
    pub fn player_to_move(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Places the mark of the player to move at `index`.
    ///
    /// Moves on an occupied cell, outside 0-8, or after the game is
    /// decided are ignored and return an identical state.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&self, index: usize) -> GameState {
        self.try_move(index).unwrap_or_else(|e| {
            debug!(error = %e, "Ignoring move");
            self.clone()
        })
    }

    /// Like [`apply_move`](Self::apply_move), but reports why a move was rejected.
    ///
    /// History beyond the current step is discarded before the new
    /// snapshot is appended.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn try_move(&self, index: usize) -> Result<GameState, GameError> {
        let pos = Position::from_index(index).ok_or(GameError::PositionOutOfRange(index))?;
        let board = self.current_board();

        if evaluate(board).is_over() {
            return Err(GameError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(GameError::CellOccupied(pos));
        }

        let mark = self.player_to_move();
        let next = board.with(pos, Cell::Occupied(mark));

        let mut history = self.history[..=self.current_step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(HistoryEntry::new(next, Some(pos)));

        let state = GameState {
            current_step: history.len() - 1,
            history,
        };
        assert_invariants(&state);

        debug!(%mark, position = %pos, discarded, "Move applied");
        Ok(state)
    }

    /// Shows the snapshot at `step` without touching the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, GameError> {
        if step >= self.history.len() {
            return Err(GameError::JumpOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!("Jumping to step");
        Ok(GameState {
            history: self.history.clone(),
            current_step: step,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.current_board(), &Board::new());
        assert_eq!(state.player_to_move(), Mark::X);
    }

    #[test]
    fn test_move_alternates_and_appends() {
        let state = GameState::new().apply_move(4);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.current_board().get(Position::Center), Cell::Occupied(Mark::X));
        assert_eq!(state.player_to_move(), Mark::O);
        assert_eq!(state.history()[1].placed(), &Some(Position::Center));
    }

    #[test]
    fn test_try_move_reasons() {
        let state = GameState::new().apply_move(0);
        assert_eq!(state.try_move(0), Err(GameError::CellOccupied(Position::TopLeft)));
        assert_eq!(state.try_move(9), Err(GameError::PositionOutOfRange(9)));

        let won = GameState::replay([0, 3, 1, 4, 2]);
        assert_eq!(won.try_move(8), Err(GameError::GameOver));
    }

    #[test]
    fn test_previous_state_untouched() {
        let before = GameState::new();
        let after = before.apply_move(0);
        assert_eq!(before.history().len(), 1);
        assert_eq!(after.history().len(), 2);
    }

    #[test]
    fn test_jump_out_of_range() {
        let state = GameState::replay([0, 1]);
        assert_eq!(
            state.jump_to(3),
            Err(GameError::JumpOutOfRange { step: 3, len: 3 })
        );
        assert!(state.jump_to(2).is_ok());
    }
}
