//! The single game session owned by a front end.

use crate::games::tictactoe::{GameError, GameState, Outcome, evaluate};
use crate::view::{GameView, ViewOptions};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Process-wide handle on the game in play.
///
/// Holds the current [`GameState`] and its [`Outcome`], which is computed
/// once per transition. Every accepted event replaces the state wholesale.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// Current game state.
    state: GameState,
    /// Outcome of the current board.
    outcome: Outcome,
}

impl Session {
    /// Mounts a fresh game.
    #[instrument]
    pub fn mount() -> Self {
        info!("Mounting game session");
        Self::from_state(GameState::new())
    }

    /// Wraps an existing state, evaluating its current board.
    #[instrument(skip(state), fields(step = state.current_step()))]
    pub fn from_state(state: GameState) -> Self {
        let outcome = evaluate(state.current_board());
        Self { state, outcome }
    }

    /// Handles a click on cell `index`. Returns true if the move was accepted.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn select_cell(&mut self, index: usize) -> bool {
        match self.state.try_move(index) {
            Ok(next) => {
                self.replace(next);
                true
            }
            Err(e) => {
                debug!(error = %e, "Cell selection ignored");
                false
            }
        }
    }

    /// Handles a click on the history entry at `step`.
    #[instrument(skip(self), fields(len = self.state.history().len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let next = self.state.jump_to(step)?;
        self.replace(next);
        Ok(())
    }

    /// Discards the game and starts over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        self.replace(GameState::new());
    }

    /// Builds the render model for the current state.
    pub fn view(&self, options: &ViewOptions) -> GameView {
        GameView::build(&self.state, &self.outcome, options)
    }

    fn replace(&mut self, state: GameState) {
        let outcome = evaluate(state.current_board());
        if outcome.is_over() && !self.outcome.is_over() {
            info!(%outcome, step = state.current_step(), "Game decided");
        }
        self.state = state;
        self.outcome = outcome;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::mount()
    }
}
