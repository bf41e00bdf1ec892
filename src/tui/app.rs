//! Application state and key handling.

use super::input::{Action, move_cursor};
use crate::games::tictactoe::Position;
use crate::session::Session;
use crate::view::{GameView, ViewOptions};
use derive_getters::Getters;
use tracing::{debug, instrument, warn};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// The game in play.
    session: Session,
    /// Presentation switches.
    options: ViewOptions,
    /// Cell under the keyboard cursor.
    cursor: Position,
    /// History entry highlighted in the move list.
    selected_step: usize,
    /// Set once the user asks to leave.
    should_quit: bool,
}

impl App {
    /// Creates the app around a freshly mounted session.
    #[instrument]
    pub fn new(options: ViewOptions) -> Self {
        Self {
            session: Session::mount(),
            options,
            cursor: Position::Center,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Render model for the current frame.
    pub fn view(&self) -> GameView {
        self.session.view(&self.options)
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::HistoryUp => {
                self.selected_step = self.selected_step.saturating_sub(1);
            }
            Action::HistoryDown => {
                let last = self.session.state().history().len() - 1;
                self.selected_step = (self.selected_step + 1).min(last);
            }
            Action::JumpToSelected => self.jump(self.selected_step),
            Action::JumpToStart => self.jump(0),
            Action::NewGame => {
                self.session.reset();
                self.selected_step = 0;
            }
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, pos: Position) {
        if self.session.select_cell(pos.to_index()) {
            self.selected_step = self.session.state().current_step();
        }
    }

    fn jump(&mut self, step: usize) {
        match self.session.jump_to(step) {
            Ok(()) => self.selected_step = step,
            Err(e) => warn!(error = %e, "History jump rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_follows_selection() {
        let mut app = App::new(ViewOptions::default());
        app.handle(Action::PlaceAtCursor);
        app.handle(Action::Place(Position::TopLeft));
        assert_eq!(app.session().state().current_step(), 2);
        assert_eq!(*app.selected_step(), 2);
        assert_eq!(*app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_history_navigation_and_jump() {
        let mut app = App::new(ViewOptions::default());
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            app.handle(Action::Place(pos));
        }
        app.handle(Action::HistoryUp);
        app.handle(Action::HistoryUp);
        app.handle(Action::JumpToSelected);
        assert_eq!(app.session().state().current_step(), 1);
        assert_eq!(app.session().state().history().len(), 4);

        app.handle(Action::HistoryDown);
        app.handle(Action::HistoryDown);
        app.handle(Action::HistoryDown);
        assert_eq!(*app.selected_step(), 3);
    }

    #[test]
    fn test_home_jumps_to_start_keeping_history() {
        let mut app = App::new(ViewOptions::default());
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            app.handle(Action::Place(pos));
        }
        app.handle(Action::JumpToStart);

        let state = app.session().state();
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.current_board().occupied(), 0);
        assert_eq!(*app.selected_step(), 0);
    }

    #[test]
    fn test_new_game_and_quit() {
        let mut app = App::new(ViewOptions::default());
        app.handle(Action::Place(Position::Center));
        app.handle(Action::NewGame);
        assert_eq!(app.session().state().history().len(), 1);
        assert!(!*app.should_quit());
        app.handle(Action::Quit);
        assert!(*app.should_quit());
    }
}
