//! Tic-tac-toe with a time-travel move history.
//!
//! # Architecture
//!
//! - **Game**: board types, win/draw evaluation and the immutable
//!   [`GameState`] with its history of snapshots
//! - **Session**: the single state handle a front end mounts and feeds events
//! - **View**: pure render model shared by the text, JSON and terminal front ends
//! - **TUI**: keyboard-driven terminal front end
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, Mark, Outcome, Position, evaluate};
//!
//! let state = GameState::replay([0, 4, 1, 5, 2]);
//! assert_eq!(
//!     evaluate(state.current_board()),
//!     Outcome::Win {
//!         mark: Mark::X,
//!         line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
//!     }
//! );
//!
//! // Jumping back and playing elsewhere overwrites the later moves.
//! let branched = state.jump_to(2).unwrap().apply_move(8);
//! assert_eq!(branched.history().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod script;
mod session;
mod tui;
mod view;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Game types
pub use games::tictactoe::{
    AlternatingMarks, Board, Cell, GameError, GameState, HistoryEntry, Invariant, LINES, Mark,
    OnePlyPerEntry, Outcome, Position, StepInBounds, WinningLine, check_winner, evaluate, is_full,
    move_label, violations,
};

// Crate-level exports - Scripted play
pub use script::{ScriptStep, parse_script, run_script};

// Crate-level exports - Session and view
pub use session::Session;
pub use view::{CellView, GameView, MoveEntry, ViewOptions, status_line};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, Direction, draw, map_key, move_cursor, run_tui};
