mod error;
mod history;
mod invariants;
mod outcome;
mod position;
mod rules;
mod state;
mod types;

pub use error::GameError;
pub use history::{HistoryEntry, move_label};
pub use invariants::{AlternatingMarks, Invariant, OnePlyPerEntry, StepInBounds, violations};
pub use outcome::{Outcome, WinningLine};
pub use position::Position;
pub use rules::{LINES, check_winner, evaluate, is_full};
pub use state::GameState;
pub use types::{Board, Cell, Mark};
