//! Render model derived from a game state and its outcome.
//!
//! [`GameView::build`] is a pure function; the text renderer, the JSON
//! output and the terminal UI all draw from the same view.

use crate::games::tictactoe::{GameState, Mark, Outcome, Position, move_label};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Presentation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Append the `(row, col)` of each placed mark to history labels.
    pub show_coordinates: bool,
}

/// One board cell as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CellView {
    /// Board index 0-8.
    index: usize,
    /// Mark in the cell, if any.
    mark: Option<Mark>,
    /// Part of the winning line.
    winning: bool,
}

/// One history jump target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// History index to jump to.
    step: usize,
    /// Button text.
    label: String,
    /// The step currently shown.
    current: bool,
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Nine cells, row-major.
    cells: Vec<CellView>,
    /// Winner, next player, or draw.
    status: String,
    /// Outcome of the current board.
    outcome: Outcome,
    /// Step currently shown.
    current_step: usize,
    /// One jump target per history entry.
    moves: Vec<MoveEntry>,
}

impl GameView {
    /// Builds the view for `state`, whose current board evaluates to `outcome`.
    pub fn build(state: &GameState, outcome: &Outcome, options: &ViewOptions) -> Self {
        let board = state.current_board();
        let cells = Position::ALL
            .iter()
            .map(|&pos| CellView {
                index: pos.to_index(),
                mark: board.get(pos).mark(),
                winning: outcome.highlights(pos),
            })
            .collect();

        let moves = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                let mut label = move_label(step);
                if options.show_coordinates
                    && let Some(pos) = entry.placed()
                {
                    label.push_str(&format!(" - ({}, {})", pos.row(), pos.col()));
                }
                MoveEntry {
                    step,
                    label,
                    current: step == state.current_step(),
                }
            })
            .collect();

        Self {
            cells,
            status: status_line(outcome, state.player_to_move()),
            outcome: *outcome,
            current_step: state.current_step(),
            moves,
        }
    }

    /// Plain-text rendering: board, status, then the move list with the
    /// current entry marked by `>`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                out.push_str("---+---+---\n");
            }
            let line: Vec<String> = chunk
                .iter()
                .map(|cell| {
                    let symbol = cell.mark.map(|m| m.to_string()).unwrap_or_else(|| ".".to_string());
                    if cell.winning {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            out.push_str(&line.join("|"));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.status);
        out.push_str("\n\n");
        for entry in &self.moves {
            let marker = if entry.current { '>' } else { ' ' };
            out.push_str(&format!("{} {}\n", marker, entry.label));
        }
        out
    }
}

/// Status line for an outcome.
pub fn status_line(outcome: &Outcome, to_move: Mark) -> String {
    match outcome {
        Outcome::Win { mark, .. } => format!("Winner: {}", mark),
        Outcome::InProgress => format!("Next player: {}", to_move),
        Outcome::Draw => "Draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::evaluate;

    fn view_of(indices: &[usize], options: ViewOptions) -> GameView {
        let state = GameState::replay(indices.iter().copied());
        let outcome = evaluate(state.current_board());
        GameView::build(&state, &outcome, &options)
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(view_of(&[], ViewOptions::default()).status(), "Next player: X");
        assert_eq!(view_of(&[4], ViewOptions::default()).status(), "Next player: O");
        assert_eq!(view_of(&[0, 4, 1, 5, 2], ViewOptions::default()).status(), "Winner: X");
        assert_eq!(
            view_of(&[0, 1, 2, 3, 5, 4, 6, 8, 7], ViewOptions::default()).status(),
            "Draw!"
        );
    }

    #[test]
    fn test_winning_cells_flagged() {
        let view = view_of(&[0, 4, 1, 5, 2], ViewOptions::default());
        let winning: Vec<usize> = view
            .cells()
            .iter()
            .filter(|c| *c.winning())
            .map(|c| *c.index())
            .collect();
        assert_eq!(winning, vec![0, 1, 2]);
    }

    #[test]
    fn test_move_labels_and_current() {
        let view = view_of(&[4, 0], ViewOptions::default());
        let labels: Vec<&str> = view.moves().iter().map(|m| m.label().as_str()).collect();
        assert_eq!(labels, vec!["Go to game start", "Go to move #1", "Go to move #2"]);
        assert!(*view.moves()[2].current());
        assert!(!*view.moves()[0].current());
    }

    #[test]
    fn test_coordinates_suffix() {
        let view = view_of(&[5], ViewOptions { show_coordinates: true });
        assert_eq!(view.moves()[0].label(), "Go to game start");
        assert_eq!(view.moves()[1].label(), "Go to move #1 - (1, 2)");
    }

    #[test]
    fn test_render_text() {
        let text = view_of(&[0, 4, 1, 5, 2], ViewOptions::default()).render_text();
        assert!(text.starts_with("[X]|[X]|[X]\n"));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("> Go to move #5"));
    }
}
