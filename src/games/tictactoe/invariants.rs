//! History invariants for [`GameState`].
//!
//! Checked after every accepted transition in debug builds.

use super::{Cell, GameState, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// The step pointer indexes into the history.
pub struct StepInBounds;

impl Invariant<GameState> for StepInBounds {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step is a valid history index"
    }
}

/// History starts empty and each entry fills exactly one previously empty cell.
pub struct OnePlyPerEntry;

impl Invariant<GameState> for OnePlyPerEntry {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let Some(first) = history.first() else {
            return false;
        };
        if first.board().occupied() != 0 {
            return false;
        }
        history.windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<usize> = (0..9)
                .filter(|&i| before.cells()[i] != after.cells()[i])
                .collect();
            match changed.as_slice() {
                [i] => {
                    before.cells()[*i] == Cell::Empty
                        && pair[1].placed().map(|p| p.to_index()) == Some(*i)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry marks exactly one empty cell"
    }
}

/// The mark placed at ply k belongs to the player whose turn it was.
pub struct AlternatingMarks;

impl Invariant<GameState> for AlternatingMarks {
    fn holds(state: &GameState) -> bool {
        let mut expected = Mark::X;
        state.history().iter().skip(1).all(|entry| {
            let ok = entry
                .placed()
                .map(|pos| entry.board().get(pos) == Cell::Occupied(expected))
                .unwrap_or(false);
            expected = expected.opponent();
            ok
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

/// Returns descriptions of every violated invariant.
pub fn violations(state: &GameState) -> Vec<&'static str> {
    let mut violated = Vec::new();
    if !StepInBounds::holds(state) {
        violated.push(StepInBounds::description());
    }
    if !OnePlyPerEntry::holds(state) {
        violated.push(OnePlyPerEntry::description());
    }
    if !AlternatingMarks::holds(state) {
        violated.push(AlternatingMarks::description());
    }
    violated
}

/// Asserts all invariants in debug builds. No-op in release.
#[inline]
pub(super) fn assert_invariants(state: &GameState) {
    #[cfg(debug_assertions)]
    {
        let violated = violations(state);
        if !violated.is_empty() {
            tracing::warn!(?violated, "Game state invariant violated");
            panic!("Game state invariants violated: {:?}", violated);
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = state;
}
