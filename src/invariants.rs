//! First-class invariants over a game state.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are checked after each applied move in debug builds and are
//! testable on their own.

use crate::game::GameState;
use crate::types::{Board, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Counts of the two marks on the board never differ by more than one.
pub struct MarkBalance;

impl Invariant<GameState> for MarkBalance {
    fn holds(state: &GameState) -> bool {
        let count = |mark: Mark| {
            state
                .board()
                .cells()
                .iter()
                .filter(|cell| cell.mark() == Some(mark))
                .count()
        };
        count(Mark::X).abs_diff(count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "mark counts differ by at most one"
    }
}

/// Replaying the history onto an empty board reproduces the current board.
///
/// This also establishes that no cell was ever overwritten: the replay
/// places each recorded move into an empty cell or fails.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(state: &GameState) -> bool {
        let mut board = Board::new(state.board().size());
        for mov in state.history() {
            match board.with_mark(mov.index, mov.mark) {
                Ok(next) => board = next,
                Err(_) => return false,
            }
        }
        board == *state.board()
    }

    fn description() -> &'static str {
        "move history reconstructs the board"
    }
}
