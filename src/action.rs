//! First-class move values and move errors.
//!
//! Moves are domain events, not side effects: they can be recorded,
//! serialized, and replayed independently of the state they were applied to.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A single move: a mark placed at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Row-major cell index.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Error raised when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index lies outside the board.
    #[display("index {index} is out of bounds for a board of {len} cells")]
    OutOfBounds {
        /// Rejected index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },

    /// The cell is already occupied.
    #[display("cell {index} is already occupied")]
    CellOccupied {
        /// Rejected index.
        index: usize,
    },

    /// The move carries a mark whose turn it is not.
    #[display("it is not {mark}'s turn")]
    WrongMark {
        /// Mark that attempted to move.
        mark: Mark,
    },

    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
