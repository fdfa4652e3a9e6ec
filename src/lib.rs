//! Generalized N-by-N tic-tac-toe engine.
//!
//! Pure board rules and a one-ply move advisor, plus a small session type
//! for front ends that want the turn and status bookkeeping handled:
//!
//! - **rules**: win and draw detection over a board snapshot
//! - **advisor**: heuristic move selection (win, block, position, fallback)
//! - **[`GameState`]**: validated move application and status derivation
//!
//! The engine holds no global state and performs no I/O. Every function is
//! a pure computation over the values it is handed; a move produces a new
//! [`Board`] rather than mutating the caller's. Because nothing is shared,
//! the engine is safe to call from any thread.
//!
//! # Example
//!
//! ```
//! use gridmark::{advisor, rules, Board, Mark};
//!
//! let board = Board::new(3);
//! assert_eq!(rules::winner(&board), None);
//!
//! // An open board steers the advisor to the center.
//! assert_eq!(advisor::select_move(&board, Mark::X), Some(4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod advisor;
mod game;
mod invariants;
pub mod lines;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use invariants::{HistoryConsistent, Invariant, MarkBalance};
pub use types::{Board, BoardError, Cell, GameStatus, Mark};
