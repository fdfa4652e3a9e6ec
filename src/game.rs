//! Collaborator-facing game session state.
//!
//! The pure rules and advisor never need this type; it packages the board,
//! turn, and status bookkeeping that a front end would otherwise carry
//! itself. The front end stays responsible for scheduling - when to ask
//! the advisor for a move, and any delay it wants to impose before doing
//! so.

use crate::action::{Move, MoveError};
use crate::invariants::{HistoryConsistent, Invariant, MarkBalance};
use crate::rules;
use crate::types::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete state of one game, in progress or finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Starts a fresh game on an empty board of the given side length.
    ///
    /// X always moves first.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    ///
    /// Once the game ends this stays on the mark that made the final move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Places the current mark at `index`.
    ///
    /// The board value is replaced, never mutated in place. Rejects moves
    /// once the game is over, outside the board, or onto an occupied cell.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move;
        self.board = self.board.with_mark(index, mark)?;
        self.history.push(Move::new(mark, index));

        self.status = if let Some(winner) = rules::winner(&self.board) {
            GameStatus::Won(winner)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            self.to_move = mark.opponent();
            GameStatus::InProgress
        };

        debug_assert!(MarkBalance::holds(self), "{}", MarkBalance::description());
        debug_assert!(
            HistoryConsistent::holds(self),
            "{}",
            HistoryConsistent::description()
        );

        debug!(%mark, index, status = %self.status, "applied move");
        Ok(())
    }

    /// Resets to an empty board of the same size.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new(self.board.size());
    }

    /// Starts over on an empty board of a new side length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[instrument(skip(self))]
    pub fn resize(&mut self, size: usize) {
        *self = Self::new(size);
    }

    /// Replays a move list from an empty board of the given size.
    ///
    /// Each move's mark must match the mark to move. Replay stops once the
    /// game reaches a terminal status; any trailing moves are ignored.
    #[instrument(skip(moves))]
    pub fn replay(size: usize, moves: &[Move]) -> Result<Self, MoveError> {
        let mut state = Self::new(size);
        for mov in moves {
            if mov.mark != state.to_move {
                return Err(MoveError::WrongMark { mark: mov.mark });
            }
            state.make_move(mov.index)?;
            if state.status.is_over() {
                break;
            }
        }
        Ok(state)
    }
}
