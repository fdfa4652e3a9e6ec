//! Win detection over generated lines.

use crate::lines;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Checks if any line is fully held by one mark.
///
/// Scans lines in generation order and returns on the first complete line,
/// `None` when no line is complete. Under legal play at most one winning
/// line can exist; boards holding several complete lines resolve by first
/// match rather than erroring.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    for line in lines::for_size(board.size()) {
        let Some(mark) = board.get(line[0]).and_then(Cell::mark) else {
            continue;
        };
        if line
            .iter()
            .all(|&index| board.get(index).and_then(Cell::mark) == Some(mark))
        {
            return Some(mark);
        }
    }

    None
}
