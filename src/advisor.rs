//! One-ply heuristic move selection.
//!
//! Priority order: take an immediate win, block the opponent's immediate
//! win, then fall back to a positional preference (centers before corners)
//! and finally the first free cell. The advisor never looks deeper than one
//! ply, so forks and forced wins two moves out go undetected. That is the
//! intended strength; it plays legally on any board size.

use crate::rules;
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

/// Selects a move for `acting` on the given board.
///
/// Returns `None` only when the board has no free cell. Every returned
/// index refers to an empty cell.
#[instrument(skip(board))]
pub fn select_move(board: &Board, acting: Mark) -> Option<usize> {
    let free = board.available_moves();
    if free.is_empty() {
        return None;
    }

    if let Some(index) = winning_cell(board, acting, &free) {
        debug!(index, "winning move");
        return Some(index);
    }

    if let Some(index) = winning_cell(board, acting.opponent(), &free) {
        debug!(index, "blocking move");
        return Some(index);
    }

    if let Some(index) = preferred_cells(board.size())
        .into_iter()
        .find(|&index| board.is_empty(index))
    {
        debug!(index, "positional move");
        return Some(index);
    }

    free.first().copied()
}

/// First free cell that completes a line for `mark`, in ascending order.
///
/// Each candidate is tried on a copy of the board; the caller's board is
/// never touched.
fn winning_cell(board: &Board, mark: Mark, free: &[usize]) -> Option<usize> {
    free.iter().copied().find(|&index| {
        board
            .with_mark(index, mark)
            .is_ok_and(|next| rules::winner(&next) == Some(mark))
    })
}

/// Center cells followed by corner cells for side `size`, deduplicated.
///
/// Odd sizes have a single true center; even sizes use the 2x2 center
/// block in row-major order. On tiny boards the corners overlap the
/// centers and collapse away.
fn preferred_cells(size: usize) -> Vec<usize> {
    let mut cells = Vec::new();
    let mid = size / 2;

    if size % 2 == 1 {
        cells.push(mid * size + mid);
    } else {
        for row in [mid - 1, mid] {
            for col in [mid - 1, mid] {
                cells.push(row * size + col);
            }
        }
    }

    for corner in [0, size - 1, size * (size - 1), size * size - 1] {
        if !cells.contains(&corner) {
            cells.push(corner);
        }
    }

    cells
}
