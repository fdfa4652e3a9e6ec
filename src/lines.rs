//! Winning-line generation for arbitrary board sizes.

use tracing::instrument;

/// Ordered cell indices forming one row, column, or diagonal.
pub type Line = Vec<usize>;

/// Enumerates every winning line for a board of side `size`.
///
/// Lines come out in a fixed order: rows top to bottom (each left to
/// right), columns left to right (each top to bottom), the main diagonal,
/// then the anti-diagonal. A board of side `size` always yields
/// `2 * size + 2` lines; for `size == 1` they all collapse to the single
/// cell.
#[instrument]
pub fn for_size(size: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        lines.push((0..size).map(|col| row * size + col).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| row * size + col).collect());
    }
    lines.push((0..size).map(|i| i * size + i).collect());
    lines.push((0..size).map(|row| row * size + (size - 1 - row)).collect());

    lines
}
