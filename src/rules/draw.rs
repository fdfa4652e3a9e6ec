//! Draw detection.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// Checks whether the game is drawn.
///
/// A board is drawn when every cell is occupied and no line is complete;
/// a full board with a winner is a win, not a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn fill(board: Board, marks: &[(usize, Mark)]) -> Board {
        marks.iter().fold(board, |b, &(index, mark)| {
            b.with_mark(index, mark).expect("cell is free")
        })
    }

    #[test]
    fn test_empty_board_is_not_a_draw() {
        assert!(!is_draw(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_is_not_a_draw() {
        let board = fill(Board::new(3), &[(4, Mark::X), (0, Mark::O)]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        // X O X / O X O / O X O
        let board = fill(
            Board::new(3),
            &[
                (0, Mark::X),
                (1, Mark::O),
                (2, Mark::X),
                (3, Mark::O),
                (4, Mark::X),
                (5, Mark::O),
                (6, Mark::O),
                (7, Mark::X),
                (8, Mark::O),
            ],
        );
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_a_draw() {
        // X X X / O O X / O X O - X holds the top row
        let board = fill(
            Board::new(3),
            &[
                (0, Mark::X),
                (1, Mark::X),
                (2, Mark::X),
                (3, Mark::O),
                (4, Mark::O),
                (5, Mark::X),
                (6, Mark::O),
                (7, Mark::X),
                (8, Mark::O),
            ],
        );
        assert!(!is_draw(&board));
    }
}
