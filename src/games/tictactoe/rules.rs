//! Win detection for tic-tac-toe.

use super::types::{Board, Cell, Mark};
use tracing::instrument;

/// The 8 winning lines, scanned rows, then columns, then diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark occupying the first fully uniform non-empty line in
/// scan order, `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Some(Cell::Taken(mark)) = cell
            && board.get(b) == cell
            && board.get(c) == cell
        {
            return Some(mark);
        }
    }
    None
}
