//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The 8 winning triples, checked in this order.
pub const WINNING_TRIPLES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first triple whose three squares hold that
/// same mark, `None` otherwise. Empty squares never win.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    WINNING_TRIPLES.iter().find_map(|[a, b, c]| {
        let mark = board.get(*a).mark()?;
        (board.get(*b).mark() == Some(mark) && board.get(*c).mark() == Some(mark)).then_some(mark)
    })
}
