//! Error types for move validation and player input.

use super::position::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a requested move was turned down.
///
/// Every variant is recoverable: the player is asked again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Requested square number is outside 1-9.
    #[display("Invalid move. Please choose a number between 1 and 9.")]
    OutOfRange {
        /// Zero-based index that was requested.
        requested: i64,
    },
    /// Square already holds a mark.
    #[display("Square already taken. Try again.")]
    Occupied {
        /// The occupied position.
        position: Position,
    },
    /// Input token was not an integer.
    #[display("'{}' is not a square number. Please choose a number between 1 and 9.", input)]
    Unreadable {
        /// The raw token.
        input: String,
    },
}

/// Input error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Failed to read input: {}", err))
    }
}
