//! Core domain types for tic-tac-toe.

use super::error::MoveError;
use super::position::Position;
use super::rules;
use tracing::instrument;

/// Mark placed by one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// Squares start `Empty` and become `Occupied` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Writes `mark` into an empty square.
    ///
    /// An occupied square is never overwritten.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied { position: pos });
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Positions still free, in board order.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Returns the winning mark, if any triple is filled by one mark.
    pub fn check_wins(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Displayable content of a square: its mark, or its 1-based number.
    pub fn label(&self, pos: Position) -> String {
        match self.get(pos) {
            Square::Occupied(mark) => mark.to_string(),
            Square::Empty => pos.number().to_string(),
        }
    }

    /// One bracketed cell, e.g. `[ X ]` or `[ 7 ]`.
    pub fn cell(&self, pos: Position) -> String {
        format!("[ {} ]", self.label(pos))
    }

    /// Formats the board as three rows of bracketed cells.
    pub fn render(&self) -> String {
        Position::ALL
            .chunks(3)
            .map(|row| row.iter().map(|pos| self.cell(*pos)).collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
