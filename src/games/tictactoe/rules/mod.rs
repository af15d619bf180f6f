//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Board storage delegates
//! to these so the rules can be tested against hand-built positions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, WINNING_TRIPLES};
