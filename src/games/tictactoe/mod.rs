//! Tic-tac-toe: board, rules, players and the turn loop.

mod error;
mod events;
mod game;
mod player;
mod position;
pub mod rules;
mod types;

pub use error::{InputError, MoveError};
pub use events::{EventSink, GameEvent};
pub use game::{Game, GameStatus};
pub use player::{Choice, MoveSource, Player};
pub use position::Position;
pub use types::{Board, Mark, Square};
