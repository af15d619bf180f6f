//! Terminal tic-tac-toe: a human against a random-move bot.
//!
//! # Architecture
//!
//! - **Board**: the 9-square grid with win and draw detection
//! - **Player**: a mark plus a [`MoveSource`] (human input or random bot)
//! - **Game**: the turn loop, alternating players until a win or a draw
//! - **TUI**: console presenter, stdin reader and the concrete move sources
//!
//! The game core never prints. It emits [`GameEvent`]s to an [`EventSink`].
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_terminal::{Game, Mark, Player, RandomBot, RngSource, GameEvent};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut x = Player::new(Mark::X, RandomBot::new("Bot X", RngSource::seeded(1)));
//! let mut o = Player::new(Mark::O, RandomBot::new("Bot O", RngSource::seeded(2)));
//! let mut events: Vec<GameEvent> = Vec::new();
//!
//! let status = Game::new().start_game(&mut x, &mut o, &mut events).await?;
//! println!("{:?}", status);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    rules, Board, Choice, EventSink, Game, GameEvent, GameStatus, InputError, Mark, MoveError,
    MoveSource, Player, Position, Square,
};

// Crate-level exports - Terminal front end
pub use tui::{
    build_player, run, ConsolePresenter, HumanPlayer, LineTokens, MatchSettings, Pacing,
    PlayerKind, RandomBot, RandomSource, RngSource, SharedInput,
};
