//! Events the game emits for presentation.
//!
//! The core never renders anything itself. Sinks receive an owned copy of
//! whatever they need and hand nothing back.

use super::error::MoveError;
use super::game::GameStatus;
use super::position::Position;
use super::types::{Board, Mark};
use anyhow::Result;

/// Messages sent from the game to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is about to be asked for a move.
    TurnStarted {
        /// Player to move.
        mark: Mark,
        /// Board as the player sees it.
        board: Board,
    },
    /// The bot is picking a square.
    BotThinking {
        /// Bot's mark.
        mark: Mark,
    },
    /// The bot picked a square.
    BotChose {
        /// Bot's mark.
        mark: Mark,
        /// Chosen square.
        position: Position,
    },
    /// A requested move was turned down; the player is asked again.
    Rejected {
        /// Player whose move was rejected.
        mark: Mark,
        /// Why.
        reason: MoveError,
    },
    /// A mark was placed.
    MovePlayed {
        /// Player who moved.
        mark: Mark,
        /// Square played.
        position: Position,
    },
    /// The match reached a terminal state.
    GameOver {
        /// Final status (won or draw).
        status: GameStatus,
        /// Final board.
        board: Board,
    },
}

/// Receives game events.
#[async_trait::async_trait]
pub trait EventSink: Send {
    /// Handles one event.
    async fn emit(&mut self, event: GameEvent) -> Result<()>;
}

/// Collects events in memory.
#[async_trait::async_trait]
impl EventSink for Vec<GameEvent> {
    async fn emit(&mut self, event: GameEvent) -> Result<()> {
        self.push(event);
        Ok(())
    }
}
