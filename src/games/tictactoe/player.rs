//! Players and move acquisition.

use super::error::MoveError;
use super::events::{EventSink, GameEvent};
use super::position::Position;
use super::types::{Board, Mark};
use anyhow::Result;
use derive_getters::Getters;
use tracing::{debug, instrument};

/// A candidate move as produced by a move source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based square index. Not yet validated.
    Index(i64),
    /// Input that could not be read as a number.
    Unreadable(String),
}

/// Where a player's moves come from.
#[async_trait::async_trait]
pub trait MoveSource: Send {
    /// Produces the next candidate move for `mark` on `board`.
    async fn choose(
        &mut self,
        mark: Mark,
        board: &Board,
        events: &mut dyn EventSink,
    ) -> Result<Choice>;

    /// Whether moves are chosen automatically.
    fn is_bot(&self) -> bool;

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

/// One side of the match: a mark plus the source of its moves.
#[derive(Getters)]
pub struct Player {
    mark: Mark,
    #[getter(skip)]
    source: Box<dyn MoveSource>,
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("mark", &self.mark)
            .field("source", &self.source.name())
            .finish()
    }
}

impl Player {
    /// Creates a player.
    pub fn new(mark: Mark, source: impl MoveSource + 'static) -> Self {
        Self {
            mark,
            source: Box::new(source),
        }
    }

    /// Whether this player is automated.
    pub fn is_bot(&self) -> bool {
        self.source.is_bot()
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        self.source.name()
    }

    /// Asks for moves until one is legal, then places it.
    ///
    /// Rejected moves are reported through `events` and never touch the
    /// board. Exactly one square is written on success.
    #[instrument(skip_all, fields(mark = %self.mark, player = %self.source.name()))]
    pub async fn play(&mut self, board: &mut Board, events: &mut dyn EventSink) -> Result<Position> {
        loop {
            events
                .emit(GameEvent::TurnStarted {
                    mark: self.mark,
                    board: *board,
                })
                .await?;

            let choice = self.source.choose(self.mark, board, events).await?;
            match self.apply(choice, board) {
                Ok(position) => {
                    debug!(%position, "Move placed");
                    events
                        .emit(GameEvent::MovePlayed {
                            mark: self.mark,
                            position,
                        })
                        .await?;
                    return Ok(position);
                }
                Err(reason) => {
                    debug!(%reason, "Move rejected");
                    events
                        .emit(GameEvent::Rejected {
                            mark: self.mark,
                            reason,
                        })
                        .await?;
                }
            }
        }
    }

    fn apply(&self, choice: Choice, board: &mut Board) -> Result<Position, MoveError> {
        let requested = match choice {
            Choice::Index(index) => index,
            Choice::Unreadable(input) => return Err(MoveError::Unreadable { input }),
        };
        let position = Position::from_signed(requested).ok_or(MoveError::OutOfRange { requested })?;
        board.place(position, self.mark)?;
        Ok(position)
    }
}
