//! Bot that plays a uniformly random free square.

use crate::games::tictactoe::{Board, Choice, EventSink, GameEvent, Mark, MoveSource, Position};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, warn};

/// Uniform integer generator.
pub trait RandomSource: Send {
    /// Returns an integer in `0..upper`, each with equal probability.
    /// `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;
}

/// [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl RngSource<StdRng> {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Seeds deterministically.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn below(&mut self, upper: usize) -> usize {
        self.0.gen_range(0..upper)
    }
}

/// Bot picking uniformly among free squares.
pub struct RandomBot {
    name: String,
    rng: Box<dyn RandomSource>,
}

impl RandomBot {
    /// Creates a new random bot.
    pub fn new(name: impl Into<String>, rng: impl RandomSource + 'static) -> Self {
        Self {
            name: name.into(),
            rng: Box::new(rng),
        }
    }

    /// Picks a free square, or `None` when the board is full.
    ///
    /// Free squares are read from the board on every call. A random source
    /// answering outside `0..free` also yields `None`.
    #[instrument(skip_all, fields(bot = %self.name))]
    pub fn select(&mut self, board: &Board) -> Option<Position> {
        let free = Position::valid_moves(board);
        if free.is_empty() {
            return None;
        }
        let index = self.rng.below(free.len());
        let pick = free.get(index).copied();
        if pick.is_none() {
            warn!(index, free = free.len(), "Random source out of range");
        }
        debug!(free = free.len(), ?pick, "Bot selected");
        pick
    }
}

#[async_trait::async_trait]
impl MoveSource for RandomBot {
    async fn choose(
        &mut self,
        mark: Mark,
        board: &Board,
        events: &mut dyn EventSink,
    ) -> Result<Choice> {
        events.emit(GameEvent::BotThinking { mark }).await?;

        if board.is_full() {
            anyhow::bail!("No valid moves available");
        }
        let Some(position) = self.select(board) else {
            anyhow::bail!("Random source picked outside the free squares");
        };

        events.emit(GameEvent::BotChose { mark, position }).await?;
        Ok(Choice::Index(position.to_index() as i64))
    }

    fn is_bot(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
