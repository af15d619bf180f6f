//! Turn loop and game status for tic-tac-toe.

use super::events::{EventSink, GameEvent};
use super::player::Player;
use super::types::{Board, Mark};
use anyhow::Result;
use derive_getters::Getters;
use tracing::{info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// A single match. Owns the board for its whole lifetime.
#[derive(Debug, Clone, Default, Getters)]
pub struct Game {
    board: Board,
    status: GameStatus,
    /// Completed turns.
    turns: usize,
}

impl Game {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Plays one turn for `player` and updates the status.
    ///
    /// # Errors
    ///
    /// Fails if the game is already over or the player's move source fails.
    #[instrument(
        skip_all,
        fields(
            mark = %player.mark(),
            player = %player.name(),
            bot = player.is_bot(),
            turn = self.turns + 1
        )
    )]
    pub async fn play_turn(
        &mut self,
        player: &mut Player,
        events: &mut dyn EventSink,
    ) -> Result<GameStatus> {
        if self.status.is_over() {
            anyhow::bail!("Game is already over");
        }

        let position = player.play(&mut self.board, events).await?;
        self.turns += 1;
        self.update_status();

        info!(%position, status = ?self.status, "Turn complete");
        Ok(self.status)
    }

    /// Runs the match to completion, alternating between the two players
    /// starting with `first`, then reports the outcome.
    #[instrument(skip_all, fields(first = %first.mark(), second = %second.mark()))]
    pub async fn start_game(
        &mut self,
        first: &mut Player,
        second: &mut Player,
        events: &mut dyn EventSink,
    ) -> Result<GameStatus> {
        info!("Starting game");

        let mut players = [first, second];
        let mut current = 0;
        while !self.status.is_over() {
            self.play_turn(&mut *players[current], events).await?;
            current = 1 - current;
        }

        events
            .emit(GameEvent::GameOver {
                status: self.status,
                board: self.board,
            })
            .await?;

        info!(status = ?self.status, turns = self.turns, "Game over");
        Ok(self.status)
    }

    /// Recomputes the status from the board.
    fn update_status(&mut self) {
        if let Some(winner) = self.board.check_wins() {
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
