//! Human player that reads square numbers from the terminal.

use super::super::input::SharedInput;
use crate::games::tictactoe::{Board, Choice, EventSink, Mark, MoveSource};
use anyhow::Result;
use tokio::io::AsyncBufRead;
use tracing::debug;

/// Human player typing 1-based square numbers.
pub struct HumanPlayer<R> {
    name: String,
    input: SharedInput<R>,
}

impl<R> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: SharedInput<R>) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl<R> MoveSource for HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    async fn choose(
        &mut self,
        _mark: Mark,
        _board: &Board,
        _events: &mut dyn EventSink,
    ) -> Result<Choice> {
        let token = self.input.lock().await.next_token().await?;
        debug!(player = %self.name, %token, "Human entered");

        Ok(match token.parse::<i64>() {
            Ok(number) => Choice::Index(number.saturating_sub(1)),
            Err(_) => Choice::Unreadable(token),
        })
    }

    fn is_bot(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        &self.name
    }
}
