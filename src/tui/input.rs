//! Line-oriented token reader for human moves.

use crate::games::tictactoe::InputError;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// Input shared by every human player at the same terminal.
pub type SharedInput<R> = Arc<Mutex<LineTokens<R>>>;

/// Splits a line-oriented stream into whitespace-separated tokens.
///
/// Several tokens on one line are handed out one per request.
#[derive(Debug)]
pub struct LineTokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: AsyncBufRead + Unpin + Send> LineTokens<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Wraps a reader for sharing between players.
    pub fn shared(reader: R) -> SharedInput<R> {
        Arc::new(Mutex::new(Self::new(reader)))
    }

    /// Returns the next token, reading more lines as needed.
    ///
    /// # Errors
    ///
    /// Fails when the stream ends or cannot be read.
    #[instrument(skip(self))]
    pub async fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            // Invalid UTF-8 decodes to replacement characters, never a read error
            let mut bytes = Vec::new();
            let read = self.reader.read_until(b'\n', &mut bytes).await?;
            if read == 0 {
                return Err(InputError::new("Input closed before a move was entered"));
            }
            let line = String::from_utf8_lossy(&bytes);
            debug!(line = line.trim_end(), "Read input line");
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}
