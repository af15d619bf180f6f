//! Console rendering of game events.

use crate::games::tictactoe::{Board, EventSink, GameEvent, GameStatus, Mark, Position, Square};
use anyhow::Result;
use crossterm::style::{Color, Stylize};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, instrument};

/// Lines the bot prints while it "thinks".
const THINKING_MESSAGES: [&str; 10] = [
    "Hmm, let me think...",
    "Deciding on my next move...",
    "Analyzing the board...",
    "Which square should I choose?",
    "Considering my options...",
    "Let me evaluate my strategy...",
    "Thinking about the best move...",
    "This looks like a good spot...",
    "I need to find the best position...",
    "Strategizing my next play...",
];

/// Pauses between presentation steps. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// After the board is drawn, before the prompt.
    pub after_board: Duration,
    /// Before the bot shows its thinking message.
    pub before_thinking: Duration,
    /// After the thinking message, before the bot answers.
    pub after_thinking: Duration,
}

impl Pacing {
    /// Interactive pacing.
    pub fn relaxed() -> Self {
        Self {
            after_board: Duration::from_millis(250),
            before_thinking: Duration::from_millis(1250),
            after_thinking: Duration::from_millis(1250),
        }
    }

    /// No pauses at all.
    pub fn none() -> Self {
        Self {
            after_board: Duration::ZERO,
            before_thinking: Duration::ZERO,
            after_thinking: Duration::ZERO,
        }
    }
}

/// Writes events to a terminal, optionally in color.
pub struct ConsolePresenter<W> {
    out: W,
    colored: bool,
    pacing: Pacing,
    rng: StdRng,
}

impl<W: Write + Send> ConsolePresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, colored: bool, pacing: Pacing, rng: StdRng) -> Self {
        Self {
            out,
            colored,
            pacing,
            rng,
        }
    }

    /// Consumes the presenter and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.colored {
            text.with(color).on(Color::Black).to_string()
        } else {
            text
        }
    }

    fn write_board(&mut self, board: &Board) -> Result<()> {
        for row in Position::ALL.chunks(3) {
            let cells: Vec<String> = row
                .iter()
                .map(|pos| {
                    let color = match board.get(*pos) {
                        Square::Occupied(Mark::X) => Color::Red,
                        Square::Occupied(Mark::O) => Color::Blue,
                        Square::Empty => Color::White,
                    };
                    self.paint(board.cell(*pos), color)
                })
                .collect();
            writeln!(self.out, "{}", cells.join(" "))?;
        }
        Ok(())
    }

    async fn pause(&mut self, duration: Duration) -> Result<()> {
        self.out.flush()?;
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<W: Write + Send> EventSink for ConsolePresenter<W> {
    #[instrument(skip(self))]
    async fn emit(&mut self, event: GameEvent) -> Result<()> {
        match event {
            GameEvent::TurnStarted { mark, board } => {
                self.write_board(&board)?;
                self.pause(self.pacing.after_board).await?;
                writeln!(
                    self.out,
                    "\nPlayer {}, which square do you want to play? (1~9)",
                    mark
                )?;
            }
            GameEvent::BotThinking { .. } => {
                self.pause(self.pacing.before_thinking).await?;
                let message = THINKING_MESSAGES
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(THINKING_MESSAGES[0]);
                let line = self.paint(message.to_string(), Color::Green);
                writeln!(self.out, "{}", line)?;
                self.pause(self.pacing.after_thinking).await?;
            }
            GameEvent::BotChose { position, .. } => {
                let line = self.paint(position.number().to_string(), Color::Green);
                writeln!(self.out, "{}", line)?;
            }
            GameEvent::Rejected { reason, .. } => {
                writeln!(self.out, "{}", reason)?;
            }
            GameEvent::MovePlayed { mark, position } => {
                debug!(%mark, %position, "Move shown");
            }
            GameEvent::GameOver { status, board } => {
                match status {
                    GameStatus::Won(mark) => writeln!(self.out, "The winner is the player {}!", mark)?,
                    GameStatus::Draw => writeln!(self.out, "The game has tied!")?,
                    GameStatus::InProgress => {}
                }
                self.write_board(&board)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
