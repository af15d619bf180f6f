//! Command-line interface for tictactoe_terminal.

use clap::Parser;
use tictactoe_terminal::{MatchSettings, Pacing, PlayerKind};

/// Terminal tic-tac-toe against a random-move bot
#[derive(Parser, Debug)]
#[command(name = "tictactoe_terminal")]
#[command(about = "Play one game of tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays X (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub x: PlayerKind,

    /// Who plays O
    #[arg(long, value_enum, default_value_t = PlayerKind::Bot)]
    pub o: PlayerKind,

    /// Seed for the bot's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the pauses between moves
    #[arg(long)]
    pub no_pause: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Converts parsed flags into match settings.
    pub fn settings(&self) -> MatchSettings {
        let pacing = if self.no_pause {
            Pacing::none()
        } else {
            Pacing::relaxed()
        };
        MatchSettings::new(self.x, self.o, self.seed, pacing, !self.plain)
    }
}
