//! Terminal front end: console presenter, stdin input and move sources.

mod input;
mod players;
mod presenter;

pub use input::{LineTokens, SharedInput};
pub use players::{HumanPlayer, RandomBot, RandomSource, RngSource};
pub use presenter::{ConsolePresenter, Pacing};

use crate::games::tictactoe::{Game, GameStatus, Mark, Player};
use anyhow::Result;
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{info, instrument};

/// Who controls one side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the terminal.
    Human,
    /// Uniformly random free square.
    Bot,
}

/// Settings for one match.
#[derive(Debug, Clone, Getters, derive_new::new)]
pub struct MatchSettings {
    /// Controller of X (moves first).
    x: PlayerKind,
    /// Controller of O.
    o: PlayerKind,
    /// Seed for the bot and the flavor messages.
    seed: Option<u64>,
    /// Pauses between presentation steps.
    pacing: Pacing,
    /// Whether to emit ANSI colors.
    colored: bool,
}

/// Random generator for one consumer, derived from the optional seed.
fn rng_for(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
        None => StdRng::from_entropy(),
    }
}

/// Builds a player of the given kind.
pub fn build_player<R>(
    kind: PlayerKind,
    mark: Mark,
    input: &SharedInput<R>,
    seed: Option<u64>,
) -> Player
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    match kind {
        PlayerKind::Human => Player::new(
            mark,
            HumanPlayer::new(format!("Human {}", mark), input.clone()),
        ),
        PlayerKind::Bot => {
            let stream = match mark {
                Mark::X => 1,
                Mark::O => 2,
            };
            Player::new(
                mark,
                RandomBot::new(format!("Bot {}", mark), RngSource::new(rng_for(seed, stream))),
            )
        }
    }
}

/// Plays one match on stdin/stdout.
#[instrument(skip_all, fields(x = %settings.x, o = %settings.o))]
pub async fn run(settings: MatchSettings) -> Result<GameStatus> {
    info!("Starting terminal match");

    let input = LineTokens::shared(BufReader::new(tokio::io::stdin()));
    let mut first = build_player(settings.x, Mark::X, &input, settings.seed);
    let mut second = build_player(settings.o, Mark::O, &input, settings.seed);
    let mut presenter = ConsolePresenter::new(
        std::io::stdout(),
        settings.colored,
        settings.pacing,
        rng_for(settings.seed, 0),
    );

    let mut game = Game::new();
    game.start_game(&mut first, &mut second, &mut presenter).await
}
