//! Tic-tac-toe in the terminal: one match, then exit.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_terminal::GameStatus;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let status = tictactoe_terminal::run(cli.settings()).await?;
    match status {
        GameStatus::Won(mark) => info!(%mark, "Match finished with a winner"),
        _ => info!(?status, "Match finished"),
    }

    Ok(())
}
