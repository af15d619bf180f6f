//! Move sources for terminal play.

mod human;
mod random_bot;

pub use human::HumanPlayer;
pub use random_bot::{RandomBot, RandomSource, RngSource};
