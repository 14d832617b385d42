//! Players: anything that turns a board into a decision.

mod manual;
mod random;
mod search_player;

pub use manual::ManualPlayer;
pub use random::RandomPlayer;
pub use search_player::SearchPlayer;

use crate::board::Board;
use crate::decision::Decision;
use crate::error::Result;
use crate::level::{Level, Policy};
use crate::stone::Stone;

/// A participant that decides moves for one color.
pub trait Player {
    /// The color this player moves for.
    fn color(&self) -> Stone;

    /// Returns a legal decision for [`color`](Player::color) on `board`, or
    /// `Decision::Pass` when no placement is legal.
    fn play(&mut self, board: &Board) -> Result<Decision>;
}

/// Creates the computer player described by `level`.
///
/// `seed` makes random play reproducible; search levels are deterministic
/// and ignore it.
///
/// # Errors
///
/// Returns [`Error::EmptyColor`](crate::Error::EmptyColor) if `color` is
/// `Stone::None`.
pub fn create_player(level: &Level, color: Stone, seed: Option<u64>) -> Result<Box<dyn Player>> {
    Ok(match level.policy {
        Policy::Random => match seed {
            Some(seed) => Box::new(RandomPlayer::with_seed(color, seed)?),
            None => Box::new(RandomPlayer::new(color)?),
        },
        Policy::Search(strategy) => {
            Box::new(SearchPlayer::new(color, strategy, level.finale_empties)?)
        }
    })
}
