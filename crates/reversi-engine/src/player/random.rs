use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{RngExt, SeedableRng};

use crate::board::Board;
use crate::decision::Decision;
use crate::error::{Result, require_color};
use crate::eval::Evaluator;
use crate::game_state::GameState;
use crate::player::Player;
use crate::square::Square;
use crate::stone::Stone;

/// Takes a corner whenever one is legal, otherwise plays uniformly at random.
///
/// Corners are tried top-left, bottom-left, top-right, bottom-right.
#[derive(Debug)]
pub struct RandomPlayer {
    color: Stone,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a player with a fresh random seed.
    pub fn new(color: Stone) -> Result<RandomPlayer> {
        let seed = rand::rng().random_range(0..=u64::MAX);
        Self::with_seed(color, seed)
    }

    /// Creates a player whose choices are reproducible for a given `seed`.
    pub fn with_seed(color: Stone, seed: u64) -> Result<RandomPlayer> {
        Ok(RandomPlayer {
            color: require_color(color, "player")?,
            rng: StdRng::seed_from_u64(seed),
        })
    }
}

impl Player for RandomPlayer {
    fn color(&self) -> Stone {
        self.color
    }

    fn play(&mut self, board: &Board) -> Result<Decision> {
        if let Some(&corner) = Square::CORNERS
            .iter()
            .find(|&&sq| board.is_legal(sq, self.color))
        {
            return Ok(Decision::Place(corner));
        }

        let state = GameState::new(board, Evaluator::new(), self.color, self.color, false)?;
        Ok(state
            .legal_decisions()
            .choose(&mut self.rng)
            .unwrap_or(Decision::Pass))
    }
}
