//! Game tree search.
//!
//! The strategies here are written once against [`SearchState`] and know
//! nothing about Reversi. Every strategy is a pure function of its root: the
//! root is never mutated and repeated calls with the same arguments return the
//! same result.
//!
//! * [`alpha_beta`] - minimax with alpha-beta pruning to a fixed depth.
//! * [`iterative_deepening`] - repeated alpha-beta for depths `1..=depth`.
//! * [`node_budget`] - iterative deepening that stops once a node budget is
//!   spent, after a guaranteed minimum depth.
//! * [`exhaustive`] - alpha-beta to the end of the game.

mod alpha_beta;
mod exhaustive;
mod iterative;
pub mod root_move;
pub mod search_result;

use std::sync::OnceLock;

use crate::types::Score;

pub use alpha_beta::alpha_beta;
pub use exhaustive::exhaustive;
pub use iterative::{iterative_deepening, node_budget};
pub use search_result::SearchResult;

/// A node of a two-player game tree.
///
/// Scores are always from the perspective of one fixed side: the searcher
/// maximizes on nodes where [`is_player_turn`](SearchState::is_player_turn)
/// holds and minimizes elsewhere.
pub trait SearchState: Sized {
    type Decision: Clone + PartialEq + std::fmt::Debug;

    /// Decisions available to the side to move, in a deterministic order.
    fn legal_decisions(&self) -> impl Iterator<Item = Self::Decision> + '_;

    /// Returns the successor after `decision`. Must not mutate `self`.
    fn apply(&self, decision: &Self::Decision) -> Self;

    /// Static evaluation from the fixed perspective.
    fn evaluation(&self) -> Score;

    fn is_terminal(&self) -> bool;

    /// Whether the side to move is the perspective side.
    fn is_player_turn(&self) -> bool;
}

/// Checks `REVERSI_DEBUG_SEARCH` once per process.
pub(crate) fn is_debug_enabled() -> bool {
    static DEBUG: OnceLock<bool> = OnceLock::new();
    *DEBUG.get_or_init(|| {
        let env_var = std::env::var("REVERSI_DEBUG_SEARCH").unwrap_or_default();
        env_var == "1" || env_var.to_lowercase() == "true"
    })
}

#[cfg(test)]
pub(crate) mod test_util {
    //! A tiny explicit game tree for exercising the strategies.

    use super::SearchState;
    use crate::types::Score;

    /// Leaf scores of a complete tree addressed by child indices.
    #[derive(Clone, Debug)]
    pub struct Tree {
        pub path: Vec<usize>,
        pub branching: usize,
        pub height: usize,
        pub leaves: &'static [Score],
        /// Max on even plies when `true`.
        pub root_is_player: bool,
    }

    impl Tree {
        pub fn new(branching: usize, height: usize, leaves: &'static [Score]) -> Tree {
            assert_eq!(branching.pow(height as u32), leaves.len());
            Tree {
                path: Vec::new(),
                branching,
                height,
                leaves,
                root_is_player: true,
            }
        }

        fn leaf_index(&self) -> usize {
            self.path.iter().fold(0, |acc, &i| acc * self.branching + i)
        }
    }

    impl SearchState for Tree {
        type Decision = usize;

        fn legal_decisions(&self) -> impl Iterator<Item = usize> + '_ {
            let n = if self.is_terminal() { 0 } else { self.branching };
            0..n
        }

        fn apply(&self, decision: &usize) -> Tree {
            let mut next = self.clone();
            next.path.push(*decision);
            next
        }

        /// Exact at the leaves; interior nodes report the first leaf below.
        fn evaluation(&self) -> Score {
            let mut index = self.leaf_index();
            for _ in self.path.len()..self.height {
                index *= self.branching;
            }
            self.leaves[index]
        }

        fn is_terminal(&self) -> bool {
            self.path.len() == self.height
        }

        fn is_player_turn(&self) -> bool {
            (self.path.len() % 2 == 0) == self.root_is_player
        }
    }
}
