//! Root move management.

use std::cmp::Reverse;

use crate::constants::SCORE_INF;
use crate::search::SearchState;
use crate::types::Score;

/// Represents a root decision with its search results.
#[derive(Clone, Debug)]
pub struct RootMove<D> {
    pub decision: D,
    /// Score in the current iteration.
    pub score: Score,
    /// Score from the previous iteration, used for ordering.
    pub previous_score: Score,
}

impl<D> RootMove<D> {
    pub fn new(decision: D) -> Self {
        Self {
            decision,
            score: -SCORE_INF,
            previous_score: -SCORE_INF,
        }
    }
}

/// The decisions searched at the root, best-first after each iteration.
#[derive(Clone, Debug)]
pub(crate) struct RootMoves<D> {
    moves: Vec<RootMove<D>>,
    /// The root side maximizes.
    maximizing: bool,
}

impl<D: Clone> RootMoves<D> {
    /// Collects the root decisions in canonical order.
    ///
    /// Returns `None` for a terminal root or a root without decisions.
    pub fn new<S: SearchState<Decision = D>>(root: &S) -> Option<Self> {
        if root.is_terminal() {
            return None;
        }
        let moves: Vec<RootMove<D>> = root.legal_decisions().map(RootMove::new).collect();
        if moves.is_empty() {
            return None;
        }
        Some(Self {
            moves,
            maximizing: root.is_player_turn(),
        })
    }

    pub fn is_maximizing(&self) -> bool {
        self.maximizing
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, RootMove<D>> {
        self.moves.iter_mut()
    }

    pub fn get(&self, idx: usize) -> &RootMove<D> {
        &self.moves[idx]
    }

    /// Moves this iteration's scores to `previous_score` and sorts best-first.
    ///
    /// The sort is stable so equal scores keep their canonical order.
    pub fn reorder(&mut self) {
        for rm in &mut self.moves {
            rm.previous_score = rm.score;
        }
        if self.maximizing {
            self.moves.sort_by_key(|rm| Reverse(rm.previous_score));
        } else {
            self.moves.sort_by_key(|rm| rm.previous_score);
        }
    }
}
