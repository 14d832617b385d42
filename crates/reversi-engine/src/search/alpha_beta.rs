//! Depth-limited minimax with alpha-beta pruning.

use crate::constants::SCORE_INF;
use crate::search::SearchState;
use crate::search::root_move::RootMoves;
use crate::search::search_result::SearchResult;
use crate::types::{Depth, NodeCount, Score};

/// Alpha-beta searcher shared by all strategies.
///
/// The node counter is cumulative across calls so iterative drivers can
/// enforce a budget over all iterations.
#[derive(Debug, Default)]
pub(crate) struct AlphaBeta {
    /// Nodes visited so far.
    pub n_nodes: NodeCount,
    /// Cumulative node count at which the current search is abandoned.
    pub node_limit: Option<NodeCount>,
    /// Set once `node_limit` has been hit.
    pub aborted: bool,
    /// Set when some line was cut at the depth limit rather than at the end
    /// of the game.
    pub horizon_reached: bool,
}

impl AlphaBeta {
    /// Searches every root decision to `depth` plies and records its score.
    ///
    /// # Returns
    ///
    /// Index and score of the best root decision, the first one on ties, or
    /// `None` if the search was aborted by the node limit.
    pub fn search_root<S: SearchState>(
        &mut self,
        root: &S,
        moves: &mut RootMoves<S::Decision>,
        depth: Depth,
    ) -> Option<(usize, Score)> {
        self.n_nodes += 1;
        let maximizing = moves.is_maximizing();
        let (mut alpha, mut beta) = (-SCORE_INF, SCORE_INF);
        let mut best: Option<(usize, Score)> = None;

        for (idx, rm) in moves.iter_mut().enumerate() {
            let child = root.apply(&rm.decision);
            let score = self.value(&child, depth - 1, alpha, beta);
            if self.aborted {
                return None;
            }
            rm.score = score;

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((idx, score));
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }
        best
    }

    /// Minimax value of `state` searched to `depth` plies inside `(alpha, beta)`.
    fn value<S: SearchState>(
        &mut self,
        state: &S,
        depth: Depth,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.n_nodes += 1;
        if self.node_limit.is_some_and(|limit| self.n_nodes >= limit) {
            self.aborted = true;
            return 0;
        }

        if state.is_terminal() {
            return state.evaluation();
        }
        if depth == 0 {
            self.horizon_reached = true;
            return state.evaluation();
        }

        let maximizing = state.is_player_turn();
        let mut best: Option<Score> = None;
        for decision in state.legal_decisions() {
            let child = state.apply(&decision);
            let score = self.value(&child, depth - 1, alpha, beta);
            if self.aborted {
                return 0;
            }

            if maximizing {
                let v = best.map_or(score, |b| b.max(score));
                best = Some(v);
                alpha = alpha.max(v);
            } else {
                let v = best.map_or(score, |b| b.min(score));
                best = Some(v);
                beta = beta.min(v);
            }
            if beta <= alpha {
                break;
            }
        }
        best.unwrap_or_else(|| state.evaluation())
    }
}

/// Minimax search with alpha-beta pruning to a fixed ply `depth`.
///
/// A `depth` of 0 is treated as 1. A terminal root, or one with no
/// decisions, returns `fallback` with the root's evaluation.
pub fn alpha_beta<S: SearchState>(
    root: &S,
    depth: Depth,
    fallback: S::Decision,
) -> SearchResult<S::Decision> {
    let Some(mut moves) = RootMoves::new(root) else {
        return SearchResult::fallback(fallback, root.evaluation());
    };
    let depth = depth.max(1);
    let mut engine = AlphaBeta::default();
    match engine.search_root(root, &mut moves, depth) {
        Some((idx, score)) => SearchResult {
            decision: moves.get(idx).decision.clone(),
            score,
            depth,
            n_nodes: engine.n_nodes,
        },
        None => SearchResult::fallback(fallback, root.evaluation()),
    }
}
