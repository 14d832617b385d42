//! Iterative deepening drivers.

use crate::search::alpha_beta::AlphaBeta;
use crate::search::root_move::RootMoves;
use crate::search::search_result::SearchResult;
use crate::search::{SearchState, is_debug_enabled};
use crate::types::{Depth, NodeCount};

/// Iterative deepening over depths `1..=depth`.
///
/// Root decisions are reordered best-first between iterations. The result of
/// the deepest completed iteration is returned. Deepening stops early once an
/// iteration proves the whole remaining tree, since further depths cannot
/// change the outcome.
pub fn iterative_deepening<S: SearchState>(
    root: &S,
    depth: Depth,
    fallback: S::Decision,
) -> SearchResult<S::Decision> {
    let depth = depth.max(1);
    deepen(root, depth, depth, None, fallback)
}

/// Iterative deepening limited by a node budget.
///
/// Depths up to `min_depth` always complete. A deeper iteration starts only
/// while the nodes visited so far are below `node_budget`, and it is abandoned
/// as soon as the cumulative count reaches the budget; its partial result is
/// discarded. `min_depth` is clamped to `1..=max_depth`.
pub fn node_budget<S: SearchState>(
    root: &S,
    min_depth: Depth,
    max_depth: Depth,
    node_budget: NodeCount,
    fallback: S::Decision,
) -> SearchResult<S::Decision> {
    let max_depth = max_depth.max(1);
    let min_depth = min_depth.clamp(1, max_depth);
    deepen(root, min_depth, max_depth, Some(node_budget), fallback)
}

fn deepen<S: SearchState>(
    root: &S,
    min_depth: Depth,
    max_depth: Depth,
    budget: Option<NodeCount>,
    fallback: S::Decision,
) -> SearchResult<S::Decision> {
    let Some(mut moves) = RootMoves::new(root) else {
        return SearchResult::fallback(fallback, root.evaluation());
    };

    let mut engine = AlphaBeta::default();
    let mut best: Option<SearchResult<S::Decision>> = None;

    for depth in 1..=max_depth {
        let limited = depth > min_depth;
        if limited && budget.is_some_and(|b| engine.n_nodes >= b) {
            break;
        }
        engine.node_limit = if limited { budget } else { None };
        engine.horizon_reached = false;

        let Some((idx, score)) = engine.search_root(root, &mut moves, depth) else {
            if is_debug_enabled() {
                eprintln!(
                    "[Search] depth {depth} abandoned after {} nodes",
                    engine.n_nodes
                );
            }
            break;
        };

        let decision = moves.get(idx).decision.clone();
        if is_debug_enabled() {
            eprintln!(
                "[Search] depth {depth}: nodes={} best={decision:?} score={score}",
                engine.n_nodes
            );
        }
        best = Some(SearchResult {
            decision,
            score,
            depth,
            n_nodes: engine.n_nodes,
        });

        if !engine.horizon_reached {
            break;
        }
        moves.reorder();
    }

    match best {
        Some(result) => SearchResult {
            n_nodes: engine.n_nodes,
            ..result
        },
        None => SearchResult::fallback(fallback, root.evaluation()),
    }
}
