//! Search result types.

use crate::types::{Depth, NodeCount, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<D> {
    /// The chosen decision.
    pub decision: D,
    /// Backed-up score of `decision` from the searcher's perspective.
    pub score: Score,
    /// Depth of the iteration the decision comes from; 0 for a fallback.
    pub depth: Depth,
    /// Nodes visited across all iterations.
    pub n_nodes: NodeCount,
}

impl<D> SearchResult<D> {
    /// Result for a root that offers nothing to search.
    pub(crate) fn fallback(decision: D, score: Score) -> Self {
        Self {
            decision,
            score,
            depth: 0,
            n_nodes: 0,
        }
    }
}
