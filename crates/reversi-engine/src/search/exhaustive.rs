//! Search to the end of the game.

use crate::search::SearchState;
use crate::search::alpha_beta::alpha_beta;
use crate::search::search_result::SearchResult;
use crate::types::Depth;

/// Alpha-beta search with no depth cap.
///
/// Cost grows with the remaining branching factor, so callers only use it
/// near the end of a game. The depth of the result is the largest depth value
/// rather than the length of the longest line.
pub fn exhaustive<S: SearchState>(root: &S, fallback: S::Decision) -> SearchResult<S::Decision> {
    alpha_beta(root, Depth::MAX, fallback)
}
