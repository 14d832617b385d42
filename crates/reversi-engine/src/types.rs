//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Evaluation score from the perspective of the searching side.
pub type Score = i32;

/// Node counter for search statistics and budgets.
pub type NodeCount = u64;
