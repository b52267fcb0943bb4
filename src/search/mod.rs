//! Move search for Tâb
//!
//! Contains:
//! - Depth-limited minimax with alpha-beta pruning
//! - Uniform random selection for the easiest level

pub mod minimax;
pub mod random;

pub use minimax::{SearchResult, SearchStats, Searcher};
pub use random::random_move;
