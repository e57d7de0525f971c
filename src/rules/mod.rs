//! Rule evaluation.
//!
//! - `flood`: group, liberty, capture, and empty-region searches
//! - `engine`: the `Ruleset` trait with shared legality and capture queries
//! - `area`: the area-scoring ruleset
//!
//! The engine decides; it never mutates the caller's board. `Game` applies
//! the decisions.

pub mod area;
pub mod engine;
pub mod flood;

pub use area::{AreaScoring, DEFAULT_KOMI};
pub use engine::{GameResult, Ruleset, ScoreResult};
pub use flood::{
    captured_after_placement, count_liberties, explore_empty_region, group_stones, BorderColors,
    EmptyRegion,
};
