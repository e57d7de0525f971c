//! Match orchestration.
//!
//! - `state`: the `Game` state machine and move outcomes
//! - `replay`: applying a recorded token sequence
//! - `save`: save/restore of a match

pub mod replay;
pub mod save;
pub mod state;

pub use save::{GameSave, PlayerRecord};
pub use state::{Game, GameStatus, MessageCode, MoveError, Placement, PASSES_TO_END};
