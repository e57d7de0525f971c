//! Core value types: colors, positions, moves, players, configuration.
//!
//! Nothing in here knows the rules of the game. The board and the rule
//! engine build on these types.

pub mod color;
pub mod position;
pub mod player;
pub mod config;

pub use color::{ColorMap, StoneColor};
pub use position::{Move, Position};
pub use player::Player;
pub use config::{GameConfig, DEFAULT_BOARD_SIZE};
