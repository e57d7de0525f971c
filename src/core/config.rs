//! Match configuration.
//!
//! Board geometry and player names are fixed when a `Game` is created.
//! Scoring parameters such as komi belong to the ruleset, not here.

use serde::{Deserialize, Serialize};

use super::color::{ColorMap, StoneColor};
use super::player::Player;

/// Default board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Edge length of the square board. Must be positive.
    pub board_size: usize,

    /// Name of the player taking black.
    pub black_name: String,

    /// Name of the player taking white.
    pub white_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            black_name: "Black".to_string(),
            white_name: "White".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Create a new config with custom player names.
    pub fn with_player_names(mut self, black: impl Into<String>, white: impl Into<String>) -> Self {
        self.black_name = black.into();
        self.white_name = white.into();
        self
    }

    /// Build fresh player records for this config.
    #[must_use]
    pub fn players(&self) -> ColorMap<Player> {
        ColorMap::from_pair(
            Player::new(self.black_name.clone(), StoneColor::Black),
            Player::new(self.white_name.clone(), StoneColor::White),
        )
    }
}
