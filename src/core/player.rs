//! Player records.
//!
//! A `Player` is owned by the `Game` and only mutated by it: the capture
//! tally grows when that player's move removes enemy stones.

use serde::{Deserialize, Serialize};

use super::color::StoneColor;

/// One side of a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Color this player places.
    pub color: StoneColor,
    /// Number of opponent stones this player has captured.
    pub captured_stones: u32,
}

impl Player {
    /// Create a player with no captures.
    pub fn new(name: impl Into<String>, color: StoneColor) -> Self {
        Self {
            name: name.into(),
            color,
            captured_stones: 0,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}
