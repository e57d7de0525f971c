//! Board coordinates and moves.
//!
//! Positions are 0-indexed `(x, y)` pairs: `x` is the column, `y` the row.
//! The human-facing 1-indexed notation lives in `crate::notation`.

use serde::{Deserialize, Serialize};

use super::color::StoneColor;

/// A 0-indexed board coordinate.
///
/// Ordering is row-major (`y` first, then `x`), which is the order the
/// engine reports captured stones in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// A stone placement: who plays, and where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Color of the stone being placed.
    pub color: StoneColor,
    /// Target cell.
    pub position: Position,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(color: StoneColor, position: Position) -> Self {
        Self { color, position }
    }

    /// Shorthand for a move at `(x, y)`.
    #[must_use]
    pub const fn at(color: StoneColor, x: usize, y: usize) -> Self {
        Self::new(color, Position::new(x, y))
    }
}
