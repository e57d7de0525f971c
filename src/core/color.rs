//! Stone colors and per-color data storage.
//!
//! ## StoneColor
//!
//! The two sides of a match. Black always moves first.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `StoneColor`. Used for players,
//! scores, and anything else the engine tracks once per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Color of a stone, and of the player who owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoneColor {
    /// Moves first.
    Black,
    /// Moves second; receives komi under area scoring.
    White,
}

impl StoneColor {
    /// Both colors in turn order.
    pub const ALL: [StoneColor; 2] = [StoneColor::Black, StoneColor::White];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            StoneColor::Black => StoneColor::White,
            StoneColor::White => StoneColor::Black,
        }
    }

    /// Single-character board symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            StoneColor::Black => 'B',
            StoneColor::White => 'W',
        }
    }
}

impl std::fmt::Display for StoneColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoneColor::Black => write!(f, "BLACK"),
            StoneColor::White => write!(f, "WHITE"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// Serializes as `{"BLACK": .., "WHITE": ..}`.
///
/// ## Example
///
/// ```
/// use go_rules::core::{ColorMap, StoneColor};
///
/// let mut captures: ColorMap<u32> = ColorMap::with_value(0);
/// captures[StoneColor::White] += 3;
///
/// assert_eq!(captures[StoneColor::Black], 0);
/// assert_eq!(captures[StoneColor::White], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    #[serde(rename = "BLACK")]
    black: T,
    #[serde(rename = "WHITE")]
    white: T,
}

impl<T> ColorMap<T> {
    /// Create a ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(StoneColor) -> T) -> Self {
        Self {
            black: factory(StoneColor::Black),
            white: factory(StoneColor::White),
        }
    }

    /// Create a ColorMap from explicit values.
    pub const fn from_pair(black: T, white: T) -> Self {
        Self { black, white }
    }

    /// Create a ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            black: value.clone(),
            white: value,
        }
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: StoneColor) -> &T {
        match color {
            StoneColor::Black => &self.black,
            StoneColor::White => &self.white,
        }
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: StoneColor) -> &mut T {
        match color {
            StoneColor::Black => &mut self.black,
            StoneColor::White => &mut self.white,
        }
    }

    /// Iterate over (StoneColor, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (StoneColor, &T)> {
        [(StoneColor::Black, &self.black), (StoneColor::White, &self.white)].into_iter()
    }

    /// Transform every entry, keeping the color association.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> ColorMap<U> {
        ColorMap {
            black: f(&self.black),
            white: f(&self.white),
        }
    }
}

impl<T> Index<StoneColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: StoneColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<StoneColor> for ColorMap<T> {
    fn index_mut(&mut self, color: StoneColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}
