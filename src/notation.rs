//! Human-readable move notation.
//!
//! Columns are letters in bijective base 26 (`A`..`Z`, `AA`, `AB`, ...),
//! rows are decimal; both are 1-indexed. `D4` is column 4, row 4 and maps to
//! `Position {x: 3, y: 3}`. The token `pass` (any case) denotes a pass.
//!
//! ```
//! use go_rules::notation::Coordinate;
//!
//! let c: Coordinate = "AA19".parse().unwrap();
//! assert_eq!((c.column(), c.row()), (27, 19));
//! assert_eq!(c.to_string(), "AA19");
//! ```

use std::str::FromStr;

use crate::core::Position;
use crate::error::{GameError, Result};

const ALPHABET: usize = 26;

/// A 1-indexed board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    column: usize,
    row: usize,
}

impl Coordinate {
    /// Create a coordinate; both parts must be at least 1.
    #[must_use]
    pub fn new(column: usize, row: usize) -> Option<Self> {
        (column >= 1 && row >= 1).then_some(Self { column, row })
    }

    /// 1-indexed column.
    #[must_use]
    pub fn column(self) -> usize {
        self.column
    }

    /// 1-indexed row.
    #[must_use]
    pub fn row(self) -> usize {
        self.row
    }

    /// The 0-indexed board position.
    #[must_use]
    pub fn to_position(self) -> Position {
        Position::new(self.column - 1, self.row - 1)
    }
}

impl From<Position> for Coordinate {
    fn from(pos: Position) -> Self {
        Self {
            column: pos.x + 1,
            row: pos.y + 1,
        }
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GameError::InvalidNotation(s.to_string());

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(invalid)?;
        let (letters, digits) = s.split_at(split);
        if letters.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let column = letters.bytes().try_fold(0usize, |acc, b| {
            let value = usize::from(b.to_ascii_uppercase() - b'A') + 1;
            acc.checked_mul(ALPHABET)?.checked_add(value)
        });
        let row = digits.parse::<usize>().ok();

        match (column, row) {
            (Some(column), Some(row)) => Coordinate::new(column, row).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut letters = Vec::new();
        let mut n = self.column;
        while n > 0 {
            n -= 1;
            letters.push(b'A' + (n % ALPHABET) as u8);
            n /= ALPHABET;
        }
        letters.reverse();
        for b in letters {
            write!(f, "{}", char::from(b))?;
        }
        write!(f, "{}", self.row)
    }
}

/// One token of a move sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveToken {
    /// Decline to place a stone.
    Pass,
    /// Place a stone at the coordinate.
    Place(Coordinate),
}

impl FromStr for MoveToken {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("pass") {
            Ok(MoveToken::Pass)
        } else {
            s.parse().map(MoveToken::Place)
        }
    }
}

impl std::fmt::Display for MoveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveToken::Pass => write!(f, "pass"),
            MoveToken::Place(c) => write!(f, "{}", c),
        }
    }
}
