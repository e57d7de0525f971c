//! Structural board snapshots for persistence.
//!
//! A `BoardSnapshot` is `{size, grid}` with `grid[y][x]` holding
//! `"BLACK"`, `"WHITE"`, or `null`. Decoding validates the shape, so a
//! decoded board always satisfies the N×N invariant.

use serde::{Deserialize, Serialize};

use super::grid::Board;
use crate::core::StoneColor;
use crate::error::{GameError, Result};

/// Serializable form of a `Board`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Edge length.
    pub size: usize,
    /// Rows top to bottom; each row left to right.
    pub grid: Vec<Vec<Option<StoneColor>>>,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            size: board.size(),
            grid: board.rows().map(<[_]>::to_vec).collect(),
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = GameError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        let size = snapshot.size;
        if size == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }
        if snapshot.grid.len() != size {
            return Err(GameError::CorruptSnapshot(format!(
                "expected {} rows, found {}",
                size,
                snapshot.grid.len()
            )));
        }
        if let Some((y, row)) = snapshot.grid.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(GameError::CorruptSnapshot(format!(
                "row {} has {} cells, expected {}",
                y,
                row.len(),
                size
            )));
        }

        let cells = snapshot.grid.into_iter().flatten().collect();
        Ok(Board::from_cells(size, cells))
    }
}

impl Board {
    /// Structural snapshot of this board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self)
    }

    /// Encode as a JSON string.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Decode a JSON string produced by `encode`.
    pub fn decode(data: &str) -> Result<Self> {
        let snapshot: BoardSnapshot = serde_json::from_str(data)?;
        Board::try_from(snapshot)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self.snapshot())?)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: BoardSnapshot = bincode::deserialize(bytes)?;
        Board::try_from(snapshot)
    }
}
