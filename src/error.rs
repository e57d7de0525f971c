//! Crate error type.
//!
//! `GameError` covers structurally invalid input: bad notation, coordinates
//! outside the board, corrupt snapshots. Rule violations during play are
//! not errors; see `crate::game::MoveError`.

use thiserror::Error;

use crate::game::MoveError;

/// Errors for malformed input and failed decoding.
#[derive(Debug, Error)]
pub enum GameError {
    /// A board must have at least one cell.
    #[error("board size must be positive, got {0}")]
    InvalidBoardSize(usize),

    /// A token is not `pass` and not a valid coordinate.
    #[error("invalid move notation: {0:?}")]
    InvalidNotation(String),

    /// A well-formed coordinate lies outside the board.
    #[error("coordinates out of board range: token={token:?}, x={x}, y={y}")]
    CoordinateOutOfRange {
        /// The offending token.
        token: String,
        /// 0-indexed column it resolved to.
        x: usize,
        /// 0-indexed row it resolved to.
        y: usize,
    },

    /// A replayed move was rejected by the rules.
    #[error("failed to make move {token:?}: {reason}")]
    MoveRejected {
        /// The offending token.
        token: String,
        /// Why the game refused it.
        reason: MoveError,
    },

    /// A decoded snapshot violates board invariants.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// JSON encoding or decoding failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding failed.
    #[error(transparent)]
    Binary(#[from] bincode::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, GameError>;
