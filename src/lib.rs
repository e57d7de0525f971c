//! # go-rules
//!
//! A rule-evaluation engine for the game of Go.
//!
//! ## Design Principles
//!
//! 1. **Board Knows No Rules**: `Board` stores stones. Legality, captures,
//!    and scoring live in `rules`.
//!
//! 2. **Probes Never Leak**: every speculative placement runs on a cloned
//!    board. Queries never mutate the caller's board.
//!
//! 3. **Pluggable Scoring**: rulesets implement `Ruleset`, supplying only
//!    the termination test and the scoring function. Flood-fill primitives
//!    are shared free functions.
//!
//! 4. **Rule Violations Are Values**: `Game::make_move` returns
//!    `Result<Placement, MoveError>`. Only malformed input (bad notation,
//!    corrupt saves) produces a `GameError`.
//!
//! ## Modules
//!
//! - `core`: colors, positions, moves, players, configuration
//! - `board`: the grid and its snapshots
//! - `rules`: flood-fill primitives, the `Ruleset` trait, area scoring
//! - `game`: the match state machine, replay, save/restore
//! - `notation`: `D4`-style coordinates
//!
//! The engine has no repeated-position (ko) rule.

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod notation;
pub mod error;

// Re-export commonly used types
pub use crate::core::{ColorMap, GameConfig, Move, Player, Position, StoneColor};

pub use crate::board::{Board, BoardSnapshot};

pub use crate::rules::{AreaScoring, GameResult, Ruleset, ScoreResult};

pub use crate::game::{Game, GameSave, GameStatus, MessageCode, MoveError, Placement};

pub use crate::notation::{Coordinate, MoveToken};

pub use crate::error::{GameError, Result};
