//! Ruleset trait for scoring and termination variants.
//!
//! Rulesets implement `Ruleset` to define:
//! - When the board alone ends the game
//! - How a finished board is scored
//!
//! Legality and capture detection are shared by every ruleset and are
//! provided as default methods built on `crate::rules::flood`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::flood::{captured_after_placement, count_liberties, group_stones};
use crate::board::Board;
use crate::core::{ColorMap, Move, Player, Position, StoneColor};

/// Final score per color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreResult {
    scores: ColorMap<f64>,
}

impl ScoreResult {
    /// Create a score from per-color totals.
    #[must_use]
    pub fn new(black: f64, white: f64) -> Self {
        Self {
            scores: ColorMap::from_pair(black, white),
        }
    }

    /// Score of one color.
    #[must_use]
    pub fn get(&self, color: StoneColor) -> f64 {
        self.scores[color]
    }

    /// Strictly higher score wins; equal scores tie.
    #[must_use]
    pub fn result(&self) -> GameResult {
        let black = self.get(StoneColor::Black);
        let white = self.get(StoneColor::White);
        if black > white {
            GameResult::Winner(StoneColor::Black)
        } else if white > black {
            GameResult::Winner(StoneColor::White)
        } else {
            GameResult::Tie
        }
    }
}

impl std::ops::Index<StoneColor> for ScoreResult {
    type Output = f64;

    fn index(&self, color: StoneColor) -> &Self::Output {
        &self.scores[color]
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(StoneColor),
    /// Equal scores.
    Tie,
}

impl GameResult {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: StoneColor) -> bool {
        matches!(self, GameResult::Winner(c) if *c == color)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(color) => write!(f, "{} wins", color),
            GameResult::Tie => write!(f, "tie"),
        }
    }
}

/// Ruleset trait.
///
/// Implementors supply the two ruleset-specific hooks. The legality and
/// capture queries are shared and normally not overridden.
///
/// ## Implementation Notes
///
/// - `is_game_over`: a board-only test; the two-pass rule is owned by `Game`
/// - `calculate_score`: must be total over any valid board
/// - Rulesets hold no per-match state and may be shared across matches
pub trait Ruleset {
    /// Compensation added to white's score.
    fn komi(&self) -> f64;

    /// Check whether the board alone ends the game.
    fn is_game_over(&self, board: &Board) -> bool;

    /// Score a board, given each side's capture tally.
    fn calculate_score(&self, board: &Board, players: &ColorMap<Player>) -> ScoreResult;

    // === Shared Rules ===

    /// Check whether `mv` may be played on `board`.
    ///
    /// Rejects off-board and occupied cells. A move that captures is always
    /// legal; otherwise the placed stone's group must keep a liberty. The
    /// probe runs on a clone, so `board` is never touched.
    fn can_place_stone(&self, board: &Board, mv: &Move) -> bool {
        if !board.is_empty_at(mv.position) {
            return false;
        }

        let mut probe = board.clone();
        probe.place_stone(mv.position, mv.color);

        if !captured_after_placement(&probe, mv).is_empty() {
            trace!(position = %mv.position, color = %mv.color, "capturing move is legal");
            return true;
        }

        let group = group_stones(&probe, mv.position, mv.color);
        let liberties = count_liberties(&probe, &group);
        trace!(position = %mv.position, color = %mv.color, liberties, "probed own group");
        liberties > 0
    }

    /// Enemy stones that `mv` would capture, sorted row-major.
    ///
    /// Evaluated against the board as it would be right after the move.
    /// Works whether or not the stone is already on `board`; `board` is
    /// never mutated.
    fn captured_groups(&self, board: &Board, mv: &Move) -> Vec<Position> {
        if !board.is_on_board(mv.position) {
            return Vec::new();
        }

        let mut probe = board.clone();
        probe.place_stone(mv.position, mv.color);

        let mut captured = captured_after_placement(&probe, mv);
        captured.sort_unstable();
        captured
    }
}

impl<R: Ruleset + ?Sized> Ruleset for &R {
    fn komi(&self) -> f64 {
        (**self).komi()
    }

    fn is_game_over(&self, board: &Board) -> bool {
        (**self).is_game_over(board)
    }

    fn calculate_score(&self, board: &Board, players: &ColorMap<Player>) -> ScoreResult {
        (**self).calculate_score(board, players)
    }
}

impl<R: Ruleset + ?Sized> Ruleset for std::sync::Arc<R> {
    fn komi(&self) -> f64 {
        (**self).komi()
    }

    fn is_game_over(&self, board: &Board) -> bool {
        (**self).is_game_over(board)
    }

    fn calculate_score(&self, board: &Board, players: &ColorMap<Player>) -> ScoreResult {
        (**self).calculate_score(board, players)
    }
}
