//! Area scoring.
//!
//! Score = stones on the board + surrounded territory + captured stones,
//! with komi added for white. The board alone only ends the game once
//! every cell is filled; normal play ends with two passes.

use rustc_hash::FxHashSet;

use super::engine::{Ruleset, ScoreResult};
use super::flood::explore_empty_region;
use crate::board::Board;
use crate::core::{ColorMap, Player, StoneColor};

/// Standard komi for area scoring.
pub const DEFAULT_KOMI: f64 = 7.5;

/// Area-scoring ruleset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaScoring {
    komi: f64,
}

impl Default for AreaScoring {
    fn default() -> Self {
        Self { komi: DEFAULT_KOMI }
    }
}

impl AreaScoring {
    /// Area scoring with the standard komi.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Area scoring with a custom komi.
    #[must_use]
    pub fn with_komi(komi: f64) -> Self {
        Self { komi }
    }

    /// Empty cells credited to each color.
    ///
    /// A region counts for a color only when that color is the sole one
    /// touching it. Regions touching both colors, or none, are neutral.
    #[must_use]
    pub fn territory(board: &Board) -> ColorMap<usize> {
        let mut territory = ColorMap::with_value(0);
        let mut visited = FxHashSet::default();

        for pos in board.positions() {
            if board.stone_color(pos).is_some() || visited.contains(&pos) {
                continue;
            }
            let region = explore_empty_region(board, pos, &mut visited);
            if let Some(owner) = region.borders.single() {
                territory[owner] += region.size();
            }
        }

        territory
    }
}

impl Ruleset for AreaScoring {
    fn komi(&self) -> f64 {
        self.komi
    }

    fn is_game_over(&self, board: &Board) -> bool {
        board.is_full()
    }

    fn calculate_score(&self, board: &Board, players: &ColorMap<Player>) -> ScoreResult {
        let territory = Self::territory(board);
        let total = |color: StoneColor| {
            let points = board.count(color) + territory[color];
            points as f64 + f64::from(players[color].captured_stones)
        };

        ScoreResult::new(
            total(StoneColor::Black),
            total(StoneColor::White) + self.komi,
        )
    }
}
