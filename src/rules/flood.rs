//! Flood-fill primitives shared by every ruleset.
//!
//! All functions are total over any board and bounded by board area.
//! None of them mutate the board they are given.

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::{Move, Position, StoneColor};

/// Stone colors found on the boundary of an empty region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderColors {
    /// A black stone touches the region.
    pub black: bool,
    /// A white stone touches the region.
    pub white: bool,
}

impl BorderColors {
    /// Record a bordering stone.
    pub fn insert(&mut self, color: StoneColor) {
        match color {
            StoneColor::Black => self.black = true,
            StoneColor::White => self.white = true,
        }
    }

    /// Check whether `color` borders the region.
    #[must_use]
    pub fn contains(&self, color: StoneColor) -> bool {
        match color {
            StoneColor::Black => self.black,
            StoneColor::White => self.white,
        }
    }

    /// Number of distinct bordering colors (0, 1, or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.black) + usize::from(self.white)
    }

    /// True when no stone touches the region.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bordering color if exactly one color borders the region.
    #[must_use]
    pub fn single(&self) -> Option<StoneColor> {
        match (self.black, self.white) {
            (true, false) => Some(StoneColor::Black),
            (false, true) => Some(StoneColor::White),
            _ => None,
        }
    }
}

/// A maximal connected region of empty cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmptyRegion {
    /// Cells in the region, in discovery order.
    pub positions: Vec<Position>,
    /// Colors of stones orthogonally adjacent to any cell in the region.
    pub borders: BorderColors,
}

impl EmptyRegion {
    /// Number of cells in the region.
    #[must_use]
    pub fn size(&self) -> usize {
        self.positions.len()
    }
}

/// Connected component of `color` stones containing `start`.
///
/// Returns an empty group if `start` does not hold a `color` stone.
#[must_use]
pub fn group_stones(board: &Board, start: Position, color: StoneColor) -> Vec<Position> {
    if !board.is_on_board(start) || board.stone_color(start) != Some(color) {
        return Vec::new();
    }

    let mut visited = FxHashSet::default();
    let mut stack = vec![start];
    let mut group = Vec::new();
    visited.insert(start);

    while let Some(current) = stack.pop() {
        group.push(current);
        for n in board.neighbors(current) {
            if board.stone_color(n) == Some(color) && visited.insert(n) {
                stack.push(n);
            }
        }
    }

    group
}

/// Distinct empty cells orthogonally adjacent to any member of `group`.
///
/// A liberty shared by several stones counts once.
#[must_use]
pub fn count_liberties(board: &Board, group: &[Position]) -> usize {
    let mut liberties = FxHashSet::default();
    for &pos in group {
        for n in board.neighbors(pos) {
            if board.stone_color(n).is_none() {
                liberties.insert(n);
            }
        }
    }
    liberties.len()
}

/// Enemy stones left without liberties by `mv`.
///
/// Expects the move's stone to already be on `board`. Every orthogonal
/// neighbor holding the opposing color is expanded to its group; groups
/// with zero liberties are captured. The result is the union of all
/// captured groups, each position once, in discovery order.
#[must_use]
pub fn captured_after_placement(board: &Board, mv: &Move) -> Vec<Position> {
    let enemy = mv.color.opponent();
    let mut examined: FxHashSet<Position> = FxHashSet::default();
    let mut captured = Vec::new();

    for n in board.neighbors(mv.position) {
        if board.stone_color(n) != Some(enemy) || examined.contains(&n) {
            continue;
        }
        let group = group_stones(board, n, enemy);
        examined.extend(group.iter().copied());
        if count_liberties(board, &group) == 0 {
            captured.extend(group);
        }
    }

    captured
}

/// Flood-fill the empty region containing `start`.
///
/// `visited` is owned by the caller and extended in place, so a scan over
/// the whole board never processes a region twice. `start` is assumed to
/// be an empty cell.
pub fn explore_empty_region(
    board: &Board,
    start: Position,
    visited: &mut FxHashSet<Position>,
) -> EmptyRegion {
    let mut region = EmptyRegion::default();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        region.positions.push(current);
        for n in board.neighbors(current) {
            match board.stone_color(n) {
                None => {
                    if visited.insert(n) {
                        stack.push(n);
                    }
                }
                Some(color) => region.borders.insert(color),
            }
        }
    }

    region
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, StoneColor)]) -> Board {
        let mut board = Board::new(size);
        for &(x, y, color) in stones {
            board.place_stone(Position::new(x, y), color);
        }
        board
    }

    fn sorted(mut positions: Vec<Position>) -> Vec<Position> {
        positions.sort();
        positions
    }

    use StoneColor::{Black, White};

    // =========================================================================
    // group_stones
    // =========================================================================

    #[test]
    fn test_group_of_single_stone() {
        let board = board_with(5, &[(2, 2, Black)]);
        assert_eq!(group_stones(&board, Position::new(2, 2), Black), vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_group_follows_orthogonal_links_only() {
        let board = board_with(5, &[(1, 1, Black), (2, 1, Black), (2, 2, Black), (3, 3, Black)]);
        let group = sorted(group_stones(&board, Position::new(1, 1), Black));
        assert_eq!(
            group,
            vec![Position::new(1, 1), Position::new(2, 1), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_group_stops_at_other_color() {
        let board = board_with(5, &[(0, 0, Black), (1, 0, White), (2, 0, Black)]);
        assert_eq!(group_stones(&board, Position::new(0, 0), Black).len(), 1);
    }

    #[test]
    fn test_group_of_empty_or_wrong_color_is_empty() {
        let board = board_with(5, &[(0, 0, Black)]);
        assert!(group_stones(&board, Position::new(3, 3), Black).is_empty());
        assert!(group_stones(&board, Position::new(0, 0), White).is_empty());
    }

    // =========================================================================
    // count_liberties
    // =========================================================================

    #[test]
    fn test_liberties_center_edge_corner() {
        let board = board_with(5, &[(2, 2, Black), (0, 2, Black), (0, 0, Black)]);
        assert_eq!(count_liberties(&board, &[Position::new(2, 2)]), 4);
        assert_eq!(count_liberties(&board, &[Position::new(0, 2)]), 3);
        assert_eq!(count_liberties(&board, &[Position::new(0, 0)]), 2);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        // (1,0) and (0,1) both touch (1,1)
        let board = board_with(5, &[(1, 0, Black), (0, 1, Black), (0, 0, Black)]);
        let group = group_stones(&board, Position::new(0, 0), Black);
        assert_eq!(group.len(), 3);
        // Liberties: (2,0), (1,1), (0,2)
        assert_eq!(count_liberties(&board, &group), 3);
    }

    #[test]
    fn test_surrounded_stone_has_no_liberties() {
        let board = board_with(
            5,
            &[(2, 2, White), (1, 2, Black), (3, 2, Black), (2, 1, Black), (2, 3, Black)],
        );
        assert_eq!(count_liberties(&board, &[Position::new(2, 2)]), 0);
    }

    // =========================================================================
    // captured_after_placement
    // =========================================================================

    #[test]
    fn test_capture_single_stone() {
        let board = board_with(
            5,
            &[(2, 2, White), (2, 3, Black), (3, 2, Black), (2, 1, Black), (1, 2, Black)],
        );
        let captured = captured_after_placement(&board, &Move::at(Black, 1, 2));
        assert_eq!(captured, vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_capture_multi_stone_group() {
        let board = board_with(
            5,
            &[
                (2, 2, White),
                (2, 3, White),
                (3, 2, Black),
                (3, 3, Black),
                (1, 2, Black),
                (1, 3, Black),
                (2, 1, Black),
                (2, 4, Black),
            ],
        );
        let captured = sorted(captured_after_placement(&board, &Move::at(Black, 2, 1)));
        assert_eq!(captured, vec![Position::new(2, 2), Position::new(2, 3)]);
    }

    #[test]
    fn test_group_touched_twice_reported_once() {
        // White L-group wraps around the corner stone at (1,1)
        let board = board_with(
            3,
            &[
                (1, 0, White),
                (0, 0, White),
                (0, 1, White),
                (2, 0, Black),
                (0, 2, Black),
                (1, 1, Black),
            ],
        );
        let captured = captured_after_placement(&board, &Move::at(Black, 1, 1));
        assert_eq!(captured.len(), 3);
    }

    #[test]
    fn test_two_disjoint_groups_captured() {
        // Black at (1,0) captures white corners (0,0) and (2,0) on a 3x3
        let board = board_with(
            3,
            &[(0, 0, White), (2, 0, White), (0, 1, Black), (2, 1, Black), (1, 0, Black)],
        );
        let captured = sorted(captured_after_placement(&board, &Move::at(Black, 1, 0)));
        assert_eq!(captured, vec![Position::new(0, 0), Position::new(2, 0)]);
    }

    #[test]
    fn test_no_capture_when_enemy_has_liberties() {
        let board = board_with(5, &[(2, 2, White), (2, 3, White), (2, 1, Black)]);
        assert!(captured_after_placement(&board, &Move::at(Black, 2, 1)).is_empty());
    }

    // =========================================================================
    // explore_empty_region
    // =========================================================================

    #[test]
    fn test_empty_board_is_one_region_with_no_border() {
        let board = Board::new(4);
        let mut visited = FxHashSet::default();
        let region = explore_empty_region(&board, Position::new(0, 0), &mut visited);

        assert_eq!(region.size(), 16);
        assert!(region.borders.is_empty());
        assert_eq!(visited.len(), 16);
    }

    #[test]
    fn test_region_bounded_by_one_color() {
        let board = board_with(3, &[(1, 0, Black), (0, 1, Black)]);
        let mut visited = FxHashSet::default();
        let region = explore_empty_region(&board, Position::new(0, 0), &mut visited);

        assert_eq!(region.positions, vec![Position::new(0, 0)]);
        assert_eq!(region.borders.single(), Some(Black));
    }

    #[test]
    fn test_region_bounded_by_both_colors() {
        let board = board_with(3, &[(1, 0, Black), (0, 1, White)]);
        let mut visited = FxHashSet::default();
        let region = explore_empty_region(&board, Position::new(0, 0), &mut visited);

        assert_eq!(region.borders.len(), 2);
        assert_eq!(region.borders.single(), None);
    }

    #[test]
    fn test_visited_is_extended_in_place() {
        let board = board_with(3, &[(1, 0, Black), (1, 1, Black), (1, 2, Black)]);
        let mut visited = FxHashSet::default();

        let left = explore_empty_region(&board, Position::new(0, 0), &mut visited);
        assert_eq!(left.size(), 3);
        assert!(visited.contains(&Position::new(0, 2)));
        assert!(!visited.contains(&Position::new(2, 0)));

        let right = explore_empty_region(&board, Position::new(2, 0), &mut visited);
        assert_eq!(right.size(), 3);
        assert_eq!(visited.len(), 6);
    }
}
