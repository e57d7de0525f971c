//! The board grid.
//!
//! `Board` is the single source of truth for which cell holds which stone.
//! It has no rule knowledge: placement and removal are unconditional, and
//! legality is decided by `crate::rules`.

use smallvec::SmallVec;

use crate::core::{Position, StoneColor};

/// Orthogonal neighbor offsets: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Neighbor list; never more than four entries.
pub type Neighbors = SmallVec<[Position; 4]>;

/// A fixed-size square grid of cells, each empty or holding one stone.
///
/// Cloning yields an independent deep copy, which the rule engine uses
/// for every speculative probe.
///
/// ## Example
///
/// ```
/// use go_rules::board::Board;
/// use go_rules::core::{Position, StoneColor};
///
/// let mut board = Board::new(9);
/// board.place_stone(Position::new(2, 3), StoneColor::Black);
///
/// assert_eq!(board.stone_color(Position::new(2, 3)), Some(StoneColor::Black));
/// assert_eq!(board.stone_color(Position::new(3, 2)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Row-major: index = y * size + x.
    cells: Vec<Option<StoneColor>>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from row-major cells. Caller guarantees the length.
    pub(crate) fn from_cells(size: usize, cells: Vec<Option<StoneColor>>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Color of the stone at `pos`, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board; check with `is_on_board` first.
    #[must_use]
    pub fn stone_color(&self, pos: Position) -> Option<StoneColor> {
        self.cells[self.index(pos)]
    }

    /// Put a stone at `pos`, overwriting whatever is there.
    pub fn place_stone(&mut self, pos: Position, color: StoneColor) {
        let idx = self.index(pos);
        self.cells[idx] = Some(color);
    }

    /// Clear `pos`. No-op if already empty.
    pub fn remove_stone(&mut self, pos: Position) {
        let idx = self.index(pos);
        self.cells[idx] = None;
    }

    /// Check whether `pos` lies within the grid.
    #[must_use]
    pub fn is_on_board(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Check whether `pos` is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.is_on_board(pos) && self.stone_color(pos).is_none()
    }

    /// Orthogonal neighbors of `pos` that lie on the board.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        let mut out = Neighbors::new();
        for (dx, dy) in DIRECTIONS {
            let (Some(x), Some(y)) = (pos.x.checked_add_signed(dx), pos.y.checked_add_signed(dy))
            else {
                continue;
            };
            let n = Position::new(x, y);
            if self.is_on_board(n) {
                out.push(n);
            }
        }
        out
    }

    /// Iterate over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Number of stones of `color` on the board.
    #[must_use]
    pub fn count(&self, color: StoneColor) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<StoneColor>]> {
        self.cells.chunks(self.size)
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.is_on_board(pos),
            "position {} is off a {}x{} board",
            pos,
            self.size,
            self.size
        );
        pos.y * self.size + pos.x
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                let symbol = cell.map_or('.', StoneColor::symbol);
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.size(), 5);
        assert_eq!(board.empty_count(), 25);
        assert!(board.positions().all(|p| board.stone_color(p).is_none()));
    }

    #[test]
    #[should_panic(expected = "Board size must be positive")]
    fn test_zero_size_board() {
        let _ = Board::new(0);
    }

    #[test]
    fn test_place_overwrites() {
        let mut board = Board::new(2);
        board.place_stone(Position::new(0, 0), StoneColor::Black);
        board.place_stone(Position::new(0, 0), StoneColor::White);

        assert_eq!(board.stone_color(Position::new(0, 0)), Some(StoneColor::White));
        assert_eq!(board.count(StoneColor::Black), 0);
        assert_eq!(board.count(StoneColor::White), 1);
    }

    #[test]
    fn test_remove_stone() {
        let mut board = Board::new(3);
        board.place_stone(Position::new(1, 2), StoneColor::Black);
        board.remove_stone(Position::new(1, 2));
        assert_eq!(board.stone_color(Position::new(1, 2)), None);

        // Removing from an empty cell is a no-op
        board.remove_stone(Position::new(1, 2));
        assert_eq!(board.empty_count(), 9);
    }

    #[test]
    fn test_is_on_board() {
        let board = Board::new(9);
        assert!(board.is_on_board(Position::new(0, 0)));
        assert!(board.is_on_board(Position::new(8, 8)));
        assert!(!board.is_on_board(Position::new(9, 0)));
        assert!(!board.is_on_board(Position::new(0, 9)));
    }

    #[test]
    #[should_panic(expected = "off a 3x3 board")]
    fn test_stone_color_off_board_panics() {
        let board = Board::new(3);
        let _ = board.stone_color(Position::new(3, 0));
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        let board = Board::new(3);
        assert_eq!(board.neighbors(Position::new(0, 0)).len(), 2);
        assert_eq!(board.neighbors(Position::new(1, 0)).len(), 3);
        assert_eq!(board.neighbors(Position::new(2, 2)).len(), 2);

        let center = board.neighbors(Position::new(1, 1));
        assert_eq!(center.len(), 4);
        assert!(center.contains(&Position::new(1, 0)));
        assert!(center.contains(&Position::new(1, 2)));
        assert!(center.contains(&Position::new(0, 1)));
        assert!(center.contains(&Position::new(2, 1)));
    }

    #[test]
    fn test_single_cell_board_has_no_neighbors() {
        let board = Board::new(1);
        assert!(board.neighbors(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = Board::new(3);
        board.place_stone(Position::new(1, 1), StoneColor::Black);

        let mut copy = board.clone();
        copy.place_stone(Position::new(0, 0), StoneColor::White);
        copy.remove_stone(Position::new(1, 1));

        assert_eq!(board.stone_color(Position::new(0, 0)), None);
        assert_eq!(board.stone_color(Position::new(1, 1)), Some(StoneColor::Black));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2);
        assert!(!board.is_full());
        for pos in board.positions().collect::<Vec<_>>() {
            board.place_stone(pos, StoneColor::Black);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_display_empty() {
        let board = Board::new(3);
        assert_eq!(board.to_string(), ". . .\n. . .\n. . .");
    }

    #[test]
    fn test_display_mixed() {
        let mut board = Board::new(3);
        board.place_stone(Position::new(0, 0), StoneColor::Black);
        board.place_stone(Position::new(2, 2), StoneColor::White);
        board.place_stone(Position::new(1, 1), StoneColor::Black);
        board.place_stone(Position::new(0, 2), StoneColor::White);

        assert_eq!(board.to_string(), "B . .\n. B .\nW . W");
    }
}
