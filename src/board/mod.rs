//! Board model: the grid of cells and its serializable snapshot.

pub mod grid;
pub mod snapshot;

pub use grid::{Board, Neighbors};
pub use snapshot::BoardSnapshot;
