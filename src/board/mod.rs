//! Board system: letters, cells, coordinates and the grid.
//!
//! The `Board` only enforces bounds and the write-once rule. It knows
//! nothing about turns, scores or SOS sequences.

pub mod cell;
pub mod grid;

pub use cell::{Cell, Coord, Letter};
pub use grid::Board;
