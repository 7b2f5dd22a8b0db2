//! The square letter grid.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Coord, Letter};
use crate::core::{check_size, SosError};

/// Fixed-size square grid of cells, stored row-major.
///
/// A filled cell is never overwritten; only `reset` clears it.
///
/// ## Usage
///
/// ```
/// use sos_engine::board::{Board, Cell, Coord, Letter};
///
/// let mut board = Board::new(3).unwrap();
/// board.set_cell(Coord::new(1, 1), Letter::O).unwrap();
///
/// assert_eq!(board.cell(Coord::new(1, 1)), Ok(Cell::Filled(Letter::O)));
/// assert!(board.set_cell(Coord::new(1, 1), Letter::S).is_err());
/// assert!(board.cell(Coord::new(3, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = SosError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let size = check_size(repr.size)?;
        if repr.cells.len() != size * size {
            return Err(SosError::CellCount {
                expected: size * size,
                found: repr.cells.len(),
            });
        }
        Ok(Self {
            size,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Create an empty board. Fails with `InvalidSize` outside 3..=10.
    pub fn new(size: usize) -> Result<Self, SosError> {
        let size = check_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Is `coord` on the board?
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        let size = self.size as isize;
        (0..size).contains(&coord.row) && (0..size).contains(&coord.col)
    }

    fn index(&self, coord: Coord) -> Result<usize, SosError> {
        if self.contains(coord) {
            Ok(coord.row as usize * self.size + coord.col as usize)
        } else {
            Err(SosError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            })
        }
    }

    /// Read a cell. Fails with `OutOfBounds` off the grid.
    pub fn cell(&self, coord: Coord) -> Result<Cell, SosError> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// The letter at `coord`, or `None` for empty or off-board cells.
    #[must_use]
    pub fn letter_at(&self, coord: Coord) -> Option<Letter> {
        self.cell(coord).ok().and_then(Cell::letter)
    }

    /// Write a letter into an empty cell.
    ///
    /// Fails with `OutOfBounds` off the grid and `CellOccupied` if the cell
    /// already holds a letter. The board is unchanged on failure.
    pub fn set_cell(&mut self, coord: Coord, letter: Letter) -> Result<(), SosError> {
        let idx = self.index(coord)?;
        if !self.cells[idx].is_empty() {
            return Err(SosError::CellOccupied {
                row: coord.row,
                col: coord.col,
            });
        }
        self.cells[idx] = Cell::Filled(letter);
        Ok(())
    }

    /// True iff every cell holds a letter.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding a letter.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&coord| self.letter_at(coord).is_none())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size as isize;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear every cell, optionally switching to a new size.
    ///
    /// An invalid size fails with `InvalidSize` and leaves the board as it was.
    pub fn reset(&mut self, size: Option<usize>) -> Result<(), SosError> {
        if let Some(size) = size {
            self.size = check_size(size)?;
        }
        self.clear();
        Ok(())
    }

    /// Clear every cell, keeping the size.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.cells.resize(self.size * self.size, Cell::Empty);
    }
}
