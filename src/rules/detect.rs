//! SOS detection around a freshly placed letter.
//!
//! Every SOS that a move completes contains the placed cell, so detection
//! only has to look outward from that cell:
//!
//! - an `O` is the middle of a sequence: both neighbours along a direction
//!   must be `S`;
//! - an `S` is an end of a sequence: the next cell must be `O` and the one
//!   after it `S`.
//!
//! All eight directions are scanned. For an `O`, opposite directions find
//! the same three cells, so candidates are deduplicated by their sorted
//! coordinate key before they are counted.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Coord, Letter};
use crate::core::GameMode;

/// A unit step on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    /// Row delta.
    pub dr: isize,
    /// Column delta.
    pub dc: isize,
}

impl Direction {
    /// Up one row.
    pub const NORTH: Direction = Direction::new(-1, 0);
    /// Down one row.
    pub const SOUTH: Direction = Direction::new(1, 0);
    /// Left one column.
    pub const WEST: Direction = Direction::new(0, -1);
    /// Right one column.
    pub const EAST: Direction = Direction::new(0, 1);
    /// Up and to the left.
    pub const NORTH_WEST: Direction = Direction::new(-1, -1);
    /// Down and to the right.
    pub const SOUTH_EAST: Direction = Direction::new(1, 1);
    /// Up and to the right.
    pub const NORTH_EAST: Direction = Direction::new(-1, 1);
    /// Down and to the left.
    pub const SOUTH_WEST: Direction = Direction::new(1, -1);

    /// Scan order: both senses of each axis, then both diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::WEST,
        Direction::EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::NORTH_EAST,
        Direction::SOUTH_WEST,
    ];

    const fn new(dr: isize, dc: isize) -> Self {
        Self { dr, dc }
    }

    /// The cell `steps` away from `from` in this direction.
    #[must_use]
    pub const fn step(self, from: Coord, steps: isize) -> Coord {
        from.offset(self.dr, self.dc, steps)
    }
}

/// Three collinear cells spelling S-O-S, in reading order from the cell
/// the scan started at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SosSequence {
    cells: [Coord; 3],
}

impl SosSequence {
    #[must_use]
    pub const fn new(start: Coord, middle: Coord, end: Coord) -> Self {
        Self {
            cells: [start, middle, end],
        }
    }

    #[must_use]
    pub const fn start(&self) -> Coord {
        self.cells[0]
    }

    #[must_use]
    pub const fn middle(&self) -> Coord {
        self.cells[1]
    }

    #[must_use]
    pub const fn end(&self) -> Coord {
        self.cells[2]
    }

    /// Cells in start, middle, end order.
    #[must_use]
    pub const fn cells(&self) -> [Coord; 3] {
        self.cells
    }

    /// Order-independent identity: the three coordinates sorted.
    ///
    /// A sequence read forwards and backwards has the same key.
    #[must_use]
    pub fn key(&self) -> [Coord; 3] {
        let mut key = self.cells;
        key.sort_unstable();
        key
    }

    /// Does this sequence cover the same three cells as `other`?
    #[must_use]
    pub fn same_cells(&self, other: &SosSequence) -> bool {
        self.key() == other.key()
    }
}

/// Sequences formed by one move. Eight is the most a single move can make.
pub type Formed = SmallVec<[SosSequence; 8]>;

/// The SOS, if any, through `at` along `direction`.
#[must_use]
pub fn sequence_in_direction(board: &Board, at: Coord, direction: Direction) -> Option<SosSequence> {
    match board.letter_at(at)? {
        Letter::O => {
            let before = direction.step(at, -1);
            let after = direction.step(at, 1);
            let flanked = board.letter_at(before) == Some(Letter::S)
                && board.letter_at(after) == Some(Letter::S);
            flanked.then(|| SosSequence::new(before, at, after))
        }
        Letter::S => {
            let middle = direction.step(at, 1);
            let end = direction.step(at, 2);
            let spelled = board.letter_at(middle) == Some(Letter::O)
                && board.letter_at(end) == Some(Letter::S);
            spelled.then(|| SosSequence::new(at, middle, end))
        }
    }
}

/// The first SOS through `at` in scan order.
#[must_use]
pub fn find_first(board: &Board, at: Coord) -> Option<SosSequence> {
    Direction::ALL
        .iter()
        .find_map(|&direction| sequence_in_direction(board, at, direction))
}

/// Every distinct SOS through `at`, in scan order of first discovery.
#[must_use]
pub fn find_all(board: &Board, at: Coord) -> Formed {
    let mut seen: FxHashSet<[Coord; 3]> = FxHashSet::default();
    Direction::ALL
        .iter()
        .filter_map(|&direction| sequence_in_direction(board, at, direction))
        .filter(|sequence| seen.insert(sequence.key()))
        .collect()
}

/// Detect the sequences a move at `at` completes under `mode`.
///
/// Simple mode stops at the first sequence, General mode enumerates them
/// all.
#[must_use]
pub fn detect(board: &Board, at: Coord, mode: GameMode) -> Formed {
    if mode.ends_on_first_sos() {
        find_first(board, at).into_iter().collect()
    } else {
        find_all(board, at)
    }
}

/// Every distinct SOS anywhere on the board.
///
/// Brute force over all cells; used to cross-check incremental scoring.
#[must_use]
pub fn count_all(board: &Board) -> usize {
    let mut seen: FxHashSet<[Coord; 3]> = FxHashSet::default();
    for at in board.coords() {
        for direction in Direction::ALL {
            if let Some(sequence) = sequence_in_direction(board, at, direction) {
                seen.insert(sequence.key());
            }
        }
    }
    seen.len()
}
