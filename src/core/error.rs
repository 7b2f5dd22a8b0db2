//! Error type shared by the board and the engine.
//!
//! Every variant is recoverable by the caller: an operation that fails
//! leaves the engine exactly as it was.

use derive_more::{Display, Error};

/// Why an engine operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SosError {
    /// Row or column outside `[0, size)`.
    #[display("cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
        /// Board size at the time of the request.
        size: usize,
    },

    /// The target cell already holds a letter.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
    },

    /// Board size outside the supported range.
    #[display("board size {size} is outside 3..=10")]
    InvalidSize {
        /// Rejected size.
        size: usize,
    },

    /// Stored cells that do not fill a board of the stated size.
    #[display("expected {expected} cells, found {found}")]
    CellCount {
        /// `size * size` for the stated size.
        expected: usize,
        /// Cells actually supplied.
        found: usize,
    },

    /// A character that is neither 'S' nor 'O'.
    #[display("'{letter}' is not a playable letter (expected S or O)")]
    InvalidLetter {
        /// Rejected character.
        letter: char,
    },

    /// A mode name that is neither "Simple" nor "General".
    #[display("unknown game mode '{name}'")]
    UnknownMode {
        /// Rejected name.
        name: String,
    },

    /// The game has finished and must be reset before further moves.
    #[display("the game is over")]
    GameOver,
}
