//! Letters, cells and coordinates.

use serde::{Deserialize, Serialize};

use crate::core::SosError;

/// A playable letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    /// An end of a sequence.
    S,
    /// The middle of a sequence.
    O,
}

impl Letter {
    /// The letter as an uppercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Letter::S => 'S',
            Letter::O => 'O',
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = SosError;

    /// Accepts 'S' and 'O' in either case.
    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter.to_ascii_uppercase() {
            'S' => Ok(Letter::S),
            'O' => Ok(Letter::O),
            _ => Err(SosError::InvalidLetter { letter }),
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No letter yet.
    #[default]
    Empty,
    /// Holds a letter for the rest of the game.
    Filled(Letter),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The letter in this cell, if any.
    #[must_use]
    pub const fn letter(self) -> Option<Letter> {
        match self {
            Cell::Empty => None,
            Cell::Filled(letter) => Some(letter),
        }
    }
}

/// A zero-based (row, col) position.
///
/// Components are signed so that neighbour arithmetic can step off the
/// board and so that callers passing -1 get `OutOfBounds` rather than a
/// wrapped index. Ordering is row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Zero-based row, top to bottom.
    pub row: isize,
    /// Zero-based column, left to right.
    pub col: isize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Step `steps` times along `(dr, dc)`.
    #[must_use]
    pub const fn offset(self, dr: isize, dc: isize, steps: isize) -> Self {
        Self {
            row: self.row + dr * steps,
            col: self.col + dc * steps,
        }
    }
}

impl From<(isize, isize)> for Coord {
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_from_char() {
        assert_eq!(Letter::try_from('S'), Ok(Letter::S));
        assert_eq!(Letter::try_from('o'), Ok(Letter::O));
        assert_eq!(
            Letter::try_from('X'),
            Err(SosError::InvalidLetter { letter: 'X' })
        );
        assert_eq!(
            Letter::try_from('0'),
            Err(SosError::InvalidLetter { letter: '0' })
        );
    }

    #[test]
    fn test_cell_letter() {
        assert!(Cell::Empty.is_empty());
        assert_eq!(Cell::Empty.letter(), None);
        assert_eq!(Cell::Filled(Letter::O).letter(), Some(Letter::O));
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn test_coord_offset_and_order() {
        let c = Coord::new(2, 2);
        assert_eq!(c.offset(-1, 1, 2), Coord::new(0, 4));
        assert_eq!(c.offset(1, 0, 0), c);

        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(coords, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(-1, 3).to_string(), "(-1, 3)");
    }
}
