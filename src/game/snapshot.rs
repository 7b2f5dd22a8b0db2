//! Read-only view of a game for front ends.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::{GameStatus, MoveRecord};
use crate::board::{Cell, Coord};
use crate::core::{GameMode, Player, PlayerMap};

/// Everything a front end needs to draw a game.
///
/// Taking a snapshot is cheap: the history shares structure with the
/// engine's own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: usize,
    pub mode: GameMode,
    pub current_turn: Player,
    pub scores: PlayerMap<u32>,
    pub status: GameStatus,
    /// Row-major cells.
    pub cells: Vec<Cell>,
    pub history: Vector<MoveRecord>,
}

impl GameSnapshot {
    /// The cell at `coord`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        let size = self.size as isize;
        if (0..size).contains(&coord.row) && (0..size).contains(&coord.col) {
            self.cells.get(coord.row as usize * self.size + coord.col as usize).copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Letter;
    use crate::game::GameEngine;

    #[test]
    fn test_snapshot_reflects_engine() {
        let mut engine = GameEngine::new(4, GameMode::General, 3).unwrap();
        let first = engine.current_turn();
        engine.place_letter(1, 2, Letter::O).unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.size, 4);
        assert_eq!(snapshot.mode, GameMode::General);
        assert_eq!(snapshot.current_turn, first.opponent());
        assert_eq!(snapshot.cell(Coord::new(1, 2)), Some(Cell::Filled(Letter::O)));
        assert_eq!(snapshot.cell(Coord::new(0, 0)), Some(Cell::Empty));
        assert_eq!(snapshot.cell(Coord::new(4, 0)), None);
        assert_eq!(snapshot.history.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut engine = GameEngine::new(3, GameMode::General, 3).unwrap();
        let snapshot = engine.snapshot();
        engine.place_letter(0, 0, Letter::S).unwrap();

        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.cell(Coord::new(0, 0)), Some(Cell::Empty));
    }

    #[test]
    fn test_snapshot_serde() {
        let mut engine = GameEngine::new(3, GameMode::Simple, 9).unwrap();
        engine.place_letter(2, 1, Letter::S).unwrap();

        let snapshot = engine.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
