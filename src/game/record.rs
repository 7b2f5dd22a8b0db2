//! Move records, move outcomes and game status.

use serde::{Deserialize, Serialize};

use crate::board::{Coord, Letter};
use crate::core::{Player, PlayerMap};
use crate::rules::{Formed, GameResult};

/// A recorded move for history tracking.
///
/// Kept for replay and debugging; the rules never read it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Where the letter went.
    pub coord: Coord,
    /// The letter placed.
    pub letter: Letter,
    /// The player whose turn it was.
    pub player: Player,
}

impl MoveRecord {
    #[must_use]
    pub fn new(coord: Coord, letter: Letter, player: Player) -> Self {
        Self {
            coord,
            letter,
            player,
        }
    }
}

/// Where a game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are being accepted.
    #[default]
    InProgress,
    /// The game ended and has not been reset.
    Finished(GameResult),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}

/// What an accepted move did.
///
/// A rejected move is reported as `Err(SosError)` instead, so holding a
/// `MoveOutcome` means the move was accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move as recorded.
    pub placed: MoveRecord,

    /// `Some` when this move ended the game.
    pub result: Option<GameResult>,

    /// Sequences completed by this move (at most one in Simple mode).
    pub formed: Formed,

    /// Whose turn it is after the call.
    ///
    /// After a Simple-mode win this is the freshly drawn starter of the
    /// next game.
    pub current_turn: Player,

    /// Scores at the end of this move. After a Simple-mode win these are
    /// the final scores of the game that just ended, not the reset zeros.
    pub scores: PlayerMap<u32>,

    /// True when the engine reset itself after this move.
    pub reset: bool,
}

impl MoveOutcome {
    /// The player who made the move.
    #[must_use]
    pub fn mover(&self) -> Player {
        self.placed.player
    }

    /// The winning player, if this move decided one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.and_then(|result| result.winner())
    }

    /// Number of SOS sequences this move scored.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.formed.len() as u32
    }
}
