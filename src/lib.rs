//! # sos-engine
//!
//! Rule engine for SOS, the two-player letter game: players take turns
//! writing S or O into a square grid and score for every S-O-S they
//! complete in any of the eight directions.
//!
//! ## Rule Variants
//!
//! - **Simple**: the first SOS wins. The engine then resets itself.
//! - **General**: play until the board is full; the higher score wins,
//!   equal scores draw. The finished game is kept until the caller resets.
//!
//! ## Design Principles
//!
//! 1. **Front-End Agnostic**: No rendering or input handling. A terminal,
//!    web page or native GUI drives the engine through `place_letter` and
//!    the query methods.
//!
//! 2. **Closed Types**: Letters, cells, players and modes are enums, so
//!    invalid states cannot be represented.
//!
//! 3. **Injected Randomness**: The starting player comes from a seedable
//!    `GameRng`, never from global state.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `board`: Letters, cells, coordinates and the grid
//! - `rules`: SOS detection and result determination
//! - `game`: The engine, move outcomes and snapshots

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameMode, GameRng, GameRngState, Player, PlayerMap, SosError,
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

pub use crate::board::{Board, Cell, Coord, Letter};

pub use crate::rules::{Direction, Formed, GameResult, SosSequence};

pub use crate::game::{GameEngine, GameSnapshot, GameStatus, MoveOutcome, MoveRecord};
