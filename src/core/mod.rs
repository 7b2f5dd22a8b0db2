//! Core engine types: players, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the rules and the
//! engine. Nothing here knows about letters or SOS sequences.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{check_size, GameConfig, GameMode, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::SosError;
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
