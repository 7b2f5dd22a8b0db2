//! Game engine: move handling, scoring, turns and game lifecycle.
//!
//! `GameEngine` is the narrow contract a front end drives: place a letter,
//! then read back the outcome or a snapshot.

pub mod engine;
pub mod record;
pub mod snapshot;

pub use engine::GameEngine;
pub use record::{GameStatus, MoveOutcome, MoveRecord};
pub use snapshot::GameSnapshot;
