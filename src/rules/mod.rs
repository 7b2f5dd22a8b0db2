//! SOS rules: sequence detection and result determination.
//!
//! Detection is a pure function of a board and the cell just written;
//! the engine decides what a detection means for scores and turns.

pub mod detect;
pub mod result;

pub use detect::{count_all, detect, find_all, find_first, sequence_in_direction, Direction, Formed, SosSequence};
pub use result::{winner_by_score, GameResult};
