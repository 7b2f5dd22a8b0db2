//! Game configuration types.
//!
//! Front ends configure a game by providing:
//! - `GameMode`: which rule variant decides the end of the game
//! - `GameConfig`: board size, mode and an optional RNG seed
//!
//! Configuration is plain data; `GameConfig::validate` is the single place
//! where the size bounds are enforced.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SosError;

/// Smallest supported board size.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board size.
pub const MAX_BOARD_SIZE: usize = 10;

/// Board size used when none is chosen.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Check a board size against `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
pub fn check_size(size: usize) -> Result<usize, SosError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(SosError::InvalidSize { size })
    }
}

/// Rule variant. Fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// The first SOS ends the game; its maker wins.
    #[default]
    Simple,
    /// Play until the board is full; the higher score wins.
    General,
}

impl GameMode {
    /// Does forming any SOS end the game immediately?
    #[must_use]
    pub const fn ends_on_first_sos(self) -> bool {
        matches!(self, GameMode::Simple)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Simple => write!(f, "Simple"),
            GameMode::General => write!(f, "General"),
        }
    }
}

impl FromStr for GameMode {
    type Err = SosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("simple") {
            Ok(GameMode::Simple)
        } else if name.eq_ignore_ascii_case("general") {
            Ok(GameMode::General)
        } else {
            Err(SosError::UnknownMode {
                name: name.to_string(),
            })
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use sos_engine::core::{GameConfig, GameMode};
///
/// let config = GameConfig::new(5, GameMode::General).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(11, GameMode::Simple).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length (3-10).
    pub size: usize,

    /// Rule variant.
    pub mode: GameMode,

    /// Seed for starting-player selection. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            mode: GameMode::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration without a fixed seed.
    pub fn new(size: usize, mode: GameMode) -> Self {
        Self {
            size,
            mode,
            seed: None,
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the rule variant.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Fix the RNG seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject sizes outside the supported range.
    pub fn validate(&self) -> Result<(), SosError> {
        check_size(self.size).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size_bounds() {
        for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            assert_eq!(check_size(size), Ok(size));
        }
        for size in [0, 1, 2, 11, 100] {
            assert_eq!(check_size(size), Err(SosError::InvalidSize { size }));
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Simple".parse::<GameMode>(), Ok(GameMode::Simple));
        assert_eq!("general".parse::<GameMode>(), Ok(GameMode::General));
        assert_eq!(" GENERAL ".parse::<GameMode>(), Ok(GameMode::General));
        assert_eq!(
            "blitz".parse::<GameMode>(),
            Err(SosError::UnknownMode {
                name: "blitz".to_string()
            })
        );
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [GameMode::Simple, GameMode::General] {
            assert_eq!(mode.to_string().parse::<GameMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_ends_on_first_sos() {
        assert!(GameMode::Simple.ends_on_first_sos());
        assert!(!GameMode::General.ends_on_first_sos());
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::default()
            .with_size(6)
            .with_mode(GameMode::General)
            .with_seed(99);

        assert_eq!(config.size, 6);
        assert_eq!(config.mode, GameMode::General);
        assert_eq!(config.seed, Some(99));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_default() {
        let config = GameConfig::default();
        assert_eq!(config.size, DEFAULT_BOARD_SIZE);
        assert_eq!(config.mode, GameMode::Simple);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_validate_rejects_size() {
        let config = GameConfig::new(2, GameMode::Simple);
        assert_eq!(config.validate(), Err(SosError::InvalidSize { size: 2 }));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(4, GameMode::General).with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
