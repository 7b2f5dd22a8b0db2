//! Game results and score comparison.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal scores on a full board.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Strictly higher score wins; equal scores draw.
#[must_use]
pub fn winner_by_score(scores: &PlayerMap<u32>) -> GameResult {
    let (a, b) = (scores[Player::A], scores[Player::B]);
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => GameResult::Winner(Player::A),
        std::cmp::Ordering::Less => GameResult::Winner(Player::B),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::B);
        assert!(!result.is_winner(Player::A));
        assert!(result.is_winner(Player::B));
        assert_eq!(result.winner(), Some(Player::B));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Player::A));
        assert!(!draw.is_winner(Player::B));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_winner_by_score() {
        let mut scores = PlayerMap::with_value(0);
        assert_eq!(winner_by_score(&scores), GameResult::Draw);

        scores[Player::A] = 2;
        assert_eq!(winner_by_score(&scores), GameResult::Winner(Player::A));

        scores[Player::B] = 3;
        assert_eq!(winner_by_score(&scores), GameResult::Winner(Player::B));

        scores[Player::A] = 3;
        assert_eq!(winner_by_score(&scores), GameResult::Draw);
    }

    #[test]
    fn test_display() {
        assert_eq!(GameResult::Winner(Player::A).to_string(), "Player A wins");
        assert_eq!(GameResult::Draw.to_string(), "Draw");
    }
}
