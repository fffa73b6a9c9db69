//! Session configuration.
//!
//! Hosts configure a session at startup with `SessionConfig`:
//! - player count bounds and the default count
//! - the default difficulty tier
//!
//! Out-of-range player counts are clamped, never rejected.

use serde::{Deserialize, Serialize};

use crate::words::Difficulty;

/// Smallest player count the game supports.
pub const MIN_PLAYERS: usize = 4;
/// Largest player count the game supports.
pub const MAX_PLAYERS: usize = 12;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fewest players a deal may have.
    pub min_players: usize,

    /// Most players a deal may have.
    pub max_players: usize,

    /// Player count used at creation and after `reset`.
    pub default_players: usize,

    /// Difficulty used at creation and after `reset`.
    pub default_difficulty: Difficulty,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            default_players: MIN_PLAYERS,
            default_difficulty: Difficulty::Easy,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration (4-12 players, 4 by default, `facile`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player count bounds. The default count is clamped into them.
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        assert!(min >= 2, "Need at least 2 players");
        assert!(min <= max, "Minimum players must not exceed maximum");
        assert!(max <= 255, "At most 255 players supported");

        self.min_players = min;
        self.max_players = max;
        self.default_players = self.clamp_players(self.default_players);
        self
    }

    /// Set the default player count (clamped into bounds).
    #[must_use]
    pub fn with_default_players(mut self, count: usize) -> Self {
        self.default_players = self.clamp_players(count);
        self
    }

    /// Set the default difficulty.
    #[must_use]
    pub fn with_default_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.default_difficulty = difficulty;
        self
    }

    /// Clamp a requested player count into `[min_players, max_players]`.
    #[must_use]
    pub fn clamp_players(&self, count: usize) -> usize {
        count.clamp(self.min_players, self.max_players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new();
        assert_eq!(config.min_players, 4);
        assert_eq!(config.max_players, 12);
        assert_eq!(config.default_players, 4);
        assert_eq!(config.default_difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_clamp_players() {
        let config = SessionConfig::new();
        assert_eq!(config.clamp_players(0), 4);
        assert_eq!(config.clamp_players(7), 7);
        assert_eq!(config.clamp_players(40), 12);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_player_bounds(3, 8)
            .with_default_players(10)
            .with_default_difficulty(Difficulty::Hard);

        assert_eq!(config.min_players, 3);
        assert_eq!(config.max_players, 8);
        assert_eq!(config.default_players, 8);
        assert_eq!(config.default_difficulty, Difficulty::Hard);
    }

    #[test]
    #[should_panic(expected = "Minimum players must not exceed maximum")]
    fn test_inverted_bounds() {
        let _ = SessionConfig::new().with_player_bounds(9, 5);
    }

    #[test]
    fn test_partial_json() {
        let config: SessionConfig =
            serde_json::from_str(r#"{ "default_players": 6, "default_difficulty": "moyen" }"#).unwrap();
        assert_eq!(config.min_players, 4);
        assert_eq!(config.default_players, 6);
        assert_eq!(config.default_difficulty, Difficulty::Medium);
    }
}
