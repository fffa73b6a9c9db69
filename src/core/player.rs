//! Player identification, roles and the per-session roster.
//!
//! ## PlayerId
//!
//! Stable 0-based seat identifier, assigned at setup and never reused
//! within a session.
//!
//! ## Roster
//!
//! Id-keyed player storage backed by `Vec` for O(1) lookup.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    ///
    /// ```
    /// use undercover_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Secret role dealt to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Majority role, holds the common word.
    Civil,
    /// Minority role, holds the related word.
    Undercover,
}

impl Role {
    #[must_use]
    pub fn is_undercover(self) -> bool {
        matches!(self, Role::Undercover)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Civil => f.write_str("Civil"),
            Role::Undercover => f.write_str("Undercover"),
        }
    }
}

/// A seated player with their dealt role and word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Chosen pseudonym. Empty means "use the placeholder".
    pub name: String,
    pub role: Role,
    pub word: String,
}

impl Player {
    /// Name to show on screen: the pseudonym, or `Joueur N` (1-based).
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Joueur {}", self.id.index() + 1)
        } else {
            self.name.clone()
        }
    }
}

/// All players of a session, keyed by `PlayerId`.
///
/// Ids are dense: the player at position `i` has `PlayerId(i)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Build a roster from players whose ids are `0..len` in order.
    ///
    /// # Panics
    ///
    /// Panics if ids are not dense and ordered.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        assert!(players.len() <= 255, "At most 255 players supported");
        assert!(
            players.iter().enumerate().all(|(i, p)| p.id.index() == i),
            "Roster ids must be dense and ordered"
        );
        Self { players }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// Role of a player, if seated.
    #[must_use]
    pub fn role_of(&self, id: PlayerId) -> Option<Role> {
        self.get(id).map(|p| p.role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Count players holding `role`.
    #[must_use]
    pub fn count_role(&self, role: Role) -> usize {
        self.players.iter().filter(|p| p.role == role).count()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u8, role: Role) -> Player {
        Player {
            id: PlayerId::new(id),
            name: String::new(),
            role,
            word: String::from("chat"),
        }
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(
            players,
            vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]
        );
    }

    #[test]
    fn test_display_name_placeholder() {
        let mut p = player(2, Role::Civil);
        assert_eq!(p.display_name(), "Joueur 3");

        p.name = "Alex".to_string();
        assert_eq!(p.display_name(), "Alex");
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new(vec![
            player(0, Role::Civil),
            player(1, Role::Undercover),
            player(2, Role::Civil),
        ]);

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.role_of(PlayerId::new(1)), Some(Role::Undercover));
        assert_eq!(roster[PlayerId::new(2)].role, Role::Civil);
        assert!(roster.get(PlayerId::new(3)).is_none());
        assert_eq!(roster.count_role(Role::Civil), 2);
    }

    #[test]
    #[should_panic(expected = "Roster ids must be dense and ordered")]
    fn test_roster_rejects_gaps() {
        let _ = Roster::new(vec![player(0, Role::Civil), player(2, Role::Civil)]);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Undercover).unwrap();
        assert_eq!(json, "\"undercover\"");
        let role: Role = serde_json::from_str("\"civil\"").unwrap();
        assert_eq!(role, Role::Civil);
    }
}
