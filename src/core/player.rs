//! Player identification.
//!
//! ## PlayerId
//!
//! Ids are assigned at game setup and are unique within a game. They need not
//! be contiguous or start at any particular value; turn order is derived from
//! their ascending order.
//!
//! ## Player
//!
//! An id plus an opaque type tag naming the agent that plays for it.

use serde::{Deserialize, Serialize};

/// Player identifier, unique within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seat in the game.
///
/// Immutable once the game is set up.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    /// Agent type tag, e.g. `"ai_reflex"`. Interpreted by the agent registry,
    /// never by the engine.
    #[serde(rename = "type")]
    pub agent_type: String,
}

impl Player {
    #[must_use]
    pub fn new(id: u32, agent_type: impl Into<String>) -> Self {
        Self {
            id: PlayerId(id),
            agent_type: agent_type.into(),
        }
    }
}

/// Ids of the given players, sorted ascending.
pub fn sorted_ids(players: &[Player]) -> Vec<PlayerId> {
    let mut ids: Vec<_> = players.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p7 = PlayerId::new(7);
        assert_eq!(p7.get(), 7);
        assert_eq!(format!("{}", p7), "Player 7");
        assert!(PlayerId::new(2) < PlayerId::new(10));
    }

    #[test]
    fn test_player_equality() {
        assert_eq!(Player::new(1, "ai_reflex"), Player::new(1, "ai_reflex"));
        assert_ne!(Player::new(1, "ai_reflex"), Player::new(1, "human_console"));
        assert_ne!(Player::new(1, "ai_reflex"), Player::new(2, "ai_reflex"));
    }

    #[test]
    fn test_sorted_ids() {
        let players = vec![
            Player::new(3, "ai_reflex"),
            Player::new(1, "ai_reflex"),
            Player::new(2, "ai_reflex"),
        ];
        assert_eq!(
            sorted_ids(&players),
            vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]
        );
    }

    #[test]
    fn test_player_serializes_type_tag() {
        let player = Player::new(4, "human_console");
        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"type\":\"human_console\""));

        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, player);
    }
}
