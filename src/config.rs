//! Game setup configuration.
//!
//! `GameConfig` describes a game before it starts: who plays, how many rounds,
//! how many dice, and what each face is worth. `build` turns it into a fresh
//! [`Game`].
//!
//! The default is four rounds of five standard dice where a 4 is worth
//! nothing, with one console player against three reflex bots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::agents::{AI_REFLEX, HUMAN_CONSOLE};
use crate::core::{Game, Player};

/// Configuration for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Players in registration order.
    pub players: Vec<Player>,

    /// Rounds to play.
    pub total_rounds: u32,

    /// Dice each player rolls per round.
    pub dice_per_round: u32,

    /// Face value -> points.
    pub dice_values: BTreeMap<i32, i32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: vec![
                Player::new(1, HUMAN_CONSOLE),
                Player::new(2, AI_REFLEX),
                Player::new(3, AI_REFLEX),
                Player::new(4, AI_REFLEX),
            ],
            total_rounds: 4,
            dice_per_round: 5,
            dice_values: [(1, 1), (2, 2), (3, 3), (4, 0), (5, 5), (6, 6)]
                .into_iter()
                .collect(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the player list.
    #[must_use]
    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self
    }

    /// Make every player a reflex bot.
    #[must_use]
    pub fn bots_only(mut self) -> Self {
        for player in &mut self.players {
            player.agent_type = AI_REFLEX.to_string();
        }
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_total_rounds(mut self, rounds: u32) -> Self {
        self.total_rounds = rounds;
        self
    }

    /// Set the dice rolled per round.
    #[must_use]
    pub fn with_dice_per_round(mut self, dice: u32) -> Self {
        self.dice_per_round = dice;
        self
    }

    /// Set the points for one face.
    #[must_use]
    pub fn with_face_value(mut self, face: i32, points: i32) -> Self {
        self.dice_values.insert(face, points);
        self
    }

    /// Replace the whole face table.
    #[must_use]
    pub fn with_dice_values(mut self, values: BTreeMap<i32, i32>) -> Self {
        self.dice_values = values;
        self
    }

    /// Build a new game with no rounds played.
    #[must_use]
    pub fn build(self, id: i64) -> Game {
        Game::new(
            id,
            self.players,
            self.total_rounds,
            self.dice_per_round,
            self.dice_values,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.players.len(), 4);
        assert_eq!(config.players[0].agent_type, HUMAN_CONSOLE);
        assert_eq!(config.total_rounds, 4);
        assert_eq!(config.dice_per_round, 5);
        assert_eq!(config.dice_values[&4], 0);
        assert_eq!(config.dice_values[&6], 6);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .bots_only()
            .with_total_rounds(2)
            .with_dice_per_round(3)
            .with_face_value(6, 0);

        assert!(config.players.iter().all(|p| p.agent_type == AI_REFLEX));
        assert_eq!(config.total_rounds, 2);
        assert_eq!(config.dice_per_round, 3);
        assert_eq!(config.dice_values[&6], 0);
    }

    #[test]
    fn test_build() {
        let game = GameConfig::default().with_total_rounds(3).build(77);
        assert_eq!(game.id, 77);
        assert_eq!(game.total_rounds, 3);
        assert!(game.completed_rounds.is_empty());
        assert!(game.winning_player_ids.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
