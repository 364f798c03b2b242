//! Round ledger: the turns of one round and its completion rules.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use super::turn::Turn;
use super::ScoreTable;
use crate::error::{GameError, GameResult};

/// One round of play.
///
/// Turns are kept in the order they were taken; that order is part of the
/// round's identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Round number (starts at 1).
    pub round_number: u32,
    /// Player who acted first this round.
    pub starting_player_id: PlayerId,
    pub turns: Vec<Turn>,
}

impl Round {
    /// Create an empty round.
    #[must_use]
    pub fn new(round_number: u32, starting_player_id: PlayerId) -> Self {
        Self {
            round_number,
            starting_player_id,
            turns: Vec::new(),
        }
    }

    /// Append a turn.
    pub fn record_turn(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Turns taken by one player, in order.
    pub fn turns_for(&self, player: PlayerId) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(move |t| t.player_id == player)
    }

    /// Total dice a player has kept this round.
    #[must_use]
    pub fn kept_dice_count(&self, player: PlayerId) -> usize {
        self.turns_for(player).map(|t| t.kept_dice.len()).sum()
    }

    /// Kept-dice totals for every player with a turn this round.
    fn kept_dice_by_player(&self) -> FxHashMap<PlayerId, usize> {
        let mut kept = FxHashMap::default();
        for turn in &self.turns {
            *kept.entry(turn.player_id).or_insert(0) += turn.kept_dice.len();
        }
        kept
    }

    /// Check whether every player has kept exactly `dice_per_round` dice.
    ///
    /// Overshooting is as incomplete as falling short.
    ///
    /// ## Errors
    ///
    /// `DataIntegrity` if the round has turns but `players` is empty, or if a
    /// turn belongs to a player outside `players`.
    pub fn all_player_turns_completed(
        &self,
        players: &[Player],
        dice_per_round: u32,
    ) -> GameResult<bool> {
        if players.is_empty() {
            if self.turns.is_empty() {
                return Ok(true);
            }
            return Err(GameError::DataIntegrity(format!(
                "round {} has turns recorded but no players were given to check them against",
                self.round_number
            )));
        }

        if self.turns.is_empty() {
            return Ok(dice_per_round == 0);
        }

        let kept = self.kept_dice_by_player();
        for player_id in kept.keys() {
            if !players.iter().any(|p| p.id == *player_id) {
                return Err(GameError::DataIntegrity(format!(
                    "{player_id} took a turn in round {} but is not one of the given players",
                    self.round_number
                )));
            }
        }

        let target = dice_per_round as usize;
        Ok(players
            .iter()
            .all(|p| kept.get(&p.id).is_some_and(|&count| count == target)))
    }

    /// Points kept per player this round.
    ///
    /// Players without turns are absent rather than zero.
    #[must_use]
    pub fn round_score(&self) -> ScoreTable {
        let mut scores = ScoreTable::new();
        for turn in &self.turns {
            if turn.kept_dice.is_empty() {
                continue;
            }
            *scores.entry(turn.player_id).or_insert(0) += turn.kept_value();
        }
        scores
    }
}
