//! The game aggregate: players, rules and round history.
//!
//! Everything needed to resume a game lives in [`Game`]; there is no other
//! mutable state. A web request (or a CLI run) can load a `Game`, advance it
//! by a round, and store it again.
//!
//! ## Operations
//!
//! - Rolling dice against the face-value table
//! - Round-robin choice of the starting player
//! - Score aggregation across rounds, with integrity auditing
//! - Completion and winner detection (lowest total wins, ties share the win)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::die::{contains_all, subtract_dice, DiceHand, Die};
use super::player::{sorted_ids, Player, PlayerId};
use super::rng::DiceSource;
use super::round::Round;
use super::ScoreTable;
use crate::error::{GameError, GameResult};

/// A game in progress (or finished).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,

    /// Players in registration order. Turn order is derived from ids.
    pub players: Vec<Player>,

    /// Rounds played so far, oldest first.
    pub completed_rounds: Vec<Round>,

    /// Number of rounds in the game.
    pub total_rounds: u32,

    /// Dice each player rolls (and must keep) per round.
    pub dice_per_round: u32,

    /// Face value -> points. Faces missing from the table score their own number.
    pub dice_values: BTreeMap<i32, i32>,

    /// Set exactly once, when the game is over. May hold several ids on a tie.
    pub winning_player_ids: Option<Vec<PlayerId>>,
}

impl Game {
    /// Create a game with no rounds played.
    #[must_use]
    pub fn new(
        id: i64,
        players: Vec<Player>,
        total_rounds: u32,
        dice_per_round: u32,
        dice_values: BTreeMap<i32, i32>,
    ) -> Self {
        Self {
            id,
            players,
            completed_rounds: Vec::new(),
            total_rounds,
            dice_per_round,
            dice_values,
            winning_player_ids: None,
        }
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Check if a player id belongs to this game.
    #[must_use]
    pub fn has_player(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    // === Dice ===

    /// Points a face is worth.
    #[must_use]
    pub fn value_of(&self, face: i32) -> i32 {
        self.dice_values.get(&face).copied().unwrap_or(face)
    }

    /// Lowest and highest faces in the value table.
    #[must_use]
    pub fn face_range(&self) -> Option<(i32, i32)> {
        let min = *self.dice_values.keys().next()?;
        let max = *self.dice_values.keys().next_back()?;
        Some((min, max))
    }

    /// Roll `count` dice.
    ///
    /// Faces are drawn uniformly from the lowest to the highest face in the
    /// value table, inclusive, and scored through the table.
    ///
    /// ## Errors
    ///
    /// `InvalidState` if the value table is empty.
    pub fn roll_dice<R: DiceSource + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> GameResult<DiceHand> {
        let (min_face, max_face) = self.face_range().ok_or_else(|| {
            GameError::InvalidState(
                "cannot roll dice without a face-to-value mapping".to_string(),
            )
        })?;

        Ok((0..count)
            .map(|_| {
                let face = rng.roll_face(min_face..=max_face);
                Die::new(face, self.value_of(face))
            })
            .collect())
    }

    /// Remove `right` from `left` as multisets. See [`subtract_dice`].
    pub fn subtract_dice(&self, left: &[Die], right: &[Die]) -> GameResult<DiceHand> {
        subtract_dice(left, right)
    }

    // === Rounds ===

    /// Check whether the configured number of rounds has been fully played.
    ///
    /// A game with no players or no rounds to play is trivially complete.
    pub fn all_rounds_complete(&self) -> GameResult<bool> {
        if self.completed_rounds.is_empty() {
            return Ok(self.total_rounds == 0);
        }
        if self.players.is_empty() || self.total_rounds == 0 {
            return Ok(true);
        }
        if self.completed_rounds.len() < self.total_rounds as usize {
            return Ok(false);
        }

        for round in &self.completed_rounds {
            if !round.all_player_turns_completed(&self.players, self.dice_per_round)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The round being played, counting from 1.
    ///
    /// One past the number of recorded rounds that every player has finished.
    pub fn current_round_number(&self) -> GameResult<u32> {
        let mut finished = 0;
        for round in &self.completed_rounds {
            if round.all_player_turns_completed(&self.players, self.dice_per_round)? {
                finished += 1;
            }
        }
        Ok(finished + 1)
    }

    /// Pick who starts the next round.
    ///
    /// The first round goes to the lowest id. After that the seat passes to
    /// the next id, in ascending order, after the previous round's starter,
    /// wrapping back to the lowest id.
    ///
    /// ## Errors
    ///
    /// - `InvalidState` if the game has no players.
    /// - `DataIntegrity` if any recorded round names an unknown starter.
    pub fn next_starting_player(&self) -> GameResult<&Player> {
        let ids = sorted_ids(&self.players);
        let Some(&lowest) = ids.first() else {
            return Err(GameError::InvalidState(
                "cannot pick a starting player for a game with no players".to_string(),
            ));
        };

        let mut last_index = None;
        for round in &self.completed_rounds {
            let index = ids.binary_search(&round.starting_player_id).map_err(|_| {
                GameError::DataIntegrity(format!(
                    "round {} was started by {}, who is not in this game",
                    round.round_number, round.starting_player_id
                ))
            })?;
            last_index = Some(index);
        }

        let next = match last_index {
            None => lowest,
            Some(index) => ids[(index + 1) % ids.len()],
        };
        self.player(next).ok_or_else(|| {
            GameError::DataIntegrity(format!("{next} vanished from the player list"))
        })
    }

    /// Append a finished round.
    ///
    /// ## Errors
    ///
    /// - `InvalidState` if the game is already over.
    /// - `DataIntegrity` if the round references a player outside the game.
    pub fn record_round(&mut self, round: Round) -> GameResult<()> {
        if self.winning_player_ids.is_some() {
            return Err(GameError::InvalidState(format!(
                "game {} is over; round {} cannot be recorded",
                self.id, round.round_number
            )));
        }
        self.check_round_players(&round)?;
        self.completed_rounds.push(round);
        Ok(())
    }

    fn check_round_players(&self, round: &Round) -> GameResult<()> {
        if !self.has_player(round.starting_player_id) {
            return Err(GameError::DataIntegrity(format!(
                "round {} was started by {}, who is not in this game",
                round.round_number, round.starting_player_id
            )));
        }
        if let Some(turn) = round.turns.iter().find(|t| !self.has_player(t.player_id)) {
            return Err(GameError::DataIntegrity(format!(
                "round {} has a turn for {}, who is not in this game",
                round.round_number, turn.player_id
            )));
        }
        Ok(())
    }

    // === Scoring ===

    /// Total score per player across all recorded rounds.
    ///
    /// Every player appears, zero-filled if they have not scored.
    ///
    /// ## Errors
    ///
    /// `DataIntegrity` if rounds exist without players, or a score belongs to
    /// an unknown player.
    pub fn player_scores(&self) -> GameResult<ScoreTable> {
        let mut scores = ScoreTable::new();

        if self.players.is_empty() {
            if !self.completed_rounds.is_empty() {
                return Err(GameError::DataIntegrity(format!(
                    "game {} has recorded rounds but no players",
                    self.id
                )));
            }
            return Ok(scores);
        }

        for round in &self.completed_rounds {
            for (player, points) in round.round_score() {
                *scores.entry(player).or_insert(0) += points;
            }
        }

        for player in &self.players {
            scores.entry(player.id).or_insert(0);
        }

        if let Some(stray) = scores.keys().find(|id| !self.has_player(**id)) {
            return Err(GameError::DataIntegrity(format!(
                "game {} has a score recorded for {stray}, who is not in this game",
                self.id
            )));
        }
        Ok(scores)
    }

    /// All players tied for the lowest total.
    ///
    /// Returns `None` for a game without players.
    pub fn lowest_scoring_players(&self) -> GameResult<Option<Vec<&Player>>> {
        if self.players.is_empty() {
            return Ok(None);
        }

        let scores = self.player_scores()?;
        if scores.len() != self.players.len() {
            return Err(GameError::DataIntegrity(format!(
                "game {} has {} scores for {} players",
                self.id,
                scores.len(),
                self.players.len()
            )));
        }

        let Some(&lowest) = scores.values().min() else {
            return Ok(Some(Vec::new()));
        };
        Ok(Some(
            self.players
                .iter()
                .filter(|p| scores.get(&p.id) == Some(&lowest))
                .collect(),
        ))
    }

    // === Completion ===

    /// Work out the winners without touching the game.
    ///
    /// Returns the recorded winners if there are any, the lowest scorers if
    /// every round is complete, and `None` while play continues.
    ///
    /// ## Errors
    ///
    /// `DataIntegrity` if a complete game has nobody to award the win to.
    pub fn determine_winners(&self) -> GameResult<Option<Vec<PlayerId>>> {
        if let Some(winners) = &self.winning_player_ids {
            return Ok(Some(winners.clone()));
        }
        if !self.all_rounds_complete()? {
            return Ok(None);
        }

        let winners: Vec<PlayerId> = self
            .lowest_scoring_players()?
            .unwrap_or_default()
            .into_iter()
            .map(|p| p.id)
            .collect();
        if winners.is_empty() {
            return Err(GameError::DataIntegrity(format!(
                "game {} is complete but has no winner",
                self.id
            )));
        }
        Ok(Some(winners))
    }

    /// Check whether the game is over, recording the winners the first time
    /// it is.
    ///
    /// Once winners are recorded this returns `true` without recomputing.
    /// Persist the game afterwards to keep the result.
    pub fn is_game_over(&mut self) -> GameResult<bool> {
        if self.winning_player_ids.is_some() {
            return Ok(true);
        }
        match self.determine_winners()? {
            Some(winners) => {
                self.winning_player_ids = Some(winners);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // === Integrity ===

    /// Sweep the whole history for contradictions.
    ///
    /// Used when a game is loaded from storage.
    pub fn audit(&self) -> GameResult<()> {
        let mut seen = sorted_ids(&self.players);
        seen.dedup();
        if seen.len() != self.players.len() {
            return Err(GameError::DataIntegrity(format!(
                "game {} has duplicate player ids",
                self.id
            )));
        }

        if self.completed_rounds.len() > self.total_rounds as usize {
            return Err(GameError::DataIntegrity(format!(
                "game {} holds {} rounds but only {} are played",
                self.id,
                self.completed_rounds.len(),
                self.total_rounds
            )));
        }

        for round in &self.completed_rounds {
            self.check_round_players(round)?;
            for turn in &round.turns {
                if turn.kept_dice.is_empty() {
                    return Err(GameError::DataIntegrity(format!(
                        "{} kept no dice on turn {} of round {}",
                        turn.player_id, turn.turn_number, round.round_number
                    )));
                }
                if !contains_all(&turn.available_dice, &turn.kept_dice) {
                    return Err(GameError::DataIntegrity(format!(
                        "{} kept dice that were not offered on turn {} of round {}",
                        turn.player_id, turn.turn_number, round.round_number
                    )));
                }
            }
        }

        if let Some(winners) = &self.winning_player_ids {
            if let Some(stray) = winners.iter().find(|id| !self.has_player(**id)) {
                return Err(GameError::DataIntegrity(format!(
                    "game {} names {stray} as a winner, who is not in this game",
                    self.id
                )));
            }
        }
        Ok(())
    }
}
