//! Round loop: rolls dice, asks agents, records turns.

use std::collections::hash_map::Entry;

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::agents::{normalize_tag, Agent, AgentRegistry};
use crate::core::{DiceSource, Game, Player, PlayerId, Round, Turn};
use crate::display;
use crate::error::{GameError, PlayError};

/// Drives games forward one round at a time.
///
/// Agents are built from the registry on a player's first turn and reused
/// while that player keeps the same type tag.
pub struct GameRunner<S: DiceSource> {
    registry: AgentRegistry,
    dice: S,
    agents: FxHashMap<(PlayerId, String), Box<dyn Agent>>,
}

impl<S: DiceSource> GameRunner<S> {
    /// Create a runner rolling dice from `dice`.
    pub fn new(registry: AgentRegistry, dice: S) -> Self {
        Self {
            registry,
            dice,
            agents: FxHashMap::default(),
        }
    }

    /// The dice source, e.g. to snapshot its position.
    pub fn dice(&self) -> &S {
        &self.dice
    }

    /// Play rounds until the game is over, returning the winners.
    pub fn play_game(&mut self, game: &mut Game) -> Result<Vec<PlayerId>, PlayError> {
        while !game.is_game_over()? {
            self.play_round(game)?;
        }
        let winners = game.winning_player_ids.clone().unwrap_or_default();
        info!("game {} won by {:?}", game.id, winners);
        Ok(winners)
    }

    /// Play one full round and record it, returning its number.
    ///
    /// The round's starter goes first, then everyone else in registration
    /// order.
    ///
    /// ## Errors
    ///
    /// `InvalidState` if the game is over, or if it already holds
    /// `total_rounds` rounds without being complete.
    pub fn play_round(&mut self, game: &mut Game) -> Result<u32, PlayError> {
        if game.determine_winners()?.is_some() {
            return Err(GameError::InvalidState(format!("game {} is already over", game.id)).into());
        }
        if game.completed_rounds.len() >= game.total_rounds as usize {
            return Err(GameError::InvalidState(format!(
                "game {} holds all {} rounds but some were not finished",
                game.id, game.total_rounds
            ))
            .into());
        }

        let number = game.completed_rounds.len() as u32 + 1;
        let starter = game.next_starting_player()?.clone();
        info!("starting round {number}; {} goes first", starter.id);

        let order: Vec<Player> = std::iter::once(starter.clone())
            .chain(game.players.iter().filter(|p| p.id != starter.id).cloned())
            .collect();

        let mut round = Round::new(number, starter.id);
        for player in &order {
            self.play_player(game, player, &mut round)?;
        }

        game.record_round(round)?;
        info!("round {number} complete");
        Ok(number)
    }

    /// Let one player roll and keep until all their dice are kept.
    fn play_player(&mut self, game: &Game, player: &Player, round: &mut Round) -> Result<(), PlayError> {
        let key = (player.id, normalize_tag(&player.agent_type));
        let agent = match self.agents.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(self.registry.create(&player.agent_type)?),
        };

        let mut available = game.roll_dice(game.dice_per_round as usize, &mut self.dice)?;
        let mut turns: Vec<Turn> = Vec::new();
        let mut turn_number = 1;

        while !available.is_empty() {
            let kept = agent.choose_keep(&available, player, &turns, game)?;
            if kept.is_empty() {
                return Err(PlayError::EmptySelection(player.id));
            }

            let turn = Turn::new(player.id, turn_number, &available, &kept)?;
            let leftover = turn.leftover_dice()?;
            debug!(
                "{} turn {turn_number}: kept [{}] of [{}]",
                player.id,
                display::faces(&turn.kept_dice),
                display::faces(&turn.available_dice)
            );

            round.record_turn(turn.clone());
            turns.push(turn);
            available = game.roll_dice(leftover.len(), &mut self.dice)?;
            turn_number += 1;
        }
        Ok(())
    }
}
