//! Core engine types: dice, players, turns, rounds, the game, randomness.
//!
//! Nothing in here logs, prompts, or reaches for global state. Every operation
//! is a computation over the values passed in, so a game can be rebuilt from
//! a snapshot at any point and continue identically.

pub mod die;
pub mod player;
pub mod turn;
pub mod round;
pub mod game;
pub mod rng;

use std::collections::BTreeMap;

pub use die::{contains_all, subtract_dice, tally, total_value, DiceHand, Die};
pub use player::{Player, PlayerId};
pub use turn::Turn;
pub use round::Round;
pub use game::Game;
pub use rng::{DiceSource, GameRng, GameRngState};

/// Points per player, ordered by id.
pub type ScoreTable = BTreeMap<PlayerId, i64>;
