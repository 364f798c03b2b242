//! # lowball-dice
//!
//! A multi-player dice game where the lowest score wins, built to be fully
//! re-playable from stored state.
//!
//! Each round every player rolls the configured number of dice, keeps at
//! least one, re-rolls the rest, and repeats until all their dice are kept.
//! Kept dice score through the game's face-value table. After the last round
//! the lowest total wins; ties share the win.
//!
//! ## Design Principles
//!
//! 1. **No hidden state**: a [`Game`] value is the whole game. Load it,
//!    advance it, store it.
//!
//! 2. **Injected randomness**: rolling takes a [`DiceSource`], so tests can
//!    script the dice and resumed sessions continue the same stream.
//!
//! 3. **Fail loudly**: history that contradicts the player list is a
//!    [`GameError::DataIntegrity`] error, never silently patched.
//!
//! ## Modules
//!
//! - `core`: Dice, players, turns, rounds, the game aggregate, RNG
//! - `agents`: Pluggable decision-makers and their registry
//! - `engine`: The round loop that drives agents against a game
//! - `config`: Game setup and defaults
//! - `display`: Text rendering for console play
//! - `snapshot`: Session save/resume

pub mod core;
pub mod error;
pub mod agents;
pub mod engine;
pub mod config;
pub mod display;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    subtract_dice, DiceHand, DiceSource, Die, Game, GameRng, GameRngState, Player, PlayerId,
    Round, ScoreTable, Turn,
};

pub use crate::error::{GameError, GameResult, PlayError};

pub use crate::agents::{Agent, AgentRegistry, ConsoleAgent, LowestDieAgent, AI_REFLEX, HUMAN_CONSOLE};

pub use crate::engine::GameRunner;

pub use crate::config::GameConfig;

pub use crate::snapshot::Session;
