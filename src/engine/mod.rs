//! Turn orchestration.
//!
//! The engine drives the round loop on top of the core: it rolls dice,
//! hands them to each player's agent, records the resulting turns, and asks
//! the game whether it is over.
//!
//! ## Usage
//!
//! ```
//! use lowball_dice::agents::AgentRegistry;
//! use lowball_dice::config::GameConfig;
//! use lowball_dice::core::GameRng;
//! use lowball_dice::engine::GameRunner;
//!
//! let mut game = GameConfig::default().bots_only().build(1);
//! let mut runner = GameRunner::new(AgentRegistry::with_defaults(), GameRng::new(42));
//!
//! let winners = runner.play_game(&mut game).unwrap();
//! assert!(!winners.is_empty());
//! ```

pub mod runner;

pub use runner::GameRunner;
