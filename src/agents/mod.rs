//! Agents: who decides which dice to keep.
//!
//! The engine never chooses dice. On each turn the orchestrator hands the
//! offered dice to the player's [`Agent`] and records whatever comes back.
//!
//! - `LowestDieAgent`: keeps the single cheapest die (`ai_reflex`)
//! - `ConsoleAgent`: asks a person over a text stream (`human_console`)
//! - `AgentRegistry`: builds agents from a player's type tag

pub mod console;
pub mod lowest;
pub mod registry;

pub use console::ConsoleAgent;
pub use lowest::LowestDieAgent;
pub use registry::{AgentFactory, AgentRegistry};

use crate::core::{DiceHand, Die, Game, Player, Turn};
use crate::error::PlayError;

/// Type tag of the interactive console player.
pub const HUMAN_CONSOLE: &str = "human_console";

/// Type tag of the lowest-die bot.
pub const AI_REFLEX: &str = "ai_reflex";

/// Canonical form of a type tag. Tags compare case-insensitively.
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
}

/// Whether `player` is driven by the agent registered under `tag`.
#[must_use]
pub fn plays_as(player: &Player, tag: &str) -> bool {
    normalize_tag(&player.agent_type) == normalize_tag(tag)
}

/// Decision-maker for one player.
pub trait Agent {
    /// Choose which of `available` to keep.
    ///
    /// `turns_so_far` holds this player's earlier turns in the current round.
    /// The result must be a non-empty sub-multiset of `available`; the
    /// orchestrator rejects anything else.
    fn choose_keep(
        &mut self,
        available: &[Die],
        player: &Player,
        turns_so_far: &[Turn],
        game: &Game,
    ) -> Result<DiceHand, PlayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_as_ignores_case() {
        let player = Player::new(1, "Human_Console");
        assert!(plays_as(&player, HUMAN_CONSOLE));
        assert!(plays_as(&player, "HUMAN_CONSOLE"));
        assert!(!plays_as(&player, AI_REFLEX));
    }
}
