//! Error types.
//!
//! `GameError` is raised by the game-state engine itself. `PlayError` covers
//! everything around it: agents, the round orchestrator, and snapshots.

use thiserror::Error;

use crate::core::PlayerId;

/// Errors raised by the game-state engine.
///
/// None of these are recovered internally. A `DataIntegrity` error means the
/// recorded history contradicts the declared player set and the game should be
/// treated as corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The caller passed a structurally invalid input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation cannot proceed with the current configuration.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Recorded history contradicts the game's players.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),
}

/// Result alias for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised while playing a game.
#[derive(Debug, Error)]
pub enum PlayError {
    #[error(transparent)]
    Game(#[from] GameError),

    /// No agent is registered for the player's type tag.
    #[error("no agent available for player type {0:?}")]
    UnknownAgent(String),

    /// An agent returned without keeping any dice.
    #[error("{0} did not make a valid move")]
    EmptySelection(PlayerId),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_messages() {
        let err = GameError::DataIntegrity("player 9 is unknown".to_string());
        assert_eq!(err.to_string(), "data integrity error: player 9 is unknown");

        let err = GameError::InvalidState("empty dice table".to_string());
        assert_eq!(err.to_string(), "invalid state: empty dice table");
    }

    #[test]
    fn test_play_error_wraps_game_error() {
        let err: PlayError = GameError::InvalidArgument("bad".to_string()).into();
        assert!(matches!(err, PlayError::Game(GameError::InvalidArgument(_))));
        assert_eq!(err.to_string(), "invalid argument: bad");
    }

    #[test]
    fn test_empty_selection_names_player() {
        let err = PlayError::EmptySelection(PlayerId::new(3));
        assert_eq!(err.to_string(), "Player 3 did not make a valid move");
    }
}
