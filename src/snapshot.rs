//! Save and resume a game session.
//!
//! A `Session` is a game plus the position of its dice stream. Restoring one
//! and carrying on rolls exactly the dice an uninterrupted run would have.
//! Restored games are audited before they are handed back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Game, GameRng, GameRngState};
use crate::error::PlayError;

/// Everything needed to pick a game back up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub game: Game,
    pub rng: GameRngState,
}

impl Session {
    /// Capture a game and its dice stream.
    #[must_use]
    pub fn capture(game: &Game, rng: &GameRng) -> Self {
        Self {
            game: game.clone(),
            rng: rng.state(),
        }
    }

    /// Rebuild the dice stream at the saved position.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::from_state(&self.rng)
    }

    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PlayError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes and audit the game.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PlayError> {
        let session: Self = bincode::deserialize(bytes)?;
        session.game.audit()?;
        Ok(session)
    }

    /// Write to a file, replacing it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlayError> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    /// Read from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlayError> {
        Self::from_bytes(&fs::read(path)?)
    }
}
