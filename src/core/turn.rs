//! A single keep decision.

use serde::{Deserialize, Serialize};

use super::die::{subtract_dice, DiceHand, Die};
use super::player::PlayerId;
use crate::error::{GameError, GameResult};

/// One decision by one player: the dice offered and the dice kept.
///
/// `turn_number` is 1-based and counts this player's decisions within a
/// round. `kept_dice` is a non-empty sub-multiset of `available_dice`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub player_id: PlayerId,
    pub turn_number: u32,
    pub available_dice: DiceHand,
    pub kept_dice: DiceHand,
}

impl Turn {
    /// Create a turn, checking the kept dice against the offer.
    ///
    /// ## Errors
    ///
    /// - `InvalidArgument` if nothing was kept.
    /// - `InvalidState` if a kept die was not offered.
    pub fn new(
        player_id: PlayerId,
        turn_number: u32,
        available_dice: &[Die],
        kept_dice: &[Die],
    ) -> GameResult<Self> {
        if kept_dice.is_empty() {
            return Err(GameError::InvalidArgument(format!(
                "{player_id} must keep at least one die on turn {turn_number}"
            )));
        }
        subtract_dice(available_dice, kept_dice)?;

        Ok(Self {
            player_id,
            turn_number,
            available_dice: DiceHand::from_slice(available_dice),
            kept_dice: DiceHand::from_slice(kept_dice),
        })
    }

    /// Dice offered but not kept.
    pub fn leftover_dice(&self) -> GameResult<DiceHand> {
        subtract_dice(&self.available_dice, &self.kept_dice)
    }

    /// Points kept on this turn.
    #[must_use]
    pub fn kept_value(&self) -> i64 {
        super::die::total_value(&self.kept_dice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_new() {
        let offered = [Die::plain(1), Die::plain(5), Die::new(4, 0)];
        let turn = Turn::new(PlayerId::new(2), 1, &offered, &[Die::new(4, 0), Die::plain(1)]).unwrap();

        assert_eq!(turn.player_id, PlayerId::new(2));
        assert_eq!(turn.kept_dice.len(), 2);
        assert_eq!(turn.kept_value(), 1);
        assert_eq!(turn.leftover_dice().unwrap().as_slice(), &[Die::plain(5)]);
    }

    #[test]
    fn test_turn_requires_kept_dice() {
        let err = Turn::new(PlayerId::new(1), 1, &[Die::plain(3)], &[]).unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument(_)));
    }

    #[test]
    fn test_turn_rejects_unoffered_dice() {
        let err = Turn::new(PlayerId::new(1), 1, &[Die::plain(3)], &[Die::plain(2)]).unwrap_err();
        assert!(matches!(err, GameError::InvalidState(_)));
    }

    #[test]
    fn test_turn_equality_is_ordered() {
        let a = Turn::new(PlayerId::new(1), 1, &[Die::plain(1), Die::plain(2)], &[Die::plain(1)]).unwrap();
        let b = Turn::new(PlayerId::new(1), 1, &[Die::plain(2), Die::plain(1)], &[Die::plain(1)]).unwrap();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
