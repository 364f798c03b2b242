//! Reflex bot: keep the cheapest die, re-roll the rest.

use super::Agent;
use crate::core::{DiceHand, Die, Game, Player, Turn};
use crate::error::PlayError;

/// Keeps exactly one die per turn: the lowest actual value, first on ties.
#[derive(Clone, Debug, Default)]
pub struct LowestDieAgent;

impl Agent for LowestDieAgent {
    fn choose_keep(
        &mut self,
        available: &[Die],
        _player: &Player,
        _turns_so_far: &[Turn],
        _game: &Game,
    ) -> Result<DiceHand, PlayError> {
        let mut lowest: Option<&Die> = None;
        for die in available {
            if lowest.map_or(true, |l| die.actual_value < l.actual_value) {
                lowest = Some(die);
            }
        }
        Ok(lowest.into_iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn choose(available: &[Die]) -> DiceHand {
        let game = GameConfig::default().build(1);
        let player = game.players[1].clone();
        LowestDieAgent
            .choose_keep(available, &player, &[], &game)
            .unwrap()
    }

    #[test]
    fn test_keeps_lowest_actual_value() {
        let kept = choose(&[Die::plain(3), Die::new(4, 0), Die::plain(1)]);
        assert_eq!(kept.as_slice(), &[Die::new(4, 0)]);
    }

    #[test]
    fn test_first_lowest_wins_ties() {
        let kept = choose(&[Die::plain(5), Die::plain(2), Die::plain(2)]);
        assert_eq!(kept.as_slice(), &[Die::plain(2)]);
    }

    #[test]
    fn test_empty_offer_keeps_nothing() {
        assert!(choose(&[]).is_empty());
    }
}
