//! Dice values and multiset arithmetic.
//!
//! ## Die
//!
//! A rolled face value paired with the points it is worth in this game.
//! Two dice are the same die iff both values match, which is what the
//! multiset operations below key on.
//!
//! ## DiceHand
//!
//! Any sequence of dice (offered, kept, rolled). Hands rarely exceed a
//! handful of dice, so they live inline.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{GameError, GameResult};

/// A single rolled die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Die {
    /// The face that came up.
    pub face_value: i32,
    /// Points this face is worth in the current game.
    pub actual_value: i32,
}

impl Die {
    #[must_use]
    pub const fn new(face_value: i32, actual_value: i32) -> Self {
        Self {
            face_value,
            actual_value,
        }
    }

    /// A die whose face is worth its own number.
    #[must_use]
    pub const fn plain(face_value: i32) -> Self {
        Self::new(face_value, face_value)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} pts)", self.face_value, self.actual_value)
    }
}

/// Inline storage for a hand of dice.
pub type DiceHand = SmallVec<[Die; 8]>;

/// Remove `right` from `left`, one copy per element.
///
/// Both inputs are treated as multisets and neither is modified. Surviving
/// dice keep their relative order from `left`.
///
/// ## Errors
///
/// - `InvalidArgument` if `left` is empty but `right` is not.
/// - `InvalidState` if `right` holds a die that `left` lacks, or more copies
///   of a die than `left` has.
///
/// ```
/// use lowball_dice::core::{subtract_dice, Die};
///
/// let left = [Die::plain(1), Die::plain(2), Die::plain(2)];
/// let rest = subtract_dice(&left, &[Die::plain(2)]).unwrap();
/// assert_eq!(rest.as_slice(), &[Die::plain(1), Die::plain(2)]);
/// ```
pub fn subtract_dice(left: &[Die], right: &[Die]) -> GameResult<DiceHand> {
    if left.is_empty() {
        if right.is_empty() {
            return Ok(DiceHand::new());
        }
        return Err(GameError::InvalidArgument(
            "cannot subtract a non-empty list of dice from an empty one".to_string(),
        ));
    }

    if right.is_empty() {
        return Ok(DiceHand::from_slice(left));
    }

    let mut remaining = tally(left);
    for die in right {
        match remaining.get_mut(die) {
            None => {
                return Err(GameError::InvalidState(format!(
                    "cannot subtract die {die}: it is not among the available dice"
                )))
            }
            Some(0) => {
                return Err(GameError::InvalidState(format!(
                    "cannot subtract die {die}: too many copies requested"
                )))
            }
            Some(count) => *count -= 1,
        }
    }

    let mut result = DiceHand::with_capacity(left.len() - right.len());
    for die in left {
        if let Some(count) = remaining.get_mut(die) {
            if *count > 0 {
                *count -= 1;
                result.push(*die);
            }
        }
    }
    Ok(result)
}

/// Check that `subset` is a sub-multiset of `dice`.
#[must_use]
pub fn contains_all(dice: &[Die], subset: &[Die]) -> bool {
    subset.is_empty() || subtract_dice(dice, subset).is_ok()
}

/// Count the copies of each distinct die.
pub fn tally(dice: &[Die]) -> FxHashMap<Die, usize> {
    let mut counts = FxHashMap::default();
    for die in dice {
        *counts.entry(*die).or_insert(0) += 1;
    }
    counts
}

/// Total points of a set of dice.
#[must_use]
pub fn total_value(dice: &[Die]) -> i64 {
    dice.iter().map(|d| i64::from(d.actual_value)).sum()
}
