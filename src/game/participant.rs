//! Per-player counters.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A player's score and bonus points.
///
/// Values are never mutated in place; the match replaces a participant with
/// the value returned by `with_score` or `with_bonus`.
///
/// ```
/// use unit_constellations::core::PlayerId;
/// use unit_constellations::game::Participant;
///
/// let p = Participant::new(PlayerId::new(0)).with_score(3).with_bonus(2);
/// assert_eq!(p.total(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Seat this participant plays.
    pub id: PlayerId,
    /// Points from the latest scoring pass.
    pub score: i32,
    /// Points accumulated from placed cards.
    pub bonus_points: i32,
}

impl Participant {
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            score: 0,
            bonus_points: 0,
        }
    }

    /// Replace the score.
    #[must_use]
    pub const fn with_score(self, score: i32) -> Self {
        Self { score, ..self }
    }

    /// Add `delta` to the bonus points.
    #[must_use]
    pub const fn with_bonus(self, delta: i32) -> Self {
        Self {
            bonus_points: self.bonus_points + delta,
            ..self
        }
    }

    /// Score plus bonus points.
    #[must_use]
    pub const fn total(&self) -> i32 {
        self.score + self.bonus_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_score_replaces() {
        let p = Participant::new(PlayerId::new(1)).with_score(4).with_score(-1);
        assert_eq!(p.score, -1);
        assert_eq!(p.bonus_points, 0);
    }

    #[test]
    fn test_with_bonus_accumulates() {
        let p = Participant::new(PlayerId::new(1)).with_bonus(2).with_bonus(-1);
        assert_eq!(p.bonus_points, 1);
        assert_eq!(p.with_score(3).total(), 4);
    }

    #[test]
    fn test_receiver_is_untouched() {
        let p = Participant::new(PlayerId::new(0));
        let _ = p.with_score(9);
        assert_eq!(p.score, 0);
    }
}
