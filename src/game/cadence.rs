//! Injectable turn cadence.
//!
//! Whether the active player changes and whether a scoring pass runs after
//! a placement are decided by predicates on the new turn count, so hosts can
//! plug in their own pacing.

use std::fmt;
use std::sync::Arc;

type TurnPredicate = Arc<dyn Fn(u32) -> bool + Send + Sync>;

/// Pair of turn predicates consulted after every accepted placement.
///
/// ```
/// use unit_constellations::game::TurnCadence;
///
/// let cadence = TurnCadence::default().evaluate_when(TurnCadence::every_n_turns(2));
/// assert!(cadence.should_change_active_player(1));
/// assert!(!cadence.should_evaluate(1));
/// assert!(cadence.should_evaluate(2));
/// ```
#[derive(Clone)]
pub struct TurnCadence {
    change_active_player: TurnPredicate,
    evaluate: TurnPredicate,
}

impl Default for TurnCadence {
    /// Change player and score after every turn.
    fn default() -> Self {
        Self {
            change_active_player: Arc::new(|_| true),
            evaluate: Arc::new(|_| true),
        }
    }
}

impl TurnCadence {
    #[must_use]
    pub fn new(
        change_active_player: impl Fn(u32) -> bool + Send + Sync + 'static,
        evaluate: impl Fn(u32) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            change_active_player: Arc::new(change_active_player),
            evaluate: Arc::new(evaluate),
        }
    }

    /// Replace the active-player predicate.
    #[must_use]
    pub fn change_player_when(mut self, predicate: impl Fn(u32) -> bool + Send + Sync + 'static) -> Self {
        self.change_active_player = Arc::new(predicate);
        self
    }

    /// Replace the scoring predicate.
    #[must_use]
    pub fn evaluate_when(mut self, predicate: impl Fn(u32) -> bool + Send + Sync + 'static) -> Self {
        self.evaluate = Arc::new(predicate);
        self
    }

    /// Predicate true on every `n`th turn. `n == 0` is treated as 1.
    pub fn every_n_turns(n: u32) -> impl Fn(u32) -> bool + Send + Sync + 'static {
        let n = n.max(1);
        move |turn| turn % n == 0
    }

    #[must_use]
    pub fn should_change_active_player(&self, turn: u32) -> bool {
        (self.change_active_player)(turn)
    }

    #[must_use]
    pub fn should_evaluate(&self, turn: u32) -> bool {
        (self.evaluate)(turn)
    }
}

impl fmt::Debug for TurnCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnCadence").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fires_every_turn() {
        let cadence = TurnCadence::default();
        for turn in 1..10 {
            assert!(cadence.should_change_active_player(turn));
            assert!(cadence.should_evaluate(turn));
        }
    }

    #[test]
    fn test_every_n_turns() {
        let every_three = TurnCadence::every_n_turns(3);
        let hits: Vec<u32> = (1..=9).filter(|&t| every_three(t)).collect();
        assert_eq!(hits, vec![3, 6, 9]);

        let zero = TurnCadence::every_n_turns(0);
        assert!(zero(1) && zero(2));
    }

    #[test]
    fn test_custom_predicates() {
        let cadence = TurnCadence::new(|turn| turn % 2 == 0, |_| false);
        assert!(!cadence.should_change_active_player(1));
        assert!(cadence.should_change_active_player(2));
        assert!(!cadence.should_evaluate(2));
    }
}
