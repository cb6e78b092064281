//! Draw pile.
//!
//! A `Deck` is a persistent queue of cards. Cloning is O(1) so the match
//! layer can hand out snapshots freely.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::Card;
use crate::core::GameRng;

/// Ordered draw pile; the front is drawn first.
///
/// ```
/// use unit_constellations::cards::{standard_pool, Deck};
/// use unit_constellations::core::GameRng;
///
/// let pool = standard_pool(1).unwrap();
/// let a = Deck::shuffled(pool.clone(), &GameRng::new(7));
/// let b = Deck::shuffled(pool, &GameRng::new(7));
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// A deck in the given order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// A deck shuffled with the `"deck"` stream of `rng`.
    #[must_use]
    pub fn shuffled(cards: impl IntoIterator<Item = Card>, rng: &GameRng) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        rng.for_context("deck").shuffle(&mut cards);
        debug!(seed = rng.seed(), cards = cards.len(), "deck shuffled");
        Self::new(cards)
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// The top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Put a card at the bottom.
    pub fn put_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }
}
