//! Cards and the draw pile.
//!
//! ## Key Types
//!
//! - `Card`: a constellation shape plus bonus points, with a string codec
//! - `Deck`: seeded, persistent draw pile
//!
//! `standard_pool` yields the default monomino to tetromino set.

mod card;
mod deck;
mod pool;

pub use card::Card;
pub use deck::Deck;
pub use pool::{standard_pool, STANDARD_CARDS};
