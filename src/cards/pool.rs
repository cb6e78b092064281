//! The standard card pool.
//!
//! Monomino through tetromino shapes. Smaller pieces are easier to fit and
//! carry more bonus points.

use super::card::Card;
use crate::core::EngineResult;

/// Encoded standard cards.
pub const STANDARD_CARDS: &[&str] = &[
    // Monomino
    "0,0|2",
    // Domino
    "0,0;0,1|1",
    // I-tromino
    "0,0;0,1;0,2|1",
    // L-tromino
    "0,0;1,0;1,1|1",
    // I-tetromino
    "0,0;0,1;0,2;0,3|0",
    // O-tetromino
    "0,0;0,1;1,0;1,1|0",
    // T-tetromino
    "0,0;0,1;0,2;1,1|0",
    // S-tetromino
    "0,1;0,2;1,0;1,1|0",
    // Z-tetromino
    "0,0;0,1;1,1;1,2|0",
    // L-tetromino
    "0,0;1,0;2,0;2,1|0",
    // J-tetromino
    "0,1;1,1;2,1;2,0|0",
];

/// Decode the standard pool, `copies` of each card.
pub fn standard_pool(copies: usize) -> EngineResult<Vec<Card>> {
    let mut cards = Vec::with_capacity(STANDARD_CARDS.len() * copies);
    for encoded in STANDARD_CARDS {
        let card = Card::decode(encoded)?;
        cards.extend(std::iter::repeat(card).take(copies));
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pool_decodes() {
        let pool = standard_pool(2).unwrap();
        assert_eq!(pool.len(), STANDARD_CARDS.len() * 2);
        assert!(pool.iter().all(|c| (1..=4).contains(&c.shape.len())));
    }

    #[test]
    fn test_shapes_contain_origin_row_and_col() {
        // Every standard shape is already normalised.
        for card in standard_pool(1).unwrap() {
            assert_eq!(card.shape.normalised(), card.shape);
            let (min, _) = card.shape.bounding_box();
            assert_eq!((min.row, min.col), (0, 0), "{card}");
        }
    }
}
