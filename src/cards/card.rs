//! Cards: a constellation shape plus a point value.
//!
//! ## Encoding
//!
//! Cards travel between the deck collaborator and the engine as compact
//! strings: `"r,c;r,c;...|points"`. For example the L-tromino worth two
//! bonus points is `"0,0;1,0;1,1|2"`.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, EngineError, EngineResult};
use crate::geometry::Constellation;

/// A drawable card.
///
/// ```
/// use unit_constellations::cards::Card;
///
/// let card = Card::decode("0,0;1,0;1,1|2").unwrap();
/// assert_eq!(card.shape.len(), 3);
/// assert_eq!(card.points, 2);
/// assert_eq!(card.encode(), "0,0;1,0;1,1|2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Base shape in its local frame.
    pub shape: Constellation,
    /// Bonus points granted when the card is placed.
    pub points: i32,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(shape: Constellation, points: i32) -> Self {
        Self { shape, points }
    }

    /// Encode as `"r,c;r,c;...|points"`.
    #[must_use]
    pub fn encode(&self) -> String {
        let cells: Vec<String> = self
            .shape
            .iter()
            .map(|c| format!("{},{}", c.row, c.col))
            .collect();
        format!("{}|{}", cells.join(";"), self.points)
    }

    /// Decode a string produced by `encode`.
    pub fn decode(encoded: &str) -> EngineResult<Self> {
        let invalid = |reason: &str| EngineError::InvalidCard {
            encoded: encoded.to_string(),
            reason: reason.to_string(),
        };

        let (shape_part, points_part) = encoded
            .split_once('|')
            .ok_or_else(|| invalid("missing '|' separator"))?;

        let points = points_part
            .trim()
            .parse::<i32>()
            .map_err(|_| invalid("points are not an integer"))?;

        let cells = shape_part
            .split(';')
            .filter(|s| !s.trim().is_empty())
            .map(|pair| {
                let (row, col) = pair
                    .split_once(',')
                    .ok_or_else(|| invalid("cell is not a 'row,col' pair"))?;
                let row = row.trim().parse::<i32>().map_err(|_| invalid("row is not an integer"))?;
                let col = col.trim().parse::<i32>().map_err(|_| invalid("col is not an integer"))?;
                Ok(Coordinate::new(row, col))
            })
            .collect::<EngineResult<Vec<_>>>()?;

        let shape = Constellation::new(cells).map_err(|_| invalid("shape has no cells"))?;
        Ok(Self { shape, points })
    }
}

impl std::str::FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let card = Card::new(Constellation::new([(0, 0), (0, 1), (-1, 1)]).unwrap(), -3);
        let encoded = card.encode();
        assert_eq!(encoded, "0,0;0,1;-1,1|-3");
        assert_eq!(Card::decode(&encoded).unwrap(), card);
        assert_eq!(encoded.parse::<Card>().unwrap(), card);
    }

    #[test]
    fn test_decode_tolerates_whitespace() {
        let card = Card::decode(" 0, 0 ; 1 ,0 | 1 ").unwrap();
        assert_eq!(card.shape.coords(), &[Coordinate::new(0, 0), Coordinate::new(1, 0)]);
        assert_eq!(card.points, 1);
    }

    #[test]
    fn test_decode_errors() {
        for bad in ["0,0;1,0", "0,0|x", "0;1|1", "a,0|1", "0,b|1", "|1", " ; |2"] {
            assert!(
                matches!(Card::decode(bad), Err(EngineError::InvalidCard { .. })),
                "{bad:?} should not decode"
            );
        }
    }

    #[test]
    fn test_display_matches_encode() {
        let card = Card::decode("0,0|0").unwrap();
        assert_eq!(card.to_string(), "0,0|0");
    }
}
