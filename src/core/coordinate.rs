//! Grid coordinates and their string keys.
//!
//! ## Coordinate
//!
//! An unbounded `(row, col)` pair. Board bounds are a placement rule's
//! concern, never the type's.
//!
//! ## TileId
//!
//! The stable string key `"{row}_{col}"` derived from a coordinate.
//! External collaborators (persistence, UI) address tiles by this key.

use serde::{Deserialize, Serialize};
use std::ops::Add;
use std::str::FromStr;

use super::error::EngineError;

/// A 2D integer grid position or offset.
///
/// Used both for absolute board cells and for relative offsets inside a
/// constellation's local frame.
///
/// ```
/// use unit_constellations::core::Coordinate;
///
/// let a = Coordinate::new(1, 2);
/// let b = Coordinate::new(-1, 3);
/// assert_eq!(a.add(b), Coordinate::new(0, 5));
/// assert_eq!(a + b, Coordinate::new(0, 5));
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    /// Row component.
    pub row: i32,
    /// Column component.
    pub col: i32,
}

impl Coordinate {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Component-wise sum.
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self {
            row: self.row + other.row,
            col: self.col + other.col,
        }
    }

    /// Derive the tile key for this coordinate.
    #[must_use]
    pub fn id(self) -> TileId {
        TileId::from(self)
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Coordinate::add(self, other)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.row, c.col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Tile key derived from a coordinate, formatted `"{row}_{col}"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(String);

impl TileId {
    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the key back into the coordinate it was derived from.
    pub fn coordinate(&self) -> Result<Coordinate, EngineError> {
        self.0.parse()
    }
}

impl From<Coordinate> for TileId {
    fn from(c: Coordinate) -> Self {
        Self(format!("{}_{}", c.row, c.col))
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Coordinate {
    type Err = EngineError;

    /// Parse a `"{row}_{col}"` key. Negative components are allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidTileId(s.to_string());

        // Split on the first '_' that follows at least one character, so a
        // leading '-' on the row never confuses the split.
        let split = s
            .char_indices()
            .skip(1)
            .find(|&(_, ch)| ch == '_')
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;

        let row = s[..split].parse::<i32>().map_err(|_| invalid())?;
        let col = s[split + 1..].parse::<i32>().map_err(|_| invalid())?;
        Ok(Self::new(row, col))
    }
}
