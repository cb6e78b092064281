//! Constellations: non-empty piece shapes in a local frame.
//!
//! A `Constellation` is the validated counterpart of a raw coordinate
//! list. Construction rejects empty input; every transform returns a new
//! constellation with the same cardinality.

use serde::{Deserialize, Serialize};

use super::transform::{self, CoordinateList, Transform};
use crate::core::{Coordinate, EngineError, EngineResult};

/// A multi-cell piece shape.
///
/// ## Example
///
/// ```
/// use unit_constellations::core::Coordinate;
/// use unit_constellations::geometry::{Constellation, Rotation, Transform};
///
/// // An L-tromino
/// let shape = Constellation::new([(0, 0), (1, 0), (1, 1)]).unwrap();
///
/// let placed = shape.placed_at(Transform::rotation(Rotation::Deg90), Coordinate::new(4, 4));
/// assert_eq!(placed.len(), 3);
/// assert!(placed.iter().all(|c| c.row >= 4 && c.col >= 4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constellation {
    coords: CoordinateList,
}

impl Constellation {
    /// Build a constellation, rejecting empty input.
    pub fn new<I, C>(coords: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        let coords: CoordinateList = coords.into_iter().map(Into::into).collect();
        if coords.is_empty() {
            return Err(EngineError::EmptyConstellation);
        }
        Ok(Self { coords })
    }

    /// Internal constructor for lists already known to be non-empty.
    fn from_list(coords: CoordinateList) -> Self {
        debug_assert!(!coords.is_empty());
        Self { coords }
    }

    /// The coordinates, in their original order.
    #[must_use]
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Iterate over the coordinates.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.coords.iter()
    }

    /// Number of cells. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Check whether a coordinate is one of the cells.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coords.contains(&coord)
    }

    /// One quarter turn clockwise.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        Self::from_list(transform::rotate_clockwise(&self.coords))
    }

    /// One quarter turn counter-clockwise.
    #[must_use]
    pub fn rotated_counter_clockwise(&self) -> Self {
        Self::from_list(transform::rotate_counter_clockwise(&self.coords))
    }

    /// Negate columns.
    #[must_use]
    pub fn mirrored_along_x(&self) -> Self {
        Self::from_list(transform::mirror_along_x_axis(&self.coords))
    }

    /// Negate rows.
    #[must_use]
    pub fn mirrored_along_y(&self) -> Self {
        Self::from_list(transform::mirror_along_y_axis(&self.coords))
    }

    /// Apply a transform descriptor.
    #[must_use]
    pub fn transformed(&self, descriptor: Transform) -> Self {
        Self::from_list(transform::transform(&self.coords, descriptor))
    }

    /// Shift so no row or column is negative.
    #[must_use]
    pub fn normalised(&self) -> Self {
        Self::from_list(transform::normalise(&self.coords))
    }

    /// Add `target` to every cell.
    #[must_use]
    pub fn translated_to(&self, target: Coordinate) -> Self {
        Self::from_list(transform::translate_to(target, &self.coords))
    }

    /// Transform, normalise, then translate onto `origin`.
    ///
    /// This is the full card-to-board path: the result is in absolute board
    /// coordinates, ready for the placement pipeline.
    #[must_use]
    pub fn placed_at(&self, descriptor: Transform, origin: Coordinate) -> Self {
        self.transformed(descriptor).normalised().translated_to(origin)
    }

    /// Parallel row and column sequences.
    #[must_use]
    pub fn separate(&self) -> (Vec<i32>, Vec<i32>) {
        transform::separate(&self.coords)
    }

    /// Inclusive `(min, max)` corners of the bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> (Coordinate, Coordinate) {
        let (rows, cols) = self.separate();
        // Non-empty by construction, so the fallbacks are never used.
        let min = Coordinate::new(
            rows.iter().copied().min().unwrap_or(0),
            cols.iter().copied().min().unwrap_or(0),
        );
        let max = Coordinate::new(
            rows.iter().copied().max().unwrap_or(0),
            cols.iter().copied().max().unwrap_or(0),
        );
        (min, max)
    }
}

impl<'a> IntoIterator for &'a Constellation {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl TryFrom<Vec<Coordinate>> for Constellation {
    type Error = EngineError;

    fn try_from(coords: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}
