//! Affine transforms over coordinate lists.
//!
//! All functions are pure: they read a slice and return a fresh list.
//! Empty input gives empty output and nothing is bounds-checked here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coordinate, EngineError};

/// Coordinate list sized for polyomino pieces without heap allocation.
pub type CoordinateList = SmallVec<[Coordinate; 8]>;

/// Quarter turns clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Identity.
    #[default]
    Deg0,
    /// One quarter turn.
    Deg90,
    /// Two quarter turns.
    Deg180,
    /// Three quarter turns.
    Deg270,
}

impl Rotation {
    /// Number of clockwise quarter turns.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg0,
            Rotation::Deg90 => Rotation::Deg270,
            Rotation::Deg180 => Rotation::Deg180,
            Rotation::Deg270 => Rotation::Deg90,
        }
    }

    /// Compose two rotations.
    #[must_use]
    pub const fn then(self, other: Self) -> Self {
        match (self.quarter_turns() + other.quarter_turns()) % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }
}

impl TryFrom<u8> for Rotation {
    type Error = EngineError;

    fn try_from(turns: u8) -> Result<Self, Self::Error> {
        match turns {
            0 => Ok(Rotation::Deg0),
            1 => Ok(Rotation::Deg90),
            2 => Ok(Rotation::Deg180),
            3 => Ok(Rotation::Deg270),
            other => Err(EngineError::InvalidRotation(other)),
        }
    }
}

/// Rotation plus optional mirroring.
///
/// Mirrors are applied before the rotation: x-axis first, then y-axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transform {
    /// Clockwise quarter turns.
    pub rotation: Rotation,
    /// Negate columns.
    pub mirror_x: bool,
    /// Negate rows.
    pub mirror_y: bool,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rotation: Rotation::Deg0,
        mirror_x: false,
        mirror_y: false,
    };

    /// Pure rotation.
    #[must_use]
    pub const fn rotation(rotation: Rotation) -> Self {
        Self {
            rotation,
            mirror_x: false,
            mirror_y: false,
        }
    }

    /// Add mirroring along the x-axis.
    #[must_use]
    pub const fn with_mirror_x(mut self) -> Self {
        self.mirror_x = true;
        self
    }

    /// Add mirroring along the y-axis.
    #[must_use]
    pub const fn with_mirror_y(mut self) -> Self {
        self.mirror_y = true;
        self
    }
}

/// Component-wise sum.
#[must_use]
pub const fn add(a: Coordinate, b: Coordinate) -> Coordinate {
    a.add(b)
}

fn map(coords: &[Coordinate], f: impl Fn(Coordinate) -> Coordinate) -> CoordinateList {
    coords.iter().copied().map(f).collect()
}

/// `(row, col) -> (col, -row)`
#[must_use]
pub fn rotate_clockwise(coords: &[Coordinate]) -> CoordinateList {
    map(coords, |c| Coordinate::new(c.col, -c.row))
}

/// `(row, col) -> (-col, row)`
#[must_use]
pub fn rotate_counter_clockwise(coords: &[Coordinate]) -> CoordinateList {
    map(coords, |c| Coordinate::new(-c.col, c.row))
}

/// `(row, col) -> (-row, col)`
#[must_use]
pub fn mirror_along_y_axis(coords: &[Coordinate]) -> CoordinateList {
    map(coords, |c| Coordinate::new(-c.row, c.col))
}

/// `(row, col) -> (row, -col)`
#[must_use]
pub fn mirror_along_x_axis(coords: &[Coordinate]) -> CoordinateList {
    map(coords, |c| Coordinate::new(c.row, -c.col))
}

/// Apply a transform descriptor.
///
/// Rotation is `rotate_clockwise` applied `quarter_turns` times, so
/// rotations compose additively modulo 4.
#[must_use]
pub fn transform(coords: &[Coordinate], descriptor: Transform) -> CoordinateList {
    let mut out: CoordinateList = coords.iter().copied().collect();
    if descriptor.mirror_x {
        out = mirror_along_x_axis(&out);
    }
    if descriptor.mirror_y {
        out = mirror_along_y_axis(&out);
    }
    for _ in 0..descriptor.rotation.quarter_turns() {
        out = rotate_clockwise(&out);
    }
    out
}

/// Shift so the minimum row and column become non-negative.
///
/// Every coordinate moves by `(max(0, -min_row), max(0, -min_col))`.
/// Order is preserved.
#[must_use]
pub fn normalise(coords: &[Coordinate]) -> CoordinateList {
    let (rows, cols) = separate(coords);
    let min_row = rows.iter().copied().min().unwrap_or(0);
    let min_col = cols.iter().copied().min().unwrap_or(0);
    let shift = Coordinate::new((-min_row).max(0), (-min_col).max(0));
    translate_to(shift, coords)
}

/// Add `target` to every coordinate.
#[must_use]
pub fn translate_to(target: Coordinate, coords: &[Coordinate]) -> CoordinateList {
    map(coords, |c| c + target)
}

/// Split into parallel row and column sequences.
#[must_use]
pub fn separate(coords: &[Coordinate]) -> (Vec<i32>, Vec<i32>) {
    coords.iter().map(|c| (c.row, c.col)).unzip()
}
