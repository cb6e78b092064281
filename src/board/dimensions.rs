//! Board size.

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;

/// Row and column counts of a rectangular board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardDimensions {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
}

impl BoardDimensions {
    /// Create new dimensions.
    #[must_use]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// `0 <= row < rows && 0 <= col < cols`
    #[must_use]
    pub fn contains(&self, c: Coordinate) -> bool {
        c.row >= 0 && c.col >= 0 && (c.row as u32) < self.rows && (c.col as u32) < self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major position of an on-board coordinate.
    #[must_use]
    pub fn offset_of(&self, c: Coordinate) -> Option<usize> {
        self.contains(c)
            .then(|| c.row as usize * self.cols as usize + c.col as usize)
    }

    /// The centre cell (rounded down).
    #[must_use]
    pub fn centre(&self) -> Coordinate {
        Coordinate::new((self.rows / 2) as i32, (self.cols / 2) as i32)
    }

    /// All cells in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Coordinate::new(row, col)))
    }
}

impl std::fmt::Display for BoardDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let dims = BoardDimensions::new(3, 4);
        assert!(dims.contains(Coordinate::new(0, 0)));
        assert!(dims.contains(Coordinate::new(2, 3)));
        assert!(!dims.contains(Coordinate::new(3, 0)));
        assert!(!dims.contains(Coordinate::new(0, 4)));
        assert!(!dims.contains(Coordinate::new(-1, 0)));
        assert!(!dims.contains(Coordinate::new(0, -1)));
    }

    #[test]
    fn test_offsets_are_row_major() {
        let dims = BoardDimensions::new(3, 4);
        assert_eq!(dims.offset_of(Coordinate::new(0, 0)), Some(0));
        assert_eq!(dims.offset_of(Coordinate::new(1, 2)), Some(6));
        assert_eq!(dims.offset_of(Coordinate::new(5, 2)), None);

        for (i, c) in dims.coordinates().enumerate() {
            assert_eq!(dims.offset_of(c), Some(i));
        }
        assert_eq!(dims.coordinates().count(), dims.cell_count());
    }

    #[test]
    fn test_centre_and_display() {
        let dims = BoardDimensions::new(9, 10);
        assert_eq!(dims.centre(), Coordinate::new(4, 5));
        assert_eq!(dims.to_string(), "9x10");
    }
}
