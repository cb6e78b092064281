//! Neighbor derivation.
//!
//! "North" is `row + 1`. The fixed orders below are relied on by test
//! fixtures and by the scoring rules' fulfillment ordering.

use rustc_hash::FxHashSet;

use crate::core::Coordinate;

/// Orthogonal unit offsets in north, east, south, west order.
pub const ORTHOGONAL_OFFSETS: [Coordinate; 4] = [
    Coordinate::new(1, 0),
    Coordinate::new(0, 1),
    Coordinate::new(-1, 0),
    Coordinate::new(0, -1),
];

/// Diagonal unit offsets in north-east, north-west, south-east, south-west order.
pub const DIAGONAL_OFFSETS: [Coordinate; 4] = [
    Coordinate::new(1, 1),
    Coordinate::new(1, -1),
    Coordinate::new(-1, 1),
    Coordinate::new(-1, -1),
];

/// The four orthogonal neighbors: `(row+1,col), (row,col+1), (row-1,col), (row,col-1)`.
#[must_use]
pub fn adjacent_coordinates(c: Coordinate) -> [Coordinate; 4] {
    ORTHOGONAL_OFFSETS.map(|offset| c + offset)
}

/// The four diagonal neighbors.
#[must_use]
pub fn diagonal_coordinates(c: Coordinate) -> [Coordinate; 4] {
    DIAGONAL_OFFSETS.map(|offset| c + offset)
}

/// Orthogonal neighbors of a whole shape.
///
/// Members of the shape are excluded and duplicates collapse. The result
/// follows first-seen order (member order, then N/E/S/W), though callers
/// should not depend on it.
#[must_use]
pub fn adjacent_coordinates_of_constellation(coords: &[Coordinate]) -> Vec<Coordinate> {
    let members: FxHashSet<Coordinate> = coords.iter().copied().collect();
    let mut seen = FxHashSet::default();
    let mut out = Vec::with_capacity(coords.len() * 2 + 2);

    for &c in coords {
        for neighbor in adjacent_coordinates(c) {
            if !members.contains(&neighbor) && seen.insert(neighbor) {
                out.push(neighbor);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_order() {
        assert_eq!(
            adjacent_coordinates(Coordinate::new(0, 0)),
            [
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
                Coordinate::new(-1, 0),
                Coordinate::new(0, -1),
            ]
        );
    }

    #[test]
    fn test_diagonals() {
        let diagonals = diagonal_coordinates(Coordinate::new(5, 5));
        assert_eq!(
            diagonals,
            [
                Coordinate::new(6, 6),
                Coordinate::new(6, 4),
                Coordinate::new(4, 6),
                Coordinate::new(4, 4),
            ]
        );
    }

    #[test]
    fn test_constellation_neighbors_exclude_members() {
        // Horizontal domino: 6 distinct neighbors.
        let domino = [Coordinate::new(0, 0), Coordinate::new(0, 1)];
        let neighbors = adjacent_coordinates_of_constellation(&domino);

        assert_eq!(neighbors.len(), 6);
        assert!(!neighbors.contains(&Coordinate::new(0, 0)));
        assert!(!neighbors.contains(&Coordinate::new(0, 1)));
        for expected in [(1, 0), (1, 1), (-1, 0), (-1, 1), (0, -1), (0, 2)] {
            assert!(neighbors.contains(&Coordinate::from(expected)));
        }
    }

    #[test]
    fn test_constellation_neighbors_dedup() {
        // 2x2 square: 8 neighbors, each shared corner-side seen once.
        let square = [
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
        ];
        let neighbors = adjacent_coordinates_of_constellation(&square);
        assert_eq!(neighbors.len(), 8);

        let unique: FxHashSet<_> = neighbors.iter().collect();
        assert_eq!(unique.len(), neighbors.len());
    }

    #[test]
    fn test_empty_constellation_has_no_neighbors() {
        assert!(adjacent_coordinates_of_constellation(&[]).is_empty());
    }
}
