//! Vision discs for fog-of-war reveal.
//!
//! The footprint is not a Euclidean or Manhattan circle. Row `r` spans
//! columns `|c| <= hw(r)` with
//!
//! ```text
//! hw(r) = max(1, radius - max(0, |r| - radius / 2))
//! ```
//!
//! so rows stay full width up to `radius / 2` away from the centre, then
//! narrow by one per row, never below half-width 1.

use rustc_hash::FxHashSet;

use super::transform::translate_to;
use crate::board::BoardDimensions;
use crate::core::Coordinate;

/// Column half-width of row offset `row` in a disc of `radius`.
///
/// Radii beyond `i32::MAX` saturate.
#[must_use]
pub fn half_width(radius: u32, row: i32) -> i32 {
    let radius = saturating_radius(radius);
    let taper = (row.abs() - radius / 2).max(0);
    (radius - taper).max(1)
}

/// Relative offsets of a vision disc centred on the origin.
///
/// Row-major order, no duplicates.
///
/// ```
/// use unit_constellations::geometry::vision_disc;
///
/// assert_eq!(vision_disc(1).len(), 9);
/// assert_eq!(vision_disc(3).len(), 37);
/// ```
#[must_use]
pub fn vision_disc(radius: u32) -> Vec<Coordinate> {
    let r = saturating_radius(radius);
    let mut out = Vec::new();
    for row in -r..=r {
        let hw = half_width(radius, row);
        out.extend((-hw..=hw).map(|col| Coordinate::new(row, col)));
    }
    out
}

fn saturating_radius(radius: u32) -> i32 {
    i32::try_from(radius).unwrap_or(i32::MAX)
}

/// Every on-board cell revealed by discs around `cells`.
///
/// Discs are translated onto each cell, clipped to `dimensions` and
/// deduplicated in first-seen order.
#[must_use]
pub fn reveal_area(cells: &[Coordinate], radius: u32, dimensions: BoardDimensions) -> Vec<Coordinate> {
    let disc = vision_disc(radius);
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();

    for &cell in cells {
        for c in translate_to(cell, &disc) {
            if dimensions.contains(c) && seen.insert(c) {
                out.push(c);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_widths(radius: u32) -> Vec<i32> {
        let r = radius as i32;
        (-r..=r).map(|row| half_width(radius, row)).collect()
    }

    #[test]
    fn test_radius_one() {
        assert_eq!(row_widths(1), vec![1, 1, 1]);
        assert_eq!(vision_disc(1).len(), 9);
    }

    #[test]
    fn test_radius_three() {
        assert_eq!(row_widths(3), vec![1, 2, 3, 3, 3, 2, 1]);
        assert_eq!(vision_disc(3).len(), 37);
    }

    #[test]
    fn test_radius_four() {
        assert_eq!(row_widths(4), vec![2, 3, 4, 4, 4, 4, 4, 3, 2]);
        // 5 rows of 9, 2 of 7, 2 of 5
        assert_eq!(vision_disc(4).len(), 69);
    }

    #[test]
    fn test_radius_zero_still_reveals_a_strip() {
        assert_eq!(
            vision_disc(0),
            vec![Coordinate::new(0, -1), Coordinate::new(0, 0), Coordinate::new(0, 1)]
        );
    }

    #[test]
    fn test_huge_radius_saturates() {
        assert_eq!(half_width(u32::MAX, 0), i32::MAX);
        assert_eq!(half_width(u32::MAX, i32::MAX), i32::MAX / 2);
        assert!(half_width(u32::MAX, -i32::MAX) > 0);
    }

    #[test]
    fn test_disc_is_symmetric_and_unique() {
        for radius in 0..8 {
            let disc = vision_disc(radius);
            let set: FxHashSet<_> = disc.iter().copied().collect();
            assert_eq!(set.len(), disc.len());
            for c in &disc {
                assert!(set.contains(&Coordinate::new(-c.row, c.col)));
                assert!(set.contains(&Coordinate::new(c.row, -c.col)));
            }
            assert!(set.contains(&Coordinate::ORIGIN));
        }
    }

    #[test]
    fn test_reveal_area_clips_to_board() {
        let dims = BoardDimensions::new(5, 5);
        let revealed = reveal_area(&[Coordinate::new(0, 0)], 1, dims);
        // Only the quadrant on the board survives.
        assert_eq!(revealed.len(), 4);
        assert!(revealed.iter().all(|&c| dims.contains(c)));
    }

    #[test]
    fn test_reveal_area_dedups_overlap() {
        let dims = BoardDimensions::new(10, 10);
        let revealed = reveal_area(&[Coordinate::new(5, 5), Coordinate::new(5, 6)], 1, dims);
        // Two 3x3 squares overlapping in a 3x2 block.
        assert_eq!(revealed.len(), 12);
    }
}
