//! Coordinate-keyed tile lookup.
//!
//! `TileIndex` is a disposable view over an authoritative tile collection.
//! Build one per query; it borrows the tiles and never mutates them.
//!
//! ## Preconditions
//!
//! Callers must supply at most one tile per coordinate. If duplicates slip
//! through, the last one wins for lookups while iteration keeps the
//! position of the first.

use rustc_hash::FxHashMap;

use super::tile::Tile;
use crate::core::{Coordinate, TileId};
use crate::geometry::adjacent_coordinates;

/// O(1) coordinate → tile lookup.
///
/// ```
/// use unit_constellations::board::{Tile, TileIndex};
/// use unit_constellations::core::Coordinate;
///
/// let tiles = vec![Tile::new(Coordinate::new(0, 0)), Tile::new(Coordinate::new(0, 1))];
/// let index = TileIndex::build(&tiles);
///
/// assert_eq!(index.len(), 2);
/// assert!(index.get(Coordinate::new(0, 1)).is_some());
/// assert!(index.get(Coordinate::new(1, 1)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileIndex<'a> {
    tiles: FxHashMap<Coordinate, &'a Tile>,
    order: Vec<Coordinate>,
}

impl<'a> TileIndex<'a> {
    /// Index a tile collection. O(n).
    pub fn build(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        let iter = tiles.into_iter();
        let (lower, _) = iter.size_hint();
        let mut map = FxHashMap::with_capacity_and_hasher(lower, Default::default());
        let mut order = Vec::with_capacity(lower);

        for tile in iter {
            if map.insert(tile.coordinate, tile).is_none() {
                order.push(tile.coordinate);
            }
        }

        Self { tiles: map, order }
    }

    /// Tile at a coordinate.
    #[must_use]
    pub fn get(&self, c: Coordinate) -> Option<&'a Tile> {
        self.tiles.get(&c).copied()
    }

    /// Tile by its string key. Malformed keys simply miss.
    #[must_use]
    pub fn get_by_id(&self, id: &TileId) -> Option<&'a Tile> {
        id.coordinate().ok().and_then(|c| self.get(c))
    }

    /// Check whether a coordinate has a tile.
    #[must_use]
    pub fn contains(&self, c: Coordinate) -> bool {
        self.tiles.contains_key(&c)
    }

    /// Number of distinct coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tiles in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Tile> + '_ {
        self.order.iter().filter_map(|c| self.get(*c))
    }

    /// Existing orthogonal neighbor tiles, N/E/S/W order.
    ///
    /// Board edges simply yield fewer tiles.
    pub fn neighbors(&self, c: Coordinate) -> impl Iterator<Item = &'a Tile> + '_ {
        adjacent_coordinates(c).into_iter().filter_map(|n| self.get(n))
    }
}
