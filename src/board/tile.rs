//! Tiles and their occupants.
//!
//! A tile is addressed by its coordinate and carries at most one terrain
//! feature, at most one unit, and a fog-of-war visibility flag. Terrain
//! and units are mutually exclusive in practice (placement forbids it),
//! but the type does not enforce that: boards come from outside.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, PlayerId, TileId};

/// Terrain features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Lakes and rivers.
    Water,
    /// Forest.
    Tree,
    /// Rock.
    Stone,
}

impl Terrain {
    /// All terrain kinds, in generation order.
    pub const ALL: [Terrain; 3] = [Terrain::Water, Terrain::Tree, Terrain::Stone];
}

/// What kind of unit occupies a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Immovable anchor for its owner's adjacency. Anchors everyone when unowned.
    MainBuilding,
    /// A cell of a placed constellation.
    Regular,
}

/// A unit on a tile.
///
/// `owner: None` marks a neutral unit, typically a shared main-building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    /// Owning player, if any.
    pub owner: Option<PlayerId>,
    /// Unit kind.
    pub kind: UnitKind,
}

impl Unit {
    /// A regular unit owned by `owner`.
    #[must_use]
    pub const fn regular(owner: PlayerId) -> Self {
        Self {
            owner: Some(owner),
            kind: UnitKind::Regular,
        }
    }

    /// A main-building owned by `owner`.
    #[must_use]
    pub const fn main_building(owner: PlayerId) -> Self {
        Self {
            owner: Some(owner),
            kind: UnitKind::MainBuilding,
        }
    }

    /// A main-building with no owner.
    #[must_use]
    pub const fn neutral_main_building() -> Self {
        Self {
            owner: None,
            kind: UnitKind::MainBuilding,
        }
    }

    /// Check if `player` owns this unit.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Check if this is a main-building.
    #[must_use]
    pub fn is_main_building(&self) -> bool {
        self.kind == UnitKind::MainBuilding
    }

    /// Counts as an ally anchor for `player`: owned by them, or a neutral main-building.
    ///
    /// Another player's main-building is never an anchor.
    #[must_use]
    pub fn is_anchor_for(&self, player: PlayerId) -> bool {
        self.is_owned_by(player) || (self.is_main_building() && self.owner.is_none())
    }
}

/// A single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Position on the board.
    pub coordinate: Coordinate,
    /// Terrain feature, if any.
    pub terrain: Option<Terrain>,
    /// Occupying unit, if any.
    pub unit: Option<Unit>,
    /// False while under fog.
    pub visible: bool,
}

impl Tile {
    /// An empty, fogged tile.
    #[must_use]
    pub const fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            terrain: None,
            unit: None,
            visible: false,
        }
    }

    /// Set terrain (builder pattern).
    #[must_use]
    pub const fn with_terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// Set the unit (builder pattern).
    #[must_use]
    pub const fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Mark visible (builder pattern).
    #[must_use]
    pub const fn revealed(mut self) -> Self {
        self.visible = true;
        self
    }

    /// Stable key `"{row}_{col}"`.
    #[must_use]
    pub fn id(&self) -> TileId {
        self.coordinate.id()
    }

    /// Neither terrain nor unit.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.terrain.is_none() && self.unit.is_none()
    }

    /// Check for a specific terrain kind.
    #[must_use]
    pub fn has_terrain(&self, terrain: Terrain) -> bool {
        self.terrain == Some(terrain)
    }

    /// Hosts a unit owned by `player`.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.unit.is_some_and(|u| u.is_owned_by(player))
    }

    /// Hosts a unit that anchors `player`'s adjacency.
    #[must_use]
    pub fn is_anchor_for(&self, player: PlayerId) -> bool {
        self.unit.is_some_and(|u| u.is_anchor_for(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_fogged_and_free() {
        let tile = Tile::new(Coordinate::new(2, 3));
        assert!(!tile.visible);
        assert!(tile.is_free());
        assert_eq!(tile.id().as_str(), "2_3");
    }

    #[test]
    fn test_ownership() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        let tile = Tile::new(Coordinate::ORIGIN).with_unit(Unit::regular(p0));

        assert!(tile.is_owned_by(p0));
        assert!(!tile.is_owned_by(p1));
        assert!(tile.is_anchor_for(p0));
        assert!(!tile.is_anchor_for(p1));
        assert!(!tile.is_free());
    }

    #[test]
    fn test_main_building_anchors_owner_only() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        let owned = Tile::new(Coordinate::ORIGIN).with_unit(Unit::main_building(p0));
        assert!(owned.is_anchor_for(p0));
        assert!(!owned.is_anchor_for(p1));
        assert!(!owned.is_owned_by(p1));

        let neutral = Tile::new(Coordinate::ORIGIN).with_unit(Unit::neutral_main_building());
        assert!(neutral.is_anchor_for(p0));
        assert!(neutral.is_anchor_for(p1));
        assert!(!neutral.is_owned_by(p0));

        // A neutral regular unit anchors nobody.
        let stray = Tile::new(Coordinate::ORIGIN).with_unit(Unit {
            owner: None,
            kind: UnitKind::Regular,
        });
        assert!(!stray.is_anchor_for(p0));
    }

    #[test]
    fn test_terrain() {
        let tile = Tile::new(Coordinate::ORIGIN).with_terrain(Terrain::Water).revealed();
        assert!(tile.has_terrain(Terrain::Water));
        assert!(!tile.has_terrain(Terrain::Stone));
        assert!(tile.visible);
        assert!(!tile.is_free());
    }
}
