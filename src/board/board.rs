//! Row-major board snapshot.
//!
//! `Board` is the engine's own tile collection, used by the match layer
//! and by hosts that do not keep one of their own. It stores tiles in an
//! `im::Vector`, so cloning a board for a snapshot is O(1) and every
//! "mutation" returns a new board sharing structure with the old one.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dimensions::BoardDimensions;
use super::index::TileIndex;
use super::tile::{Terrain, Tile, Unit};
use crate::core::{Coordinate, EngineConfig, EngineResult, GameRng, PlayerId};
use crate::geometry::{adjacent_coordinates, reveal_area};

/// A complete rectangular board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimensions: BoardDimensions,
    tiles: Vector<Tile>,
}

impl Board {
    /// An all-fog board with no terrain or units.
    #[must_use]
    pub fn empty(dimensions: BoardDimensions) -> Self {
        Self {
            dimensions,
            tiles: dimensions.coordinates().map(Tile::new).collect(),
        }
    }

    /// Generate a starting board.
    ///
    /// - one main-building per player, spread along the middle row
    ///   (a single player gets the centre)
    /// - terrain scattered at `terrain_density`, keeping main-buildings and
    ///   their orthogonal neighbors clear
    /// - the vision disc around each main-building revealed
    pub fn generate(config: &EngineConfig, rng: &GameRng) -> EngineResult<Self> {
        config.validate()?;
        let dims = config.dimensions;
        let mut rng = rng.for_context("terrain");

        let buildings = main_building_sites(dims, config.player_count);
        let mut keep_clear: Vec<Coordinate> = buildings.iter().map(|&(c, _)| c).collect();
        for &(c, _) in &buildings {
            keep_clear.extend(adjacent_coordinates(c));
        }

        let mut board = Self::empty(dims);
        for c in dims.coordinates() {
            if keep_clear.contains(&c) || !rng.gen_bool(config.terrain_density) {
                continue;
            }
            let terrain = Terrain::ALL[rng.gen_range_usize(0..Terrain::ALL.len())];
            board = board.with_terrain(c, terrain);
        }

        for &(c, owner) in &buildings {
            board = board.with_unit(&[c], Unit::main_building(owner));
        }
        let sites: Vec<Coordinate> = buildings.iter().map(|&(c, _)| c).collect();
        board = board.revealed(&reveal_area(&sites, config.vision_radius, dims));

        debug!(
            dimensions = %dims,
            players = config.player_count,
            terrain = board.tiles().filter(|t| t.terrain.is_some()).count(),
            "generated board"
        );
        Ok(board)
    }

    /// Board size.
    #[must_use]
    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    /// Tile at a coordinate, `None` off the board.
    #[must_use]
    pub fn tile(&self, c: Coordinate) -> Option<&Tile> {
        self.dimensions.offset_of(c).and_then(|i| self.tiles.get(i))
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Build a lookup view over this board.
    #[must_use]
    pub fn index(&self) -> TileIndex<'_> {
        TileIndex::build(self.tiles.iter())
    }

    /// Copy of this board with `update` applied to each on-board cell in `cells`.
    fn updated(&self, cells: &[Coordinate], update: impl Fn(&mut Tile)) -> Self {
        let mut tiles = self.tiles.clone();
        for &c in cells {
            if let Some(tile) = self.dimensions.offset_of(c).and_then(|i| tiles.get_mut(i)) {
                update(tile);
            }
        }
        Self {
            dimensions: self.dimensions,
            tiles,
        }
    }

    /// Place `unit` on every cell. Off-board cells are ignored.
    #[must_use]
    pub fn with_unit(&self, cells: &[Coordinate], unit: Unit) -> Self {
        self.updated(cells, |t| t.unit = Some(unit))
    }

    /// Set terrain on one cell.
    #[must_use]
    pub fn with_terrain(&self, cell: Coordinate, terrain: Terrain) -> Self {
        self.updated(&[cell], |t| t.terrain = Some(terrain))
    }

    /// Lift the fog on every cell.
    #[must_use]
    pub fn revealed(&self, cells: &[Coordinate]) -> Self {
        self.updated(cells, |t| t.visible = true)
    }

    /// Encode for an external persistence layer.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a board produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Main-building positions and owners for a fresh board.
fn main_building_sites(dims: BoardDimensions, player_count: usize) -> Vec<(Coordinate, PlayerId)> {
    let row = (dims.rows / 2) as i32;
    let slots = player_count as u32 + 1;
    PlayerId::all(player_count)
        .map(|p| {
            let col = ((p.index() as u32 + 1) * dims.cols / slots).min(dims.cols - 1);
            (Coordinate::new(row, col as i32), p)
        })
        .collect()
}
