//! Board state: tiles, dimensions, lookup index and snapshots.
//!
//! ## Key Types
//!
//! - `Tile`: one cell with terrain, unit and visibility
//! - `BoardDimensions`: rectangular bounds
//! - `TileIndex`: borrowed O(1) coordinate lookup, rebuilt per query
//! - `Board`: persistent row-major snapshot owned by the match layer

#[allow(clippy::module_inception)]
mod board;
mod dimensions;
mod index;
mod tile;

pub use board::Board;
pub use dimensions::BoardDimensions;
pub use index::TileIndex;
pub use tile::{Terrain, Tile, Unit, UnitKind};
