//! Core engine types: coordinates, players, configuration, RNG, errors.
//!
//! Everything here is game-geometry agnostic. The board, rules and match
//! layers build on these.

pub mod config;
pub mod coordinate;
pub mod error;
pub mod player;
pub mod rng;

pub use config::EngineConfig;
pub use coordinate::{Coordinate, TileId};
pub use error::{EngineError, EngineResult};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
