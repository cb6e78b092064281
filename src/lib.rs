//! # unit-constellations
//!
//! Grid geometry and rule evaluation for a turn-based territory game.
//! Players place polyomino "constellations" of units next to their own
//! units or a main-building, reveal the fog around them, and score by
//! surrounding terrain, closing holes and forming diagonal streaks.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: placement and scoring pipelines take an immutable tile
//!    view and a player id and return values. They hold no state.
//!
//! 2. **Rejection Is Data**: a failed placement is a `PlacementOutcome`, not
//!    an error. `EngineError` is reserved for malformed input and misuse.
//!
//! 3. **Persistent Boards**: `Board` stores tiles in `im-rs` vectors, so
//!    snapshots are O(1) and every update returns a new board.
//!
//! ## Modules
//!
//! - `core`: coordinates, tile ids, players, configuration, RNG, errors
//! - `geometry`: transforms, constellations, adjacency, vision disc
//! - `board`: tiles, dimensions, lookup index, board snapshots
//! - `rules`: placement and scoring pipelines
//! - `cards`: card codec, standard pool, deck
//! - `game`: participants, turn cadence, match lifecycle

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod geometry;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Coordinate, EngineConfig, EngineError, EngineResult, GameRng, PlayerId, PlayerMap, TileId,
};

pub use crate::geometry::{Constellation, Rotation, Transform};

pub use crate::board::{Board, BoardDimensions, Terrain, Tile, TileIndex, Unit, UnitKind};

pub use crate::rules::{
    PlacementContext, PlacementOutcome, PlacementPipeline, PlacementRule, Polarity, RuleEvaluation,
    ScoringPipeline, ScoringRule,
};

pub use crate::cards::{standard_pool, Card, Deck};

pub use crate::game::{
    GameResult, Match, MatchBuilder, MatchStatus, Participant, PlacementReport, TurnCadence,
};
