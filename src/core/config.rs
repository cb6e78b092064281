//! Engine configuration.
//!
//! Hosts configure a match at startup with `EngineConfig`:
//! - board size and player count
//! - vision radius for fog reveal
//! - win threshold and turn limit
//! - diagonal-streak parameters
//! - terrain density and seed for board generation
//!
//! The rule pipelines never read globals; everything they need is either
//! passed in directly or derived from this struct.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use crate::board::BoardDimensions;

/// Default vision radius around newly placed units.
pub const DEFAULT_VISION_RADIUS: u32 = 2;

/// Default score needed to win.
pub const DEFAULT_SCORE_THRESHOLD: i32 = 5;

/// Default number of placements before a match ends in a draw.
pub const DEFAULT_MAX_TURNS: u32 = 40;

/// Default step cap for each direction of a diagonal walk.
pub const DEFAULT_DIAGONAL_WALK_LIMIT: u32 = 20;

/// Default minimum length of a scoring diagonal chain.
pub const DEFAULT_MIN_STREAK_LENGTH: usize = 3;

/// Complete engine configuration.
///
/// ```
/// use unit_constellations::core::EngineConfig;
/// use unit_constellations::board::BoardDimensions;
///
/// let config = EngineConfig::new(2)
///     .with_dimensions(BoardDimensions::new(12, 12))
///     .with_vision_radius(3)
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.score_threshold, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Board size.
    pub dimensions: BoardDimensions,

    /// Radius of the disc revealed around each newly occupied cell.
    pub vision_radius: u32,

    /// Total points that end the match with a winner.
    pub score_threshold: i32,

    /// Placements after which the match ends in a draw.
    pub max_turns: u32,

    /// Step cap for each direction of the diagonal-streak walk.
    pub diagonal_walk_limit: u32,

    /// Minimum chain length that earns a diagonal-streak point (at least 2).
    pub min_streak_length: usize,

    /// Probability that a free generated tile receives terrain.
    pub terrain_density: f64,

    /// Seed for board generation and deck shuffling.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            dimensions: BoardDimensions::new(10, 10),
            vision_radius: DEFAULT_VISION_RADIUS,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            max_turns: DEFAULT_MAX_TURNS,
            diagonal_walk_limit: DEFAULT_DIAGONAL_WALK_LIMIT,
            min_streak_length: DEFAULT_MIN_STREAK_LENGTH,
            terrain_density: 0.15,
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Create a configuration for `player_count` players with defaults.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: BoardDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Set the vision radius.
    #[must_use]
    pub fn with_vision_radius(mut self, radius: u32) -> Self {
        self.vision_radius = radius;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_score_threshold(mut self, threshold: i32) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the diagonal walk step cap.
    #[must_use]
    pub fn with_diagonal_walk_limit(mut self, limit: u32) -> Self {
        self.diagonal_walk_limit = limit;
        self
    }

    /// Set the minimum scoring chain length.
    #[must_use]
    pub fn with_min_streak_length(mut self, length: usize) -> Self {
        self.min_streak_length = length;
        self
    }

    /// Set the terrain density used by board generation.
    #[must_use]
    pub fn with_terrain_density(mut self, density: f64) -> Self {
        self.terrain_density = density;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> EngineResult<()> {
        if self.player_count == 0 || self.player_count > 255 {
            return Err(EngineError::InvalidConfig(format!(
                "player_count must be 1-255, got {}",
                self.player_count
            )));
        }
        if self.dimensions.rows == 0 || self.dimensions.cols == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "board must have at least one row and column, got {}",
                self.dimensions
            )));
        }
        if self.player_count > self.dimensions.cols as usize {
            return Err(EngineError::InvalidConfig(format!(
                "{} players need at least as many columns, got {}",
                self.player_count, self.dimensions
            )));
        }
        if !(0.0..=1.0).contains(&self.terrain_density) {
            return Err(EngineError::InvalidConfig(format!(
                "terrain_density must be within [0, 1], got {}",
                self.terrain_density
            )));
        }
        if self.score_threshold <= 0 {
            return Err(EngineError::InvalidConfig(
                "score_threshold must be positive".to_string(),
            ));
        }
        if self.max_turns == 0 {
            return Err(EngineError::InvalidConfig(
                "max_turns must be positive".to_string(),
            ));
        }
        if self.diagonal_walk_limit == 0 {
            return Err(EngineError::InvalidConfig(
                "diagonal_walk_limit must be positive".to_string(),
            ));
        }
        if self.min_streak_length < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "min_streak_length must be at least 2, got {}",
                self.min_streak_length
            )));
        }
        Ok(())
    }
}
