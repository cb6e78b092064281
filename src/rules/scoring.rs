//! Scoring rules.
//!
//! Each rule looks at the whole board from one player's point of view and
//! returns a `RuleEvaluation`: the points it awards plus the exact cells
//! that earned them, so a UI can highlight every fulfillment.
//!
//! Rules are independent. The pipeline's order only affects display order,
//! never totals. Evaluation is pure: the same index and player always
//! produce the same evaluations.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::board::{Terrain, TileIndex};
use crate::core::config::{DEFAULT_DIAGONAL_WALK_LIMIT, DEFAULT_MIN_STREAK_LENGTH};
use crate::core::{Coordinate, EngineConfig, PlayerId};

/// Up-and-right step of the diagonal walk.
const UP_RIGHT: Coordinate = Coordinate::new(-1, 1);

/// Down-and-left step of the diagonal walk.
const DOWN_LEFT: Coordinate = Coordinate::new(1, -1);

/// Whether a rule adds or removes points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// +1 per fulfillment.
    Reward,
    /// -1 per fulfillment.
    Penalty,
}

impl Polarity {
    /// Points per fulfillment.
    #[must_use]
    pub const fn points(self) -> i32 {
        match self {
            Polarity::Reward => 1,
            Polarity::Penalty => -1,
        }
    }
}

/// A scoring rule and its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Visible terrain of `terrain` with one of the player's units next to it.
    TerrainAdjacency {
        /// Terrain kind to look for.
        terrain: Terrain,
        /// Reward or penalty.
        polarity: Polarity,
    },

    /// Visible free tiles whose existing neighbors are all terrain or ally-held.
    Hole,

    /// Diagonal chains of the player's units running up-right / down-left.
    DiagonalStreak {
        /// Minimum chain length that scores.
        min_length: usize,
        /// Step cap for each walk direction.
        walk_limit: u32,
    },
}

impl ScoringRule {
    /// Reward for units next to `terrain`.
    #[must_use]
    pub const fn reward_near(terrain: Terrain) -> Self {
        Self::TerrainAdjacency {
            terrain,
            polarity: Polarity::Reward,
        }
    }

    /// Penalty for units next to `terrain`.
    #[must_use]
    pub const fn penalty_near(terrain: Terrain) -> Self {
        Self::TerrainAdjacency {
            terrain,
            polarity: Polarity::Penalty,
        }
    }

    /// Diagonal streaks with the default length and step cap.
    #[must_use]
    pub const fn diagonal_streak() -> Self {
        Self::DiagonalStreak {
            min_length: DEFAULT_MIN_STREAK_LENGTH,
            walk_limit: DEFAULT_DIAGONAL_WALK_LIMIT,
        }
    }

    /// Evaluate this rule for `player`.
    #[must_use]
    pub fn evaluate(&self, player: PlayerId, index: &TileIndex<'_>) -> RuleEvaluation {
        let (points, fulfillments) = match *self {
            ScoringRule::TerrainAdjacency { terrain, polarity } => {
                terrain_adjacency(player, index, terrain, polarity)
            }
            ScoringRule::Hole => holes(player, index),
            ScoringRule::DiagonalStreak {
                min_length,
                walk_limit,
            } => diagonal_streaks(player, index, min_length, walk_limit),
        };

        trace!(player = %player, rule = ?self, points, "evaluated scoring rule");
        RuleEvaluation {
            rule: *self,
            points,
            fulfillments,
        }
    }
}

/// Outcome of one scoring rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEvaluation {
    /// The rule that produced this evaluation.
    pub rule: ScoringRule,
    /// Net points.
    pub points: i32,
    /// One cell list per independent fulfillment.
    pub fulfillments: Vec<Vec<Coordinate>>,
}

impl RuleEvaluation {
    /// Check whether any cell earned points under this rule.
    #[must_use]
    pub fn is_fulfilled(&self) -> bool {
        !self.fulfillments.is_empty()
    }

    /// All cells that contributed, flattened.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.fulfillments.iter().flatten().copied()
    }
}

/// Sum of points across evaluations.
#[must_use]
pub fn total_points(evaluations: &[RuleEvaluation]) -> i32 {
    evaluations.iter().map(|e| e.points).sum()
}

fn terrain_adjacency(
    player: PlayerId,
    index: &TileIndex<'_>,
    terrain: Terrain,
    polarity: Polarity,
) -> (i32, Vec<Vec<Coordinate>>) {
    let fulfillments: Vec<Vec<Coordinate>> = index
        .iter()
        .filter(|t| t.visible && t.has_terrain(terrain))
        .filter(|t| index.neighbors(t.coordinate).any(|n| n.is_owned_by(player)))
        .map(|t| vec![t.coordinate])
        .collect();

    (fulfillments.len() as i32 * polarity.points(), fulfillments)
}

/// Neighbors that are missing from the index (board edge) are skipped, so
/// an edge tile only needs its existing neighbors enclosed.
fn holes(player: PlayerId, index: &TileIndex<'_>) -> (i32, Vec<Vec<Coordinate>>) {
    let fulfillments: Vec<Vec<Coordinate>> = index
        .iter()
        .filter(|t| t.visible && t.is_free())
        .filter(|t| {
            index
                .neighbors(t.coordinate)
                .all(|n| n.terrain.is_some() || n.is_anchor_for(player))
        })
        .map(|t| vec![t.coordinate])
        .collect();

    (fulfillments.len() as i32, fulfillments)
}

fn diagonal_streaks(
    player: PlayerId,
    index: &TileIndex<'_>,
    min_length: usize,
    walk_limit: u32,
) -> (i32, Vec<Vec<Coordinate>>) {
    let mut processed: FxHashSet<Coordinate> = FxHashSet::default();
    let mut fulfillments = Vec::new();

    for seed in index.iter().filter(|t| t.is_owned_by(player)) {
        if !processed.insert(seed.coordinate) {
            continue;
        }

        let mut chain = vec![seed.coordinate];
        for step in [UP_RIGHT, DOWN_LEFT] {
            walk(player, index, seed.coordinate, step, walk_limit, &mut processed, &mut chain);
        }

        if chain.len() >= min_length {
            fulfillments.push(chain);
        }
    }

    (fulfillments.len() as i32, fulfillments)
}

/// Extend `chain` from `start` in direction `step` while the player owns
/// the next tile. Stops early at already-processed tiles so a truncated
/// chain is never counted twice.
fn walk(
    player: PlayerId,
    index: &TileIndex<'_>,
    start: Coordinate,
    step: Coordinate,
    walk_limit: u32,
    processed: &mut FxHashSet<Coordinate>,
    chain: &mut Vec<Coordinate>,
) {
    let mut current = start;
    for _ in 0..walk_limit {
        let next = current + step;
        let owned = index.get(next).is_some_and(|t| t.is_owned_by(player));
        if !owned || !processed.insert(next) {
            return;
        }
        chain.push(next);
        current = next;
    }

    if index.get(current + step).is_some_and(|t| t.is_owned_by(player)) {
        warn!(
            player = %player,
            from = %start,
            walk_limit,
            "diagonal walk truncated at step cap"
        );
    }
}

/// Ordered list of scoring rules.
///
/// ```
/// use unit_constellations::board::{Board, BoardDimensions, Unit};
/// use unit_constellations::core::{Coordinate, EngineConfig, PlayerId};
/// use unit_constellations::rules::ScoringPipeline;
///
/// let p = PlayerId::new(0);
/// let diagonal = [Coordinate::new(3, 1), Coordinate::new(2, 2), Coordinate::new(1, 3)];
/// let board = Board::empty(BoardDimensions::new(5, 5)).with_unit(&diagonal, Unit::regular(p));
///
/// let pipeline = ScoringPipeline::standard(&EngineConfig::default());
/// assert_eq!(pipeline.score(p, &board.index()), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPipeline {
    rules: Vec<ScoringRule>,
}

impl ScoringPipeline {
    /// The standard rule set:
    /// water and trees reward, stone penalizes, holes reward, diagonal
    /// streaks reward using the configured length and step cap.
    #[must_use]
    pub fn standard(config: &EngineConfig) -> Self {
        Self::with_rules([
            ScoringRule::reward_near(Terrain::Water),
            ScoringRule::reward_near(Terrain::Tree),
            ScoringRule::penalty_near(Terrain::Stone),
            ScoringRule::Hole,
            ScoringRule::DiagonalStreak {
                min_length: config.min_streak_length,
                walk_limit: config.diagonal_walk_limit,
            },
        ])
    }

    /// A pipeline with a custom rule list.
    #[must_use]
    pub fn with_rules(rules: impl IntoIterator<Item = ScoringRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The rules, in display order.
    #[must_use]
    pub fn rules(&self) -> &[ScoringRule] {
        &self.rules
    }

    /// Evaluate every rule for `player`.
    #[must_use]
    pub fn evaluate(&self, player: PlayerId, index: &TileIndex<'_>) -> Vec<RuleEvaluation> {
        self.rules.iter().map(|r| r.evaluate(player, index)).collect()
    }

    /// Total points for `player`.
    #[must_use]
    pub fn score(&self, player: PlayerId, index: &TileIndex<'_>) -> i32 {
        total_points(&self.evaluate(player, index))
    }
}
