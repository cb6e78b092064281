//! Placement legality.
//!
//! A candidate constellation, already in board coordinates, must pass every
//! rule of a `PlacementPipeline`. Rules run in a fixed order and the first
//! failure is reported; nothing is applied on rejection.
//!
//! Rejection is an expected, frequent outcome and is returned as a value,
//! not an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{BoardDimensions, TileIndex};
use crate::core::{Coordinate, EngineResult, PlayerId};
use crate::geometry::{adjacent_coordinates_of_constellation, Constellation, Transform};

/// A single placement predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementRule {
    /// Every cell lies inside the board.
    InBounds,
    /// No cell already hosts a unit.
    NoUnit,
    /// No cell hosts terrain.
    NoTerrain,
    /// Some orthogonal neighbor hosts a unit owned by the player or a neutral main-building.
    AdjacentToAlly,
}

impl PlacementRule {
    /// Evaluate this rule.
    #[must_use]
    pub fn check(&self, cells: &[Coordinate], ctx: &PlacementContext<'_>) -> bool {
        match self {
            PlacementRule::InBounds => cells.iter().all(|&c| ctx.dimensions.contains(c)),

            PlacementRule::NoUnit => cells
                .iter()
                .all(|&c| ctx.index.get(c).map_or(true, |t| t.unit.is_none())),

            PlacementRule::NoTerrain => cells
                .iter()
                .all(|&c| ctx.index.get(c).map_or(true, |t| t.terrain.is_none())),

            PlacementRule::AdjacentToAlly => adjacent_coordinates_of_constellation(cells)
                .into_iter()
                .any(|c| ctx.index.get(c).is_some_and(|t| t.is_anchor_for(ctx.player))),
        }
    }
}

impl std::fmt::Display for PlacementRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlacementRule::InBounds => "in bounds",
            PlacementRule::NoUnit => "no unit",
            PlacementRule::NoTerrain => "no terrain",
            PlacementRule::AdjacentToAlly => "adjacent to ally",
        };
        f.write_str(name)
    }
}

/// Everything a placement rule may read.
#[derive(Clone, Copy, Debug)]
pub struct PlacementContext<'a> {
    /// Board bounds.
    pub dimensions: BoardDimensions,
    /// Current tiles.
    pub index: &'a TileIndex<'a>,
    /// Player attempting the placement.
    pub player: PlayerId,
}

impl<'a> PlacementContext<'a> {
    /// Create a new context.
    #[must_use]
    pub fn new(dimensions: BoardDimensions, index: &'a TileIndex<'a>, player: PlayerId) -> Self {
        Self {
            dimensions,
            index,
            player,
        }
    }
}

/// Result of running the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// Every rule passed.
    Accepted,
    /// The named rule failed first.
    Rejected(PlacementRule),
}

impl PlacementOutcome {
    /// Check if the placement was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlacementOutcome::Accepted)
    }

    /// The failing rule, if any.
    #[must_use]
    pub fn rejected_by(&self) -> Option<PlacementRule> {
        match self {
            PlacementOutcome::Accepted => None,
            PlacementOutcome::Rejected(rule) => Some(*rule),
        }
    }
}

/// Ordered list of placement rules, all of which must pass.
///
/// ## Example
///
/// ```
/// use unit_constellations::board::{Board, BoardDimensions, Unit};
/// use unit_constellations::core::{Coordinate, PlayerId};
/// use unit_constellations::geometry::Constellation;
/// use unit_constellations::rules::{PlacementContext, PlacementPipeline};
///
/// let dims = BoardDimensions::new(5, 5);
/// let board = Board::empty(dims).with_unit(&[Coordinate::new(2, 2)], Unit::neutral_main_building());
/// let index = board.index();
/// let ctx = PlacementContext::new(dims, &index, PlayerId::new(0));
///
/// let pipeline = PlacementPipeline::standard();
/// let next_to = Constellation::new([(2, 3), (2, 4)]).unwrap();
/// let far_away = Constellation::new([(0, 0)]).unwrap();
///
/// assert!(pipeline.evaluate(&next_to, &ctx).is_accepted());
/// assert!(!pipeline.evaluate(&far_away, &ctx).is_accepted());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPipeline {
    rules: Vec<PlacementRule>,
}

impl Default for PlacementPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl PlacementPipeline {
    /// The standard rule order: bounds, units, terrain, adjacency.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_rules([
            PlacementRule::InBounds,
            PlacementRule::NoUnit,
            PlacementRule::NoTerrain,
            PlacementRule::AdjacentToAlly,
        ])
    }

    /// A pipeline with a custom rule list.
    #[must_use]
    pub fn with_rules(rules: impl IntoIterator<Item = PlacementRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[PlacementRule] {
        &self.rules
    }

    /// Run every rule, stopping at the first failure.
    #[must_use]
    pub fn evaluate(&self, constellation: &Constellation, ctx: &PlacementContext<'_>) -> PlacementOutcome {
        let cells = constellation.coords();
        for rule in &self.rules {
            if !rule.check(cells, ctx) {
                debug!(
                    player = %ctx.player,
                    rule = %rule,
                    cells = cells.len(),
                    "placement rejected"
                );
                return PlacementOutcome::Rejected(*rule);
            }
        }
        PlacementOutcome::Accepted
    }

    /// Run the pipeline on a raw coordinate list.
    ///
    /// Fails with `EmptyConstellation` when `cells` is empty.
    pub fn evaluate_cells(&self, cells: &[Coordinate], ctx: &PlacementContext<'_>) -> EngineResult<PlacementOutcome> {
        let constellation = Constellation::new(cells.iter().copied())?;
        Ok(self.evaluate(&constellation, ctx))
    }

    /// Every origin at which `shape`, transformed by `descriptor`, would be accepted.
    ///
    /// Origins are tried in row-major order over the whole board.
    #[must_use]
    pub fn legal_origins(
        &self,
        shape: &Constellation,
        descriptor: Transform,
        ctx: &PlacementContext<'_>,
    ) -> Vec<Coordinate> {
        let local = shape.transformed(descriptor).normalised();
        ctx.dimensions
            .coordinates()
            .filter(|&origin| self.evaluate(&local.translated_to(origin), ctx).is_accepted())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Terrain, Unit};
    use crate::core::EngineError;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn board() -> Board {
        Board::empty(BoardDimensions::new(6, 6))
            .with_unit(&[Coordinate::new(2, 2)], Unit::regular(P0))
            .with_unit(&[Coordinate::new(4, 4)], Unit::regular(P1))
            .with_terrain(Coordinate::new(2, 4), Terrain::Water)
    }

    fn shape(cells: &[(i32, i32)]) -> Constellation {
        Constellation::new(cells.iter().copied()).unwrap()
    }

    fn run(board: &Board, cells: &[(i32, i32)], player: PlayerId) -> PlacementOutcome {
        let index = board.index();
        let ctx = PlacementContext::new(board.dimensions(), &index, player);
        PlacementPipeline::standard().evaluate(&shape(cells), &ctx)
    }

    #[test]
    fn test_accepts_next_to_own_unit() {
        assert_eq!(run(&board(), &[(2, 3)], P0), PlacementOutcome::Accepted);
        assert_eq!(run(&board(), &[(1, 2), (0, 2)], P0), PlacementOutcome::Accepted);
    }

    #[test]
    fn test_rejects_out_of_bounds_first() {
        // Out of bounds and also overlapping nothing; bounds must be reported.
        assert_eq!(
            run(&board(), &[(2, 3), (2, 6)], P0),
            PlacementOutcome::Rejected(PlacementRule::InBounds)
        );
        assert_eq!(
            run(&board(), &[(-1, -1)], P0),
            PlacementOutcome::Rejected(PlacementRule::InBounds)
        );
    }

    #[test]
    fn test_rejects_overlap() {
        assert_eq!(
            run(&board(), &[(2, 2)], P0),
            PlacementOutcome::Rejected(PlacementRule::NoUnit)
        );
        assert_eq!(
            run(&board(), &[(3, 4), (4, 4)], P1),
            PlacementOutcome::Rejected(PlacementRule::NoUnit)
        );
        assert_eq!(
            run(&board(), &[(2, 3), (2, 4)], P0),
            PlacementOutcome::Rejected(PlacementRule::NoTerrain)
        );
    }

    #[test]
    fn test_rejects_without_ally() {
        // Next to an opponent's unit only.
        assert_eq!(
            run(&board(), &[(4, 3)], P0),
            PlacementOutcome::Rejected(PlacementRule::AdjacentToAlly)
        );
        // Diagonal contact does not count.
        assert_eq!(
            run(&board(), &[(3, 3)], P0),
            PlacementOutcome::Rejected(PlacementRule::AdjacentToAlly)
        );
    }

    #[test]
    fn test_main_building_anchors_its_owner_only() {
        let b = Board::empty(BoardDimensions::new(7, 7))
            .with_unit(&[Coordinate::new(3, 1)], Unit::main_building(P0));
        assert!(run(&b, &[(2, 1)], P0).is_accepted());
        assert_eq!(
            run(&b, &[(2, 1)], P1),
            PlacementOutcome::Rejected(PlacementRule::AdjacentToAlly)
        );
    }

    #[test]
    fn test_neutral_main_building_anchors_everyone() {
        let b = Board::empty(BoardDimensions::new(5, 5))
            .with_unit(&[Coordinate::new(2, 2)], Unit::neutral_main_building());
        assert!(run(&b, &[(1, 2)], P0).is_accepted());
        assert!(run(&b, &[(2, 3)], P1).is_accepted());
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(PlacementOutcome::Accepted.rejected_by().is_none());
        assert_eq!(
            PlacementOutcome::Rejected(PlacementRule::NoTerrain).rejected_by(),
            Some(PlacementRule::NoTerrain)
        );
    }

    #[test]
    fn test_evaluate_cells_rejects_empty_input() {
        let b = board();
        let index = b.index();
        let ctx = PlacementContext::new(b.dimensions(), &index, P0);
        assert!(matches!(
            PlacementPipeline::standard().evaluate_cells(&[], &ctx),
            Err(EngineError::EmptyConstellation)
        ));
        assert!(PlacementPipeline::standard()
            .evaluate_cells(&[Coordinate::new(2, 1)], &ctx)
            .unwrap()
            .is_accepted());
    }

    #[test]
    fn test_legal_origins_monomino() {
        let b = Board::empty(BoardDimensions::new(3, 3))
            .with_unit(&[Coordinate::new(1, 1)], Unit::regular(P0));
        let index = b.index();
        let ctx = PlacementContext::new(b.dimensions(), &index, P0);

        let origins = PlacementPipeline::standard().legal_origins(
            &shape(&[(0, 0)]),
            Transform::IDENTITY,
            &ctx,
        );
        assert_eq!(
            origins,
            vec![
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
                Coordinate::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_custom_rule_list() {
        let b = board();
        let index = b.index();
        let ctx = PlacementContext::new(b.dimensions(), &index, P0);
        let bounds_only = PlacementPipeline::with_rules([PlacementRule::InBounds]);

        assert_eq!(bounds_only.rules(), &[PlacementRule::InBounds]);
        assert!(bounds_only.evaluate(&shape(&[(0, 0)]), &ctx).is_accepted());
    }
}
