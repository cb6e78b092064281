//! Scoring pipeline verification.
//!
//! Exercises the standard scoring rules on generated and hand-built boards:
//! idempotence, the diagonal walk cap and fulfillment reporting.

use unit_constellations::board::{Board, BoardDimensions, Terrain, Unit};
use unit_constellations::core::{Coordinate, EngineConfig, GameRng, PlayerId};
use unit_constellations::rules::{total_points, RuleEvaluation, ScoringPipeline, ScoringRule};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn open_board(rows: u32, cols: u32) -> Board {
    let dims = BoardDimensions::new(rows, cols);
    let all: Vec<_> = dims.coordinates().collect();
    Board::empty(dims).revealed(&all)
}

/// A generated board with every free cell randomly claimed by one of two
/// players or left empty.
fn scattered_board(seed: u64, size: u32) -> Board {
    let config = EngineConfig::new(2)
        .with_dimensions(BoardDimensions::new(size, size))
        .with_terrain_density(0.2)
        .with_seed(seed);
    let rng = GameRng::new(seed);
    let mut board = Board::generate(&config, &rng).unwrap();
    let mut claims = rng.for_context("claims");

    let free: Vec<Coordinate> = board.tiles().filter(|t| t.is_free()).map(|t| t.coordinate).collect();
    for c in free {
        match claims.gen_range_usize(0..3) {
            0 => board = board.with_unit(&[c], Unit::regular(P0)),
            1 => board = board.with_unit(&[c], Unit::regular(P1)),
            _ => {}
        }
    }
    let all: Vec<_> = board.dimensions().coordinates().collect();
    board.revealed(&all)
}

// =============================================================================
// Purity
// =============================================================================

/// Test that scoring the same board twice gives identical evaluations.
#[test]
fn test_scoring_is_idempotent() {
    let pipeline = ScoringPipeline::standard(&EngineConfig::default());
    for seed in 0..10 {
        let board = scattered_board(seed, 9);
        let index = board.index();
        for player in [P0, P1] {
            let first = pipeline.evaluate(player, &index);
            let second = pipeline.evaluate(player, &index);
            assert_eq!(first, second, "seed {seed}");
        }
    }
}

/// Test that a fresh index over the same board scores the same.
#[test]
fn test_scoring_independent_of_index_instance() {
    let pipeline = ScoringPipeline::standard(&EngineConfig::default());
    let board = scattered_board(42, 8);
    assert_eq!(pipeline.evaluate(P0, &board.index()), pipeline.evaluate(P0, &board.clone().index()));
}

/// Test that rule order changes display order only.
#[test]
fn test_rule_order_does_not_change_total() {
    let config = EngineConfig::default();
    let standard = ScoringPipeline::standard(&config);
    let mut reversed_rules = standard.rules().to_vec();
    reversed_rules.reverse();
    let reversed = ScoringPipeline::with_rules(reversed_rules);

    for seed in 0..5 {
        let board = scattered_board(seed, 10);
        let index = board.index();
        assert_eq!(standard.score(P0, &index), reversed.score(P0, &index));
        let a: Vec<RuleEvaluation> = standard.evaluate(P0, &index);
        let mut b: Vec<RuleEvaluation> = reversed.evaluate(P0, &index);
        b.reverse();
        assert_eq!(a, b);
    }
}

// =============================================================================
// Diagonal walk cap
// =============================================================================

/// Test that on boards smaller than the step cap, the cap never changes
/// the result.
#[test]
fn test_cap_is_invisible_below_board_size() {
    let capped = ScoringRule::diagonal_streak();
    let uncapped = ScoringRule::DiagonalStreak {
        min_length: 3,
        walk_limit: u32::MAX,
    };
    for seed in 0..20 {
        let board = scattered_board(seed, 12);
        let index = board.index();
        let a = capped.evaluate(P0, &index);
        let b = uncapped.evaluate(P0, &index);
        assert_eq!(a.points, b.points, "seed {seed}");
        assert_eq!(a.fulfillments, b.fulfillments, "seed {seed}");
    }
}

/// Test that a full anti-diagonal shorter than the cap forms one chain.
#[test]
fn test_full_board_diagonal() {
    let size = 15;
    let run: Vec<Coordinate> = (0..size).map(|i| Coordinate::new(size - 1 - i, i)).collect();
    let board = open_board(size as u32, size as u32).with_unit(&run, Unit::regular(P0));

    let eval = ScoringRule::diagonal_streak().evaluate(P0, &board.index());
    assert_eq!(eval.points, 1);
    assert_eq!(eval.fulfillments.len(), 1);
    assert_eq!(eval.fulfillments[0].len(), size as usize);
}

/// Test that no tile is ever counted in two chains.
#[test]
fn test_chains_are_disjoint() {
    let rule = ScoringRule::DiagonalStreak {
        min_length: 1,
        walk_limit: 3,
    };
    for seed in 0..10 {
        let board = scattered_board(seed, 10);
        let eval = rule.evaluate(P0, &board.index());
        let mut cells: Vec<Coordinate> = eval.cells().collect();
        let total = cells.len();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), total, "seed {seed}");
        // With min length 1, every owned tile is in exactly one chain.
        let owned = board.tiles().filter(|t| t.is_owned_by(P0)).count();
        assert_eq!(total, owned, "seed {seed}");
    }
}

// =============================================================================
// Fulfillments
// =============================================================================

/// Test that fulfillments point at exactly the cells that earned points.
#[test]
fn test_fulfillment_cells() {
    let board = open_board(4, 4)
        .with_terrain(Coordinate::new(0, 0), Terrain::Tree)
        .with_terrain(Coordinate::new(0, 3), Terrain::Tree)
        .with_terrain(Coordinate::new(3, 3), Terrain::Water)
        .with_unit(&[Coordinate::new(0, 1), Coordinate::new(0, 2)], Unit::regular(P0));

    let pipeline = ScoringPipeline::with_rules([
        ScoringRule::reward_near(Terrain::Tree),
        ScoringRule::reward_near(Terrain::Water),
    ]);
    let evals = pipeline.evaluate(P0, &board.index());

    assert_eq!(
        evals[0].fulfillments,
        vec![vec![Coordinate::new(0, 0)], vec![Coordinate::new(0, 3)]]
    );
    assert!(!evals[1].is_fulfilled());
    assert_eq!(total_points(&evals), 2);
}

/// Test the standard pipeline on a small hand-built position.
#[test]
fn test_standard_pipeline_totals() {
    // Row 0:  W  P  .
    // Row 1:  P  .  P
    // Row 2:  S  P  .
    let board = open_board(3, 3)
        .with_terrain(Coordinate::new(0, 0), Terrain::Water)
        .with_terrain(Coordinate::new(2, 0), Terrain::Stone)
        .with_unit(
            &[Coordinate::new(0, 1), Coordinate::new(1, 0), Coordinate::new(1, 2), Coordinate::new(2, 1)],
            Unit::regular(P0),
        );
    let pipeline = ScoringPipeline::standard(&EngineConfig::default());
    let evals = pipeline.evaluate(P0, &board.index());
    let points: Vec<i32> = evals.iter().map(|e| e.points).collect();

    // water +1, tree 0, stone -1, holes (1,1), (0,2), (2,2), diagonal 0
    assert_eq!(points, vec![1, 0, -1, 3, 0]);
    assert_eq!(total_points(&evals), 3);
}
