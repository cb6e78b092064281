//! Rule pipelines.
//!
//! Two independent pipelines consume the geometry and board layers:
//! - `PlacementPipeline`: ordered predicates a candidate placement must all pass
//! - `ScoringPipeline`: ordered evaluators that award points and report
//!   which cells fulfilled each rule
//!
//! Rules are closed enums carrying their own parameters, dispatched through
//! a single `check` / `evaluate` entry point per rule kind.

mod placement;
mod scoring;

pub use placement::{PlacementContext, PlacementOutcome, PlacementPipeline, PlacementRule};
pub use scoring::{total_points, Polarity, RuleEvaluation, ScoringPipeline, ScoringRule};
