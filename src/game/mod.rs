//! Match flow on top of the rule pipelines.
//!
//! ## Key Types
//!
//! - `Participant`: score and bonus points for one player
//! - `TurnCadence`: injectable predicates for turn passing and scoring
//! - `MatchStatus` / `GameResult`: lifecycle and outcome
//! - `Match` / `MatchBuilder`: the stateful match driven by placements

mod cadence;
mod matches;
mod participant;
mod status;

pub use cadence::TurnCadence;
pub use matches::{Match, MatchBuilder, PlacementReport};
pub use participant::Participant;
pub use status::{GameResult, MatchStatus};
