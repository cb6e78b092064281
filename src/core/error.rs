//! Engine error types.
//!
//! Only precondition failures and match-flow misuse are errors.
//! A rejected placement is a normal outcome and is reported through
//! `PlacementOutcome`, never through `EngineError`.

use thiserror::Error;

use super::player::PlayerId;

/// Errors returned by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A constellation needs at least one coordinate.
    #[error("constellation must contain at least one coordinate")]
    EmptyConstellation,

    /// Rotation is expressed in quarter turns and must be 0..=3.
    #[error("rotation must be 0, 1, 2 or 3 quarter turns, got {0}")]
    InvalidRotation(u8),

    /// A tile key that is not of the form `"{row}_{col}"`.
    #[error("invalid tile id {0:?}")]
    InvalidTileId(String),

    /// A card string that could not be decoded.
    #[error("invalid card {encoded:?}: {reason}")]
    InvalidCard {
        /// The offending encoded card.
        encoded: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Configuration values out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The match has not been started yet.
    #[error("match has not started")]
    MatchNotStarted,

    /// `start` was called on a match that already left the created state.
    #[error("match has already started")]
    MatchAlreadyStarted,

    /// The match is over; no further placements are accepted.
    #[error("match is finished")]
    MatchFinished,

    /// A player acted out of turn.
    #[error("{actual} acted but it is {expected}'s turn")]
    NotActivePlayer {
        /// Player whose turn it is.
        expected: PlayerId,
        /// Player who tried to act.
        actual: PlayerId,
    },

    /// Player id outside the configured player count.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    /// Board snapshot encoding or decoding failed.
    #[error("board snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
