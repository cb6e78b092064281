//! Match lifecycle.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// `Created → Started → Finished`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    Created,
    Started,
    Finished,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchStatus::Created => "created",
            MatchStatus::Started => "started",
            MatchStatus::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player reached the score threshold.
    Winner(PlayerId),
    /// The turn limit ran out first.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}
