//! A single match: board, participants, deck and turn bookkeeping.
//!
//! `Match` drives the `Created → Started → Finished` lifecycle on top of the
//! pure rule pipelines. Every accepted placement
//!
//! 1. occupies the placed cells and reveals the vision disc around them,
//! 2. adds the card's points to the player's bonus,
//! 3. advances the turn counter,
//! 4. runs a scoring pass if the cadence asks for one,
//! 5. ends the match on threshold or turn limit,
//! 6. passes the turn if the cadence asks for it.
//!
//! Rejected placements leave the match untouched.

use tracing::{debug, info};

use super::cadence::TurnCadence;
use super::participant::Participant;
use super::status::{GameResult, MatchStatus};
use crate::board::{Board, Unit};
use crate::cards::{standard_pool, Card, Deck};
use crate::core::{Coordinate, EngineConfig, EngineError, EngineResult, GameRng, PlayerId, PlayerMap};
use crate::geometry::{reveal_area, Transform};
use crate::rules::{
    total_points, PlacementContext, PlacementOutcome, PlacementPipeline, RuleEvaluation, ScoringPipeline,
};

/// Copies of each standard card in a default deck.
const DEFAULT_DECK_COPIES: usize = 3;

/// What a call to `Match::place` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementReport {
    /// Accepted, or the first rule that failed.
    pub outcome: PlacementOutcome,
    /// Cells now holding the player's units. Empty on rejection.
    pub occupied: Vec<Coordinate>,
    /// Cells revealed by the placement, clipped to the board.
    pub revealed: Vec<Coordinate>,
    /// Scoring pass run after the placement, if the cadence asked for one.
    pub evaluations: Vec<RuleEvaluation>,
}

impl PlacementReport {
    fn rejected(outcome: PlacementOutcome) -> Self {
        Self {
            outcome,
            occupied: Vec::new(),
            revealed: Vec::new(),
            evaluations: Vec::new(),
        }
    }

    /// Check if the placement was applied.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_accepted()
    }
}

/// A running match.
///
/// ## Example
///
/// ```
/// use unit_constellations::core::{EngineConfig, PlayerId};
/// use unit_constellations::game::{MatchBuilder, MatchStatus};
///
/// let mut game = MatchBuilder::new(EngineConfig::new(2).with_seed(3)).build().unwrap();
/// assert_eq!(game.status(), MatchStatus::Created);
///
/// game.start().unwrap();
/// assert_eq!(game.active_player(), PlayerId::new(0));
/// assert!(game.draw_card().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Match {
    config: EngineConfig,
    board: Board,
    participants: PlayerMap<Participant>,
    deck: Deck,
    placement: PlacementPipeline,
    scoring: ScoringPipeline,
    cadence: TurnCadence,
    active: PlayerId,
    turn: u32,
    status: MatchStatus,
    result: Option<GameResult>,
}

impl Match {
    /// Move from `Created` to `Started`.
    pub fn start(&mut self) -> EngineResult<()> {
        if self.status != MatchStatus::Created {
            return Err(EngineError::MatchAlreadyStarted);
        }
        self.status = MatchStatus::Started;
        info!(
            players = self.participants.player_count(),
            dimensions = %self.board.dimensions(),
            "match started"
        );
        Ok(())
    }

    /// Place `card` for `player`, transformed by `descriptor` and anchored at `origin`.
    ///
    /// Misuse (wrong status, unknown or inactive player) is an error.
    /// A placement that breaks a rule is not: it comes back as a report with
    /// a `Rejected` outcome and the match is unchanged.
    pub fn place(
        &mut self,
        player: PlayerId,
        card: &Card,
        descriptor: Transform,
        origin: Coordinate,
    ) -> EngineResult<PlacementReport> {
        self.ensure_can_act(player)?;

        let placed = card.shape.placed_at(descriptor, origin);
        let outcome = {
            let index = self.board.index();
            let ctx = PlacementContext::new(self.board.dimensions(), &index, player);
            self.placement.evaluate(&placed, &ctx)
        };
        if !outcome.is_accepted() {
            return Ok(PlacementReport::rejected(outcome));
        }

        let occupied = placed.coords().to_vec();
        let revealed = reveal_area(&occupied, self.config.vision_radius, self.board.dimensions());
        self.board = self
            .board
            .with_unit(&occupied, Unit::regular(player))
            .revealed(&revealed);
        self.participants[player] = self.participants[player].with_bonus(card.points);
        self.turn += 1;
        debug!(
            player = %player,
            turn = self.turn,
            cells = occupied.len(),
            revealed = revealed.len(),
            bonus = card.points,
            "placement accepted"
        );

        let evaluations = if self.cadence.should_evaluate(self.turn) {
            let evaluations = self.evaluate(player);
            let score = total_points(&evaluations);
            self.participants[player] = self.participants[player].with_score(score);
            debug!(player = %player, score, total = self.participants[player].total(), "scored");
            evaluations
        } else {
            Vec::new()
        };

        if self.participants[player].total() >= self.config.score_threshold {
            self.finish(GameResult::Winner(player));
        } else if self.turn >= self.config.max_turns {
            self.finish(GameResult::Draw);
        } else if self.cadence.should_change_active_player(self.turn) {
            self.active = self.active.next(self.participants.player_count());
        }

        Ok(PlacementReport {
            outcome,
            occupied,
            revealed,
            evaluations,
        })
    }

    /// Scoring pass for `player` on the current board. Does not update scores.
    #[must_use]
    pub fn evaluate(&self, player: PlayerId) -> Vec<RuleEvaluation> {
        self.scoring.evaluate(player, &self.board.index())
    }

    /// Every origin where `card` under `descriptor` would be accepted for `player`.
    #[must_use]
    pub fn legal_origins(&self, player: PlayerId, card: &Card, descriptor: Transform) -> Vec<Coordinate> {
        let index = self.board.index();
        let ctx = PlacementContext::new(self.board.dimensions(), &index, player);
        self.placement.legal_origins(&card.shape, descriptor, &ctx)
    }

    /// Draw the next card from the shared deck.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    fn ensure_can_act(&self, player: PlayerId) -> EngineResult<()> {
        match self.status {
            MatchStatus::Created => return Err(EngineError::MatchNotStarted),
            MatchStatus::Finished => return Err(EngineError::MatchFinished),
            MatchStatus::Started => {}
        }
        if !self.participants.contains(player) {
            return Err(EngineError::UnknownPlayer(player));
        }
        if player != self.active {
            return Err(EngineError::NotActivePlayer {
                expected: self.active,
                actual: player,
            });
        }
        Ok(())
    }

    fn finish(&mut self, result: GameResult) {
        self.status = MatchStatus::Finished;
        self.result = Some(result);
        info!(turn = self.turn, result = ?result, "match finished");
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn participants(&self) -> &PlayerMap<Participant> {
        &self.participants
    }

    /// Participant for `player`, `None` if out of range.
    #[must_use]
    pub fn participant(&self, player: PlayerId) -> Option<&Participant> {
        self.participants.get(player)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Accepted placements so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// `Some` once the match is finished.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }
}

/// Builder for creating a `Match`.
///
/// Unset parts fall back to defaults: a board generated from the config,
/// the standard pipelines, the default cadence and a shuffled standard deck.
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    config: EngineConfig,
    board: Option<Board>,
    cards: Option<Vec<Card>>,
    placement: PlacementPipeline,
    scoring: Option<ScoringPipeline>,
    cadence: TurnCadence,
}

impl MatchBuilder {
    /// Start a builder with the standard pipelines and cadence.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            board: None,
            cards: None,
            placement: PlacementPipeline::standard(),
            scoring: None,
            cadence: TurnCadence::default(),
        }
    }

    /// Start from an existing board instead of generating one.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Cards for the deck, shuffled with the match seed.
    #[must_use]
    pub fn cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = Some(cards);
        self
    }

    /// Replace the placement rules.
    #[must_use]
    pub fn placement(mut self, pipeline: PlacementPipeline) -> Self {
        self.placement = pipeline;
        self
    }

    /// Replace the scoring rules.
    #[must_use]
    pub fn scoring(mut self, pipeline: ScoringPipeline) -> Self {
        self.scoring = Some(pipeline);
        self
    }

    /// When turns pass and when scoring runs.
    #[must_use]
    pub fn cadence(mut self, cadence: TurnCadence) -> Self {
        self.cadence = cadence;
        self
    }

    /// Build the match in the `Created` state.
    pub fn build(self) -> EngineResult<Match> {
        self.config.validate()?;
        let rng = GameRng::new(self.config.seed);

        let board = match self.board {
            Some(board) => board,
            None => Board::generate(&self.config, &rng)?,
        };
        let cards = match self.cards {
            Some(cards) => cards,
            None => standard_pool(DEFAULT_DECK_COPIES)?,
        };
        let scoring = self
            .scoring
            .unwrap_or_else(|| ScoringPipeline::standard(&self.config));
        let participants = PlayerMap::new(self.config.player_count, Participant::new);

        debug!(seed = self.config.seed, players = self.config.player_count, "match built");
        Ok(Match {
            board,
            participants,
            deck: Deck::shuffled(cards, &rng),
            placement: self.placement,
            scoring,
            cadence: self.cadence,
            active: PlayerId::new(0),
            turn: 0,
            status: MatchStatus::Created,
            result: None,
            config: self.config,
        })
    }
}
