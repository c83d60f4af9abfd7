//! Game state module - the round state machine
//!
//! A round holds a hidden target row and the player's row, which starts as a
//! shuffled copy of the target. The player swaps positions and asks for checks
//! until every position matches (won) or concedes (gave up).
//!
//! ```text
//!            check() with all positions correct
//! Playing ──────────────────────────────────────▶ Won
//!    │
//!    └──────────── give_up() ──────────────────▶ GaveUp
//! ```
//!
//! Terminal phases reject swap/check/give-up with [`GameError::InvalidPhase`];
//! only [`GameState::start_round`] leaves them.

use tracing::{debug, info};

use crate::arrangement::{arrangement_from_slice, correct_count, same_multiset, Arrangement};
use crate::error::GameError;
use crate::palette::{select_colors, validate_item_count};
use crate::rng::SimpleRng;
use crate::scoring::ScoringRules;
use crate::shuffle::shuffle_permutation;
use crate::snapshot::RoundSnapshot;
use crate::types::{Color, Outcome, Phase};

/// Result of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub correct_count: usize,
    /// Checks made this round, including this one.
    pub check_count: u32,
    pub item_count: usize,
    pub won: bool,
}

/// Summary of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub target: Arrangement,
    pub score: u32,
    pub correct_count: usize,
    pub check_count: u32,
    pub item_count: usize,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    target: Arrangement,
    player: Arrangement,
    check_count: u32,
    phase: Phase,
    /// Correct count reported by the most recent check (or give-up) this round.
    last_correct: Option<usize>,
    /// Monotonic round id (increments on every new round).
    round_id: u32,
    seed: u32,
    rules: ScoringRules,
    rng: SimpleRng,
}

impl GameState {
    /// Create a game and deal its first round.
    pub fn new(seed: u32, item_count: usize) -> Result<Self, GameError> {
        Self::with_rules(seed, item_count, ScoringRules::canonical())
    }

    /// Create a game with custom scoring rules and deal its first round.
    pub fn with_rules(
        seed: u32,
        item_count: usize,
        rules: ScoringRules,
    ) -> Result<Self, GameError> {
        let mut state = Self {
            target: Arrangement::new(),
            player: Arrangement::new(),
            check_count: 0,
            phase: Phase::Playing,
            last_correct: None,
            round_id: 0,
            seed,
            rules,
            rng: SimpleRng::new(seed),
        };
        state.start_round(item_count)?;
        Ok(state)
    }

    /// Build a round from explicit rows (replays, puzzles, tests).
    ///
    /// Both rows must be non-empty, fit the palette size, and hold the same colors.
    /// The player row is taken as given, even if it already matches.
    pub fn from_arrangements(target: &[Color], player: &[Color]) -> Result<Self, GameError> {
        validate_item_count(target.len())?;
        if !same_multiset(target, player) {
            return Err(GameError::InvalidArrangement);
        }
        let target = arrangement_from_slice(target).ok_or(GameError::InvalidArrangement)?;
        let player = arrangement_from_slice(player).ok_or(GameError::InvalidArrangement)?;

        Ok(Self {
            target,
            player,
            check_count: 0,
            phase: Phase::Playing,
            last_correct: None,
            round_id: 1,
            seed: 1,
            rules: ScoringRules::canonical(),
            rng: SimpleRng::new(1),
        })
    }

    /// Replace the scoring rules; applies to rounds that have not ended yet.
    pub fn set_rules(&mut self, rules: ScoringRules) {
        self.rules = rules;
    }

    /// Deal a fresh round. Allowed from any phase.
    ///
    /// On an invalid item count the current round is left untouched.
    pub fn start_round(&mut self, item_count: usize) -> Result<(), GameError> {
        let target = select_colors(item_count, &mut self.rng)?;
        let player = shuffle_permutation(&target, &mut self.rng);

        self.target = target;
        self.player = player;
        self.check_count = 0;
        self.phase = Phase::Playing;
        self.last_correct = None;
        self.round_id = self.round_id.wrapping_add(1);

        debug!(round = self.round_id, item_count, "round started");
        Ok(())
    }

    /// Exchange two positions of the player row.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), GameError> {
        self.require_playing("swap")?;
        let len = self.player.len();
        if i == j || i >= len || j >= len {
            return Err(GameError::InvalidIndex { i, j, len });
        }
        self.player.swap(i, j);
        Ok(())
    }

    /// Compare the player row with the target; a full match wins the round.
    pub fn check(&mut self) -> Result<CheckResult, GameError> {
        self.require_playing("check")?;

        self.check_count = self.check_count.saturating_add(1);
        let correct = self.correct_count();
        self.last_correct = Some(correct);

        let won = correct == self.item_count();
        if won {
            self.phase = Phase::Won;
            info!(
                round = self.round_id,
                checks = self.check_count,
                score = self.rules.score(self.item_count(), self.check_count, true),
                "round won"
            );
        } else {
            debug!(round = self.round_id, correct, checks = self.check_count, "checked");
        }

        Ok(CheckResult {
            correct_count: correct,
            check_count: self.check_count,
            item_count: self.item_count(),
            won,
        })
    }

    /// Concede the round and reveal the target. Always scores 0.
    pub fn give_up(&mut self) -> Result<RoundResult, GameError> {
        self.require_playing("give up")?;
        self.phase = Phase::GaveUp;
        self.last_correct = Some(self.correct_count());
        info!(round = self.round_id, checks = self.check_count, "round given up");

        // Phase is terminal now, so a result always exists.
        self.round_result().ok_or(GameError::InvalidPhase {
            operation: "give up",
            phase: Phase::Playing,
        })
    }

    fn require_playing(&self, operation: &'static str) -> Result<(), GameError> {
        if self.phase == Phase::Playing {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn item_count(&self) -> usize {
        self.target.len()
    }

    pub fn check_count(&self) -> u32 {
        self.check_count
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Correct count from the last check this round, if any.
    pub fn last_correct(&self) -> Option<usize> {
        self.last_correct
    }

    pub fn player(&self) -> &[Color] {
        &self.player
    }

    /// The hidden target row.
    ///
    /// Presenters should use [`GameState::revealed_target`], which hides the
    /// row while the round is being played.
    pub fn target(&self) -> &[Color] {
        &self.target
    }

    /// The target row, once the round has ended.
    pub fn revealed_target(&self) -> Option<&[Color]> {
        self.phase.is_terminal().then_some(self.target.as_slice())
    }

    /// Positions where the player row currently matches the target.
    pub fn correct_count(&self) -> usize {
        correct_count(&self.player, &self.target)
    }

    /// Points for the round, once it has ended.
    pub fn score(&self) -> Option<u32> {
        self.phase.outcome().map(|outcome| {
            self.rules
                .score(self.item_count(), self.check_count, outcome.is_win())
        })
    }

    /// Summary of the round, once it has ended.
    pub fn round_result(&self) -> Option<RoundResult> {
        let outcome = self.phase.outcome()?;
        Some(RoundResult {
            outcome,
            target: self.target.clone(),
            score: self
                .rules
                .score(self.item_count(), self.check_count, outcome.is_win()),
            correct_count: self.correct_count(),
            check_count: self.check_count,
            item_count: self.item_count(),
        })
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.round_id = self.round_id;
        out.seed = self.seed;
        out.item_count = self.item_count();
        out.check_count = self.check_count;
        out.phase = self.phase;
        out.player.clear();
        out.player.extend(self.player.iter().copied());
        out.target = self.revealed_target().and_then(arrangement_from_slice);
        out.last_correct = self.last_correct;
        out.score = self.score();
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
