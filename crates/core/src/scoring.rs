//! Scoring module - points awarded when a round ends
//!
//! Two rule sets exist for this game:
//! - **Canonical** (default): checks are measured against an expected number
//!   (`2 * items`). Every check beyond it costs points, every check saved earns
//!   a bonus, and a won round never scores below 10.
//! - **Flat**: every check costs points, the saved-checks bonus still applies,
//!   and the floor is 0.
//!
//! Both are instances of [`ScoringRules`], so either can be selected (or tuned)
//! without touching the state machine. Giving up always scores 0.

use crate::types::{
    BONUS_PER_CHECK, EXPECTED_CHECKS_PER_ITEM, PENALTY_PER_CHECK, POINTS_PER_ITEM,
    WIN_SCORE_FLOOR,
};

/// Which checks incur the per-check penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenaltyBasis {
    /// Only checks beyond the expected number.
    ExcessChecks,
    /// Every check made.
    EveryCheck,
}

/// Tunable scoring constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoringRules {
    pub points_per_item: u32,
    pub expected_checks_per_item: u32,
    pub penalty_per_check: u32,
    pub bonus_per_check: u32,
    /// Minimum score of a won round.
    pub floor: u32,
    pub penalty_basis: PenaltyBasis,
}

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub expected_checks: u32,
    pub penalty: u32,
    pub bonus: u32,
    pub total: u32,
}

impl ScoringRules {
    /// Expected-checks-relative rules with a floor of 10.
    pub const fn canonical() -> Self {
        Self {
            points_per_item: POINTS_PER_ITEM,
            expected_checks_per_item: EXPECTED_CHECKS_PER_ITEM,
            penalty_per_check: PENALTY_PER_CHECK,
            bonus_per_check: BONUS_PER_CHECK,
            floor: WIN_SCORE_FLOOR,
            penalty_basis: PenaltyBasis::ExcessChecks,
        }
    }

    /// Flat per-check penalty, 10 points per item, no floor.
    pub const fn flat() -> Self {
        Self {
            points_per_item: 10,
            expected_checks_per_item: EXPECTED_CHECKS_PER_ITEM,
            penalty_per_check: PENALTY_PER_CHECK,
            bonus_per_check: BONUS_PER_CHECK,
            floor: 0,
            penalty_basis: PenaltyBasis::EveryCheck,
        }
    }

    /// Parse a preset name (`canonical` or `flat`).
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "canonical" | "default" => Some(Self::canonical()),
            "flat" | "legacy" => Some(Self::flat()),
            _ => None,
        }
    }

    /// Full breakdown for a round. A lost round yields an all-zero breakdown.
    pub fn breakdown(&self, item_count: usize, check_count: u32, won: bool) -> ScoreBreakdown {
        if !won {
            return ScoreBreakdown::default();
        }

        let items = item_count as i64;
        let checks = check_count as i64;
        let base = items * self.points_per_item as i64;
        let expected = items * self.expected_checks_per_item as i64;

        let penalized_checks = match self.penalty_basis {
            PenaltyBasis::ExcessChecks => (checks - expected).max(0),
            PenaltyBasis::EveryCheck => checks,
        };
        let penalty = penalized_checks * self.penalty_per_check as i64;
        let bonus = (expected - checks).max(0) * self.bonus_per_check as i64;

        let total = (base + bonus - penalty).max(self.floor as i64).max(0);

        ScoreBreakdown {
            base: clamp_u32(base),
            expected_checks: clamp_u32(expected),
            penalty: clamp_u32(penalty),
            bonus: clamp_u32(bonus),
            total: clamp_u32(total),
        }
    }

    pub fn score(&self, item_count: usize, check_count: u32, won: bool) -> u32 {
        self.breakdown(item_count, check_count, won).total
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Score a round with the canonical rules.
pub fn score(item_count: usize, check_count: u32, won: bool) -> u32 {
    ScoringRules::canonical().score(item_count, check_count, won)
}

fn clamp_u32(v: i64) -> u32 {
    v.clamp(0, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_give_up_scores_zero() {
        assert_eq!(score(3, 0, false), 0);
        assert_eq!(score(10, 50, false), 0);
        assert_eq!(ScoringRules::flat().score(5, 1, false), 0);
    }

    #[test]
    fn test_canonical_bonus_for_fast_win() {
        // 3 items, 1 check: base 60, expected 6, bonus 5 * 10.
        let b = ScoringRules::canonical().breakdown(3, 1, true);
        assert_eq!(b.base, 60);
        assert_eq!(b.expected_checks, 6);
        assert_eq!(b.bonus, 50);
        assert_eq!(b.penalty, 0);
        assert_eq!(b.total, 110);
    }

    #[test]
    fn test_canonical_exact_expected_checks() {
        assert_eq!(score(4, 8, true), 80);
    }

    #[test]
    fn test_canonical_penalty_for_slow_win() {
        // 3 items, 10 checks: 60 - (10 - 6) * 5 = 40.
        assert_eq!(score(3, 10, true), 40);
    }

    #[test]
    fn test_canonical_floor() {
        // 3 items, 30 checks: 60 - 24 * 5 < 10.
        assert_eq!(score(3, 30, true), 10);
        for checks in 0..200 {
            for items in 1..=10 {
                assert!(score(items, checks, true) >= 10);
            }
        }
    }

    #[test]
    fn test_flat_rules_match_per_check_penalty() {
        let flat = ScoringRules::flat();
        // 3 items, 1 check: 30 + (6 - 1) * 10 - 1 * 5.
        assert_eq!(flat.score(3, 1, true), 75);
        // 3 items, 6 checks: 30 + 0 - 30.
        assert_eq!(flat.score(3, 6, true), 0);
        // Large check counts floor at zero instead of going negative.
        assert_eq!(flat.score(3, 100, true), 0);
    }

    #[test]
    fn test_presets_parse() {
        assert_eq!(
            ScoringRules::from_preset("Canonical"),
            Some(ScoringRules::canonical())
        );
        assert_eq!(ScoringRules::from_preset("flat"), Some(ScoringRules::flat()));
        assert_eq!(ScoringRules::from_preset("other"), None);
        assert_eq!(ScoringRules::default(), ScoringRules::canonical());
    }
}
