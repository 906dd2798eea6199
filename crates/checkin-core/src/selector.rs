//! Practice selector.
//!
//! Maps the four slider dimensions to a recommended practice. Pure and
//! stateless: identical inputs always yield the identical category, with no
//! I/O, clock, or randomness involved. Callers are responsible for keeping
//! inputs within [0, 100] (see [`DimensionScores::new`]).
//!
//! Three override rules are evaluated first, in order; if none fires, the
//! four weighted scores decide, with ties broken by position in
//! [`PracticeCategory::all`]. The thresholds are hard cutoffs by policy,
//! so the mapping is intentionally discontinuous at the boundaries.

use crate::types::{DimensionScores, PracticeCategory};

// Override thresholds. Inclusive comparisons are part of the contract:
// calm == 75 fires Override A, calm == 74 falls through to scoring.
const ANXIETY_OVERRIDE: u8 = 75;
const EXHAUSTION_OVERRIDE: u8 = 75;
const EXHAUSTION_CALM_CEILING: u8 = 60;
const RUMINATION_OVERRIDE: u8 = 80;
const RUMINATION_CALM_CEILING: u8 = 65;

/// Weighted scores for each practice, prior to final selection.
///
/// Exposed for observability and tests; [`select`] is the authoritative
/// entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PracticeScores {
    pub calm: f64,
    pub ground: f64,
    pub activate: f64,
    pub deep_rest: f64,
}

impl PracticeScores {
    /// Scores paired with their categories, in tie-break order.
    pub fn ranked(&self) -> [(PracticeCategory, f64); 4] {
        [
            (PracticeCategory::Calm, self.calm),
            (PracticeCategory::Ground, self.ground),
            (PracticeCategory::Activate, self.activate),
            (PracticeCategory::DeepRest, self.deep_rest),
        ]
    }
}

/// Compute the four weighted scores from the raw dimension values.
///
/// Each dimension contributes its raw value as the magnitude of the
/// right-pole trait (scattered, anxious, in-head, exhausted). Weight
/// coefficients are fixed policy constants, not tunables.
pub fn score_breakdown(scores: &DimensionScores) -> PracticeScores {
    let scattered = f64::from(scores.grounded);
    let anxious = f64::from(scores.calm);
    let in_head = f64::from(scores.present);
    let exhausted = f64::from(scores.energized);

    PracticeScores {
        calm: 0.50 * anxious + 0.25 * scattered + 0.15 * in_head + 0.10 * exhausted,
        ground: 0.55 * in_head + 0.25 * scattered + 0.10 * anxious + 0.10 * exhausted,
        activate: 0.70 * exhausted + 0.20 * scattered - 0.30 * anxious + 0.10 * (100.0 - in_head),
        deep_rest: 0.75 * exhausted + 0.25 * (100.0 - anxious),
    }
}

/// Select the recommended practice for a set of dimension scores.
///
/// Evaluated in strict order, first match wins:
///
/// 1. Acute anxiety (`calm >= 75`) always gets the calming practice.
/// 2. High exhaustion without high anxiety (`energized >= 75`,
///    `calm <= 60`) gets deep rest rather than stimulation.
/// 3. Severe rumination without acute anxiety (`present >= 80`,
///    `calm <= 65`) gets grounding.
/// 4. Otherwise the highest weighted score wins; on an exact tie the
///    category earliest in [`PracticeCategory::all`] is kept.
pub fn select(scores: &DimensionScores) -> PracticeCategory {
    if scores.calm >= ANXIETY_OVERRIDE {
        return PracticeCategory::Calm;
    }
    if scores.energized >= EXHAUSTION_OVERRIDE && scores.calm <= EXHAUSTION_CALM_CEILING {
        return PracticeCategory::DeepRest;
    }
    if scores.present >= RUMINATION_OVERRIDE && scores.calm <= RUMINATION_CALM_CEILING {
        return PracticeCategory::Ground;
    }

    let breakdown = score_breakdown(scores);
    let mut best = PracticeCategory::Calm;
    let mut best_score = f64::NEG_INFINITY;
    for (category, score) in breakdown.ranked() {
        if score > best_score {
            best = category;
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(grounded: u8, calm: u8, present: u8, energized: u8) -> PracticeCategory {
        select(&DimensionScores::new(grounded, calm, present, energized).unwrap())
    }

    #[test]
    fn test_deterministic() {
        for step in [0u8, 25, 50, 75, 100] {
            let scores = DimensionScores::new(step, 100 - step, step, 100 - step).unwrap();
            assert_eq!(select(&scores), select(&scores));
        }
    }

    #[test]
    fn test_anxiety_override_beats_scoring() {
        // With energized at 100, scoring alone strongly favors deep rest.
        assert_eq!(run(0, 75, 0, 100), PracticeCategory::Calm);
        assert_eq!(run(0, 74, 0, 100), PracticeCategory::DeepRest);
    }

    #[test]
    fn test_anxiety_override_at_threshold() {
        assert_eq!(run(0, 75, 0, 0), PracticeCategory::Calm);
        assert_eq!(run(0, 100, 100, 100), PracticeCategory::Calm);
    }

    #[test]
    fn test_exhaustion_override_both_sides() {
        // calm <= 60 and energized >= 75: override fires.
        assert_eq!(run(100, 60, 50, 75), PracticeCategory::DeepRest);
        // calm one above the ceiling: falls to scoring, where calm wins.
        assert_eq!(run(100, 61, 50, 75), PracticeCategory::Calm);
        // energized one below the threshold: falls to scoring, calm wins.
        assert_eq!(run(100, 60, 50, 74), PracticeCategory::Calm);
    }

    #[test]
    fn test_exhaustion_override_requires_low_anxiety() {
        // energized >= 75 but calm = 61: Override B must not fire, and with
        // present at 85 the rumination override takes it instead. If the
        // calm ceiling were ignored this would return DeepRest.
        assert_eq!(run(0, 61, 85, 80), PracticeCategory::Ground);
        // Same shape with calm back at 60: Override B fires before C.
        assert_eq!(run(0, 60, 85, 80), PracticeCategory::DeepRest);
    }

    #[test]
    fn test_rumination_override_both_sides() {
        assert_eq!(run(0, 60, 85, 0), PracticeCategory::Ground);
        // present >= 80, calm at the 65 ceiling: fires.
        assert_eq!(run(0, 65, 80, 100), PracticeCategory::Ground);
        // calm one above the ceiling: scoring picks deep rest.
        assert_eq!(run(0, 66, 80, 100), PracticeCategory::DeepRest);
        // present one below the threshold: scoring picks deep rest.
        assert_eq!(run(0, 65, 79, 100), PracticeCategory::DeepRest);
    }

    #[test]
    fn test_all_zero_scores_deep_rest() {
        // calm/ground/activate-from-raw terms are all zero; the two
        // complement terms leave activate at 10 and deep rest at 25.
        let breakdown = score_breakdown(&DimensionScores::new(0, 0, 0, 0).unwrap());
        assert_eq!(breakdown.calm, 0.0);
        assert_eq!(breakdown.ground, 0.0);
        assert_eq!(breakdown.activate, 10.0);
        assert_eq!(breakdown.deep_rest, 25.0);
        assert_eq!(run(0, 0, 0, 0), PracticeCategory::DeepRest);
    }

    #[test]
    fn test_tie_break_keeps_earliest_category() {
        // grounded=40, calm=20, present=0, energized=0:
        // calm score   = 0.50*20 + 0.25*40 = 20
        // deep rest    = 0.25*(100 - 20)   = 20
        // Every contributing product is exact in f64, so the scores tie
        // exactly and Calm (earlier in selection order) must win.
        let scores = DimensionScores::new(40, 20, 0, 0).unwrap();
        let breakdown = score_breakdown(&scores);
        assert_eq!(breakdown.calm, 20.0);
        assert_eq!(breakdown.deep_rest, 20.0);
        assert!(breakdown.ground < 20.0);
        assert!(breakdown.activate < 20.0);
        assert_eq!(select(&scores), PracticeCategory::Calm);
    }

    #[test]
    fn test_monotonic_sensitivity_to_anxiety() {
        // Raising calm (anxious) alone raises the calm score and lowers
        // the activate score.
        let low = score_breakdown(&DimensionScores::new(30, 20, 30, 30).unwrap());
        let high = score_breakdown(&DimensionScores::new(30, 40, 30, 30).unwrap());
        assert!(high.calm > low.calm);
        assert!(high.activate < low.activate);
    }

    #[test]
    fn test_total_over_coarse_grid() {
        // The selector must terminate and stay deterministic across the
        // whole input space; sample a coarse grid of 625 combinations.
        let steps = [0u8, 25, 50, 75, 100];
        for g in steps {
            for c in steps {
                for p in steps {
                    for e in steps {
                        let scores = DimensionScores::new(g, c, p, e).unwrap();
                        assert_eq!(select(&scores), select(&scores));
                    }
                }
            }
        }
    }
}
