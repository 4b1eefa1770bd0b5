//! Variant T: 4 antecedents (signed wind speed, humidity, burning
//! neighbors, temperature), 8 probability levels, 720 rules, per
//! `spec.md` §4.4.
//!
//! Unlike Variant S's explicit per-combination rule table, the reference
//! (`examples/original_source/forest_fire_model/app/models/fuzzy_logic.py`)
//! generates its 720 rules programmatically from an additive weighted
//! score over the four antecedent categories, with cutoffs mapping the sum
//! to one of 8 levels. This module reproduces that scoring function rather
//! than enumerating the product as a literal table — 4 categories of
//! weights and 8 cutoffs fully determine all 720 rules.

use super::{fuzzify, mamdani_centroid, MembershipFn};

const WIND_UNIVERSE: (f32, f32) = (-30.0, 30.0);
const HUMIDITY_UNIVERSE: (f32, f32) = (0.0, 100.0);
const NEIGHBORS_UNIVERSE: (f32, f32) = (0.0, 8.0);
const TEMPERATURE_UNIVERSE: (f32, f32) = (-20.0, 50.0);
const FIRE_PROB_UNIVERSE: (i32, i32) = (0, 100);

/// wind categories, signed universe, head-on (negative) through calm to
/// fair (tailwind, positive): head storm, head strong, head moderate,
/// head light, calm, fair light, fair moderate, fair strong, fair storm.
const WIND: [MembershipFn; 9] = [
    MembershipFn::Trap(-30.0, -30.0, -25.0, -22.0),
    MembershipFn::Trap(-25.0, -22.0, -18.0, -15.0),
    MembershipFn::Trap(-18.0, -15.0, -12.0, -10.0),
    MembershipFn::Trap(-12.0, -10.0, -5.0, -2.0),
    MembershipFn::Trap(-5.0, -2.0, 2.0, 5.0),
    MembershipFn::Trap(2.0, 5.0, 10.0, 12.0),
    MembershipFn::Trap(10.0, 12.0, 15.0, 18.0),
    MembershipFn::Trap(15.0, 18.0, 22.0, 25.0),
    MembershipFn::Trap(22.0, 25.0, 30.0, 30.0),
];

/// wind score weights, same order as [`WIND`] (`spec.md` §4.4).
const WIND_WEIGHT: [i32; 9] = [-4, -3, -2, -1, 0, 2, 3, 4, 5];

/// humidity categories: humid, normal, dry, very_dry.
const HUMIDITY: [MembershipFn; 4] = [
    MembershipFn::Trap(60.0, 70.0, 100.0, 100.0),
    MembershipFn::Trap(40.0, 50.0, 60.0, 70.0),
    MembershipFn::Trap(20.0, 30.0, 40.0, 50.0),
    MembershipFn::Trap(0.0, 0.0, 20.0, 30.0),
];

const HUMIDITY_WEIGHT: [i32; 4] = [1, 2, 3, 4];

/// burning-neighbor categories: none, few, some, many, all (same
/// breakpoints as Variant S, `several` relabeled `some`).
const NEIGHBORS: [MembershipFn; 5] = [
    MembershipFn::Tri(0.0, 0.0, 1.0),
    MembershipFn::Tri(0.0, 2.0, 4.0),
    MembershipFn::Tri(2.0, 4.0, 6.0),
    MembershipFn::Tri(4.0, 6.0, 8.0),
    MembershipFn::Tri(6.0, 8.0, 8.0),
];

const NEIGHBORS_WEIGHT: [i32; 5] = [1, 2, 3, 4, 5];

/// temperature categories: cold, cool, warm, hot.
const TEMPERATURE: [MembershipFn; 4] = [
    MembershipFn::Trap(-20.0, -20.0, 0.0, 10.0),
    MembershipFn::Trap(5.0, 10.0, 15.0, 20.0),
    MembershipFn::Trap(15.0, 20.0, 30.0, 35.0),
    MembershipFn::Trap(30.0, 35.0, 50.0, 50.0),
];

const TEMPERATURE_WEIGHT: [i32; 4] = [1, 2, 3, 4];

/// fire-probability levels: extremely_low .. very_high.
const FIRE_PROB: [MembershipFn; 8] = [
    MembershipFn::Trap(0.0, 0.0, 5.0, 15.0),
    MembershipFn::Trap(5.0, 15.0, 20.0, 30.0),
    MembershipFn::Trap(20.0, 30.0, 35.0, 45.0),
    MembershipFn::Trap(35.0, 45.0, 50.0, 60.0),
    MembershipFn::Trap(50.0, 60.0, 65.0, 75.0),
    MembershipFn::Trap(65.0, 75.0, 80.0, 90.0),
    MembershipFn::Trap(80.0, 85.0, 90.0, 95.0),
    MembershipFn::Trap(90.0, 95.0, 100.0, 100.0),
];

/// Additive-score cutoffs mapping the weighted sum to a level index, per
/// `spec.md` §4.4: `<10 extremely_low, <15 very_low, <20 low,
/// <25 medium_low, <30 medium, <35 medium_high, <40 high, else very_high`.
fn level_from_score(score: i32) -> usize {
    match score {
        s if s < 10 => 0,
        s if s < 15 => 1,
        s if s < 20 => 2,
        s if s < 25 => 3,
        s if s < 30 => 4,
        s if s < 35 => 5,
        s if s < 40 => 6,
        _ => 7,
    }
}

/// Rule level for a `(temperature, wind, humidity, neighbors)` category
/// combination, via the additive weighted score the reference generates
/// its 720-rule table from.
fn rule_level(temp_idx: usize, wind_idx: usize, humidity_idx: usize, neighbors_idx: usize) -> usize {
    let score = TEMPERATURE_WEIGHT[temp_idx] * 2
        + WIND_WEIGHT[wind_idx] * 5
        + HUMIDITY_WEIGHT[humidity_idx] * 3
        + NEIGHBORS_WEIGHT[neighbors_idx] * 2;
    level_from_score(score)
}

/// The Variant T fuzzy controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantT;

impl VariantT {
    #[must_use]
    pub fn new() -> Self {
        VariantT
    }

    /// Evaluates fire probability in `[0, 100]`. `wind_signal` is signed,
    /// `[-30, 30]`.
    #[must_use]
    pub fn evaluate(&self, wind_signal: f32, humidity: f32, burning_neighbors: f32, temperature: f32) -> f32 {
        let Some(wind_m) = fuzzify(wind_signal, WIND_UNIVERSE, &WIND) else {
            return 0.0;
        };
        let Some(humidity_m) = fuzzify(humidity, HUMIDITY_UNIVERSE, &HUMIDITY) else {
            return 0.0;
        };
        let Some(neighbors_m) = fuzzify(burning_neighbors, NEIGHBORS_UNIVERSE, &NEIGHBORS) else {
            return 0.0;
        };
        let Some(temperature_m) = fuzzify(temperature, TEMPERATURE_UNIVERSE, &TEMPERATURE) else {
            return 0.0;
        };

        mamdani_centroid(
            &[temperature_m, wind_m, humidity_m, neighbors_m],
            |idx: &[usize; 4]| rule_level(idx[0], idx[1], idx[2], idx[3]),
            &FIRE_PROB,
            FIRE_PROB_UNIVERSE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_stays_in_probability_range() {
        let v = VariantT::new();
        for wind in [-30.0, -15.0, 0.0, 15.0, 30.0] {
            for humidity in [0.0, 40.0, 80.0] {
                for neighbors in [0.0, 4.0, 8.0] {
                    for temp in [-20.0, 10.0, 40.0] {
                        let p = v.evaluate(wind, humidity, neighbors, temp);
                        assert!((0.0..=100.0).contains(&p), "p={p} out of range");
                    }
                }
            }
        }
    }

    #[test]
    fn out_of_universe_inputs_yield_zero() {
        let v = VariantT::new();
        assert_eq!(v.evaluate(-31.0, 50.0, 4.0, 20.0), 0.0);
        assert_eq!(v.evaluate(31.0, 50.0, 4.0, 20.0), 0.0);
        assert_eq!(v.evaluate(0.0, 50.0, 4.0, 60.0), 0.0);
    }

    #[test]
    fn headwind_storm_dry_hot_all_neighbors_scores_high() {
        // All four antecedents push toward ignition (tailwind "fair
        // storm", very_dry humidity, hot, all neighbors burning) — the
        // additive score should land in the top levels.
        let v = VariantT::new();
        let p = v.evaluate(28.0, 10.0, 8.0, 45.0);
        assert!(p > 80.0, "expected a high reading, got {p}");
    }

    #[test]
    fn calm_humid_cold_no_neighbors_scores_low() {
        let v = VariantT::new();
        let p = v.evaluate(0.0, 90.0, 0.0, -10.0);
        assert!(p < 30.0, "expected a low reading, got {p}");
    }

    #[test]
    fn score_cutoffs_match_spec_boundaries() {
        assert_eq!(level_from_score(9), 0);
        assert_eq!(level_from_score(10), 1);
        assert_eq!(level_from_score(14), 1);
        assert_eq!(level_from_score(15), 2);
        assert_eq!(level_from_score(39), 6);
        assert_eq!(level_from_score(40), 7);
        assert_eq!(level_from_score(100), 7);
    }
}
