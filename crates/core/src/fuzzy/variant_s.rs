//! Variant S: 3 antecedents (wind speed, humidity, burning neighbors),
//! 5 probability levels, 80 rules — one rule per
//! `(wind x humidity x neighbors)` combination, per `spec.md` §4.4.
//!
//! Rule levels are transcribed from
//! `examples/original_source/app/models/fuzzy_logic.py`, the Python
//! implementation this variant was distilled from.

use super::{fuzzify, mamdani_centroid, MembershipFn};

const WIND_UNIVERSE: (f32, f32) = (0.0, 30.0);
const HUMIDITY_UNIVERSE: (f32, f32) = (0.0, 100.0);
const NEIGHBORS_UNIVERSE: (f32, f32) = (0.0, 8.0);
const FIRE_PROB_UNIVERSE: (i32, i32) = (0, 100);

/// wind categories: calm, moderate, strong, storm
const WIND: [MembershipFn; 4] = [
    MembershipFn::Tri(0.0, 0.0, 5.0),
    MembershipFn::Tri(0.0, 10.0, 20.0),
    MembershipFn::Tri(10.0, 20.0, 30.0),
    MembershipFn::Tri(20.0, 30.0, 30.0),
];

/// humidity categories, ordered dry, normal, humid, very_humid
const HUMIDITY: [MembershipFn; 4] = [
    MembershipFn::Tri(0.0, 0.0, 30.0),
    MembershipFn::Tri(10.0, 40.0, 70.0),
    MembershipFn::Tri(50.0, 80.0, 100.0),
    MembershipFn::Tri(70.0, 100.0, 100.0),
];

/// burning-neighbor categories: none, few, several, many, all
const NEIGHBORS: [MembershipFn; 5] = [
    MembershipFn::Tri(0.0, 0.0, 1.0),
    MembershipFn::Tri(0.0, 2.0, 4.0),
    MembershipFn::Tri(2.0, 4.0, 6.0),
    MembershipFn::Tri(4.0, 6.0, 8.0),
    MembershipFn::Tri(6.0, 8.0, 8.0),
];

/// fire-probability levels: very_low, low, medium, high, very_high
const FIRE_PROB: [MembershipFn; 5] = [
    MembershipFn::Tri(0.0, 0.0, 20.0),
    MembershipFn::Tri(0.0, 20.0, 40.0),
    MembershipFn::Tri(20.0, 50.0, 80.0),
    MembershipFn::Tri(60.0, 80.0, 100.0),
    MembershipFn::Tri(80.0, 100.0, 100.0),
];

/// Rule levels indexed `[wind][humidity]`, each a 5-entry row over
/// neighbor categories `(none, few, several, many, all)`. Wind rows are
/// ordered calm/moderate/strong/storm; humidity rows within each wind
/// block are ordered dry/normal/humid/very_humid.
const RULE_TABLE: [[[u8; 5]; 4]; 4] = [
    // calm
    [
        [2, 3, 4, 4, 4], // dry
        [1, 2, 3, 3, 4], // normal
        [0, 1, 2, 2, 3], // humid
        [0, 0, 1, 1, 2], // very_humid
    ],
    // moderate
    [
        [3, 4, 4, 4, 4],
        [2, 3, 4, 4, 4],
        [1, 2, 3, 3, 4],
        [0, 1, 2, 2, 3],
    ],
    // strong
    [
        [4, 4, 4, 4, 4],
        [3, 4, 4, 4, 4],
        [2, 3, 4, 4, 4],
        [1, 2, 3, 3, 4],
    ],
    // storm
    [
        [4, 4, 4, 4, 4],
        [4, 4, 4, 4, 4],
        [3, 4, 4, 4, 4],
        [2, 3, 4, 4, 4],
    ],
];

/// The Variant S fuzzy controller. Holds no state beyond the compiled
/// tables above (which are all `const`), so construction is a no-op; the
/// type exists for symmetry with [`super::variant_t::VariantT`] and so the
/// two variants can be selected behind [`super::FuzzyController`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantS;

impl VariantS {
    #[must_use]
    pub fn new() -> Self {
        VariantS
    }

    /// Evaluates fire probability in `[0, 100]`. `wind_speed` is unsigned,
    /// `[0, 30]`.
    #[must_use]
    pub fn evaluate(&self, wind_speed: f32, humidity: f32, burning_neighbors: f32) -> f32 {
        let Some(wind_m) = fuzzify(wind_speed, WIND_UNIVERSE, &WIND) else {
            return 0.0;
        };
        let Some(humidity_m) = fuzzify(humidity, HUMIDITY_UNIVERSE, &HUMIDITY) else {
            return 0.0;
        };
        let Some(neighbors_m) = fuzzify(burning_neighbors, NEIGHBORS_UNIVERSE, &NEIGHBORS) else {
            return 0.0;
        };

        mamdani_centroid(
            &[wind_m, humidity_m, neighbors_m],
            |idx: &[usize; 3]| RULE_TABLE[idx[0]][idx[1]][idx[2]] as usize,
            &FIRE_PROB,
            FIRE_PROB_UNIVERSE,
        )
    }
}
