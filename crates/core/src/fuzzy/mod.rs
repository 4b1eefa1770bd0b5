//! Generic Mamdani fuzzy-inference engine, plus the two rule-table variants
//! `spec.md` §4.4 requires (`S` and `T`).
//!
//! The inference core (fuzzification -> rule firing-strength via `min` ->
//! consequent aggregation via `max` -> centroid defuzzification) is written
//! once, generic over the antecedent count via the const generic `N`, and
//! each variant module supplies its own category/rule tables — mirroring
//! the teacher's `FieldSolver` trait (`solver/mod.rs`), one abstraction
//! shared across differently-shaped backends, generalized here from a
//! trait-object backend split to a const-generic data-table split.

pub mod variant_s;
pub mod variant_t;

use crate::config::FuzzyVariantKind;

/// A piecewise-linear membership function over a fuzzy antecedent or
/// consequent universe (`spec.md` glossary: triangular / trapezoidal mf).
#[derive(Debug, Clone, Copy)]
pub enum MembershipFn {
    Tri(f32, f32, f32),
    Trap(f32, f32, f32, f32),
}

impl MembershipFn {
    /// Degree of membership of `x`, following `skfuzzy`'s `trimf`/`trapmf`
    /// convention for degenerate breakpoints (`a == b` or `c == d` yields a
    /// vertical edge rather than a division by zero).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn eval(&self, x: f32) -> f32 {
        let y = match *self {
            MembershipFn::Tri(a, b, c) => {
                let mut y = 0.0;
                if a < x && x < b && a != b {
                    y = (x - a) / (b - a);
                }
                if b < x && x < c && b != c {
                    y = (c - x) / (c - b);
                }
                if x == b {
                    y = 1.0;
                }
                y
            }
            MembershipFn::Trap(a, b, c, d) => {
                let mut y = 0.0;
                if a < x && x < b && a != b {
                    y = (x - a) / (b - a);
                }
                if b <= x && x <= c {
                    y = 1.0;
                }
                if c < x && x < d && c != d {
                    y = (d - x) / (d - c);
                }
                y
            }
        };
        y.clamp(0.0, 1.0)
    }
}

/// Fuzzifies `x` against every category's membership function, per
/// antecedent universe `[lo, hi]`. Returns `None` if `x` lies outside the
/// universe, matching `spec.md` §4.4's "any input outside its universe"
/// error behavior.
fn fuzzify(x: f32, universe: (f32, f32), categories: &[MembershipFn]) -> Option<Vec<f32>> {
    let (lo, hi) = universe;
    if x < lo || x > hi {
        return None;
    }
    Some(categories.iter().map(|mf| mf.eval(x)).collect())
}

/// Runs one Mamdani inference pass: fuzzification has already happened
/// (`memberships` holds, per antecedent, the degree of membership in each
/// of that antecedent's categories); this computes rule firing strength as
/// the `min` across antecedents, aggregates consequents by `max`, and
/// defuzzifies by centroid over the integer-discretized consequent
/// universe.
///
/// `rule_level` maps a combination of category indices (one per antecedent,
/// in antecedent order) to a consequent level index. Returns `0.0` if no
/// rule fires with positive strength, per `spec.md` §4.4.
#[must_use]
pub fn mamdani_centroid<const N: usize>(
    memberships: &[Vec<f32>; N],
    rule_level: impl Fn(&[usize; N]) -> usize,
    level_mfs: &[MembershipFn],
    consequent_universe: (i32, i32),
) -> f32 {
    let dims: [usize; N] = std::array::from_fn(|i| memberships[i].len());
    let mut max_strength = vec![0.0_f32; level_mfs.len()];

    let mut idx = [0usize; N];
    loop {
        let firing = (0..N).fold(f32::INFINITY, |acc, i| acc.min(memberships[i][idx[i]]));
        if firing > 0.0 {
            let level = rule_level(&idx);
            if firing > max_strength[level] {
                max_strength[level] = firing;
            }
        }

        let mut carry = true;
        for k in (0..N).rev() {
            if !carry {
                break;
            }
            idx[k] += 1;
            if idx[k] < dims[k] {
                carry = false;
            } else {
                idx[k] = 0;
            }
        }
        if carry {
            break;
        }
    }

    let (lo, hi) = consequent_universe;
    let mut numerator = 0.0_f32;
    let mut denominator = 0.0_f32;
    for step in lo..=hi {
        let x = step as f32;
        let mut aggregated = 0.0_f32;
        for (level, mf) in level_mfs.iter().enumerate() {
            let clipped = mf.eval(x).min(max_strength[level]);
            if clipped > aggregated {
                aggregated = clipped;
            }
        }
        numerator += x * aggregated;
        denominator += aggregated;
    }

    if denominator <= 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// The fuzzy ignition-probability controller selected for a run, wrapping
/// whichever variant `spec.md` §4.4/§6 selects at construction.
///
/// Construction compiles the rule/category tables once; evaluation is a
/// pure function over those tables with no hidden state, per `spec.md`
/// §4.4's determinism requirement — safe to share across worker threads.
#[derive(Debug, Clone, Copy)]
pub enum FuzzyController {
    S(variant_s::VariantS),
    T(variant_t::VariantT),
}

impl FuzzyController {
    #[must_use]
    pub fn new(kind: FuzzyVariantKind) -> Self {
        match kind {
            FuzzyVariantKind::S => FuzzyController::S(variant_s::VariantS::new()),
            FuzzyVariantKind::T => FuzzyController::T(variant_t::VariantT::new()),
        }
    }

    /// Evaluates fire probability in `[0, 100]` for the given inputs.
    ///
    /// `temperature` is ignored by Variant S, which has no temperature
    /// antecedent. `wind_signal` is unsigned for Variant S (`[0, 30]`) and
    /// signed for Variant T (`[-30, 30]`), per `spec.md` §4.4.
    #[must_use]
    pub fn evaluate(&self, wind_signal: f32, humidity: f32, burning_neighbors: f32, temperature: f32) -> f32 {
        match self {
            FuzzyController::S(v) => v.evaluate(wind_signal, humidity, burning_neighbors),
            FuzzyController::T(v) => v.evaluate(wind_signal, humidity, burning_neighbors, temperature),
        }
    }
}
