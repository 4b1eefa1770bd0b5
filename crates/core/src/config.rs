//! Runtime configuration enumeration, per `spec.md` §6.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::wind::WindPolicy;

/// Burning-neighbor admission policy for the decision phase (`spec.md` §4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NeighborPolicy {
    /// Count every in-bounds burning neighbor.
    #[default]
    Simple,
    /// Admit each burning neighbor with a wind/terrain-weighted probability.
    WeightedStochastic,
}

/// Which fuzzy-controller variant evaluates ignition probability
/// (`spec.md` §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FuzzyVariantKind {
    /// 3 antecedents, 5 probability levels, 80 rules.
    #[default]
    S,
    /// 4 antecedents, 8 probability levels, 720 rules.
    T,
}

/// `(D_fire, D_out)` burn-duration thresholds, per `spec.md` §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub d_fire: u32,
    pub d_out: u32,
}

impl Default for Durations {
    /// The richer reference's recommended values.
    fn default() -> Self {
        Durations { d_fire: 8, d_out: 9 }
    }
}

/// Full set of runtime options an [`crate::engine::Engine`] is constructed
/// with, per `spec.md` §6.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub neighbor_policy: NeighborPolicy,
    pub wind_policy: WindPolicy,
    pub fuzzy_variant: FuzzyVariantKind,
    pub durations: Durations,
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            neighbor_policy: NeighborPolicy::default(),
            wind_policy: WindPolicy::default(),
            fuzzy_variant: FuzzyVariantKind::default(),
            durations: Durations::default(),
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Validates that `wind_policy` and `fuzzy_variant` compose
    /// consistently: Variant T expects signed wind, which only the
    /// `SignedDirectional` policy supplies (`spec.md` §6, §7).
    pub fn validate(&self) -> Result<(), EngineError> {
        match (self.wind_policy, self.fuzzy_variant) {
            (WindPolicy::SignedDirectional, FuzzyVariantKind::S) => {
                Err(EngineError::Configuration(
                    "signed-directional wind stencil requires fuzzy variant T, not S".into(),
                ))
            }
            (WindPolicy::ScaledIsotropic, FuzzyVariantKind::T) => {
                Err(EngineError::Configuration(
                    "fuzzy variant T expects signed wind input from the signed-directional policy"
                        .into(),
                ))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations_match_richer_reference() {
        let d = Durations::default();
        assert_eq!(d.d_fire, 8);
        assert_eq!(d.d_out, 9);
    }

    #[test]
    fn matching_policy_and_variant_validate() {
        let cfg = EngineConfig { fuzzy_variant: FuzzyVariantKind::S, ..EngineConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn mismatched_policy_and_variant_reject() {
        let cfg = EngineConfig {
            wind_policy: WindPolicy::SignedDirectional,
            fuzzy_variant: FuzzyVariantKind::S,
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg2 = EngineConfig {
            wind_policy: WindPolicy::ScaledIsotropic,
            fuzzy_variant: FuzzyVariantKind::T,
            ..EngineConfig::default()
        };
        assert!(cfg2.validate().is_err());
    }
}
