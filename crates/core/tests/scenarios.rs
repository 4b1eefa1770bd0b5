//! End-to-end scenarios exercised through the public `Engine` API only.

use firecell_core::{
    Durations, Engine, EngineConfig, FuzzyVariantKind, LandCoverRaster, NeighborPolicy,
    WindDirection, WindPolicy,
};

fn uniform_raster(width: usize, height: usize, code: u8) -> LandCoverRaster {
    LandCoverRaster::from_rows(vec![vec![code; width]; height]).unwrap()
}

/// Scenario 1 (spec.md sec 8): an isolated FOREST grid with no ignitions
/// never changes, for any number of steps, any wind, any humidity.
#[test]
fn isolated_grid_with_no_ignitions_never_changes() {
    let raster = uniform_raster(8, 8, 5);
    let config = EngineConfig::default();
    let mut engine =
        Engine::new(raster, None, config, WindDirection::SE, 20.0, 10.0, 35.0).unwrap();
    let before = engine.snapshot();
    for _ in 0..30 {
        engine.step();
    }
    assert_eq!(engine.snapshot(), before);
}

/// Scenario 4 (spec.md sec 8): under the spec's pinned "Variant S fuzzy,
/// Policy A wind" configuration, a 101x101 grid with wind = E, speed = 24,
/// humidity = 30, ignited at the center, reaches at least 3x further
/// downwind (east) after 50 steps than the symmetric speed = 0 case,
/// averaged over 10 seeds. Neighbor admission is `weighted_stochastic` (the
/// `forest_fire_automaton.py` pairing for Policy A): the scaled-isotropic
/// stencil leaves the downwind-ward admission weight at 1.0 while
/// throttling the upwind-ward one, so east growth is unthrottled in both
/// runs and the gap comes entirely from the wind-speed antecedent raising
/// the fuzzy ignition probability.
#[test]
fn wind_biases_spread_toward_downwind() {
    let center = 50;
    let east_reach = |seed: u64, speed: f32| -> usize {
        let raster = uniform_raster(101, 101, 10); // grassland, highly flammable
        let config = EngineConfig {
            neighbor_policy: NeighborPolicy::WeightedStochastic,
            wind_policy: WindPolicy::ScaledIsotropic,
            fuzzy_variant: FuzzyVariantKind::S,
            durations: Durations { d_fire: 8, d_out: 9 },
            seed,
        };
        let mut engine =
            Engine::new(raster, None, config, WindDirection::E, speed, 30.0, 25.0).unwrap();
        engine.set_state(center, center, firecell_core::CellState::Ignition).unwrap();
        for _ in 0..50 {
            engine.step();
        }
        let snap = engine.snapshot();
        let burning = |code: u8| code >= 18;
        (center + 1..101).take_while(|&x| burning(snap[center][x])).count()
    };

    let mut wind_total = 0usize;
    let mut calm_total = 0usize;
    for seed in 0..10u64 {
        wind_total += east_reach(seed, 24.0);
        calm_total += east_reach(seed, 0.0);
    }
    assert!(
        wind_total as f64 >= 3.0 * calm_total as f64,
        "expected downwind reach under wind ({wind_total}) >= 3x the speed=0 baseline ({calm_total})"
    );
}

/// Scenario 3 (spec.md sec 8): a solid water row is a firebreak regardless
/// of which neighbor-admission policy is configured.
#[test]
fn water_stops_fire_under_either_neighbor_policy() {
    for policy in [NeighborPolicy::Simple, NeighborPolicy::WeightedStochastic] {
        let mut rows = vec![vec![1u8; 9]; 9];
        rows[4] = vec![17u8; 9]; // water band across the middle
        let raster = LandCoverRaster::from_rows(rows).unwrap();
        let (wind_policy, fuzzy_variant) = match policy {
            NeighborPolicy::Simple => (WindPolicy::ScaledIsotropic, FuzzyVariantKind::S),
            NeighborPolicy::WeightedStochastic => {
                (WindPolicy::SignedDirectional, FuzzyVariantKind::T)
            }
        };
        let config = EngineConfig {
            neighbor_policy: policy,
            wind_policy,
            fuzzy_variant,
            durations: Durations::default(),
            seed: 7,
        };
        let mut engine =
            Engine::new(raster, None, config, WindDirection::S, 10.0, 20.0, 30.0).unwrap();
        engine.set_state(0, 0, firecell_core::CellState::Ignition).unwrap();
        for _ in 0..100 {
            engine.step();
        }
        for y in 5..9 {
            for x in 0..9 {
                assert_eq!(
                    engine.get_state(x, y).unwrap(),
                    firecell_core::CellState::Forest,
                    "fire leaked across the water band at ({x}, {y}) under {policy:?}"
                );
            }
        }
    }
}

/// Invariant 4 (spec.md sec 8): the snapshot function is pure — repeated
/// calls with no intervening `step()` return identical arrays.
#[test]
fn snapshot_is_pure_between_steps() {
    let raster = uniform_raster(5, 5, 9);
    let mut engine =
        Engine::new(raster, None, EngineConfig::default(), WindDirection::W, 8.0, 40.0, 25.0)
            .unwrap();
    engine.set_state(2, 2, firecell_core::CellState::Ignition).unwrap();
    engine.step();
    let a = engine.snapshot();
    let b = engine.snapshot();
    assert_eq!(a, b);
}

/// Scenario 5 (spec.md sec 8): for a fixed humidity and neighbor count,
/// higher wind speed never decreases the fuzzy ignition probability —
/// checked at the engine/config level by ensuring a calm run ignites no
/// more than a matching storm run, across several seeds.
#[test]
fn higher_wind_does_not_reduce_spread_likelihood() {
    let ignited_cell_count = |wind_speed: f32, seed: u64| -> usize {
        let raster = uniform_raster(15, 15, 10);
        let config = EngineConfig { seed, ..EngineConfig::default() };
        let mut engine =
            Engine::new(raster, None, config, WindDirection::N, wind_speed, 20.0, 35.0).unwrap();
        engine.set_state(7, 7, firecell_core::CellState::Ignition).unwrap();
        for _ in 0..15 {
            engine.step();
        }
        engine
            .snapshot()
            .into_iter()
            .flatten()
            .filter(|&code| code >= 18)
            .count()
    };

    let mut calm_total = 0usize;
    let mut storm_total = 0usize;
    for seed in 0..8u64 {
        calm_total += ignited_cell_count(0.0, seed);
        storm_total += ignited_cell_count(28.0, seed);
    }
    assert!(
        storm_total >= calm_total,
        "expected storm spread ({storm_total}) >= calm spread ({calm_total})"
    );
}

/// Out-of-bounds coordinates are rejected rather than clamped, regardless
/// of which public accessor is used (spec.md sec 7).
#[test]
fn bounds_errors_are_never_silently_clamped() {
    let raster = uniform_raster(4, 4, 1);
    let mut engine =
        Engine::new(raster, None, EngineConfig::default(), WindDirection::N, 0.0, 50.0, 20.0)
            .unwrap();
    assert!(engine.get_state(100, 100).is_err());
    assert!(engine.set_state(100, 100, firecell_core::CellState::Fire).is_err());
}

/// Seeding via `ignite_random` only ever turns FOREST cells to IGNITION;
/// a fully water grid (modifier 0, but also not FOREST-eligible once
/// already water) stays untouched because the engine starts all cells as
/// FOREST of their land class, so this checks that the seeded count never
/// exceeds the requested draws and every ignited cell was FOREST before.
#[test]
fn ignite_random_only_affects_existing_forest_cells() {
    let raster = uniform_raster(6, 6, 10);
    let config = EngineConfig { seed: 99, ..EngineConfig::default() };
    let mut engine =
        Engine::new(raster, None, config, WindDirection::N, 0.0, 50.0, 20.0).unwrap();
    engine.ignite_random(10);
    let ignited = engine
        .snapshot()
        .into_iter()
        .flatten()
        .filter(|&code| code == 18)
        .count();
    assert!(ignited <= 10);
}
