//! The automaton: owns the grid, wind, environment, and fuzzy controller,
//! and performs one synchronous step via the two-phase update of
//! `spec.md` §4.3.

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::cell::CellState;
use crate::config::{Durations, EngineConfig, FuzzyVariantKind, NeighborPolicy};
use crate::core_types::rng::{cell_draw, coordinate_draw, neighbor_draw};
use crate::core_types::{Celsius, Humidity, WindSpeed};
use crate::error::EngineError;
use crate::fuzzy::FuzzyController;
use crate::grid::{Grid, LandCoverRaster, TerrainHeights};
use crate::wind::{WindDirection, WindStencil};

/// The spatial stochastic wildfire propagation engine.
///
/// Between steps the grid is exclusively owned by the engine; within a
/// step, the decision phase writes only `next_state` slots (disjoint per
/// cell) and the commit phase writes only `state`/`burn_duration` (also
/// disjoint), so both phases parallelize over `rayon` with no locking
/// (`spec.md` §5). The fuzzy controller is read-only once constructed.
pub struct Engine {
    grid: Grid,
    wind_direction: WindDirection,
    wind_speed: WindSpeed,
    humidity: Humidity,
    temperature: Celsius,
    stencil: WindStencil,
    fuzzy: FuzzyController,
    config: EngineConfig,
    step_index: u64,
}

impl Engine {
    /// Constructs an engine from a validated land-cover raster and runtime
    /// configuration, per `spec.md` §6. Rejects mutually-incompatible wind
    /// policy / fuzzy variant pairings (`spec.md` §7's configuration-error
    /// kind).
    #[instrument(skip(land_cover, terrain), fields(width = land_cover.width(), height = land_cover.height()))]
    pub fn new(
        land_cover: LandCoverRaster,
        terrain: Option<TerrainHeights>,
        config: EngineConfig,
        wind_direction: WindDirection,
        wind_speed: f32,
        humidity: f32,
        temperature: f32,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let stencil = WindStencil::new(wind_direction, wind_speed, config.wind_policy);
        let fuzzy = FuzzyController::new(config.fuzzy_variant);
        let grid = Grid::from_raster(&land_cover, terrain);
        info!(seed = config.seed, "constructed wildfire engine");
        Ok(Engine {
            grid,
            wind_direction,
            wind_speed: WindSpeed::new(wind_speed),
            humidity: Humidity::new(humidity),
            temperature: Celsius::new(temperature),
            stencil,
            fuzzy,
            config,
            step_index: 0,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[must_use]
    pub fn wind_direction(&self) -> WindDirection {
        self.wind_direction
    }

    #[must_use]
    pub fn wind_speed(&self) -> WindSpeed {
        self.wind_speed
    }

    #[must_use]
    pub fn humidity(&self) -> Humidity {
        self.humidity
    }

    #[must_use]
    pub fn temperature(&self) -> Celsius {
        self.temperature
    }

    pub fn get_state(&self, x: usize, y: usize) -> Result<CellState, EngineError> {
        self.grid.get_state(x, y)
    }

    pub fn set_state(&mut self, x: usize, y: usize, state: CellState) -> Result<(), EngineError> {
        self.grid.set_state(x, y, state)
    }

    /// Draws `n` independent uniform `(x, y)` pairs and ignites each if it
    /// is currently `FOREST`, per `spec.md` §4.3's `ignite_random_cells`.
    pub fn ignite_random(&mut self, n: u32) {
        let (width, height) = (self.grid.width(), self.grid.height());
        for i in 0..u64::from(n) {
            let (x, y) = coordinate_draw(self.config.seed, i, width, height);
            if self.grid.get_state(x, y) == Ok(CellState::Forest) {
                let _ = self.grid.set_state(x, y, CellState::Ignition);
            }
        }
    }

    /// Dense `H x W` integer snapshot, per `spec.md` §4.5. Pure; never
    /// mutates the grid.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        self.grid.snapshot()
    }

    /// Advances the automaton by one synchronous time step (`spec.md`
    /// §4.3). The decision phase reads `state` only and writes
    /// `next_state` only; the commit phase applies `next_state` and grows
    /// `burn_duration`. Both phases run as `rayon` parallel iterators over
    /// disjoint cell slots; per-cell randomness is sourced from the
    /// counter-based RNG keyed by `(seed, step, x, y)` so the result is
    /// identical regardless of thread-pool size (`spec.md` §5).
    #[instrument(skip(self), fields(step = self.step_index))]
    pub fn step(&mut self) {
        let width = self.grid.width();
        let height = self.grid.height();
        let durations = self.config.durations;
        let next_states = (0..height)
            .into_par_iter()
            .flat_map(|y| {
                (0..width).into_par_iter().map(move |x| self.decide_cell(x, y, durations))
            })
            .collect::<Vec<_>>();

        for (i, next) in next_states.into_iter().enumerate() {
            let x = i % width;
            let y = i / width;
            self.grid.cell_mut(x, y).next_state = next;
        }
        self.grid.commit_all();
        self.step_index += 1;
        debug!(step = self.step_index, "completed step");
    }

    fn decide_cell(&self, x: usize, y: usize, durations: Durations) -> CellState {
        let cell = self.grid.cell(x, y);
        match cell.state {
            CellState::Forest => self.decide_forest_cell(x, y, cell.land_type.ignition_modifier()),
            CellState::Ignition if cell.burn_duration >= 1 => CellState::Fire,
            CellState::Fire if cell.burn_duration >= durations.d_fire => CellState::BurningOut,
            CellState::BurningOut if cell.burn_duration >= durations.d_out => CellState::Ash,
            other => other,
        }
    }

    fn decide_forest_cell(&self, x: usize, y: usize, modifier: f32) -> CellState {
        let (burning_count, contributing) = self.admitted_neighbors(x, y);
        if burning_count == 0 {
            return CellState::Forest;
        }

        let wind_signal = match self.config.fuzzy_variant {
            FuzzyVariantKind::S => self.wind_speed.value(),
            FuzzyVariantKind::T => {
                self.stencil.aggregate_wind_dir(contributing) * self.wind_speed.value()
            }
        };

        let p = self.fuzzy.evaluate(
            wind_signal,
            self.humidity.value(),
            f32::from(burning_count),
            self.temperature.value(),
        ) * modifier;

        let draw = cell_draw(self.config.seed, self.step_index, x, y);
        if 100.0 * draw < p {
            CellState::Ignition
        } else {
            CellState::Forest
        }
    }

    /// Scans the 8-neighborhood of `(x, y)` and admits burning neighbors
    /// per the configured [`NeighborPolicy`], per `spec.md` §4.3. Returns
    /// the admitted count and the `(dy, dx)` offsets that contributed, for
    /// the wind-direction aggregate Variant T needs.
    fn admitted_neighbors(&self, x: usize, y: usize) -> (u8, Vec<(i8, i8)>) {
        let mut count = 0u8;
        let mut contributing = Vec::new();
        for (neighbor_index, (dy, dx, nx, ny)) in self.grid.neighbor_offsets(x, y).enumerate() {
            if !self.grid.cell(nx, ny).state.is_burning() {
                continue;
            }
            match self.config.neighbor_policy {
                NeighborPolicy::Simple => {
                    count += 1;
                    contributing.push((dy, dx));
                }
                NeighborPolicy::WeightedStochastic => {
                    let height_diff = self.grid.height_diff(x, y, nx, ny);
                    let weight = (self.stencil.weight(dy, dx) * (1.0 + 0.05 * height_diff))
                        .clamp(0.0, 1.0);
                    let draw = neighbor_draw(self.config.seed, self.step_index, x, y, neighbor_index);
                    if draw < weight {
                        count += 1;
                        contributing.push((dy, dx));
                    }
                }
            }
        }
        (count, contributing)
    }
}
