//! Fire Simulation Core Library
//!
//! A spatial stochastic cellular-automaton simulator of wildfire
//! propagation: a synchronous two-phase grid update driven by a
//! fuzzy-logic ignition controller, a wind-direction stencil, and a
//! 17-class land-cover taxonomy.

pub mod cell;
pub mod config;
pub mod core_types;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod grid;
pub mod land_cover;
pub mod wind;

pub use cell::{Cell, CellState};
pub use config::{Durations, EngineConfig, FuzzyVariantKind, NeighborPolicy};
pub use engine::Engine;
pub use error::EngineError;
pub use fuzzy::FuzzyController;
pub use grid::{Grid, LandCoverRaster, TerrainHeights};
pub use land_cover::LandCover;
pub use wind::{WindDirection, WindPolicy, WindStencil};
