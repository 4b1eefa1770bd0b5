//! Core types and utilities

pub mod rng;
pub mod units;

pub use rng::{cell_draw, coordinate_draw, neighbor_draw};
pub use units::{Celsius, Humidity, WindSpeed};
