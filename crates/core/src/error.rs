//! Error types for engine construction and per-cell queries.

use std::fmt;

/// Errors raised by public [`crate::engine::Engine`] operations.
///
/// Bounds and data/configuration errors are fatal to the operation that
/// raised them and are never silently corrected. The one recovery point in
/// the system — a fuzzy inference that produces no positive consequent mass
/// — is not represented here; it surfaces as a `0.0` probability instead
/// (see [`crate::fuzzy::FuzzyController::evaluate`]).
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Coordinates outside `[0, width) x [0, height)`.
    Bounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// The input raster contains an out-of-range class or has zero area.
    Data(String),
    /// Two policies were selected that cannot be composed consistently.
    Configuration(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Bounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinates ({x}, {y}) out of bounds for a {width}x{height} grid"
            ),
            EngineError::Data(msg) => write!(f, "invalid raster data: {msg}"),
            EngineError::Configuration(msg) => write!(f, "incompatible configuration: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
