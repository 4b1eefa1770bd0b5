//! Semantic unit types for type-safe physical quantity handling
//!
//! Newtype wrappers over `f32` so ambient temperature, humidity, and wind
//! speed cannot be accidentally swapped at a call site. Each implements
//! total ordering via `f32::total_cmp` (NaN sorts greater than everything)
//! so these types can be compared and sorted without a fallible
//! `partial_cmp`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[inline]
fn f32_total_cmp(a: f32, b: f32) -> Ordering {
    a.total_cmp(&b)
}

/// Temperature in degrees Celsius, domain roughly `[-20, 50]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(pub f32);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Celsius {
    #[inline]
    pub fn new(value: f32) -> Self {
        Celsius(value)
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Celsius {
    fn from(v: f32) -> Self {
        Celsius(v)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Relative humidity as a percentage, domain `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Humidity(pub f32);

impl Eq for Humidity {}

impl PartialOrd for Humidity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Humidity {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Humidity {
    #[inline]
    pub fn new(value: f32) -> Self {
        Humidity(value.clamp(0.0, 100.0))
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Humidity {
    fn from(v: f32) -> Self {
        Humidity::new(v)
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

/// Wind speed in meters/second. Unsigned under the `simple` neighbor
/// policy (`[0, 30]`), signed under `weighted_stochastic` (`[-30, 30]`),
/// per `spec.md` §4.4.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct WindSpeed(pub f32);

impl Eq for WindSpeed {}

impl PartialOrd for WindSpeed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WindSpeed {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl WindSpeed {
    #[inline]
    pub fn new(value: f32) -> Self {
        WindSpeed(value)
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for WindSpeed {
    fn from(v: f32) -> Self {
        WindSpeed(v)
    }
}

impl fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}m/s", self.0)
    }
}
