//! The 17-class land-cover taxonomy and its ignition-susceptibility table.
//!
//! Grounded on the teacher's dispatch-by-id pattern (`fuel::Fuel::from_id`),
//! generalized from a rich per-class struct down to the single ignition
//! modifier `spec.md` §4.2 attaches to each class.

use crate::error::EngineError;

/// One of the 17 vegetation/terrain classes a raster cell can carry.
///
/// Codes 18-21 are reserved by the snapshot adapter for fire-state
/// encodings (`spec.md` §4.2, §4.5) and are rejected by [`LandCover::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LandCover {
    EvergreenNeedleleaf = 1,
    EvergreenBroadleaf = 2,
    DeciduousNeedleleaf = 3,
    DeciduousBroadleaf = 4,
    MixedForest = 5,
    ClosedShrubland = 6,
    OpenShrubland = 7,
    WoodySavanna = 8,
    Savanna = 9,
    Grassland = 10,
    PermanentWetland = 11,
    Cropland = 12,
    Urban = 13,
    CroplandMosaic = 14,
    SnowIce = 15,
    Barren = 16,
    Water = 17,
}

/// Ignition modifier `m(k)`, indexed by `(code - 1)`, per `spec.md` §4.2.
const MODIFIERS: [f32; 17] = [
    0.90, 0.70, 0.80, 0.60, 0.75, 0.50, 0.50, 0.40, 0.30, 0.20, 0.10, 0.30, 0.05, 0.25, 0.00, 0.05,
    0.00,
];

impl LandCover {
    /// The highest land-cover code the raster format may carry.
    pub const MAX_CODE: u8 = 17;

    /// Looks up a class from its raster code, rejecting the fire-state
    /// codes 18-21 and anything outside `[1, 17]`.
    pub fn from_code(code: u8) -> Result<Self, EngineError> {
        use LandCover::*;
        Ok(match code {
            1 => EvergreenNeedleleaf,
            2 => EvergreenBroadleaf,
            3 => DeciduousNeedleleaf,
            4 => DeciduousBroadleaf,
            5 => MixedForest,
            6 => ClosedShrubland,
            7 => OpenShrubland,
            8 => WoodySavanna,
            9 => Savanna,
            10 => Grassland,
            11 => PermanentWetland,
            12 => Cropland,
            13 => Urban,
            14 => CroplandMosaic,
            15 => SnowIce,
            16 => Barren,
            17 => Water,
            other => {
                return Err(EngineError::Data(format!(
                    "land-cover code {other} outside [1, {}]",
                    Self::MAX_CODE
                )));
            }
        })
    }

    /// The raw `[1, 17]` raster code for this class.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Ignition-susceptibility modifier `m(k) in [0, 1]`.
    ///
    /// `SnowIce` and `Water` both carry `0.0`: per `spec.md` §3's invariant,
    /// a `FOREST` cell on either class can never transition to `IGNITION`.
    #[must_use]
    pub fn ignition_modifier(self) -> f32 {
        MODIFIERS[(self.code() - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_code() {
        for code in 1..=17u8 {
            let class = LandCover::from_code(code).unwrap();
            assert_eq!(class.code(), code);
        }
    }

    #[test]
    fn rejects_fire_state_codes() {
        for code in 18..=21u8 {
            assert!(LandCover::from_code(code).is_err());
        }
    }

    #[test]
    fn rejects_zero_and_out_of_range() {
        assert!(LandCover::from_code(0).is_err());
        assert!(LandCover::from_code(255).is_err());
    }

    #[test]
    fn snow_and_water_are_incombustible() {
        assert_eq!(LandCover::SnowIce.ignition_modifier(), 0.0);
        assert_eq!(LandCover::Water.ignition_modifier(), 0.0);
    }

    #[test]
    fn modifiers_stay_in_unit_interval() {
        for code in 1..=17u8 {
            let m = LandCover::from_code(code).unwrap().ignition_modifier();
            assert!((0.0..=1.0).contains(&m));
        }
    }
}
