//! Eight-valued wind direction and the two 3x3 directional stencils derived
//! from it, per `spec.md` §4.1.
//!
//! The direction-to-downwind-offset mapping is a `const` table rather than a
//! conditional chain, per `spec.md` §9's explicit design note, grounded on
//! the teacher's preference for `const` lookup tables over dispatch chains
//! (`land_cover`'s `MODIFIERS`, `core_types::noise`'s seed constants).

use serde::{Deserialize, Serialize};

/// One of the eight cardinal/intercardinal wind directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// `(dy, dx)` offset of the downwind neighbor for each direction, indexed by
/// [`WindDirection`] declaration order. `spec.md` §4.1's mapping table.
const DOWNWIND_OFFSET: [(i8, i8); 8] = [
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, 1),   // E
    (1, 1),   // SE
    (1, 0),   // S
    (1, -1),  // SW
    (0, -1),  // W
    (-1, -1), // NW
];

impl WindDirection {
    fn downwind_offset(self) -> (i8, i8) {
        DOWNWIND_OFFSET[self as usize]
    }

    /// The two offsets flanking the downwind cell on the 3x3 ring.
    fn flanking_offsets(self) -> [(i8, i8); 2] {
        let (dy, dx) = self.downwind_offset();
        // Rotating the downwind offset by +/-45 degrees around the ring
        // yields its two neighbors; a small table is clearer than
        // trigonometry for eight fixed cases.
        match (dy, dx) {
            (-1, 0) => [(-1, -1), (-1, 1)],
            (-1, 1) => [(-1, 0), (0, 1)],
            (0, 1) => [(-1, 1), (1, 1)],
            (1, 1) => [(0, 1), (1, 0)],
            (1, 0) => [(1, 1), (1, -1)],
            (1, -1) => [(1, 0), (0, -1)],
            (0, -1) => [(1, -1), (-1, -1)],
            (-1, -1) => [(0, -1), (-1, 0)],
            _ => unreachable!("downwind offset is always one of the 8 ring cells"),
        }
    }

    /// The three cells directly opposite the downwind cell and its flanks.
    fn upwind_offsets(self) -> [(i8, i8); 3] {
        let (dy, dx) = self.downwind_offset();
        let flanks = self.flanking_offsets();
        [(-dy, -dx), (-flanks[0].0, -flanks[0].1), (-flanks[1].0, -flanks[1].1)]
    }
}

/// Which derivation of the 3x3 directional stencil a run uses, per
/// `spec.md` §4.1's "implementers choose one" requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindPolicy {
    /// Off-center cells at 1.0 except a downwind/flank reduction.
    #[default]
    ScaledIsotropic,
    /// Signed weights used to derive the aggregate `wind_dir` scalar
    /// consumed by the weighted-stochastic neighbor policy.
    SignedDirectional,
}

/// A 3x3 matrix of signed weights indexed by `stencil.weight(dy, dx)` for
/// `dy, dx in {-1, 0, 1}`; the center is always `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindStencil {
    weights: [[f32; 3]; 3],
}

impl WindStencil {
    /// Derives the stencil from `direction`, `speed`, and `policy`, per
    /// `spec.md` §4.1.
    #[must_use]
    pub fn new(direction: WindDirection, speed: f32, policy: WindPolicy) -> Self {
        match policy {
            WindPolicy::ScaledIsotropic => Self::scaled_isotropic(direction, speed),
            WindPolicy::SignedDirectional => Self::signed_directional(direction, speed),
        }
    }

    fn scaled_isotropic(direction: WindDirection, speed: f32) -> Self {
        let mut weights = [[1.0_f32; 3]; 3];
        weights[1][1] = 0.0;
        if speed > 0.0 {
            let main = (1.0 - speed / 30.0).max(0.1);
            let side = (1.0 - speed / 40.0).max(0.3);
            let (dy, dx) = direction.downwind_offset();
            weights[(dy + 1) as usize][(dx + 1) as usize] = main;
            for (fy, fx) in direction.flanking_offsets() {
                weights[(fy + 1) as usize][(fx + 1) as usize] = side;
            }
        }
        WindStencil { weights }
    }

    fn signed_directional(direction: WindDirection, speed: f32) -> Self {
        let mut weights = [[-0.5_f32; 3]; 3];
        weights[1][1] = 0.0;
        if speed > 0.0 {
            let (dy, dx) = direction.downwind_offset();
            weights[(dy + 1) as usize][(dx + 1) as usize] = 1.0;
            for (fy, fx) in direction.flanking_offsets() {
                weights[(fy + 1) as usize][(fx + 1) as usize] = 0.5;
            }
            for (uy, ux) in direction.upwind_offsets() {
                weights[(uy + 1) as usize][(ux + 1) as usize] = -1.0;
            }
        }
        WindStencil { weights }
    }

    /// Weight at offset `(dy, dx)`, `dy, dx in {-1, 0, 1}`.
    #[must_use]
    pub fn weight(&self, dy: i8, dx: i8) -> f32 {
        self.weights[(dy + 1) as usize][(dx + 1) as usize]
    }

    /// The aggregate signed `wind_dir in {+1, 0, -0.6}` scalar the
    /// weighted-stochastic neighbor policy forwards to the fuzzy controller,
    /// derived from the signs of the stencil entries at the offsets that
    /// contributed a burning neighbor this step (`spec.md` §4.3).
    ///
    /// Dominance order: `+1` beats `0` beats `-0.6`. Returns `0.0` if no
    /// offset contributed (mirrors the reference, which leaves `wind_dir`
    /// at its initial `0` when the neighbor scan finds nothing).
    #[must_use]
    pub fn aggregate_wind_dir<I: IntoIterator<Item = (i8, i8)>>(&self, contributing: I) -> f32 {
        let mut best = None::<f32>;
        for (dy, dx) in contributing {
            let w = self.weight(dy, dx);
            #[allow(clippy::float_cmp)]
            let signal = if w == 1.0 {
                1.0
            } else if w == 0.5 {
                0.0
            } else if w == -1.0 || w == -0.5 {
                -0.6
            } else {
                0.0
            };
            best = Some(match best {
                None => signal,
                Some(current) => dominant(current, signal),
            });
        }
        best.unwrap_or(0.0)
    }
}

/// Dominance order for aggregating signed wind signals: `+1` beats `0`
/// beats `-0.6` (`spec.md` §4.1).
#[allow(clippy::float_cmp)]
fn dominant(a: f32, b: f32) -> f32 {
    if rank(a) >= rank(b) { a } else { b }
}

#[allow(clippy::float_cmp)]
fn rank(v: f32) -> i32 {
    if v == 1.0 {
        2
    } else if v == 0.0 {
        1
    } else {
        0
    }
}
