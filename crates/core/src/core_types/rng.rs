//! Counter-based pseudo-random source for the decision phase
//!
//! `spec.md` §5 requires that per-cell random draws stay reproducible
//! regardless of how the grid is partitioned across worker threads. A
//! global PRNG advanced sequentially cannot give that guarantee once the
//! decision phase runs on `rayon`, so each cell instead derives its draw
//! directly from `(seed, step, x, y)` via integer hashing — no shared
//! mutable state, so any thread can compute any cell's draw in any order
//! and get the same answer.
//!
//! The hash itself is a `SplitMix64`-style finalizer (Steele, Lea &
//! Flood 2014), the same mixing technique the teacher's
//! `core_types::noise` module uses for its value-noise hash, generalized
//! here from 2-3 spatial coordinates to a 4-tuple that also folds in the
//! simulation seed and step index.

/// Derive a uniform `[0, 1)` draw for one cell at one step.
///
/// Deterministic: calling this twice with identical arguments, from any
/// thread, always returns the same value.
#[inline]
#[must_use]
pub fn cell_draw(seed: u64, step: u64, x: usize, y: usize) -> f32 {
    let h = mix(seed, step, x as u64, y as u64);
    // Keep 24 bits of entropy, matching f32's mantissa, for a uniform
    // value in [0, 1).
    ((h >> 40) as f32) / (1u64 << 24) as f32
}

/// Derive a uniform `[0, 1)` draw for one candidate neighbor of one cell at
/// one step, used by the weighted-stochastic admission policy. `neighbor`
/// distinguishes the up-to-8 candidates considered for `(x, y)` so each
/// gets an independent draw.
#[inline]
#[must_use]
pub fn neighbor_draw(seed: u64, step: u64, x: usize, y: usize, neighbor: usize) -> f32 {
    let h = mix(seed, step, (x as u64) << 32 | y as u64, neighbor as u64 ^ 0xABCD_EF01);
    ((h >> 40) as f32) / (1u64 << 24) as f32
}

/// Derive a pair of grid coordinates in `[0, width) x [0, height)` for the
/// `n`th draw of a seeded sequence, used by `ignite_random_cells`.
#[inline]
#[must_use]
pub fn coordinate_draw(seed: u64, n: u64, width: usize, height: usize) -> (usize, usize) {
    let hx = mix(seed, n, 0x9E37_79B9_7F4A_7C15, 1);
    let hy = mix(seed, n, 0xBF58_476D_1CE4_E5B9, 2);
    let x = (hx % width as u64) as usize;
    let y = (hy % height as u64) as usize;
    (x, y)
}

#[inline]
fn mix(a: u64, b: u64, c: u64, d: u64) -> u64 {
    let mut z = a
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(b.wrapping_mul(0xBF58_476D_1CE4_E5B9))
        .wrapping_add(c.wrapping_mul(0x94D0_49BB_1331_11EB))
        .wrapping_add(d);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
