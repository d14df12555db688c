//! Deterministic lattice noise.
//!
//! Maps an integer lattice coordinate to a pseudo-random value in `[-1, 1]`
//! using a fixed sinusoidal hash. There is no seed and no mutable state:
//! the same coordinate always produces the same value, which keeps terrain
//! generation reproducible across runs without a PRNG object.
//!
//! Transcendental functions come from `libm` so results do not drift between
//! platforms with different intrinsic implementations.

use libm::{floorf, sinf};

/// The fractional part of `x`, defined as `x - floor(x)`.
///
/// Always non-negative, including for negative inputs: `fract(-0.25) == 0.75`.
pub fn fract(x: f32) -> f32 {
    x - floorf(x)
}

/// Cubic smoothstep easing `3f² − 2f³`.
///
/// Flattens the derivative at `f = 0` and `f = 1` so interpolated noise has
/// no visible crease at lattice cell boundaries.
pub fn smoothstep(f: f32) -> f32 {
    3.0 * f * f - 2.0 * f * f * f
}

/// Pseudo-random value in `[-1.0, 1.0]` for the lattice point `(row, col)`.
///
/// Total over all `i32` inputs; precision degrades for very large magnitudes
/// but the result stays finite and in range.
pub fn lattice_value(row: i32, col: i32) -> f32 {
    let mixed = sinf(row as f32 * 127.1 + col as f32 * 311.7) * 43758.5453123;
    -1.0 + 2.0 * fract(mixed)
}
