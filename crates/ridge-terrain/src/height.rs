//! Multi-octave value-noise height synthesis.
//!
//! Composites several octaves of bilinearly interpolated, smoothstep-eased
//! lattice noise into a single height value per grid vertex. Each octave
//! samples a coarser lattice than the grid itself, so broad hills come from
//! the first octave and finer ripples from the later ones.

use crate::noise::{fract, lattice_value, smoothstep};

/// Octave parameters for height synthesis.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightParams {
    /// Number of octaves to composite.
    pub octaves: u32,
    /// Divisor of the grid dimensions for the first octave's coarse lattice.
    /// Doubles each octave, so later octaves sample finer lattices.
    pub base_divisor: i32,
    /// Amplitude of the first octave.
    pub base_amplitude: f32,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f32,
}

impl Default for HeightParams {
    fn default() -> Self {
        Self {
            octaves: 3,
            base_divisor: 5,
            base_amplitude: 0.5,
            persistence: 0.5,
        }
    }
}

/// Samples synthesized terrain height over a fixed-resolution grid.
///
/// The grid dimensions determine the coarse lattice size of every octave,
/// so two fields with the same dimensions and parameters produce identical
/// heights everywhere.
#[derive(Clone, Debug)]
pub struct HeightField {
    rows: i32,
    cols: i32,
    params: HeightParams,
}

impl HeightField {
    /// Create a height field for a `rows` x `cols` grid.
    ///
    /// Dimension validation happens at the grid/config boundary; this type
    /// only requires positive values to keep its arithmetic defined.
    pub fn new(rows: i32, cols: i32, params: HeightParams) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self { rows, cols, params }
    }

    /// Synthesize the height at `(row, col)`.
    ///
    /// Accepts coordinates outside `[0, rows) x [0, cols)`: normal estimation
    /// probes one ring beyond the grid edge, and the lattice hash is total.
    pub fn sample(&self, row: i32, col: i32) -> f32 {
        let mut total = 0.0;
        // The divisor comes from user-editable config; clamp it so a zero or
        // negative value degrades to a single coarse cell instead of
        // dividing by zero below.
        let mut freq = self.params.base_divisor.max(1);
        let mut amplitude = self.params.base_amplitude;

        for _ in 0..self.params.octaves {
            // Coarse lattice cell counts. Clamped to 1 so octaves whose
            // frequency exceeds the grid dimension degrade to a single cell
            // instead of dividing by zero.
            let n_rows = (self.rows / freq).max(1);
            let n_cols = (self.cols / freq).max(1);

            let x_frac = smoothstep(fract(col as f32 / n_cols as f32));
            let y_frac = smoothstep(fract(row as f32 / n_rows as f32));

            // Integer (truncating) division picks the coarse cell; the
            // eased fractions above position the sample within it.
            let r0 = row / n_rows;
            let c0 = col / n_cols;
            let top = mix(lattice_value(r0, c0), lattice_value(r0, c0 + 1), x_frac);
            let bottom = mix(
                lattice_value(r0 + 1, c0),
                lattice_value(r0 + 1, c0 + 1),
                x_frac,
            );

            total += amplitude * mix(top, bottom, y_frac);

            // Saturate so an oversized octave count cannot overflow; past
            // the grid dimension the clamp above pins the lattice anyway.
            freq = freq.saturating_mul(2);
            amplitude *= self.params.persistence;
        }

        total
    }

    /// Theoretical maximum absolute height (sum of octave amplitudes).
    ///
    /// Useful for normalizing heights when visualizing the field.
    pub fn max_amplitude(&self) -> f32 {
        let mut sum = 0.0;
        let mut amplitude = self.params.base_amplitude;
        for _ in 0..self.params.octaves {
            sum += amplitude;
            amplitude *= self.params.persistence;
        }
        sum
    }

    /// Grid row count this field was built for.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Grid column count this field was built for.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Return a reference to the octave parameters.
    pub fn params(&self) -> &HeightParams {
        &self.params
    }
}

/// Linear interpolation between `a` and `b` by `t`.
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
