//! Terrain grid: maps `(row, col)` indices to object-space positions.

use glam::Vec3;
use ridge_terrain::{HeightField, HeightParams};

/// Half-extent of the terrain in object space. The grid spans
/// `[-EXTENT, EXTENT]` along both x and z.
const EXTENT: f32 = 5.0;

/// Errors raised when constructing a [`TerrainGrid`].
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The requested dimensions cannot form a triangle strip.
    #[error("terrain grid needs at least 2 rows and 2 columns, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: i32,
        /// Requested column count.
        cols: i32,
    },
}

/// A fixed-resolution terrain grid with procedurally synthesized heights.
///
/// Positions are pure functions of `(row, col)` and the grid dimensions, so
/// the grid carries no per-vertex state and can be sampled in any order.
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    rows: i32,
    cols: i32,
    height: HeightField,
}

impl TerrainGrid {
    /// Create a grid with the given dimensions and height parameters.
    ///
    /// Returns [`GridError::InvalidDimensions`] for dimensions below 2x2;
    /// a strip mesh needs at least one pair of adjacent rows and columns.
    pub fn new(rows: i32, cols: i32, params: HeightParams) -> Result<Self, GridError> {
        if rows < 2 || cols < 2 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            height: HeightField::new(rows, cols, params),
        })
    }

    /// Object-space position of the vertex at `(row, col)`.
    ///
    /// Rows map linearly onto x in `[-5, 5]` and columns onto z in `[-5, 5]`
    /// using real-valued division, producing a smooth ramp rather than the
    /// quantized steps integer division would give. Height becomes y.
    ///
    /// Total over all `i32` inputs: normal estimation probes one ring beyond
    /// the grid edge, and those positions only need to be numerically
    /// defined, not on the mesh.
    pub fn position(&self, row: i32, col: i32) -> Vec3 {
        let x = 10.0 * row as f32 / self.rows as f32 - EXTENT;
        let z = 10.0 * col as f32 / self.cols as f32 - EXTENT;
        let y = self.height.sample(row, col);
        Vec3::new(x, y, z)
    }

    /// Row count.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The underlying height field.
    pub fn height_field(&self) -> &HeightField {
        &self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_grid() -> TerrainGrid {
        TerrainGrid::new(100, 100, HeightParams::default()).unwrap()
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        for &(rows, cols) in &[(0, 100), (100, 0), (-3, 100), (100, -1), (1, 100), (0, 0)] {
            let result = TerrainGrid::new(rows, cols, HeightParams::default());
            assert!(
                result.is_err(),
                "grid construction should fail for {rows}x{cols}"
            );
        }
    }

    #[test]
    fn test_accepts_minimal_grid() {
        assert!(TerrainGrid::new(2, 2, HeightParams::default()).is_ok());
    }

    #[test]
    fn test_positions_span_world_extent() {
        let grid = reference_grid();
        let first = grid.position(0, 0);
        let last = grid.position(100, 100);
        assert_eq!(first.x, -5.0);
        assert_eq!(first.z, -5.0);
        assert_eq!(last.x, 5.0);
        assert_eq!(last.z, 5.0);
    }

    #[test]
    fn test_position_ramp_is_smooth() {
        // Pins the real-division choice: consecutive rows must advance x by
        // exactly one grid step, never collapse onto quantized plateaus.
        let grid = reference_grid();
        let step = 10.0 / 100.0;
        for row in 0..100 {
            let dx = grid.position(row + 1, 0).x - grid.position(row, 0).x;
            assert!(
                (dx - step).abs() < 1e-6,
                "x step between rows {row} and {} is {dx}, expected {step}",
                row + 1
            );
        }
    }

    #[test]
    fn test_position_height_matches_field() {
        let grid = reference_grid();
        for &(row, col) in &[(0, 0), (17, 41), (99, 99), (-1, 50), (100, 100)] {
            let p = grid.position(row, col);
            assert_eq!(
                p.y.to_bits(),
                grid.height_field().sample(row, col).to_bits(),
                "height mismatch at ({row}, {col})"
            );
        }
    }

    #[test]
    fn test_out_of_range_positions_are_finite() {
        let grid = reference_grid();
        for &(row, col) in &[(-1, -1), (-1, 100), (100, -1), (200, 200)] {
            let p = grid.position(row, col);
            assert!(
                p.is_finite(),
                "position({row}, {col}) = {p:?} is not finite"
            );
        }
    }
}
