//! Vertex normal estimation from the ring of neighboring grid positions.

use glam::Vec3;

use crate::grid::TerrainGrid;

/// Neighbor offsets in `(row, col)`, in fixed cyclic order around the vertex.
/// Consecutive pairs (wrapping) span the 8 fan triangles whose normals are
/// averaged.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Squared-length threshold below which a cross product or normal sum is
/// treated as degenerate.
const DEGENERATE_EPSILON: f32 = 1e-12;

/// Estimate the unit normal at grid vertex `(row, col)`.
///
/// Samples the 8 neighboring positions one ring out and averages the 8 fan
/// triangle normals around the vertex. Boundary vertices probe positions
/// outside the grid; those are numerically defined, so no special casing.
pub fn vertex_normal(grid: &TerrainGrid, row: i32, col: i32) -> Vec3 {
    let p = grid.position(row, col);
    let ring = NEIGHBOR_OFFSETS.map(|(dr, dc)| grid.position(row + dr, col + dc));
    fan_normal(p, &ring)
}

/// Average the normals of the 8 triangles fanned around `center`.
///
/// `ring` holds the neighboring positions in cyclic order. Each consecutive
/// pair (wrapping from the last back to the first) contributes the normalized
/// cross product of its two edges. Near-zero cross products (collinear
/// neighbors) are skipped rather than normalized, so no NaN can enter the
/// sum; if every contribution is skipped or the sum cancels, the fallback is
/// `Vec3::Y`.
pub fn fan_normal(center: Vec3, ring: &[Vec3; 8]) -> Vec3 {
    let mut sum = Vec3::ZERO;
    for k in 0..8 {
        let e0 = ring[k] - center;
        let e1 = ring[(k + 1) % 8] - center;
        let cross = e0.cross(e1);
        if cross.length_squared() > DEGENERATE_EPSILON {
            sum += cross.normalize();
        }
    }
    if sum.length_squared() > DEGENERATE_EPSILON {
        sum.normalize()
    } else {
        Vec3::Y
    }
}
