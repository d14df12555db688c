//! Triangle-strip assembly: walks the grid in strip order and emits the
//! interleaved (position, normal) vertex buffer handed to the renderer.

use crate::grid::TerrainGrid;
use crate::normal::vertex_normal;

/// A single interleaved terrain vertex: position then normal, 24 bytes.
///
/// `Pod` so the whole buffer can be viewed as floats or bytes for GPU upload
/// without copying.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit vertex normal.
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 24]);

/// Number of vertices a strip mesh over a `rows` x `cols` grid emits.
///
/// One strip per adjacent row pair, `2 * cols` vertices per strip, plus two
/// restart duplicates at the end of each strip.
pub fn strip_vertex_count(rows: i32, cols: i32) -> usize {
    ((rows - 1) * (2 * cols + 2)) as usize
}

/// The assembled terrain mesh: an ordered triangle-strip vertex buffer.
///
/// Vertex order is load-bearing. The buffer encodes a single continuous
/// strip covering the whole grid; reordering it breaks the topology.
pub struct StripMesh {
    vertices: Vec<TerrainVertex>,
}

impl StripMesh {
    /// The interleaved vertices in strip order.
    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    /// Number of vertices to submit in the draw call.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Flat `f32` view of the buffer: 6 floats per vertex, position first.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw byte view of the buffer for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Build the full strip mesh for a grid.
///
/// Strips run along columns in descending order, alternating between the
/// current and next row. After each strip, two duplicated vertices are
/// emitted so the next strip can start without a separate draw call: the
/// degenerate triangles they create are zero-area and discarded by the
/// rasterizer.
pub fn build_strip(grid: &TerrainGrid) -> StripMesh {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut vertices = Vec::with_capacity(strip_vertex_count(rows, cols));

    for row in 0..rows - 1 {
        for col in (0..cols).rev() {
            vertices.push(vertex(grid, row, col));
            vertices.push(vertex(grid, row + 1, col));
        }
        // Restart duplicates: close off this strip and jump the strip
        // cursor to the start of the next row.
        vertices.push(vertex(grid, row + 1, 0));
        vertices.push(vertex(grid, row + 1, cols - 1));
    }

    StripMesh { vertices }
}

fn vertex(grid: &TerrainGrid, row: i32, col: i32) -> TerrainVertex {
    TerrainVertex {
        position: grid.position(row, col).to_array(),
        normal: vertex_normal(grid, row, col).to_array(),
    }
}
