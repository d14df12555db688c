//! Canonical `wgpu::VertexBufferLayout` for terrain strip rendering.
//!
//! The renderer binds the [`super::StripMesh`] buffer with this layout; keeping
//! it next to [`TerrainVertex`] avoids layout drift between the mesh builder
//! and the pipelines that draw it.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Fields   |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |

use std::mem;

use wgpu::{PrimitiveTopology, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::strip::TerrainVertex;

/// Vertex attributes for the terrain strip vertex format.
pub const TERRAIN_VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    // Attribute 0: object-space position
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    // Attribute 1: unit vertex normal
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
];

/// The vertex buffer layout for terrain render pipelines.
///
/// Uses [`TERRAIN_VERTEX_ATTRIBUTES`] with a 24-byte stride matching
/// [`TerrainVertex`].
pub const TERRAIN_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<TerrainVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &TERRAIN_VERTEX_ATTRIBUTES,
};

/// Topology the strip buffer encodes. The restart duplicates the mesh
/// assembler inserts only make sense under this topology.
pub const TERRAIN_PRIMITIVE_TOPOLOGY: PrimitiveTopology = PrimitiveTopology::TriangleStrip;

/// Return the terrain vertex buffer layout as an owned value.
///
/// Equivalent to [`TERRAIN_VERTEX_LAYOUT`] but convenient when a `'static`
/// lifetime is awkward to thread through.
pub fn terrain_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    TERRAIN_VERTEX_LAYOUT
}

// ---------------------------------------------------------------------------
// Compile-time validation
// ---------------------------------------------------------------------------

/// Stride must match `TerrainVertex` size.
const _: () = assert!(
    mem::size_of::<TerrainVertex>() == 24,
    "TerrainVertex size changed — update TERRAIN_VERTEX_LAYOUT"
);

/// Attribute offsets must be correct.
const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[0].offset == 0);
const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[1].offset == 12);

/// Last attribute must fit within the stride.
const _: () = assert!(
    TERRAIN_VERTEX_ATTRIBUTES[1].offset + 12 <= mem::size_of::<TerrainVertex>() as u64,
    "Last attribute exceeds vertex stride"
);
