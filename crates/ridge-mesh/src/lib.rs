//! Terrain mesh construction: grid positions, vertex normals, and
//! triangle-strip assembly into an interleaved vertex buffer.

mod grid;
mod normal;
mod strip;
mod vertex_format;

pub use grid::{GridError, TerrainGrid};
pub use normal::{fan_normal, vertex_normal};
pub use strip::{StripMesh, TerrainVertex, build_strip, strip_vertex_count};
pub use vertex_format::{
    TERRAIN_PRIMITIVE_TOPOLOGY, TERRAIN_VERTEX_ATTRIBUTES, TERRAIN_VERTEX_LAYOUT,
    terrain_vertex_buffer_layout,
};
