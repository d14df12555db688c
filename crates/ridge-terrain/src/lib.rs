//! Procedural terrain height synthesis: deterministic lattice noise and
//! multi-octave value-noise compositing.

mod height;
mod noise;

pub use height::{HeightField, HeightParams};
pub use noise::{fract, lattice_value, smoothstep};
