//! Demo binary that generates a terrain strip mesh and reports its stats.
//!
//! Stands in for the rendering collaborator: it drives configuration,
//! logging, and mesh construction, stopping at the hand-off point (a flat
//! vertex buffer plus draw metadata). Configuration is loaded from
//! `config.ron` and can be overridden via CLI flags.
//!
//! Run with `cargo run -p ridge-demo` for the 100x100 reference grid.
//! Run with `cargo run -p ridge-demo -- --rows 200 --cols 200 --heightmap h.png`
//! to change the resolution and dump a heightmap debug image.

mod viz;

use std::process::ExitCode;

use clap::Parser;
use ridge_config::{CliArgs, Config, default_config_dir};
use ridge_log::init_logging;
use ridge_mesh::{GridError, TERRAIN_PRIMITIVE_TOPOLOGY, TerrainGrid, build_strip};
use ridge_terrain::HeightParams;
use tracing::{error, info};

use crate::viz::ImageWriteError;

/// Errors that abort terrain generation.
#[derive(Debug, thiserror::Error)]
enum GenerateError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Image(#[from] ImageWriteError),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            // Logging is not up yet; fall back to stderr.
            eprintln!("failed to load config: {err}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    init_logging(Some(&config));

    match generate(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("terrain generation failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Build the terrain mesh described by `config` and log the hand-off stats.
///
/// Dimension validation happens inside [`TerrainGrid::new`]; a degenerate
/// configured grid fails here before any buffer is allocated.
fn generate(config: &Config) -> Result<(), GenerateError> {
    let params = HeightParams {
        octaves: config.terrain.octaves,
        base_divisor: config.terrain.base_divisor,
        base_amplitude: config.terrain.base_amplitude,
        persistence: config.terrain.persistence,
    };
    let grid = TerrainGrid::new(config.grid.rows, config.grid.cols, params)?;

    let mesh = build_strip(&grid);

    let (min_height, max_height) = height_range(&mesh);
    info!(
        rows = config.grid.rows,
        cols = config.grid.cols,
        vertex_count = mesh.vertex_count(),
        buffer_bytes = mesh.as_bytes().len(),
        topology = ?TERRAIN_PRIMITIVE_TOPOLOGY,
        min_height,
        max_height,
        "terrain mesh built"
    );

    if config.debug.heightmap_image {
        let image = viz::render_heightmap(grid.height_field());
        viz::write_png(&image, &config.debug.heightmap_path)?;
        info!(path = %config.debug.heightmap_path.display(), "wrote heightmap debug image");
    }

    Ok(())
}

/// Minimum and maximum vertex heights in the assembled mesh.
fn height_range(mesh: &ridge_mesh::StripMesh) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for vertex in mesh.vertices() {
        min = min.min(vertex.position[1]);
        max = max.max(vertex.position[1]);
    }
    (min, max)
}
