//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Ridge terrain generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "ridge", about = "Procedural terrain-strip mesh generator")]
pub struct CliArgs {
    /// Grid row count.
    #[arg(long)]
    pub rows: Option<i32>,

    /// Grid column count.
    #[arg(long)]
    pub cols: Option<i32>,

    /// Number of noise octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write a heightmap debug PNG to this path.
    #[arg(long)]
    pub heightmap: Option<PathBuf>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(rows) = args.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = args.cols {
            self.grid.cols = cols;
        }
        if let Some(octaves) = args.octaves {
            self.terrain.octaves = octaves;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref path) = args.heightmap {
            self.debug.heightmap_image = true;
            self.debug.heightmap_path = path.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            rows: Some(64),
            cols: Some(32),
            log_level: Some("debug".to_string()),
            ..Default::default()
        };

        config.apply_cli_overrides(&args);
        assert_eq!(config.grid.rows, 64);
        assert_eq!(config.grid.cols, 32);
        assert_eq!(config.debug.log_level, "debug");
        // Untouched settings keep their defaults.
        assert_eq!(config.terrain.octaves, 3);
    }

    #[test]
    fn test_no_overrides_leaves_config_unchanged() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_heightmap_flag_enables_image_output() {
        let mut config = Config::default();
        assert!(!config.debug.heightmap_image);

        let args = CliArgs {
            heightmap: Some(PathBuf::from("out/height.png")),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert!(config.debug.heightmap_image);
        assert_eq!(config.debug.heightmap_path, PathBuf::from("out/height.png"));
    }

    #[test]
    fn test_args_parse_from_flags() {
        let args = CliArgs::parse_from(["ridge", "--rows", "200", "--octaves", "5"]);
        assert_eq!(args.rows, Some(200));
        assert_eq!(args.octaves, Some(5));
        assert_eq!(args.cols, None);
    }
}
