//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid resolution.
    pub grid: GridConfig,
    /// Noise synthesis parameters.
    pub terrain: TerrainConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain grid resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Number of grid rows.
    pub rows: i32,
    /// Number of grid columns.
    pub cols: i32,
}

/// Octave parameters for height synthesis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Number of noise octaves to composite.
    pub octaves: u32,
    /// Grid-dimension divisor for the first octave's coarse lattice.
    pub base_divisor: i32,
    /// Amplitude of the first octave.
    pub base_amplitude: f32,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write a heightmap debug image after generation.
    pub heightmap_image: bool,
    /// Output path for the heightmap debug image.
    pub heightmap_path: PathBuf,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            octaves: 3,
            base_divisor: 5,
            base_amplitude: 0.5,
            persistence: 0.5,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            heightmap_image: false,
            heightmap_path: PathBuf::from("heightmap.png"),
        }
    }
}

/// The default per-user config directory (`<platform config dir>/ridge`).
///
/// Falls back to the current directory when the platform reports none.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("ridge"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("rows: 100"));
        assert!(ron_str.contains("octaves: 3"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `terrain` and `debug` sections entirely
        let ron_str = "(grid: (rows: 64, cols: 48))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.grid.rows, 64);
        assert_eq!(config.grid.cols, 48);
        assert_eq!(config.terrain, TerrainConfig::default());
        assert_eq!(config.debug, DebugConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.grid.rows = 256;
        config.debug.heightmap_image = true;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

}
