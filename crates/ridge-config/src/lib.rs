//! Configuration for the Ridge terrain generator.
//!
//! Runtime-configurable settings persisted to disk as RON files, with CLI
//! overrides via clap. Unknown fields are ignored and missing fields fall
//! back to defaults, so config files stay forward/backward compatible.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GridConfig, TerrainConfig, default_config_dir};
pub use error::ConfigError;
