//! Configuration system for Vale.
//!
//! Generation settings persist to disk as a RON file. Supports CLI overrides
//! via clap, reload detection, and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, ScatterConfig, TerrainConfig, default_config_dir,
};
pub use error::ConfigError;
