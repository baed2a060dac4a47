//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level generation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Heightmap and noise settings.
    pub terrain: TerrainConfig,
    /// Tree placement settings.
    pub scatter: ScatterConfig,
    /// Initial camera placement.
    pub camera: CameraConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// World seed. Every random stream is derived from it.
    pub seed: u64,
    /// Samples along each side of the square grid.
    pub grid_size: usize,
    /// World units between adjacent samples.
    pub scale: f32,
    /// Vertical exaggeration of the normalized noise.
    pub height_scale: f32,
    /// Number of fractal noise octaves.
    pub octaves: u32,
    /// Amplitude falloff between octaves.
    pub persistence: f64,
    /// Noise cycles across the grid.
    pub frequency: f64,
}

/// Tree scatter configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScatterConfig {
    /// Number of trees requested.
    pub tree_count: usize,
    /// Water surface elevation. Trees only grow above it.
    pub water_level: f32,
    /// Minimum clearance above the water level.
    pub elevation_margin: f32,
    /// Trees only grow strictly below this elevation.
    pub max_elevation: f32,
    /// Placement attempts allowed per requested tree.
    pub attempts_per_tree: usize,
    /// Tree height range `(min, max)`.
    pub tree_height: (f32, f32),
    /// Trunk half-width range `(min, max)`.
    pub tree_width: (f32, f32),
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Minimum height kept between the camera and the ground.
    pub min_clearance: f32,
    /// Start position relative to the terrain center. The Y component is an
    /// absolute elevation.
    pub start_offset: (f32, f32, f32),
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            grid_size: 200,
            scale: 2.0,
            height_scale: 30.0,
            octaves: 6,
            persistence: 0.5,
            frequency: 5.0,
        }
    }
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            tree_count: 300,
            water_level: 5.0,
            elevation_margin: 0.5,
            max_elevation: 20.0,
            attempts_per_tree: 3,
            tree_height: (3.0, 7.0),
            tree_width: (0.3, 0.7),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_clearance: 2.0,
            start_offset: (50.0, 60.0, -100.0),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for Vale (`<config_dir>/vale`), if one exists.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vale"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

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

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Re-read the file: returns `Some(new_config)` if it changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
