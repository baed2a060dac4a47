//! Command-line argument parsing for Vale.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Vale command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "vale", about = "Procedural landscape generator")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Heightmap samples per side.
    #[arg(long)]
    pub grid_size: Option<usize>,

    /// Number of trees to scatter.
    #[arg(long)]
    pub trees: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(n) = args.grid_size {
            self.terrain.grid_size = n;
        }
        if let Some(count) = args.trees {
            self.scatter.tree_count = count;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
