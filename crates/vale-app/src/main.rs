//! The `vale` binary: generate a landscape from config and CLI flags.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use vale_app::Landscape;
use vale_config::{CliArgs, Config, default_config_dir};

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".vale"));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    vale_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        seed = config.terrain.seed,
        grid_size = config.terrain.grid_size,
        trees = config.scatter.tree_count,
        "generating landscape"
    );
    let landscape = Landscape::generate(&config);
    landscape.log_summary();
}
