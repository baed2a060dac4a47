//! Vale landscape pipeline.
//!
//! Turns a [`Config`] into everything a renderer needs: the heightmap, the
//! terrain mesh, scattered trees with their combined mesh, and a camera start
//! position that clears the ground.

use glam::Vec3;
use tracing::info;
use vale_config::{Config, ScatterConfig, TerrainConfig};
use vale_mesh::{GeometryBuffer, TerrainMeshBuilder, TreeShape, build_tree_mesh};
use vale_terrain::{
    HeightMap, HeightmapParams, NoiseField, ObjectInstance, ScatterParams, clamp_above_terrain,
    scatter_objects, seed::stream_rng,
};

/// Seed stream used for tree placement.
pub const SCATTER_STREAM: &str = "scatter";

/// A fully generated scene.
#[derive(Clone, Debug)]
pub struct Landscape {
    pub height_map: HeightMap,
    pub terrain_mesh: GeometryBuffer,
    pub trees: Vec<ObjectInstance>,
    pub tree_mesh: GeometryBuffer,
    /// Camera position kept `camera.min_clearance` above the ground.
    pub camera_start: Vec3,
}

impl Landscape {
    /// Run the whole pipeline for `config`.
    ///
    /// Identical configs produce identical landscapes. Trees draw from their
    /// own seed stream, so the terrain does not depend on the tree settings.
    pub fn generate(config: &Config) -> Self {
        let seed = config.terrain.seed;
        let noise = NoiseField::new(seed);
        let height_map = HeightMap::generate(&noise, &heightmap_params(&config.terrain));
        let terrain_mesh = TerrainMeshBuilder::new().build(&height_map);

        let params = scatter_params(&config.scatter, height_map.world_extent());
        let mut rng = stream_rng(seed, SCATTER_STREAM);
        let trees = scatter_objects(&params, &mut rng, &height_map);
        let tree_mesh = build_tree_mesh(&trees, &TreeShape::default());

        let camera_start = camera_start(config, &height_map);

        Self {
            height_map,
            terrain_mesh,
            trees,
            tree_mesh,
            camera_start,
        }
    }

    /// Emit an `info!` summary of the generated scene.
    pub fn log_summary(&self) {
        let (lowest, highest) = self.height_map.elevation_range().unwrap_or((0.0, 0.0));
        info!(
            grid_size = self.height_map.grid_size(),
            vertices = self.terrain_mesh.vertex_count(),
            indices = self.terrain_mesh.indices.len(),
            lowest,
            highest,
            "terrain ready"
        );
        info!(
            trees = self.trees.len(),
            vertices = self.tree_mesh.vertex_count(),
            indices = self.tree_mesh.indices.len(),
            "trees ready"
        );
        info!(
            x = self.camera_start.x,
            y = self.camera_start.y,
            z = self.camera_start.z,
            "camera start"
        );
    }
}

/// Heightmap parameters for a terrain config section.
pub fn heightmap_params(terrain: &TerrainConfig) -> HeightmapParams {
    HeightmapParams {
        grid_size: terrain.grid_size,
        scale: terrain.scale,
        height_scale: terrain.height_scale,
        octaves: terrain.octaves,
        persistence: terrain.persistence,
        frequency: terrain.frequency,
    }
}

/// Scatter parameters covering `[0, extent)` on both axes.
pub fn scatter_params(scatter: &ScatterConfig, extent: f32) -> ScatterParams {
    ScatterParams {
        count: scatter.tree_count,
        x_range: 0.0..extent,
        z_range: 0.0..extent,
        min_elevation: scatter.water_level,
        elevation_margin: scatter.elevation_margin,
        max_elevation: scatter.max_elevation,
        attempts_per_object: scatter.attempts_per_tree,
        height_range: scatter.tree_height.0..scatter.tree_height.1,
        width_range: scatter.tree_width.0..scatter.tree_width.1,
    }
}

/// Terrain center plus the configured offset, lifted clear of the ground.
///
/// The offset's Y component is an absolute elevation.
pub fn camera_start(config: &Config, height_map: &HeightMap) -> Vec3 {
    let center = height_map.world_extent() * 0.5;
    let (dx, y, dz) = config.camera.start_offset;
    let position = Vec3::new(center + dx, y, center + dz);
    clamp_above_terrain(height_map, position, config.camera.min_clearance)
}
