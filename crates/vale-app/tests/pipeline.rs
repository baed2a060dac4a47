//! End-to-end landscape generation through the public crate APIs.

use vale_app::Landscape;
use vale_config::Config;
use vale_mesh::{INDICES_PER_TREE, VERTICES_PER_TREE, interleave_terrain, interleave_trees};
use vale_terrain::HeightQuery;

fn reference_config() -> Config {
    let mut config = Config::default();
    config.terrain.seed = 42;
    config.terrain.grid_size = 10;
    config.terrain.scale = 1.0;
    config.terrain.height_scale = 10.0;
    config
}

#[test]
fn test_seed_42_grid_10_mesh_shape() {
    let landscape = Landscape::generate(&reference_config());
    assert_eq!(landscape.terrain_mesh.vertex_count(), 100);
    assert_eq!(landscape.terrain_mesh.indices.len(), 486);
    assert!(landscape.terrain_mesh.indices_in_bounds());
}

#[test]
fn test_rerun_is_bit_identical() {
    let a = Landscape::generate(&reference_config());
    let b = Landscape::generate(&reference_config());
    let bits = |l: &Landscape| -> Vec<u32> {
        l.terrain_mesh.positions.iter().map(|p| p.to_bits()).collect()
    };
    assert_eq!(bits(&a), bits(&b), "Positions must reproduce bit-for-bit");
    assert_eq!(a.trees, b.trees);
}

#[test]
fn test_default_scene_trees_respect_elevation_band() {
    let config = Config::default();
    let landscape = Landscape::generate(&config);
    let scatter = &config.scatter;

    assert!(landscape.trees.len() <= scatter.tree_count);
    assert!(!landscape.trees.is_empty(), "Default scene should grow some trees");
    for tree in &landscape.trees {
        let y = tree.position.y;
        assert!(
            y > scatter.water_level + scatter.elevation_margin && y < scatter.max_elevation,
            "Tree at {:?} outside the elevation band",
            tree.position
        );
        assert_eq!(
            landscape.height_map.height_at(tree.position.x, tree.position.z),
            y,
            "Tree base must sit on the terrain"
        );
        assert!(tree.height >= 3.0 && tree.height <= 7.0);
        assert!(tree.width >= 0.3 && tree.width <= 0.7);
    }
}

#[test]
fn test_tree_mesh_matches_tree_count() {
    let landscape = Landscape::generate(&Config::default());
    let trees = landscape.trees.len();
    assert_eq!(landscape.tree_mesh.vertex_count(), trees * VERTICES_PER_TREE);
    assert_eq!(landscape.tree_mesh.indices.len(), trees * INDICES_PER_TREE);
    assert!(landscape.tree_mesh.indices_in_bounds());
}

#[test]
fn test_camera_starts_above_terrain() {
    let config = Config::default();
    let landscape = Landscape::generate(&config);
    let cam = landscape.camera_start;
    let ground = landscape.height_map.height_at(cam.x, cam.z);
    assert!(cam.y >= ground + config.camera.min_clearance);
}

#[test]
fn test_buffers_interleave_for_upload() {
    let landscape = Landscape::generate(&reference_config());
    let terrain = interleave_terrain(&landscape.terrain_mesh).expect("terrain streams");
    assert_eq!(terrain.len(), 100);
    let trees = interleave_trees(&landscape.tree_mesh).expect("tree streams");
    assert_eq!(trees.len(), landscape.tree_mesh.vertex_count());
}
