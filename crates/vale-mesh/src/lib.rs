//! Meshing: terrain surface triangulation, procedural tree geometry, and the
//! buffer formats both share.

mod geometry;
mod packed;
mod terrain_mesh;
mod tree;

pub use geometry::GeometryBuffer;
pub use packed::{TerrainVertex, TreeVertex, interleave_terrain, interleave_trees, vertex_bytes};
pub use terrain_mesh::TerrainMeshBuilder;
pub use tree::{INDICES_PER_TREE, TreeShape, VERTICES_PER_TREE, build_tree_mesh};
