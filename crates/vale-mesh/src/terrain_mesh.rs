//! Heightmap to triangle mesh conversion.
//!
//! Vertex `z * N + x` sits at `(x * scale, height(x, z), z * scale)`. Each grid
//! cell becomes two triangles wound counter-clockwise when seen from above.
//! Normals come from the neighbouring vertices rather than face averaging.

use glam::Vec3;
use tracing::debug;
use vale_terrain::HeightMap;

use crate::geometry::GeometryBuffer;

/// Builds renderable terrain geometry from a [`HeightMap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TerrainMeshBuilder;

impl TerrainMeshBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Produce positions, normals, UVs and indices for `map`.
    pub fn build(&self, map: &HeightMap) -> GeometryBuffer {
        let n = map.grid_size();
        let positions = build_positions(map);
        let normals = build_normals(&positions, n);
        let uvs = build_uvs(n);
        let indices = build_indices(n);

        debug!(
            vertices = n * n,
            triangles = indices.len() / 3,
            "terrain mesh built"
        );

        GeometryBuffer {
            positions,
            normals,
            uvs,
            colors: Vec::new(),
            indices,
        }
    }
}

fn build_positions(map: &HeightMap) -> Vec<f32> {
    let n = map.grid_size();
    let scale = map.scale();
    let mut positions = Vec::with_capacity(n * n * 3);
    for z in 0..n {
        for x in 0..n {
            positions.extend_from_slice(&[x as f32 * scale, map.height(x, z), z as f32 * scale]);
        }
    }
    positions
}

fn build_uvs(n: usize) -> Vec<f32> {
    let mut uvs = Vec::with_capacity(n * n * 2);
    // A single vertex has no extent to normalize against.
    let denom = if n > 1 { (n - 1) as f32 } else { 1.0 };
    for z in 0..n {
        for x in 0..n {
            uvs.push(x as f32 / denom);
            uvs.push(z as f32 / denom);
        }
    }
    uvs
}

fn build_indices(n: usize) -> Vec<u32> {
    let cells = n.saturating_sub(1);
    let mut indices = Vec::with_capacity(cells * cells * 6);
    for z in 0..cells {
        for x in 0..cells {
            let top_left = (z * n + x) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((z + 1) * n + x) as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
        }
    }
    indices
}

/// Per-vertex normals from the left/top and right/bottom neighbour pairs.
///
/// Edge vertices use whichever pair exists. A vertex with neither pair (the
/// two off-diagonal corners) gets `+Y`.
fn build_normals(positions: &[f32], n: usize) -> Vec<f32> {
    let at = |x: usize, z: usize| {
        let i = (z * n + x) * 3;
        Vec3::new(positions[i], positions[i + 1], positions[i + 2])
    };

    let mut normals = Vec::with_capacity(n * n * 3);
    for z in 0..n {
        for x in 0..n {
            let v = at(x, z);
            let mut sum = Vec3::ZERO;

            if x > 0 && z > 0 {
                let to_left = at(x - 1, z) - v;
                let to_top = at(x, z - 1) - v;
                sum += to_top.cross(to_left);
            }
            if x + 1 < n && z + 1 < n {
                let to_right = at(x + 1, z) - v;
                let to_bottom = at(x, z + 1) - v;
                sum += to_bottom.cross(to_right);
            }

            let normal = sum.try_normalize().unwrap_or(Vec3::Y);
            normals.extend_from_slice(&normal.to_array());
        }
    }
    normals
}
