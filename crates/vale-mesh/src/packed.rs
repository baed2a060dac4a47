//! Interleaved vertex formats for GPU upload.
//!
//! [`GeometryBuffer`] keeps one stream per attribute. Renderers that prefer a
//! single interleaved buffer convert with [`interleave_terrain`] or
//! [`interleave_trees`] and upload the result via [`vertex_bytes`].

use crate::geometry::GeometryBuffer;

/// A terrain vertex: position, normal and texture coordinate.
///
/// Layout (32 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..32]` uv `[f32; 2]`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 32]);

/// A vertex-colored tree vertex.
///
/// Layout (24 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` color `[f32; 3]` (linear RGB)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TreeVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

static_assertions::assert_eq_size!(TreeVertex, [u8; 24]);

/// Interleave a terrain buffer's positions, normals and UVs.
///
/// Returns `None` if the normal or UV streams do not cover every vertex.
pub fn interleave_terrain(geometry: &GeometryBuffer) -> Option<Vec<TerrainVertex>> {
    let count = geometry.vertex_count();
    if geometry.normals.len() != count * 3 || geometry.uvs.len() != count * 2 {
        return None;
    }
    let vertices = geometry
        .positions
        .chunks_exact(3)
        .zip(geometry.normals.chunks_exact(3))
        .zip(geometry.uvs.chunks_exact(2))
        .map(|((p, n), uv)| TerrainVertex {
            position: [p[0], p[1], p[2]],
            normal: [n[0], n[1], n[2]],
            uv: [uv[0], uv[1]],
        })
        .collect();
    Some(vertices)
}

/// Interleave a tree buffer's positions and colors.
///
/// Returns `None` if the color stream does not cover every vertex.
pub fn interleave_trees(geometry: &GeometryBuffer) -> Option<Vec<TreeVertex>> {
    if geometry.colors.len() != geometry.positions.len() {
        return None;
    }
    let vertices = geometry
        .positions
        .chunks_exact(3)
        .zip(geometry.colors.chunks_exact(3))
        .map(|(p, c)| TreeVertex {
            position: [p[0], p[1], p[2]],
            color: [c[0], c[1], c[2]],
        })
        .collect();
    Some(vertices)
}

/// Returns the vertex data as a byte slice for GPU upload (zero-copy).
pub fn vertex_bytes<V: bytemuck::Pod>(vertices: &[V]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
