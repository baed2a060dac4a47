//! Flat, renderer-agnostic geometry buffers.
//!
//! Each attribute lives in its own tightly packed `Vec<f32>` so a renderer can
//! upload it as a separate vertex stream. Attributes that a mesh does not use
//! stay empty: terrain fills `normals` and `uvs`, trees fill `colors`.

/// Vertex and index data produced by the meshing passes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryBuffer {
    /// XYZ per vertex.
    pub positions: Vec<f32>,
    /// Unit normal per vertex (terrain only).
    pub normals: Vec<f32>,
    /// UV per vertex (terrain only).
    pub uvs: Vec<f32>,
    /// RGB per vertex (trees only).
    pub colors: Vec<f32>,
    /// Triangle list, 3 indices per triangle.
    pub indices: Vec<u32>,
}

impl GeometryBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices (positions / 3).
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles (indices / 3).
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the buffer holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of vertex `i`.
    pub fn position(&self, i: usize) -> [f32; 3] {
        let p = &self.positions[i * 3..i * 3 + 3];
        [p[0], p[1], p[2]]
    }

    /// Normal of vertex `i`.
    pub fn normal(&self, i: usize) -> [f32; 3] {
        let n = &self.normals[i * 3..i * 3 + 3];
        [n[0], n[1], n[2]]
    }

    /// Push a vertex with a color and return its index.
    pub fn push_colored_vertex(&mut self, position: [f32; 3], color: [f32; 3]) -> u32 {
        let index = self.vertex_count() as u32;
        self.positions.extend_from_slice(&position);
        self.colors.extend_from_slice(&color);
        index
    }

    /// Push one triangle, offsetting each local index by `base`.
    pub fn push_triangle(&mut self, base: u32, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[base + a, base + b, base + c]);
    }

    /// Append `other`, shifting its indices past this buffer's vertices.
    pub fn append(&mut self, other: &GeometryBuffer) {
        let base = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.colors.extend_from_slice(&other.colors);
        self.indices.extend(other.indices.iter().map(|&i| i + base));
    }

    /// Returns `true` if every index refers to an existing vertex.
    pub fn indices_in_bounds(&self) -> bool {
        let count = self.vertex_count() as u32;
        self.indices.iter().all(|&i| i < count)
    }

    /// Returns the index data as a byte slice for GPU upload (zero-copy).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
