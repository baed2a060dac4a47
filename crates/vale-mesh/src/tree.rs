//! Procedural tree geometry: a tapered four-sided trunk topped by a
//! four-sided leaf pyramid, vertex-colored.

use tracing::debug;
use vale_terrain::ObjectInstance;

use crate::geometry::GeometryBuffer;

/// Vertices emitted per tree (8 trunk + 5 canopy).
pub const VERTICES_PER_TREE: usize = 13;
/// Indices emitted per tree (4 trunk quads + 4 canopy triangles).
pub const INDICES_PER_TREE: usize = 36;

/// Proportions and colors of the generated tree shape.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeShape {
    /// Trunk height as a fraction of tree height. Default: 0.6.
    pub trunk_height_ratio: f32,
    /// Top-to-bottom width ratio of the trunk. Default: 0.8.
    pub trunk_taper: f32,
    /// Canopy base height as a fraction of tree height. Default: 0.5.
    pub canopy_base_ratio: f32,
    /// Canopy height as a fraction of tree height. Default: 0.5.
    pub canopy_height_ratio: f32,
    /// Canopy base half-width relative to trunk width. Default: 2.5.
    pub canopy_width_ratio: f32,
    /// Trunk RGB. Default: brown.
    pub trunk_color: [f32; 3],
    /// Canopy base RGB. Default: green.
    pub leaf_color: [f32; 3],
    /// Brightness multiplier applied to the canopy apex. Default: 0.8.
    pub apex_shade: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            trunk_height_ratio: 0.6,
            trunk_taper: 0.8,
            canopy_base_ratio: 0.5,
            canopy_height_ratio: 0.5,
            canopy_width_ratio: 2.5,
            trunk_color: [0.4, 0.25, 0.1],
            leaf_color: [0.1, 0.6, 0.1],
            apex_shade: 0.8,
        }
    }
}

impl TreeShape {
    /// Append one tree's trunk and canopy to `out`.
    pub fn push_tree(&self, out: &mut GeometryBuffer, tree: &ObjectInstance) {
        self.push_trunk(out, tree);
        self.push_canopy(out, tree);
    }

    fn push_trunk(&self, out: &mut GeometryBuffer, tree: &ObjectInstance) {
        let [x, y, z] = tree.position.to_array();
        let w = tree.width;
        let t = w * self.trunk_taper;
        let top = y + tree.height * self.trunk_height_ratio;
        let color = self.trunk_color;

        let base = out.vertex_count() as u32;
        for (dx, dz) in [(-w, -w), (w, -w), (w, w), (-w, w)] {
            out.push_colored_vertex([x + dx, y, z + dz], color);
        }
        for (dx, dz) in [(-t, -t), (t, -t), (t, t), (-t, t)] {
            out.push_colored_vertex([x + dx, top, z + dz], color);
        }

        // Side i joins bottom corners i, i+1 with the top corners above them.
        for i in 0..4 {
            let next = (i + 1) % 4;
            out.push_triangle(base, i, next, next + 4);
            out.push_triangle(base, next + 4, i + 4, i);
        }
    }

    fn push_canopy(&self, out: &mut GeometryBuffer, tree: &ObjectInstance) {
        let [x, y, z] = tree.position.to_array();
        let floor = y + tree.height * self.canopy_base_ratio;
        let w = tree.width * self.canopy_width_ratio;
        let h = tree.height * self.canopy_height_ratio;
        let apex_color = self.leaf_color.map(|c| c * self.apex_shade);

        let base = out.vertex_count() as u32;
        out.push_colored_vertex([x, floor + h, z], apex_color);
        for (dx, dz) in [(-w, -w), (w, -w), (w, w), (-w, w)] {
            out.push_colored_vertex([x + dx, floor, z + dz], self.leaf_color);
        }

        for i in 1..=4 {
            let next = i % 4 + 1;
            out.push_triangle(base, 0, i, next);
        }
    }
}

/// Build one combined mesh for all `trees`.
pub fn build_tree_mesh(trees: &[ObjectInstance], shape: &TreeShape) -> GeometryBuffer {
    let mut out = GeometryBuffer {
        positions: Vec::with_capacity(trees.len() * VERTICES_PER_TREE * 3),
        colors: Vec::with_capacity(trees.len() * VERTICES_PER_TREE * 3),
        indices: Vec::with_capacity(trees.len() * INDICES_PER_TREE),
        ..Default::default()
    };
    for tree in trees {
        shape.push_tree(&mut out, tree);
    }
    debug!(
        trees = trees.len(),
        vertices = out.vertex_count(),
        "tree mesh built"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn tree_at(x: f32, y: f32, z: f32) -> ObjectInstance {
        ObjectInstance {
            position: Vec3::new(x, y, z),
            height: 5.0,
            width: 0.5,
        }
    }

    fn assert_close(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-5, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_counts_per_tree() {
        let trees = [tree_at(0.0, 0.0, 0.0), tree_at(10.0, 2.0, 3.0)];
        let mesh = build_tree_mesh(&trees, &TreeShape::default());
        assert_eq!(mesh.vertex_count(), 2 * VERTICES_PER_TREE);
        assert_eq!(mesh.indices.len(), 2 * INDICES_PER_TREE);
        assert_eq!(mesh.colors.len(), mesh.positions.len());
        assert!(mesh.normals.is_empty() && mesh.uvs.is_empty());
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_second_tree_indices_are_offset() {
        let trees = [tree_at(0.0, 0.0, 0.0), tree_at(10.0, 0.0, 0.0)];
        let mesh = build_tree_mesh(&trees, &TreeShape::default());
        let second = &mesh.indices[INDICES_PER_TREE..];
        assert!(
            second.iter().all(|&i| i as usize >= VERTICES_PER_TREE),
            "Second tree must only reference its own vertices"
        );
    }

    #[test]
    fn test_trunk_geometry() {
        let mesh = build_tree_mesh(&[tree_at(1.0, 2.0, 3.0)], &TreeShape::default());
        assert_close(mesh.position(0), [0.5, 2.0, 2.5]);
        assert_close(mesh.position(2), [1.5, 2.0, 3.5]);
        // Top ring: 0.8 taper, 60% of height.
        assert_close(mesh.position(4), [0.6, 5.0, 2.6]);
        assert_eq!(&mesh.indices[0..6], &[0, 1, 5, 5, 4, 0]);
        assert_eq!(&mesh.indices[18..24], &[3, 0, 4, 4, 7, 3]);
        assert_eq!(&mesh.colors[0..3], &[0.4, 0.25, 0.1]);
    }

    #[test]
    fn test_canopy_geometry() {
        let mesh = build_tree_mesh(&[tree_at(0.0, 1.0, 0.0)], &TreeShape::default());
        // Apex at base + 0.5h + 0.5h.
        assert_close(mesh.position(8), [0.0, 6.0, 0.0]);
        assert_close(mesh.position(9), [-1.25, 3.5, -1.25]);
        assert_eq!(&mesh.indices[24..27], &[8, 9, 10]);
        assert_eq!(&mesh.indices[33..36], &[8, 12, 9]);
        let apex = &mesh.colors[24..27];
        assert!((apex[1] - 0.48).abs() < 1e-6, "apex should be shaded: {apex:?}");
    }

    #[test]
    fn test_no_trees_empty_mesh() {
        let mesh = build_tree_mesh(&[], &TreeShape::default());
        assert!(mesh.is_empty());
        assert!(mesh.indices.is_empty());
    }
}
