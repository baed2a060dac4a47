//! Elevation lookup at world-space positions.
//!
//! Queries are piecewise-constant per grid cell: a position resolves to the
//! sample at the floor of its grid coordinate, with no interpolation between
//! neighbouring samples. Positions outside `[0, (N - 2) * scale)` on either
//! axis report a flat `0.0`.

use glam::Vec3;

use crate::heightmap::HeightMap;

/// Clearance kept between a camera and the ground. Default used by
/// [`clamp_above_terrain`] callers.
pub const DEFAULT_MIN_CLEARANCE: f32 = 2.0;

/// Read-only elevation lookup.
pub trait HeightQuery {
    /// Terrain elevation at world position `(x, z)`.
    fn height_at(&self, x: f32, z: f32) -> f32;
}

impl HeightQuery for HeightMap {
    fn height_at(&self, x: f32, z: f32) -> f32 {
        let n = self.grid_size();
        if n < 2 {
            return 0.0;
        }
        let max_index = (n - 2) as f32;
        let gx = (x / self.scale()).floor();
        let gz = (z / self.scale()).floor();

        // NaN fails both comparisons and falls through to the default.
        if !((0.0..=max_index).contains(&gx) && (0.0..=max_index).contains(&gz)) {
            return 0.0;
        }
        self.height(gx as usize, gz as usize)
    }
}

impl<F> HeightQuery for F
where
    F: Fn(f32, f32) -> f32,
{
    fn height_at(&self, x: f32, z: f32) -> f32 {
        self(x, z)
    }
}

/// Lift `position` so it sits at least `clearance` above the terrain.
///
/// Never lowers the position; only the Y component changes.
pub fn clamp_above_terrain<Q: HeightQuery + ?Sized>(
    heights: &Q,
    position: Vec3,
    clearance: f32,
) -> Vec3 {
    let floor = heights.height_at(position.x, position.z) + clearance;
    if position.y < floor {
        Vec3::new(position.x, floor, position.z)
    } else {
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 5x5 map, scale 2.0, with `heights[3][2] = 7.5` and a ramp elsewhere.
    fn sample_map() -> HeightMap {
        let n = 5;
        let mut heights: Vec<f32> = (0..n * n).map(|i| i as f32 * 0.1).collect();
        heights[3 * n + 2] = 7.5;
        HeightMap::from_heights(n, 2.0, 1.0, heights).unwrap()
    }

    #[test]
    fn test_returns_exact_cell_value() {
        let map = sample_map();
        assert_eq!(map.height_at(4.5, 6.5), 7.5);
    }

    #[test]
    fn test_no_interpolation_within_cell() {
        let map = sample_map();
        for &(x, z) in &[(4.0, 6.0), (4.01, 6.99), (5.99, 7.99), (5.0, 7.0)] {
            assert_eq!(
                map.height_at(x, z),
                7.5,
                "({x}, {z}) should resolve to cell (2, 3)"
            );
        }
    }

    #[test]
    fn test_outside_grid_returns_zero() {
        let map = sample_map();
        // Valid indices are 0..=3, so the range is [0, 8) in world units.
        for &(x, z) in &[
            (-0.01, 1.0),
            (1.0, -0.01),
            (8.0, 1.0),
            (1.0, 8.0),
            (100.0, 100.0),
            (-50.0, -50.0),
        ] {
            assert_eq!(map.height_at(x, z), 0.0, "({x}, {z}) should be outside");
        }
    }

    #[test]
    fn test_last_valid_cell_is_inside() {
        let map = sample_map();
        let expected = map.height(3, 3);
        assert_eq!(map.height_at(7.99, 7.99), expected);
        assert_ne!(expected, 0.0);
    }

    #[test]
    fn test_nan_returns_zero() {
        let map = sample_map();
        assert_eq!(map.height_at(f32::NAN, 1.0), 0.0);
        assert_eq!(map.height_at(1.0, f32::NAN), 0.0);
    }

    #[test]
    fn test_tiny_grids_are_flat() {
        let one = HeightMap::from_heights(1, 1.0, 1.0, vec![5.0]).unwrap();
        assert_eq!(one.height_at(0.0, 0.0), 0.0);
        let empty = HeightMap::from_heights(0, 1.0, 1.0, Vec::new()).unwrap();
        assert_eq!(empty.height_at(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_closure_is_a_height_query() {
        let slope = |x: f32, z: f32| x + z;
        assert_eq!(slope.height_at(1.0, 2.0), 3.0);
    }

    #[test]
    fn test_clamp_lifts_below_ground() {
        let ground = |_x: f32, _z: f32| -> f32 { 10.0 };
        let lifted = clamp_above_terrain(&ground, Vec3::new(1.0, 3.0, 2.0), 2.0);
        assert_eq!(lifted, Vec3::new(1.0, 12.0, 2.0));
    }

    #[test]
    fn test_clamp_keeps_high_positions() {
        let ground = |_x: f32, _z: f32| -> f32 { 10.0 };
        let pos = Vec3::new(1.0, 40.0, 2.0);
        assert_eq!(clamp_above_terrain(&ground, pos, DEFAULT_MIN_CLEARANCE), pos);
    }

    #[test]
    fn test_clamp_uses_heightmap_cells() {
        let map = sample_map();
        let lifted = clamp_above_terrain(&map, Vec3::new(4.5, 0.0, 6.5), 2.0);
        assert_eq!(lifted.y, 9.5);
    }
}
