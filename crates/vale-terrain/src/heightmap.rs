//! Grid heightmap sampled from fractal gradient noise.
//!
//! The grid is square and stored row-major (`z * grid_size + x`). It is filled
//! once and never mutated, so consumers share it by reference.

use tracing::debug;

use crate::error::TerrainError;
use crate::noise_field::NoiseField;

/// Parameters controlling how noise is sampled onto the height grid.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightmapParams {
    /// Number of samples along each side of the grid.
    pub grid_size: usize,
    /// World units between adjacent grid samples. Default: 2.0.
    pub scale: f32,
    /// Vertical exaggeration applied to the normalized noise. Default: 30.0.
    pub height_scale: f32,
    /// Number of noise octaves. Default: 6.
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves. Default: 0.5.
    pub persistence: f64,
    /// Multiplier applied to the normalized grid coordinate before sampling.
    /// Controls feature size independent of grid resolution. Default: 5.0.
    pub frequency: f64,
}

impl Default for HeightmapParams {
    fn default() -> Self {
        Self {
            grid_size: 200,
            scale: 2.0,
            height_scale: 30.0,
            octaves: 6,
            persistence: 0.5,
            frequency: 5.0,
        }
    }
}

/// A square grid of terrain elevations.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightMap {
    grid_size: usize,
    scale: f32,
    height_scale: f32,
    heights: Vec<f32>,
}

impl HeightMap {
    /// Sample `noise` over the grid described by `params`.
    ///
    /// Cell `(x, z)` holds
    /// `fractal_2d(x / N * frequency, z / N * frequency, octaves, persistence) * height_scale`.
    pub fn generate(noise: &NoiseField, params: &HeightmapParams) -> Self {
        let n = params.grid_size;
        let mut heights = Vec::with_capacity(n * n);

        for z in 0..n {
            for x in 0..n {
                let nx = x as f64 / n as f64 * params.frequency;
                let nz = z as f64 / n as f64 * params.frequency;
                let h = noise.fractal_2d(nx, nz, params.octaves, params.persistence);
                heights.push(h as f32 * params.height_scale);
            }
        }

        debug!(
            grid_size = n,
            seed = noise.seed(),
            octaves = params.octaves,
            "heightmap generated"
        );

        Self {
            grid_size: n,
            scale: params.scale,
            height_scale: params.height_scale,
            heights,
        }
    }

    /// Wrap pre-computed row-major heights.
    pub fn from_heights(
        grid_size: usize,
        scale: f32,
        height_scale: f32,
        heights: Vec<f32>,
    ) -> Result<Self, TerrainError> {
        let expected = grid_size * grid_size;
        if heights.len() != expected {
            return Err(TerrainError::HeightCountMismatch {
                grid_size,
                expected,
                actual: heights.len(),
            });
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(TerrainError::InvalidScale(scale));
        }
        Ok(Self {
            grid_size,
            scale,
            height_scale,
            heights,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn height_scale(&self) -> f32 {
        self.height_scale
    }

    /// All heights, row-major.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Height stored at grid cell `(x, z)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= grid_size`.
    #[inline]
    pub fn height(&self, x: usize, z: usize) -> f32 {
        assert!(x < self.grid_size && z < self.grid_size);
        self.heights[z * self.grid_size + x]
    }

    /// Side length of the sampled area in world units (`grid_size * scale`).
    pub fn world_extent(&self) -> f32 {
        self.grid_size as f32 * self.scale
    }

    /// Lowest and highest stored elevation, or `None` for an empty grid.
    pub fn elevation_range(&self) -> Option<(f32, f32)> {
        let mut iter = self.heights.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), h| (lo.min(h), hi.max(h))))
    }
}
