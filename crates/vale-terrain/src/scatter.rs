//! Rejection-sampled placement of surface objects (trees).
//!
//! Candidates are drawn uniformly over a rectangle and kept only where the
//! terrain is above the flood line and below the snow line. The number of
//! draws is capped at `attempts_per_object * count`; when the cap is hit first,
//! fewer objects are returned.

use std::ops::Range;

use glam::Vec3;
use rand::Rng;
use tracing::debug;

use crate::height_query::HeightQuery;

/// A placed object on the terrain surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectInstance {
    /// Base of the object: `(x, terrain elevation, z)`.
    pub position: Vec3,
    /// Total object height in world units.
    pub height: f32,
    /// Trunk half-width in world units.
    pub width: f32,
}

/// Placement rules for [`ObjectScatterer`].
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterParams {
    /// Number of objects requested.
    pub count: usize,
    /// World-space X interval candidates are drawn from.
    pub x_range: Range<f32>,
    /// World-space Z interval candidates are drawn from.
    pub z_range: Range<f32>,
    /// Flood level. Objects need `elevation > min_elevation + elevation_margin`.
    pub min_elevation: f32,
    /// Dry-ground buffer above `min_elevation`. Default: 0.5.
    pub elevation_margin: f32,
    /// Snow line. Objects need `elevation < max_elevation`. Default: 20.0.
    pub max_elevation: f32,
    /// Draws allowed per requested object. Default: 3.
    pub attempts_per_object: usize,
    /// Object height interval. Default: 3.0..7.0.
    pub height_range: Range<f32>,
    /// Object width interval. Default: 0.3..0.7.
    pub width_range: Range<f32>,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            count: 300,
            x_range: 0.0..400.0,
            z_range: 0.0..400.0,
            min_elevation: 5.0,
            elevation_margin: 0.5,
            max_elevation: 20.0,
            attempts_per_object: 3,
            height_range: 3.0..7.0,
            width_range: 0.3..0.7,
        }
    }
}

impl ScatterParams {
    /// Whether an elevation lies strictly inside the allowed band.
    #[inline]
    pub fn accepts(&self, elevation: f32) -> bool {
        elevation > self.min_elevation + self.elevation_margin && elevation < self.max_elevation
    }

    /// Hard cap on candidate draws.
    pub fn max_attempts(&self) -> usize {
        self.count.saturating_mul(self.attempts_per_object)
    }
}

/// Uniform draw over `range`, tolerating empty or inverted intervals.
#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    range.start + rng.random::<f32>() * (range.end - range.start)
}

/// Run one placement pass and return the accepted objects.
pub fn scatter_objects<R, Q>(
    params: &ScatterParams,
    rng: &mut R,
    heights: &Q,
) -> Vec<ObjectInstance>
where
    R: Rng + ?Sized,
    Q: HeightQuery + ?Sized,
{
    let max_attempts = params.max_attempts();
    let mut placed = Vec::with_capacity(params.count);
    let mut attempts = 0;

    while placed.len() < params.count && attempts < max_attempts {
        attempts += 1;

        let x = sample(rng, &params.x_range);
        let z = sample(rng, &params.z_range);
        let elevation = heights.height_at(x, z);
        if !params.accepts(elevation) {
            continue;
        }

        let height = sample(rng, &params.height_range);
        let width = sample(rng, &params.width_range);
        placed.push(ObjectInstance {
            position: Vec3::new(x, elevation, z),
            height,
            width,
        });
    }

    if placed.len() < params.count {
        debug!(
            requested = params.count,
            placed = placed.len(),
            attempts,
            "attempt cap reached before all objects were placed"
        );
    }

    placed
}

/// Owns the current set of placed objects.
///
/// Each [`scatter`](Self::scatter) call discards the previous set and places
/// a fresh one.
#[derive(Clone, Debug, Default)]
pub struct ObjectScatterer {
    params: ScatterParams,
    instances: Vec<ObjectInstance>,
}

impl ObjectScatterer {
    pub fn new(params: ScatterParams) -> Self {
        Self {
            params,
            instances: Vec::new(),
        }
    }

    pub fn params(&self) -> &ScatterParams {
        &self.params
    }

    /// Objects from the most recent placement pass.
    pub fn instances(&self) -> &[ObjectInstance] {
        &self.instances
    }

    /// Replace the current objects with a new placement pass.
    pub fn scatter<R, Q>(&mut self, rng: &mut R, heights: &Q) -> &[ObjectInstance]
    where
        R: Rng + ?Sized,
        Q: HeightQuery + ?Sized,
    {
        self.instances = scatter_objects(&self.params, rng, heights);
        &self.instances
    }
}
