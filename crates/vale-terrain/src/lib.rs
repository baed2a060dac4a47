//! Procedural terrain generation: seeded gradient noise, grid heightmaps,
//! elevation queries, and constrained placement of surface objects.

mod error;
mod height_query;
mod heightmap;
mod noise_field;
mod scatter;

pub mod seed;

pub use error::TerrainError;
pub use height_query::{DEFAULT_MIN_CLEARANCE, HeightQuery, clamp_above_terrain};
pub use heightmap::{HeightMap, HeightmapParams};
pub use noise_field::{NoiseField, PERMUTATION_SIZE};
pub use scatter::{ObjectInstance, ObjectScatterer, ScatterParams, scatter_objects};
