//! Terrain error types.

/// Errors raised when building terrain data from external input.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TerrainError {
    /// The height vector does not cover a `grid_size × grid_size` grid.
    #[error("expected {expected} heights for a {grid_size}x{grid_size} grid, got {actual}")]
    HeightCountMismatch {
        grid_size: usize,
        expected: usize,
        actual: usize,
    },

    /// Cell spacing must be finite and strictly positive.
    #[error("cell scale must be finite and positive, got {0}")]
    InvalidScale(f32),
}
