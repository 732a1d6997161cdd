//! Error types for quadtree construction, meshing and seeding.
//!
//! Every error here is an input-validation failure reported synchronously.
//! Degenerate but valid inputs (a damage circle outside the tree, an all-empty
//! grid) are not errors and produce empty results instead.

use thiserror::Error;

use crate::constants::MAX_DEPTH;

/// Result alias defaulting to [`TerrainError`].
pub type Result<T, E = TerrainError> = std::result::Result<T, E>;

/// Quadtree construction failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadtreeError {
  /// Root size must be finite and strictly positive.
  #[error("quadtree size must be finite and > 0, got {0}")]
  InvalidSize(f32),

  /// Depth beyond [`MAX_DEPTH`].
  #[error("quadtree depth {0} exceeds the maximum of {max}", max = MAX_DEPTH)]
  DepthTooLarge(u32),
}

/// Mesh building failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
  /// Leaf count is not 4^d for any supported depth.
  #[error("leaf count {0} is not a square grid of 2^d x 2^d cells")]
  LeafCountMismatch(usize),

  /// Leaves do not cover the raster exactly once.
  #[error("leaf at grid slot ({row}, {col}) is missing or duplicated")]
  IrregularGrid { row: usize, col: usize },
}

/// Seed source construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
  /// Pixel buffer length does not match width * height * 3.
  #[error("expected {expected} bytes for the image, got {actual}")]
  BufferSizeMismatch { expected: usize, actual: usize },

  /// Width or height is zero.
  #[error("image dimensions must be non-zero")]
  EmptyImage,

  /// Image file could not be read or decoded.
  #[cfg(feature = "image")]
  #[error("failed to load seed image: {0}")]
  Decode(String),
}

/// Top-level error for the [`crate::terrain::Terrain`] facade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
  #[error(transparent)]
  Quadtree(#[from] QuadtreeError),

  #[error(transparent)]
  Mesh(#[from] MeshError),

  #[error(transparent)]
  Seed(#[from] SeedError),
}
