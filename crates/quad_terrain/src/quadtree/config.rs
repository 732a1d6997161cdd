//! QuadtreeConfig - root placement and subdivision depth.

use glam::Vec2;

use crate::constants::{cells_per_side, MAX_DEPTH};
use crate::error::QuadtreeError;

/// Root square and fixed depth of a quadtree.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadtreeConfig {
  /// Center of the root square.
  pub origin: Vec2,

  /// Edge length of the root square.
  pub size: f32,

  /// Subdivision depth; leaves live at exactly this depth.
  pub max_depth: u32,
}

impl QuadtreeConfig {
  pub fn new(origin: Vec2, size: f32, max_depth: u32) -> Self {
    Self {
      origin,
      size,
      max_depth,
    }
  }

  pub fn with_origin(mut self, origin: Vec2) -> Self {
    self.origin = origin;
    self
  }

  pub fn with_size(mut self, size: f32) -> Self {
    self.size = size;
    self
  }

  pub fn with_max_depth(mut self, max_depth: u32) -> Self {
    self.max_depth = max_depth;
    self
  }

  /// Reject non-finite or non-positive sizes and depths past [`MAX_DEPTH`].
  pub fn validate(&self) -> Result<(), QuadtreeError> {
    if !self.size.is_finite() || self.size <= 0.0 {
      return Err(QuadtreeError::InvalidSize(self.size));
    }
    if self.max_depth > MAX_DEPTH {
      return Err(QuadtreeError::DepthTooLarge(self.max_depth));
    }
    Ok(())
  }

  /// Edge length of a leaf cell.
  #[inline]
  pub fn leaf_size(&self) -> f32 {
    self.size / cells_per_side(self.max_depth) as f32
  }
}

impl Default for QuadtreeConfig {
  fn default() -> Self {
    Self {
      origin: Vec2::ZERO,
      size: 5.0,
      max_depth: 2,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_is_valid() {
    assert!(QuadtreeConfig::default().validate().is_ok());
  }

  #[test]
  fn test_rejects_bad_size() {
    for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
      let config = QuadtreeConfig::default().with_size(size);
      assert!(
        matches!(config.validate(), Err(QuadtreeError::InvalidSize(_))),
        "Size {} should be rejected",
        size
      );
    }
  }

  #[test]
  fn test_rejects_deep_tree() {
    let config = QuadtreeConfig::default().with_max_depth(MAX_DEPTH + 1);
    assert_eq!(
      config.validate(),
      Err(QuadtreeError::DepthTooLarge(MAX_DEPTH + 1))
    );
    assert!(QuadtreeConfig::default()
      .with_max_depth(MAX_DEPTH)
      .validate()
      .is_ok());
  }

  #[test]
  fn test_leaf_size() {
    let config = QuadtreeConfig::new(Vec2::ZERO, 4.0, 2);
    assert_eq!(config.leaf_size(), 1.0);
  }
}
