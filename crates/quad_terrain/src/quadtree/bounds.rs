//! Circle / square intersection used by damage traversal.

use glam::Vec2;

use super::QuadtreeNode;

/// Axis-aligned square given by center and edge length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
  pub center: Vec2,
  pub size: f32,
}

impl Square {
  pub fn new(center: Vec2, size: f32) -> Self {
    Self { center, size }
  }

  /// Footprint of a quadtree node.
  pub fn of_node<T>(node: &QuadtreeNode<T>) -> Self {
    Self::new(node.position(), node.size())
  }

  #[inline]
  pub fn half_size(&self) -> f32 {
    self.size * 0.5
  }

  /// Per-axis gap from `point` to the square; zero on axes where the point
  /// lies within the square's extent.
  #[inline]
  pub fn gap_to(&self, point: Vec2) -> Vec2 {
    ((self.center - point).abs() - Vec2::splat(self.half_size())).max(Vec2::ZERO)
  }

  /// Squared distance from `point` to the nearest point of the square.
  #[inline]
  pub fn distance_squared_to(&self, point: Vec2) -> f32 {
    self.gap_to(point).length_squared()
  }

  /// True iff the square's distance to `center` is strictly less than
  /// `radius`. A square exactly tangent to the circle is excluded, and a
  /// zero or negative radius never intersects.
  #[inline]
  pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
    radius > 0.0 && self.distance_squared_to(center) < radius * radius
  }
}

/// Circle test against a node's footprint.
#[inline]
pub fn is_inside_circle<T>(point: Vec2, radius: f32, node: &QuadtreeNode<T>) -> bool {
  Square::of_node(node).intersects_circle(point, radius)
}
