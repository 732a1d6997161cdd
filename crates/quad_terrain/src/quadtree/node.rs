//! QuadtreeNode - one square cell of the flat node array.
//!
//! Position, size and depth are fixed at construction. Only `data` changes,
//! and only through damage insertion on the owning [`super::Quadtree`].

use glam::Vec2;

/// Quadrant of a node relative to its parent's center.
///
/// Bit 0 set = right half, bit 1 set = bottom half (+Y is up).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Quadrant {
  TopLeft = 0,
  TopRight = 1,
  BottomLeft = 2,
  BottomRight = 3,
}

impl Quadrant {
  /// All quadrants in child-slot order.
  pub const ALL: [Quadrant; 4] = [
    Quadrant::TopLeft,
    Quadrant::TopRight,
    Quadrant::BottomLeft,
    Quadrant::BottomRight,
  ];

  /// Quadrant of `point` relative to `center`.
  ///
  /// Points exactly on the center lines fall into the left / top half.
  #[inline]
  pub fn of(point: Vec2, center: Vec2) -> Self {
    let mut index = 0u8;
    if point.x > center.x {
      index |= 1;
    }
    if point.y < center.y {
      index |= 2;
    }
    Self::ALL[index as usize]
  }

  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  #[inline]
  pub fn is_right(self) -> bool {
    (self as u8) & 1 != 0
  }

  #[inline]
  pub fn is_bottom(self) -> bool {
    (self as u8) & 2 != 0
  }

  /// Unit direction from the parent center to this quadrant's center.
  #[inline]
  pub fn direction(self) -> Vec2 {
    Vec2::new(
      if self.is_right() { 1.0 } else { -1.0 },
      if self.is_bottom() { -1.0 } else { 1.0 },
    )
  }
}

/// A square cell in the quadtree.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuadtreeNode<T> {
  position: Vec2,
  size: f32,
  depth: u32,
  data: T,
}

impl<T: Default> QuadtreeNode<T> {
  /// Create a node holding the default (empty) material.
  pub fn new(position: Vec2, size: f32, depth: u32) -> Self {
    Self {
      position,
      size,
      depth,
      data: T::default(),
    }
  }

  /// Child node in the given quadrant: half the size, offset by size/4.
  pub fn child(&self, quadrant: Quadrant) -> Self {
    Self::new(
      self.position + quadrant.direction() * (self.size * 0.25),
      self.size * 0.5,
      self.depth + 1,
    )
  }
}

impl<T> QuadtreeNode<T> {
  /// Center of the cell.
  #[inline]
  pub fn position(&self) -> Vec2 {
    self.position
  }

  /// Edge length of the cell.
  #[inline]
  pub fn size(&self) -> f32 {
    self.size
  }

  #[inline]
  pub fn half_size(&self) -> f32 {
    self.size * 0.5
  }

  /// Depth in the tree (root = 0).
  #[inline]
  pub fn depth(&self) -> u32 {
    self.depth
  }

  /// Material value.
  #[inline]
  pub fn data(&self) -> &T {
    &self.data
  }

  #[inline]
  pub(crate) fn set_data(&mut self, data: T) {
    self.data = data;
  }

  /// Minimum (bottom-left) corner.
  #[inline]
  pub fn min(&self) -> Vec2 {
    self.position - Vec2::splat(self.half_size())
  }

  /// Maximum (top-right) corner.
  #[inline]
  pub fn max(&self) -> Vec2 {
    self.position + Vec2::splat(self.half_size())
  }

  /// Top-left corner, where cell-local texture coordinates start.
  #[inline]
  pub fn top_left(&self) -> Vec2 {
    Vec2::new(self.position.x - self.half_size(), self.position.y + self.half_size())
  }

  /// Check if the cell contains a point (boundary inclusive).
  #[inline]
  pub fn contains_point(&self, point: Vec2) -> bool {
    let min = self.min();
    let max = self.max();
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
