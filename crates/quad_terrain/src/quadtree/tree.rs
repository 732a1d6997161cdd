//! Quadtree - flat, eagerly built, fixed-depth quaternary tree.

use std::fmt;
use std::ops::Range;

use glam::Vec2;

use super::bounds::{is_inside_circle, Square};
use super::listener::{QuadtreeUpdate, UpdateListener};
use super::{QuadtreeConfig, QuadtreeNode, Quadrant};
use crate::constants::{
  cells_per_side, first_child_index, first_leaf_index, leaf_count, node_count, parent_index,
  CHILDREN_PER_NODE,
};
use crate::error::QuadtreeError;

/// Depth-bounded quadtree over a square region.
///
/// All `sum(4^d)` nodes are allocated up front in one array; node `i` has its
/// children at `4*i + 1 ..= 4*i + 4` in TL, TR, BL, BR order. Only leaf data
/// changes after construction.
pub struct Quadtree<T> {
  nodes: Vec<QuadtreeNode<T>>,
  origin: Vec2,
  size: f32,
  max_depth: u32,
  listeners: Vec<Box<dyn UpdateListener>>,
}

impl<T: Copy + Default> Quadtree<T> {
  /// Build the full node array for `config`.
  pub fn new(config: &QuadtreeConfig) -> Result<Self, QuadtreeError> {
    config.validate()?;
    Ok(Self {
      nodes: build_nodes(config.origin, config.size, config.max_depth),
      origin: config.origin,
      size: config.size,
      max_depth: config.max_depth,
      listeners: Vec::new(),
    })
  }

  /// Shorthand for [`Self::new`] from raw bounds.
  pub fn with_bounds(origin: Vec2, size: f32, max_depth: u32) -> Result<Self, QuadtreeError> {
    Self::new(&QuadtreeConfig::new(origin, size, max_depth))
  }

  /// Overwrite the data of every leaf intersecting the circle, then notify
  /// listeners once.
  ///
  /// Only subtrees whose square intersects the circle are visited. Siblings
  /// are visited TL, TR, BL, BR. Returns the number of leaves written; a
  /// circle that misses the tree writes nothing but still notifies.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "quadtree::insert_damage"))]
  pub fn insert_damage(&mut self, center: Vec2, radius: f32, value: T) -> usize {
    let leaves_touched = self.damage_subtree(0, center, radius, value);

    #[cfg(feature = "tracing")]
    tracing::debug!(?center, radius, leaves_touched, "damage inserted");

    self.notify(&QuadtreeUpdate {
      center,
      radius,
      leaves_touched,
    });
    leaves_touched
  }

  fn damage_subtree(&mut self, index: usize, center: Vec2, radius: f32, value: T) -> usize {
    let node = &mut self.nodes[index];
    if !is_inside_circle(center, radius, node) {
      return 0;
    }
    if node.depth() >= self.max_depth {
      node.set_data(value);
      return 1;
    }

    let first = first_child_index(index);
    let mut touched = 0;
    for child in first..first + CHILDREN_PER_NODE {
      touched += self.damage_subtree(child, center, radius, value);
    }
    touched
  }
}

impl<T> Quadtree<T> {
  /// Register a listener; it runs inline at the end of every damage
  /// insertion, after listeners registered before it.
  pub fn add_listener(&mut self, listener: impl UpdateListener + 'static) {
    self.listeners.push(Box::new(listener));
  }

  /// Builder form of [`Self::add_listener`].
  pub fn with_listener(mut self, listener: impl UpdateListener + 'static) -> Self {
    self.add_listener(listener);
    self
  }

  pub fn listener_count(&self) -> usize {
    self.listeners.len()
  }

  fn notify(&mut self, update: &QuadtreeUpdate) {
    for listener in &mut self.listeners {
      listener.on_update(update);
    }
  }

  /// Leaves in storage order: a view over the trailing `4^max_depth` slots.
  ///
  /// Storage order is NOT raster order; sort by position before treating
  /// this as a grid.
  pub fn leaves(&self) -> &[QuadtreeNode<T>] {
    &self.nodes[first_leaf_index(self.max_depth)..]
  }

  /// Circle test against a node's footprint, strict on the boundary.
  #[inline]
  pub fn is_inside_circle(point: Vec2, radius: f32, node: &QuadtreeNode<T>) -> bool {
    is_inside_circle(point, radius, node)
  }

  /// Leaf containing `point`, or None outside the root square.
  pub fn leaf_at(&self, point: Vec2) -> Option<&QuadtreeNode<T>> {
    self.leaf_index_at(point).map(|index| &self.nodes[index])
  }

  /// Array index of the leaf containing `point`.
  ///
  /// Points on an internal boundary resolve to the left / top cell.
  pub fn leaf_index_at(&self, point: Vec2) -> Option<usize> {
    if !self.nodes[0].contains_point(point) {
      return None;
    }
    let mut index = 0;
    while self.nodes[index].depth() < self.max_depth {
      let quadrant = Quadrant::of(point, self.nodes[index].position());
      index = first_child_index(index) + quadrant.index();
    }
    Some(index)
  }

  /// All nodes, root first.
  pub fn nodes(&self) -> &[QuadtreeNode<T>] {
    &self.nodes
  }

  pub fn node(&self, index: usize) -> Option<&QuadtreeNode<T>> {
    self.nodes.get(index)
  }

  pub fn root(&self) -> &QuadtreeNode<T> {
    &self.nodes[0]
  }

  /// Child indices of `index`, or None for leaves and out-of-range indices.
  pub fn child_range(&self, index: usize) -> Option<Range<usize>> {
    let node = self.nodes.get(index)?;
    if node.depth() >= self.max_depth {
      return None;
    }
    let first = first_child_index(index);
    Some(first..first + CHILDREN_PER_NODE)
  }

  /// Parent index of `index`, or None for the root and out-of-range indices.
  pub fn parent_index(&self, index: usize) -> Option<usize> {
    if index >= self.nodes.len() {
      return None;
    }
    parent_index(index)
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn leaf_count(&self) -> usize {
    leaf_count(self.max_depth)
  }

  /// Leaves along one side of the root square.
  pub fn cells_per_side(&self) -> usize {
    cells_per_side(self.max_depth)
  }

  /// Edge length of a leaf.
  pub fn leaf_size(&self) -> f32 {
    self.size / self.cells_per_side() as f32
  }

  pub fn origin(&self) -> Vec2 {
    self.origin
  }

  pub fn size(&self) -> f32 {
    self.size
  }

  pub fn max_depth(&self) -> u32 {
    self.max_depth
  }

  /// Root footprint.
  pub fn bounds(&self) -> Square {
    Square::new(self.origin, self.size)
  }
}

impl<T> fmt::Debug for Quadtree<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Quadtree")
      .field("origin", &self.origin)
      .field("size", &self.size)
      .field("max_depth", &self.max_depth)
      .field("nodes", &self.nodes.len())
      .field("listeners", &self.listeners.len())
      .finish()
  }
}

/// Fill the array in index order. Children of node `i` are pushed while
/// visiting `i`, which lands them exactly at `4*i + 1 ..= 4*i + 4`.
fn build_nodes<T: Copy + Default>(origin: Vec2, size: f32, max_depth: u32) -> Vec<QuadtreeNode<T>> {
  let total = node_count(max_depth);
  let mut nodes = Vec::with_capacity(total);
  nodes.push(QuadtreeNode::new(origin, size, 0));

  for index in 0..first_leaf_index(max_depth) {
    let parent = nodes[index];
    debug_assert_eq!(nodes.len(), first_child_index(index));
    for quadrant in Quadrant::ALL {
      nodes.push(parent.child(quadrant));
    }
  }

  debug_assert_eq!(nodes.len(), total);
  nodes
}
