//! Layout constants for the flat quadtree node array.
//!
//! # Node Array Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         NODE ARRAY LAYOUT                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Index:   0 │ 1   2   3   4 │ 5  ...  20 │ 21 ...                85     │
//! │           │ │ └─ depth 1 ──┘ └ depth 2 ┘ └──────── depth 3 ───────┘     │
//! │           └─ root                                                       │
//! │                                                                         │
//! │  children(i) = 4*i + 1 ..= 4*i + 4                                      │
//! │  parent(i)   = (i - 1) / 4                                              │
//! │                                                                         │
//! │  Leaves (depth == max_depth) fill the trailing 4^max_depth slots.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quadrant Convention
//!
//! ```text
//!         +Y
//!          │      ┌─────┬─────┐
//!          │      │ TL  │ TR  │   TL = 0 (00)   TR = 1 (01)
//!          │      │  1  │  2  │   BL = 2 (10)   BR = 3 (11)
//!          │      ├─────┼─────┤
//!          │      │ BL  │ BR  │   bit 0: right of center
//!          │      │  3  │  4  │   bit 1: below center
//!          │      └─────┴─────┘
//!          └───────── +X          child slot = 4*i + 1 + quadrant
//! ```

/// Deepest subdivision accepted at construction.
///
/// Depth 12 is 16.7M leaves (~22.4M nodes); deeper trees overflow practical
/// memory long before they overflow the index math.
pub const MAX_DEPTH: u32 = 12;

/// Children per node.
pub const CHILDREN_PER_NODE: usize = 4;

/// Interpolation factor for boundary vertices between an occupied and an
/// empty corner.
pub const EDGE_MIDPOINT: f32 = 0.5;

/// Radius used by seeding to touch only the leaf under a sample point.
pub const SEED_RADIUS: f32 = 1.0e-4;

/// Number of nodes at exactly `depth`: 4^depth.
#[inline]
pub const fn nodes_at_depth(depth: u32) -> usize {
  1usize << (2 * depth)
}

/// Total node count of a tree with the given max depth: sum(4^d, d in 0..=depth).
#[inline]
pub const fn node_count(max_depth: u32) -> usize {
  (nodes_at_depth(max_depth + 1) - 1) / 3
}

/// Leaf count of a tree with the given max depth.
#[inline]
pub const fn leaf_count(max_depth: u32) -> usize {
  nodes_at_depth(max_depth)
}

/// Index of the first leaf in the flat array.
#[inline]
pub const fn first_leaf_index(max_depth: u32) -> usize {
  node_count(max_depth) - leaf_count(max_depth)
}

/// Leaves along one side of the root square: 2^depth.
#[inline]
pub const fn cells_per_side(max_depth: u32) -> usize {
  1usize << max_depth
}

/// Index of the first child of node `index`.
#[inline(always)]
pub const fn first_child_index(index: usize) -> usize {
  CHILDREN_PER_NODE * index + 1
}

/// Index of the parent of node `index`. Returns None for the root.
#[inline(always)]
pub const fn parent_index(index: usize) -> Option<usize> {
  if index == 0 {
    None
  } else {
    Some((index - 1) / CHILDREN_PER_NODE)
  }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
