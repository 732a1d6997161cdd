//! Precomputed outline table for marching squares.
//!
//! Maps each 4-bit pattern to the outline of its filled region, given as
//! anchors on the neighborhood: the four corners plus the four edge
//! midpoints.
//!
//! # Anchor Layout
//!
//! ```text
//!   TL ───── Top ───── TR
//!   │                   │
//!   │                   │
//!  Left               Right
//!   │                   │
//!   │                   │
//!   BL ──── Bottom ──── BR
//! ```
//!
//! # Outline Rules
//!
//! - Vertices run counter-clockwise seen from +Z (+Y up).
//! - Vertex 0 is always an occupied corner.
//! - Every outline is convex, so a fan from vertex 0 triangulates it:
//!   `(0, k, k + 1)` for `k in 1..len - 1`.
//!
//! ```text
//! Pattern 8 (TL only)      Pattern 12 (top side)     Pattern 9 (TL + BR)
//!
//!   TL──Top                  TL────────TR             TL──Top
//!   │  ╱                     │          │             │      ╲
//!   Left                     Left─────Right           Left     Right
//!                                                        ╲      │
//!                                                       Bottom──BR
//! ```

use glam::Vec2;

use super::pattern::{Corner, Pattern};
use crate::constants::EDGE_MIDPOINT;

/// Side of a neighborhood; boundary vertices sit at its midpoint.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Edge {
  Top,
  Right,
  Bottom,
  Left,
}

impl Edge {
  /// Endpoint corners. Neighboring cells name a shared edge with the same
  /// leaves in the same order.
  #[inline]
  pub fn corners(self) -> [Corner; 2] {
    match self {
      Edge::Top => [Corner::TopLeft, Corner::TopRight],
      Edge::Right => [Corner::TopRight, Corner::BottomRight],
      Edge::Bottom => [Corner::BottomLeft, Corner::BottomRight],
      Edge::Left => [Corner::TopLeft, Corner::BottomLeft],
    }
  }
}

/// Outline vertex of a shape.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Anchor {
  Corner(Corner),
  Midpoint(Edge),
}

impl Anchor {
  /// Offset inside a unit cell, origin at the top-left, y downward.
  #[inline]
  pub fn unit_offset(self) -> Vec2 {
    match self {
      Anchor::Corner(corner) => corner.unit_offset(),
      Anchor::Midpoint(edge) => {
        let [a, b] = edge.corners();
        a.unit_offset().lerp(b.unit_offset(), EDGE_MIDPOINT)
      }
    }
  }
}

const TL: Anchor = Anchor::Corner(Corner::TopLeft);
const TR: Anchor = Anchor::Corner(Corner::TopRight);
const BL: Anchor = Anchor::Corner(Corner::BottomLeft);
const BR: Anchor = Anchor::Corner(Corner::BottomRight);
const TOP: Anchor = Anchor::Midpoint(Edge::Top);
const RIGHT: Anchor = Anchor::Midpoint(Edge::Right);
const BOTTOM: Anchor = Anchor::Midpoint(Edge::Bottom);
const LEFT: Anchor = Anchor::Midpoint(Edge::Left);

/// Outline per pattern, indexed by pattern bits.
#[rustfmt::skip]
pub const SHAPE_TABLE: [&[Anchor]; 16] = [
  &[],                                  //  0: empty
  &[BR, RIGHT, BOTTOM],                 //  1: BR corner
  &[BL, BOTTOM, LEFT],                  //  2: BL corner
  &[BL, BR, RIGHT, LEFT],               //  3: bottom side
  &[TR, TOP, RIGHT],                    //  4: TR corner
  &[BR, TR, TOP, BOTTOM],               //  5: right side
  &[TR, TOP, LEFT, BL, BOTTOM, RIGHT],  //  6: TR + BL
  &[BR, TR, TOP, LEFT, BL],             //  7: TL empty
  &[TL, LEFT, TOP],                     //  8: TL corner
  &[TL, LEFT, BOTTOM, BR, RIGHT, TOP],  //  9: TL + BR
  &[TL, BL, BOTTOM, TOP],               // 10: left side
  &[BL, BR, RIGHT, TOP, TL],            // 11: TR empty
  &[TL, LEFT, RIGHT, TR],               // 12: top side
  &[TR, TL, LEFT, BOTTOM, BR],          // 13: BL empty
  &[TL, BL, BOTTOM, RIGHT, TR],         // 14: BR empty
  &[BL, BR, TR, TL],                    // 15: full
];

impl Pattern {
  /// Outline of this pattern's filled region.
  #[inline]
  pub fn outline(self) -> &'static [Anchor] {
    SHAPE_TABLE[self.bits() as usize]
  }
}

#[cfg(test)]
#[path = "shape_table_test.rs"]
mod shape_table_test;
