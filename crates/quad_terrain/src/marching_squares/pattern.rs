//! Corner occupancy classification.
//!
//! A neighborhood is four adjacent leaf centers. Each occupied corner sets
//! one bit of a 4-bit pattern index:
//!
//! ```text
//!   TL ──── TR        TL = 8   TR = 4
//!   │        │        BL = 2   BR = 1
//!   │        │
//!   BL ──── BR        index = TL | TR | BL | BR   (0..=15)
//! ```

use glam::Vec2;

/// Corner of a 2x2 neighborhood.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Corner {
  TopLeft = 0,
  TopRight = 1,
  BottomLeft = 2,
  BottomRight = 3,
}

impl Corner {
  /// Corners in ordinal order.
  pub const ALL: [Corner; 4] = [
    Corner::TopLeft,
    Corner::TopRight,
    Corner::BottomLeft,
    Corner::BottomRight,
  ];

  /// Ordinal, also the slot in per-cell corner arrays.
  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  /// Bit contributed to the pattern index when occupied.
  #[inline]
  pub fn bit(self) -> u8 {
    8 >> (self as u8)
  }

  /// Offset inside a unit cell, origin at the top-left, y downward.
  #[inline]
  pub fn unit_offset(self) -> Vec2 {
    match self {
      Corner::TopLeft => Vec2::new(0.0, 0.0),
      Corner::TopRight => Vec2::new(1.0, 0.0),
      Corner::BottomLeft => Vec2::new(0.0, 1.0),
      Corner::BottomRight => Vec2::new(1.0, 1.0),
    }
  }
}

/// Shape family of a pattern; fixes the triangle count.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PatternKind {
  Empty,
  /// One occupied corner.
  Corner,
  /// Two occupied corners sharing an edge.
  Side,
  /// Two occupied corners on a diagonal.
  Diagonal,
  /// Three occupied corners.
  OneEmpty,
  Full,
}

impl PatternKind {
  pub fn triangle_count(self) -> usize {
    match self {
      PatternKind::Empty => 0,
      PatternKind::Corner => 1,
      PatternKind::Side => 2,
      PatternKind::Diagonal => 4,
      PatternKind::OneEmpty => 3,
      PatternKind::Full => 2,
    }
  }
}

/// The 16 corner occupancy patterns; the discriminant is the bit index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Pattern {
  Empty = 0,
  BottomRightCorner = 1,
  BottomLeftCorner = 2,
  BottomSide = 3,
  TopRightCorner = 4,
  RightSide = 5,
  /// TR + BL.
  DiagonalRising = 6,
  TopLeftEmpty = 7,
  TopLeftCorner = 8,
  /// TL + BR.
  DiagonalFalling = 9,
  LeftSide = 10,
  TopRightEmpty = 11,
  TopSide = 12,
  BottomLeftEmpty = 13,
  BottomRightEmpty = 14,
  Full = 15,
}

impl Pattern {
  /// All patterns, indexed by their bits.
  pub const ALL: [Pattern; 16] = [
    Pattern::Empty,
    Pattern::BottomRightCorner,
    Pattern::BottomLeftCorner,
    Pattern::BottomSide,
    Pattern::TopRightCorner,
    Pattern::RightSide,
    Pattern::DiagonalRising,
    Pattern::TopLeftEmpty,
    Pattern::TopLeftCorner,
    Pattern::DiagonalFalling,
    Pattern::LeftSide,
    Pattern::TopRightEmpty,
    Pattern::TopSide,
    Pattern::BottomLeftEmpty,
    Pattern::BottomRightEmpty,
    Pattern::Full,
  ];

  /// Pattern for a bit index; bits above the low four are ignored.
  #[inline]
  pub fn from_bits(bits: u8) -> Self {
    Self::ALL[(bits & 0x0F) as usize]
  }

  /// Classify occupancy given in corner ordinal order (TL, TR, BL, BR).
  #[inline]
  pub fn classify(occupied: [bool; 4]) -> Self {
    let bits = Corner::ALL
      .iter()
      .zip(occupied)
      .filter(|(_, occupied)| *occupied)
      .fold(0u8, |bits, (corner, _)| bits | corner.bit());
    Self::from_bits(bits)
  }

  #[inline]
  pub fn bits(self) -> u8 {
    self as u8
  }

  /// True when `corner` is occupied in this pattern.
  #[inline]
  pub fn has(self, corner: Corner) -> bool {
    self.bits() & corner.bit() != 0
  }

  pub fn kind(self) -> PatternKind {
    match self.bits().count_ones() {
      0 => PatternKind::Empty,
      1 => PatternKind::Corner,
      2 if matches!(self, Pattern::DiagonalRising | Pattern::DiagonalFalling) => {
        PatternKind::Diagonal
      }
      2 => PatternKind::Side,
      3 => PatternKind::OneEmpty,
      _ => PatternKind::Full,
    }
  }

  #[inline]
  pub fn triangle_count(self) -> usize {
    self.kind().triangle_count()
  }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
