//! Leaf raster: storage-order leaves rearranged into a row-major grid.
//!
//! ```text
//!   row n-1   ┌───┬───┬───┐
//!             │   │   │   │      row 0 = lowest y
//!   ...       ├───┼───┼───┤      col 0 = lowest x
//!             │   │   │   │
//!   row 0     └───┴───┴───┘      slot = row * n + col
//!            col 0 ...  n-1
//! ```
//!
//! Grid keys come from positions, `round((p - min) / leaf_size - 0.5)`, so
//! float noise in leaf centers never reorders a row.

use glam::Vec2;

use super::pattern::Corner;
use crate::error::MeshError;
use crate::quadtree::QuadtreeNode;

/// Distance from an exact grid key a leaf center may drift before the grid
/// is rejected, in leaf sizes.
const KEY_TOLERANCE: f32 = 0.25;

/// Square raster of leaves borrowed from a quadtree.
pub struct LeafGrid<'a, T> {
  cells: Vec<&'a QuadtreeNode<T>>,
  side: usize,
}

impl<'a, T> LeafGrid<'a, T> {
  /// Sort `leaves` into raster order.
  ///
  /// The count must be `4^d`, every leaf must share one size, and the
  /// centers must cover the grid slots exactly once. Centers closer together
  /// than `f32` can resolve fail that last check.
  pub fn from_leaves(leaves: &'a [QuadtreeNode<T>]) -> Result<Self, MeshError> {
    let count = leaves.len();
    let side = square_side(count).ok_or(MeshError::LeafCountMismatch(count))?;

    let leaf_size = leaves[0].size();
    let min = leaves
      .iter()
      .fold(Vec2::splat(f32::INFINITY), |min, leaf| min.min(leaf.min()));

    let mut slots: Vec<Option<&'a QuadtreeNode<T>>> = vec![None; count];
    for leaf in leaves {
      let key = (leaf.position() - min) / leaf_size - Vec2::splat(0.5);
      let rounded = key.round();
      let irregular = || MeshError::IrregularGrid {
        row: rounded.y.max(0.0) as usize,
        col: rounded.x.max(0.0) as usize,
      };

      if leaf.size() != leaf_size
        || !key.is_finite()
        || (key - rounded).abs().max_element() > KEY_TOLERANCE
      {
        return Err(irregular());
      }
      if rounded.min_element() < 0.0 || rounded.max_element() >= side as f32 {
        return Err(irregular());
      }

      let slot = &mut slots[rounded.y as usize * side + rounded.x as usize];
      if slot.is_some() {
        return Err(irregular());
      }
      *slot = Some(leaf);
    }

    // `count` leaves landed in `count` distinct slots, so none is empty
    let cells = slots.into_iter().flatten().collect();
    Ok(Self { cells, side })
  }

  /// Leaves per row and per column.
  #[inline]
  pub fn side(&self) -> usize {
    self.side
  }

  /// Leaves in raster order.
  pub fn cells(&self) -> &[&'a QuadtreeNode<T>] {
    &self.cells
  }

  #[inline]
  pub fn get(&self, col: usize, row: usize) -> Option<&'a QuadtreeNode<T>> {
    if col >= self.side || row >= self.side {
      return None;
    }
    Some(self.cells[row * self.side + col])
  }

  /// Neighborhoods per axis: one fewer than leaves per axis.
  #[inline]
  pub fn neighborhoods_per_side(&self) -> usize {
    self.side.saturating_sub(1)
  }

  /// Corners of the neighborhood whose bottom-left leaf is `(col, row)`, in
  /// [`Corner`] ordinal order.
  #[inline]
  pub fn neighborhood(&self, col: usize, row: usize) -> [&'a QuadtreeNode<T>; 4] {
    let at = |c: usize, r: usize| self.cells[r * self.side + c];
    Corner::ALL.map(|corner| match corner {
      Corner::TopLeft => at(col, row + 1),
      Corner::TopRight => at(col + 1, row + 1),
      Corner::BottomLeft => at(col, row),
      Corner::BottomRight => at(col + 1, row),
    })
  }

  /// All neighborhoods, rows bottom to top, columns left to right.
  pub fn neighborhoods(&self) -> impl Iterator<Item = [&'a QuadtreeNode<T>; 4]> + '_ {
    let n = self.neighborhoods_per_side();
    (0..n).flat_map(move |row| (0..n).map(move |col| self.neighborhood(col, row)))
  }
}

/// `sqrt(count)` when `count` is `4^d`.
fn square_side(count: usize) -> Option<usize> {
  if count == 0 || !count.is_power_of_two() || count.trailing_zeros() % 2 != 0 {
    return None;
  }
  Some(1 << (count.trailing_zeros() / 2))
}

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;
