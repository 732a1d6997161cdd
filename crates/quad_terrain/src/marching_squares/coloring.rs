//! Vertex color assignment.
//!
//! Each cell resolves its four corner materials to palette colors once; the
//! [`VertexColoring`] strategy then picks a color for every emitted vertex.

use smallvec::{smallvec, SmallVec};

use super::pattern::{Corner, Pattern};
use super::shape_table::Anchor;
use crate::types::{colors, Color};

/// Material palette: `palette_index()` selects an entry, clamped to the last.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedPalette {
  colors: SmallVec<[Color; 4]>,
}

impl IndexedPalette {
  pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
    Self {
      colors: colors.into_iter().collect(),
    }
  }

  /// Append an entry for the next material index.
  pub fn with_color(mut self, color: Color) -> Self {
    self.colors.push(color);
    self
  }

  /// Color for a palette index. Indices past the end use the last entry; an
  /// empty palette yields white.
  #[inline]
  pub fn color(&self, index: usize) -> Color {
    self
      .colors
      .get(index)
      .or_else(|| self.colors.last())
      .copied()
      .unwrap_or(colors::WHITE)
  }

  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }
}

impl Default for IndexedPalette {
  /// Clear for the empty material, then red, green, blue.
  fn default() -> Self {
    Self {
      colors: smallvec![colors::CLEAR, colors::RED, colors::GREEN, colors::BLUE],
    }
  }
}

/// How emitted vertices are colored.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum VertexColoring {
  /// Corner vertices take their own material color; midpoints take the
  /// color of the occupied endpoint of their edge.
  #[default]
  OccupiedSide,

  /// The k-th vertex of a shape takes the color of corner k (TL, TR, BL, BR).
  /// Later vertices reuse the last ordinal corner: BL for the rising
  /// diagonal, BR otherwise. The bottom-right-corner and falling-diagonal
  /// shapes are painted entirely with `placeholder`.
  CornerOrdinal { placeholder: Color },
}

impl VertexColoring {
  /// [`VertexColoring::CornerOrdinal`] with a red placeholder.
  pub fn corner_ordinal() -> Self {
    VertexColoring::CornerOrdinal {
      placeholder: colors::RED,
    }
  }

  /// Color of the `ordinal`-th outline vertex of `pattern`, placed at
  /// `anchor`. `corner_colors` is indexed by [`Corner::index`].
  #[inline]
  pub fn vertex_color(
    &self,
    pattern: Pattern,
    ordinal: usize,
    anchor: Anchor,
    corner_colors: &[Color; 4],
  ) -> Color {
    match *self {
      VertexColoring::OccupiedSide => match anchor {
        Anchor::Corner(corner) => corner_colors[corner.index()],
        Anchor::Midpoint(edge) => {
          let [a, b] = edge.corners();
          let source = if pattern.has(a) || !pattern.has(b) { a } else { b };
          corner_colors[source.index()]
        }
      },
      VertexColoring::CornerOrdinal { placeholder } => {
        if matches!(
          pattern,
          Pattern::BottomRightCorner | Pattern::DiagonalFalling
        ) {
          placeholder
        } else {
          let last = match pattern {
            Pattern::DiagonalRising => Corner::BottomLeft.index(),
            _ => Corner::ALL.len() - 1,
          };
          corner_colors[Corner::ALL[ordinal.min(last)].index()]
        }
      }
    }
  }
}

#[cfg(test)]
#[path = "coloring_test.rs"]
mod coloring_test;
