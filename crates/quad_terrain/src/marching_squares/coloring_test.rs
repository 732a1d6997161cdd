use super::*;
use crate::marching_squares::shape_table::Edge;

const TL_COLOR: Color = Color::new(0.1, 0.0, 0.0, 1.0);
const TR_COLOR: Color = Color::new(0.0, 0.2, 0.0, 1.0);
const BL_COLOR: Color = Color::new(0.0, 0.0, 0.3, 1.0);
const BR_COLOR: Color = Color::new(0.4, 0.4, 0.0, 1.0);
const CORNERS: [Color; 4] = [TL_COLOR, TR_COLOR, BL_COLOR, BR_COLOR];

fn shape_colors(coloring: VertexColoring, pattern: Pattern) -> Vec<Color> {
  pattern
    .outline()
    .iter()
    .enumerate()
    .map(|(ordinal, &anchor)| coloring.vertex_color(pattern, ordinal, anchor, &CORNERS))
    .collect()
}

// =========================================================================
// Batch 1: IndexedPalette
// =========================================================================

#[test]
fn test_default_palette() {
  let palette = IndexedPalette::default();
  assert_eq!(palette.len(), 4);
  assert_eq!(palette.color(0), colors::CLEAR);
  assert_eq!(palette.color(1), colors::RED);
  assert_eq!(palette.color(2), colors::GREEN);
  assert_eq!(palette.color(3), colors::BLUE);
}

#[test]
fn test_palette_clamps_to_last_entry() {
  let palette = IndexedPalette::default();
  assert_eq!(palette.color(4), colors::BLUE);
  assert_eq!(palette.color(usize::MAX), colors::BLUE);
}

#[test]
fn test_custom_and_empty_palette() {
  let palette = IndexedPalette::new([colors::WHITE]).with_color(colors::GREEN);
  assert_eq!(palette.color(0), colors::WHITE);
  assert_eq!(palette.color(7), colors::GREEN);

  let empty = IndexedPalette::new([]);
  assert!(empty.is_empty());
  assert_eq!(empty.color(0), colors::WHITE);
}

// =========================================================================
// Batch 2: OccupiedSide
// =========================================================================

#[test]
fn test_occupied_side_corner_vertices_keep_own_color() {
  let pattern = Pattern::Full;
  for (ordinal, &anchor) in pattern.outline().iter().enumerate() {
    let Anchor::Corner(corner) = anchor else {
      panic!("Full outline should only hold corners");
    };
    let color = VertexColoring::OccupiedSide.vertex_color(pattern, ordinal, anchor, &CORNERS);
    assert_eq!(color, CORNERS[corner.index()]);
  }
}

#[test]
fn test_occupied_side_midpoints_take_occupied_endpoint() {
  // TL only: both midpoints border the TL corner
  assert_eq!(
    shape_colors(VertexColoring::OccupiedSide, Pattern::TopLeftCorner),
    vec![TL_COLOR, TL_COLOR, TL_COLOR]
  );

  // BR only: Right edge is (TR, BR), Bottom edge is (BL, BR)
  assert_eq!(
    shape_colors(VertexColoring::OccupiedSide, Pattern::BottomRightCorner),
    vec![BR_COLOR, BR_COLOR, BR_COLOR]
  );
}

#[test]
fn test_occupied_side_diagonal() {
  // TR + BL: [TR, Top, Left, BL, Bottom, Right]
  assert_eq!(
    shape_colors(VertexColoring::OccupiedSide, Pattern::DiagonalRising),
    vec![TR_COLOR, TR_COLOR, BL_COLOR, BL_COLOR, BL_COLOR, TR_COLOR]
  );
}

#[test]
fn test_occupied_side_midpoint_on_uniform_edge_uses_first_endpoint() {
  let color = VertexColoring::OccupiedSide.vertex_color(
    Pattern::Empty,
    0,
    Anchor::Midpoint(Edge::Right),
    &CORNERS,
  );
  assert_eq!(color, TR_COLOR);
}

// =========================================================================
// Batch 3: CornerOrdinal
// =========================================================================

#[test]
fn test_corner_ordinal_uses_vertex_position_in_outline() {
  assert_eq!(
    shape_colors(VertexColoring::corner_ordinal(), Pattern::TopLeftCorner),
    vec![TL_COLOR, TR_COLOR, BL_COLOR]
  );
}

/// TR + BL: six vertices, ordinals past 2 reuse BL so the occupied
/// bottom-left corner keeps its material.
#[test]
fn test_corner_ordinal_rising_diagonal_reuses_bottom_left() {
  assert_eq!(
    shape_colors(VertexColoring::corner_ordinal(), Pattern::DiagonalRising),
    vec![TL_COLOR, TR_COLOR, BL_COLOR, BL_COLOR, BL_COLOR, BL_COLOR]
  );

  let palette = IndexedPalette::default();
  let corners = [palette.color(0), palette.color(1), palette.color(2), palette.color(0)];
  let pattern = Pattern::DiagonalRising;
  let painted: Vec<Color> = pattern
    .outline()
    .iter()
    .enumerate()
    .map(|(ordinal, &anchor)| {
      VertexColoring::corner_ordinal().vertex_color(pattern, ordinal, anchor, &corners)
    })
    .collect();
  assert_eq!(
    painted,
    vec![
      colors::CLEAR,
      colors::RED,
      colors::GREEN,
      colors::GREEN,
      colors::GREEN,
      colors::GREEN
    ]
  );
}

/// Pentagons have five vertices; the fifth reuses BR.
#[test]
fn test_corner_ordinal_pentagon_reuses_bottom_right() {
  for pattern in Pattern::ALL {
    if pattern.outline().len() == 5 {
      let painted = shape_colors(VertexColoring::corner_ordinal(), pattern);
      assert_eq!(
        painted,
        vec![TL_COLOR, TR_COLOR, BL_COLOR, BR_COLOR, BR_COLOR],
        "{:?}",
        pattern
      );
    }
  }
}

#[test]
fn test_corner_ordinal_placeholder_patterns() {
  let coloring = VertexColoring::CornerOrdinal {
    placeholder: colors::WHITE,
  };
  for pattern in [Pattern::BottomRightCorner, Pattern::DiagonalFalling] {
    let painted = shape_colors(coloring, pattern);
    assert!(!painted.is_empty());
    assert!(painted.iter().all(|&c| c == colors::WHITE), "{:?}", pattern);
  }
}

#[test]
fn test_default_coloring() {
  assert_eq!(VertexColoring::default(), VertexColoring::OccupiedSide);
  assert_eq!(
    VertexColoring::corner_ordinal(),
    VertexColoring::CornerOrdinal {
      placeholder: colors::RED
    }
  );
}
