use super::*;
use crate::marching_squares::pattern::PatternKind;

/// Unit-cell position with +Y up (offsets are y-down).
fn world(anchor: Anchor) -> Vec2 {
  let offset = anchor.unit_offset();
  Vec2::new(offset.x, 1.0 - offset.y)
}

fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
  0.5 * (b - a).perp_dot(c - a)
}

#[test]
fn test_fan_triangles_match_kind() {
  for pattern in Pattern::ALL {
    let fan = pattern.outline().len().saturating_sub(2);
    assert_eq!(fan, pattern.triangle_count(), "{:?}", pattern);
  }
}

#[test]
fn test_first_vertex_is_occupied_corner() {
  for pattern in Pattern::ALL.into_iter().skip(1) {
    match pattern.outline()[0] {
      Anchor::Corner(corner) => assert!(pattern.has(corner), "{:?}", pattern),
      other => panic!("{:?} starts with {:?}", pattern, other),
    }
  }
}

/// The outline uses exactly the occupied corners, and midpoints exactly on
/// edges whose endpoints differ.
#[test]
fn test_outline_anchors_follow_occupancy() {
  for pattern in Pattern::ALL {
    let outline = pattern.outline();
    for corner in Corner::ALL {
      assert_eq!(
        outline.contains(&Anchor::Corner(corner)),
        pattern.has(corner),
        "{:?} corner {:?}",
        pattern,
        corner
      );
    }
    for edge in [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left] {
      let [a, b] = edge.corners();
      assert_eq!(
        outline.contains(&Anchor::Midpoint(edge)),
        pattern.has(a) != pattern.has(b),
        "{:?} edge {:?}",
        pattern,
        edge
      );
    }
  }
}

/// Every fan triangle winds counter-clockwise seen from +Z.
#[test]
fn test_fan_winding_is_ccw() {
  for pattern in Pattern::ALL {
    let outline = pattern.outline();
    for k in 1..outline.len().saturating_sub(1) {
      let area = signed_area(world(outline[0]), world(outline[k]), world(outline[k + 1]));
      assert!(area > 0.0, "{:?} triangle {} has area {}", pattern, k, area);
    }
  }
}

/// Filled area per kind in a unit cell: corner 1/8, side 1/2, diagonal 3/4,
/// one-empty 7/8, full 1.
#[test]
fn test_outline_areas() {
  for pattern in Pattern::ALL {
    let outline = pattern.outline();
    let area: f32 = (1..outline.len().saturating_sub(1))
      .map(|k| signed_area(world(outline[0]), world(outline[k]), world(outline[k + 1])))
      .sum();
    let expected = match pattern.kind() {
      PatternKind::Empty => 0.0,
      PatternKind::Corner => 0.125,
      PatternKind::Side => 0.5,
      PatternKind::Diagonal => 0.75,
      PatternKind::OneEmpty => 0.875,
      PatternKind::Full => 1.0,
    };
    assert!(
      (area - expected).abs() < 1e-6,
      "{:?} area {} expected {}",
      pattern,
      area,
      expected
    );
  }
}

#[test]
fn test_midpoint_offsets() {
  assert_eq!(Anchor::Midpoint(Edge::Top).unit_offset(), Vec2::new(0.5, 0.0));
  assert_eq!(Anchor::Midpoint(Edge::Right).unit_offset(), Vec2::new(1.0, 0.5));
  assert_eq!(Anchor::Midpoint(Edge::Bottom).unit_offset(), Vec2::new(0.5, 1.0));
  assert_eq!(Anchor::Midpoint(Edge::Left).unit_offset(), Vec2::new(0.0, 0.5));
}
