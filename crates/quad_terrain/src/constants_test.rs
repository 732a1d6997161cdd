use super::*;

/// sum(4^d) for d in 0..=depth, computed the slow way.
fn reference_node_count(depth: u32) -> usize {
  (0..=depth).map(|d| 4usize.pow(d)).sum()
}

#[test]
fn test_node_count_matches_geometric_series() {
  for depth in 0..=MAX_DEPTH {
    assert_eq!(
      node_count(depth),
      reference_node_count(depth),
      "Node count mismatch at depth {}",
      depth
    );
  }
}

#[test]
fn test_leaf_count_is_power_of_four() {
  assert_eq!(leaf_count(0), 1);
  assert_eq!(leaf_count(1), 4);
  assert_eq!(leaf_count(2), 16);
  assert_eq!(leaf_count(5), 1024);
}

#[test]
fn test_leaves_fill_array_tail() {
  for depth in 0..=6 {
    assert_eq!(
      first_leaf_index(depth) + leaf_count(depth),
      node_count(depth),
      "Leaves must end the array at depth {}",
      depth
    );
  }
  // Depth 2: root + 4 interior nodes precede the leaves
  assert_eq!(first_leaf_index(2), 5);
}

#[test]
fn test_child_parent_roundtrip() {
  for index in 0..200 {
    let first = first_child_index(index);
    for child in first..first + CHILDREN_PER_NODE {
      assert_eq!(
        parent_index(child),
        Some(index),
        "Child {} should point back to {}",
        child,
        index
      );
    }
  }
  assert_eq!(parent_index(0), None);
}

#[test]
fn test_cells_per_side() {
  assert_eq!(cells_per_side(0), 1);
  assert_eq!(cells_per_side(2), 4);
  assert_eq!(cells_per_side(4) * cells_per_side(4), leaf_count(4));
}
