//! Marching squares meshing over quadtree leaves.
//!
//! Converts the leaf grid of a [`Quadtree`] into a flat triangle mesh whose
//! outline follows the boundary between occupied and empty leaves.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  leaves: &[QuadtreeNode<T>]  - 4^d leaves in storage order      │
//! │  config: &MeshConfig         - z, normal, palette, coloring     │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Raster                              │
//! │  Sort leaves by integer grid key (row = y, col = x)             │
//! │  Reject counts that are not 4^d and grids with holes            │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Classification                      │
//! │  For each 2×2 neighborhood of leaf centers:                     │
//! │    4-bit pattern from corner occupancy (TL=8 TR=4 BL=2 BR=1)    │
//! │    Early-out on the empty pattern                               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Emission                            │
//! │  Look up SHAPE_TABLE[pattern]                                   │
//! │  Corner anchors  → leaf center                                  │
//! │  Edge anchors    → midpoint of the two leaf centers             │
//! │  Fan-triangulate from vertex 0 at the current index base        │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  MeshBuffers: vertices, triangles, uvs, normals, colors, bounds │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │   TL ── TR      positions: world x/y of leaf centers, z fixed
//!          │   │      │      uvs: cell-local, origin at TL, v downward
//!          │   BL ── BR      winding: counter-clockwise seen from +Z
//!          └───────── +X
//! ```
//!
//! Vertices are not shared between cells. Boundary vertices on a shared edge
//! are computed from the same two leaf centers, so both cells produce
//! bit-identical positions and the mesh has no cracks.

mod coloring;
mod pattern;
mod raster;
mod shape_table;

pub use coloring::{IndexedPalette, VertexColoring};
pub use pattern::{Corner, Pattern, PatternKind};
pub use raster::LeafGrid;
pub use shape_table::{Anchor, Edge, SHAPE_TABLE};

use glam::Vec2;

use crate::constants::EDGE_MIDPOINT;
use crate::error::MeshError;
use crate::quadtree::{Quadtree, QuadtreeNode};
use crate::types::{MeshBuffers, MeshConfig, Material};

/// Build the mesh for every leaf of `tree`.
pub fn build<T: Material>(tree: &Quadtree<T>, config: &MeshConfig) -> Result<MeshBuffers, MeshError> {
  build_from_leaves(tree.leaves(), config)
}

/// Build the mesh for an arbitrary leaf slice.
///
/// Fails without emitting anything when the leaves do not form a square
/// `2^d x 2^d` raster.
///
/// Leaf centers must be separable in `f32`: the spacing of representable
/// floats near the tree must stay well under the leaf size. Deep trees far
/// from the origin (e.g. leaf size 0.25 around 3e6) collapse neighbouring
/// centers and are rejected with [`MeshError::IrregularGrid`].
pub fn build_from_leaves<T: Material>(
  leaves: &[QuadtreeNode<T>],
  config: &MeshConfig,
) -> Result<MeshBuffers, MeshError> {
  let mut output = MeshBuffers::new();
  build_into(leaves, config, &mut output)?;
  Ok(output)
}

/// Rebuild into `output`, reusing its allocations.
///
/// On error `output` is left untouched.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "marching_squares::build"))]
pub fn build_into<T: Material>(
  leaves: &[QuadtreeNode<T>],
  config: &MeshConfig,
  output: &mut MeshBuffers,
) -> Result<(), MeshError> {
  let grid = LeafGrid::from_leaves(leaves)?;
  output.clear();

  for corners in grid.neighborhoods() {
    emit_cell(&corners, config, output);
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(
    cells = grid.neighborhoods_per_side() * grid.neighborhoods_per_side(),
    vertices = output.vertex_count(),
    triangles = output.triangle_count(),
    "mesh built"
  );

  Ok(())
}

/// Classify one neighborhood and append its shape.
#[inline]
fn emit_cell<T: Material>(
  corners: &[&QuadtreeNode<T>; 4],
  config: &MeshConfig,
  output: &mut MeshBuffers,
) {
  let pattern = Pattern::classify(corners.map(|leaf| leaf.data().is_occupied()));
  let outline = pattern.outline();
  if outline.is_empty() {
    return;
  }

  let positions = corners.map(|leaf| leaf.position());
  let corner_colors = corners.map(|leaf| config.palette.color(leaf.data().palette_index()));
  let cell_size =
    positions[Corner::TopRight.index()].x - positions[Corner::TopLeft.index()].x;
  let base = output.vertices.len() as u32;

  for (ordinal, &anchor) in outline.iter().enumerate() {
    let position = anchor_position(anchor, &positions).extend(config.z);

    output.vertices.push(position);
    output.uvs.push(anchor.unit_offset() * cell_size);
    output.normals.push(config.normal);
    output
      .colors
      .push(config.coloring.vertex_color(pattern, ordinal, anchor, &corner_colors));
    output.bounds.encapsulate(position);
  }

  for k in 1..outline.len() as u32 - 1 {
    output.triangles.extend_from_slice(&[base, base + k, base + k + 1]);
  }
}

/// World x/y of an anchor given the four corner leaf centers.
#[inline]
fn anchor_position(anchor: Anchor, positions: &[Vec2; 4]) -> Vec2 {
  match anchor {
    Anchor::Corner(corner) => positions[corner.index()],
    Anchor::Midpoint(edge) => {
      let [a, b] = edge.corners();
      (positions[a.index()] + positions[b.index()]) * EDGE_MIDPOINT
    }
  }
}
