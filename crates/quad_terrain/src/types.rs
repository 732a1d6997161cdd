//! Core data types shared by the quadtree and the mesher.

use glam::{Vec2, Vec3, Vec4};

use crate::marching_squares::{IndexedPalette, VertexColoring};

/// RGBA vertex color, components in [0, 1].
pub type Color = Vec4;

/// Named colors used by the default palette.
pub mod colors {
  use super::Color;

  pub const CLEAR: Color = Color::new(0.0, 0.0, 0.0, 0.0);
  pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
  pub const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);
  pub const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
  pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
}

/// Per-leaf material value stored in the quadtree.
///
/// The default value means "empty"; anything else is occupied terrain.
pub trait Material: Copy + Default + PartialEq {
  /// Slot in the color palette for this material.
  fn palette_index(self) -> usize;

  /// True when this value differs from the empty default.
  #[inline]
  fn is_occupied(self) -> bool {
    self != Self::default()
  }
}

macro_rules! impl_unsigned_material {
  ($($t:ty),*) => {
    $(impl Material for $t {
      #[inline]
      fn palette_index(self) -> usize {
        self as usize
      }
    })*
  };
}

macro_rules! impl_signed_material {
  ($($t:ty),*) => {
    $(impl Material for $t {
      /// Negative values map to slot 0.
      #[inline]
      fn palette_index(self) -> usize {
        self.max(0) as usize
      }
    })*
  };
}

impl_unsigned_material!(u8, u16, u32, u64, usize);
impl_signed_material!(i8, i16, i32, i64);

impl Material for bool {
  #[inline]
  fn palette_index(self) -> usize {
    self as usize
  }
}

/// Axis-aligned bounding box of mesh vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshBounds {
  pub min: Vec3,
  pub max: Vec3,
}

impl MeshBounds {
  /// Create bounds with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: Vec3::splat(f32::INFINITY),
      max: Vec3::splat(f32::NEG_INFINITY),
    }
  }

  /// Expand bounds to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: Vec3) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  /// Check if bounds are valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min.cmple(self.max).all()
  }
}

impl Default for MeshBounds {
  fn default() -> Self {
    Self::empty()
  }
}

/// Mesh produced by one build: parallel vertex attribute buffers plus a
/// triangle index list.
///
/// A new build fully replaces the previous buffers; consumers discard any
/// render or collision resource made from an older build.
#[derive(Clone, Debug, Default)]
pub struct MeshBuffers {
  /// Vertex positions (x, y from the quadtree, z from [`MeshConfig::z`]).
  pub vertices: Vec<Vec3>,

  /// Triangle indices, 3 per triangle, counter-clockwise seen from +Z.
  pub triangles: Vec<u32>,

  /// Cell-local texture coordinates (parallel to vertices).
  pub uvs: Vec<Vec2>,

  /// Face normals (parallel to vertices).
  pub normals: Vec<Vec3>,

  /// Vertex colors keyed by material (parallel to vertices).
  pub colors: Vec<Color>,

  /// Bounding box encompassing all vertices.
  pub bounds: MeshBounds,
}

impl MeshBuffers {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.triangles.clear();
    self.uvs.clear();
    self.normals.clear();
    self.colors.clear();
    self.bounds = MeshBounds::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.triangles.len() / 3
  }

  /// Triangle corner positions, for building collision shapes.
  pub fn triangle_positions(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    self.triangles.chunks_exact(3).map(move |tri| {
      [
        self.vertices[tri[0] as usize],
        self.vertices[tri[1] as usize],
        self.vertices[tri[2] as usize],
      ]
    })
  }

  /// Check the buffer invariants: parallel attribute lengths, whole
  /// triangles, and in-range indices.
  pub fn is_consistent(&self) -> bool {
    let n = self.vertices.len();
    self.uvs.len() == n
      && self.normals.len() == n
      && self.colors.len() == n
      && self.triangles.len() % 3 == 0
      && self.triangles.iter().all(|&i| (i as usize) < n)
  }
}

/// Configuration for mesh generation.
#[derive(Clone, Debug)]
pub struct MeshConfig {
  /// Z coordinate of the flat mesh plane.
  pub z: f32,

  /// Normal written for every vertex.
  pub normal: Vec3,

  /// Material colors.
  pub palette: IndexedPalette,

  /// How vertex colors are assigned.
  pub coloring: VertexColoring,
}

impl Default for MeshConfig {
  fn default() -> Self {
    Self {
      z: 0.0,
      normal: Vec3::Z,
      palette: IndexedPalette::default(),
      coloring: VertexColoring::default(),
    }
  }
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_z(mut self, z: f32) -> Self {
    self.z = z;
    self
  }

  pub fn with_normal(mut self, normal: Vec3) -> Self {
    self.normal = normal;
    self
  }

  pub fn with_palette(mut self, palette: IndexedPalette) -> Self {
    self.palette = palette;
    self
  }

  pub fn with_coloring(mut self, coloring: VertexColoring) -> Self {
    self.coloring = coloring;
    self
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
