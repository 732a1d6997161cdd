//! quad_terrain - Destructible 2D terrain on a quadtree
//!
//! This crate stores a square region of 2D terrain as a fixed-depth quadtree
//! and turns it into a smooth, renderable triangle mesh with marching
//! squares.
//!
//! # Features
//!
//! - **Flat quadtree**: every node lives in one array; children and parents
//!   are index arithmetic
//! - **Circular damage**: overwrite every leaf a circle touches, visiting only
//!   intersecting subtrees
//! - **Change notification**: listeners run after each insertion; a
//!   dirty-flag trigger coalesces them into one rebuild per tick
//! - **Marching squares**: 16 table-driven shapes with crack-free shared
//!   edges, cell-local UVs and palette colors
//! - **Seeding**: fill leaves from a closure or a thresholded RGB image
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec2;
//! use quad_terrain::{MeshConfig, QuadtreeConfig, Terrain};
//!
//! let mut terrain = Terrain::<u8>::new(
//!     &QuadtreeConfig::new(Vec2::ZERO, 16.0, 6),
//!     MeshConfig::default(),
//! )?;
//!
//! // Solid ground below y = 0, then blast a crater into it
//! terrain.seed(&|_u: f32, v: f32| v < 0.5, 1);
//! terrain.damage(Vec2::new(2.0, 0.0), 1.5, 0);
//!
//! if let Some(mesh) = terrain.tick()? {
//!     println!("Rebuilt: {} vertices, {} triangles",
//!         mesh.vertex_count(), mesh.triangle_count());
//! }
//! ```

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{cells_per_side, leaf_count, node_count, MAX_DEPTH, SEED_RADIUS};
pub use error::{MeshError, QuadtreeError, Result, SeedError, TerrainError};
pub use types::{colors, Color, Material, MeshBounds, MeshBuffers, MeshConfig};

// Spatial index and damage insertion
pub mod quadtree;
pub use quadtree::{
  FnListener, Quadrant, Quadtree, QuadtreeConfig, QuadtreeNode, QuadtreeUpdate,
  RegenerationTrigger, UpdateListener,
};

// Marching squares mesher
pub mod marching_squares;
pub use marching_squares::{IndexedPalette, Pattern, VertexColoring};

// Initial terrain
pub mod seed;
pub use seed::{ImageMask, OccupancySource};

// Quadtree + mesh facade
pub mod terrain;
pub use terrain::Terrain;

// Engine-agnostic metrics collection
pub mod metrics;
pub use metrics::TerrainMetrics;
