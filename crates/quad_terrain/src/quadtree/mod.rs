//! Quadtree module: the destructible terrain's spatial index.
//!
//! One flat array holds every node of a fixed-depth tree. No child pointers
//! are stored; parent/child relationships are index arithmetic (see
//! [`crate::constants`]).
//!
//! # Module Structure
//!
//! - [`node`]: `QuadtreeNode` cell value and `Quadrant` convention
//! - [`bounds`]: circle / square intersection for damage traversal
//! - [`config`]: `QuadtreeConfig` - root placement and depth
//! - [`tree`]: `Quadtree` - construction, damage insertion, leaf views
//! - [`listener`]: change notification and the regeneration dirty flag

pub mod bounds;
pub mod config;
pub mod listener;
pub mod node;
pub mod tree;

// Re-exports
pub use bounds::Square;
pub use config::QuadtreeConfig;
pub use listener::{FnListener, QuadtreeUpdate, RegenerationTrigger, UpdateListener};
pub use node::{Quadrant, QuadtreeNode};
pub use tree::Quadtree;
