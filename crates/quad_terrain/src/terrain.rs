//! Terrain - a quadtree plus the mesh derived from it.
//!
//! Damage marks the terrain dirty through a [`RegenerationTrigger`]
//! registered on the quadtree; [`Terrain::tick`] turns any number of pending
//! notifications into at most one rebuild.
//!
//! ```text
//!   damage() ──► Quadtree::insert_damage ──► listeners
//!                                              │
//!                                              ▼
//!                                    RegenerationTrigger (dirty)
//!                                              │
//!   tick() ────────── take() ──────────────────┘
//!      │
//!      └─► marching_squares::build ──► MeshBuffers (generation + 1)
//! ```

use glam::Vec2;
use web_time::Instant;

use crate::error::Result;
use crate::marching_squares;
use crate::metrics::TerrainMetrics;
use crate::quadtree::{Quadtree, QuadtreeConfig, RegenerationTrigger, UpdateListener};
use crate::seed::{self, OccupancySource};
use crate::types::{Material, MeshBuffers, MeshConfig};

/// Destructible terrain: owns the quadtree, the mesh settings and the
/// current mesh.
pub struct Terrain<T: Material> {
  quadtree: Quadtree<T>,
  mesh_config: MeshConfig,
  trigger: RegenerationTrigger,
  mesh: Option<MeshBuffers>,
  generation: u64,
  metrics: TerrainMetrics,
}

impl<T: Material> Terrain<T> {
  /// Build an empty terrain. The first [`Self::tick`] produces its mesh.
  pub fn new(tree_config: &QuadtreeConfig, mesh_config: MeshConfig) -> Result<Self> {
    let trigger = RegenerationTrigger::new();
    let quadtree = Quadtree::new(tree_config)?.with_listener(trigger.clone());
    trigger.mark_dirty();

    Ok(Self {
      quadtree,
      mesh_config,
      trigger,
      mesh: None,
      generation: 0,
      metrics: TerrainMetrics::new(),
    })
  }

  pub fn quadtree(&self) -> &Quadtree<T> {
    &self.quadtree
  }

  /// Mutable quadtree access. Damage inserted directly still marks the
  /// terrain dirty.
  pub fn quadtree_mut(&mut self) -> &mut Quadtree<T> {
    &mut self.quadtree
  }

  /// Register an extra listener on the quadtree, after the regeneration
  /// trigger.
  pub fn add_listener(&mut self, listener: impl UpdateListener + 'static) {
    self.quadtree.add_listener(listener);
  }

  pub fn mesh_config(&self) -> &MeshConfig {
    &self.mesh_config
  }

  /// Replace the mesh settings; the next tick rebuilds.
  pub fn set_mesh_config(&mut self, mesh_config: MeshConfig) {
    self.mesh_config = mesh_config;
    self.trigger.mark_dirty();
  }

  /// Write `value` into every leaf intersecting the circle.
  pub fn damage(&mut self, center: Vec2, radius: f32, value: T) -> usize {
    let start = Instant::now();
    let touched = self.quadtree.insert_damage(center, radius, value);
    self
      .metrics
      .record_damage(start.elapsed().as_micros() as u64, touched);
    touched
  }

  /// Fill leaves from an occupancy source. See [`seed::seed`].
  pub fn seed<S: OccupancySource + ?Sized>(&mut self, source: &S, value: T) -> usize {
    seed::seed(&mut self.quadtree, source, value)
  }

  /// True when a rebuild is pending.
  pub fn is_dirty(&self) -> bool {
    self.trigger.is_dirty()
  }

  /// Rebuild if anything changed since the last rebuild.
  ///
  /// Returns the new mesh, or None when nothing was pending.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "terrain::tick"))]
  pub fn tick(&mut self) -> Result<Option<&MeshBuffers>> {
    if !self.trigger.take() {
      return Ok(None);
    }
    self.rebuild().map(Some)
  }

  /// Rebuild unconditionally, replacing the current mesh.
  pub fn rebuild(&mut self) -> Result<&MeshBuffers> {
    let start = Instant::now();
    let mesh = marching_squares::build(&self.quadtree, &self.mesh_config)?;
    let elapsed_us = start.elapsed().as_micros() as u64;

    self.metrics.record_rebuild(elapsed_us, &mesh);
    self.generation += 1;

    #[cfg(feature = "tracing")]
    tracing::debug!(
      generation = self.generation,
      triangles = mesh.triangle_count(),
      elapsed_us,
      "terrain mesh rebuilt"
    );

    Ok(self.mesh.insert(mesh))
  }

  /// Mesh from the latest rebuild, if any.
  pub fn mesh(&self) -> Option<&MeshBuffers> {
    self.mesh.as_ref()
  }

  /// Number of rebuilds so far. Consumers holding resources made from an
  /// older generation should discard them.
  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn metrics(&self) -> &TerrainMetrics {
    &self.metrics
  }
}

impl<T: Material> std::fmt::Debug for Terrain<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Terrain")
      .field("quadtree", &self.quadtree)
      .field("generation", &self.generation)
      .field("dirty", &self.is_dirty())
      .finish()
  }
}

#[cfg(test)]
#[path = "terrain_test.rs"]
mod terrain_test;
