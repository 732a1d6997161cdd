//! Engine-agnostic metrics for damage and mesh rebuild statistics.
//!
//! Feature-gated and runtime-toggled; without the `metrics` feature every
//! `record_*` call is a no-op.
//!
//! # Usage
//!
//! ```ignore
//! use quad_terrain::metrics::COLLECT_METRICS;
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! let metrics = terrain.metrics();
//! println!("avg rebuild: {:.1}us", metrics.avg_mesh_timing_us());
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::types::MeshBuffers;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Timings (microseconds) from the most recent events, with a running total
/// so the average never rescans the window.
#[derive(Debug, Clone)]
pub struct TimingWindow {
  samples: VecDeque<u64>,
  capacity: usize,
  total: u64,
}

impl TimingWindow {
  /// Per-event samples kept by [`TerrainMetrics`].
  pub const DEFAULT_CAPACITY: usize = 128;

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      samples: VecDeque::with_capacity(capacity),
      capacity,
      total: 0,
    }
  }

  /// Record one sample, dropping the oldest once full. A zero-capacity
  /// window keeps nothing.
  pub fn push(&mut self, timing_us: u64) {
    if self.capacity == 0 {
      return;
    }
    if self.samples.len() == self.capacity {
      if let Some(oldest) = self.samples.pop_front() {
        self.total -= oldest;
      }
    }
    self.samples.push_back(timing_us);
    self.total += timing_us;
  }

  /// Mean of the kept samples, 0 when empty.
  pub fn average_us(&self) -> f64 {
    if self.samples.is_empty() {
      return 0.0;
    }
    self.total as f64 / self.samples.len() as f64
  }

  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  pub fn clear(&mut self) {
    self.samples.clear();
    self.total = 0;
  }
}

impl Default for TimingWindow {
  fn default() -> Self {
    Self::with_capacity(Self::DEFAULT_CAPACITY)
  }
}

/// Terrain statistics updated on every damage insertion and rebuild.
#[derive(Debug, Clone, Default)]
pub struct TerrainMetrics {
  // Timing
  /// Mesh rebuild times in microseconds.
  pub mesh_timings: TimingWindow,
  /// Damage insertion times in microseconds.
  pub damage_timings: TimingWindow,
  pub last_mesh_us: u64,

  // Last mesh snapshot
  pub last_vertices: u64,
  pub last_triangles: u64,
  /// Approximate size of the current mesh buffers.
  pub mesh_memory_bytes: u64,

  // Cumulative
  pub total_rebuilds: u64,
  pub total_damage_events: u64,
  pub total_leaves_touched: u64,
}

impl TerrainMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Reset timings and the mesh snapshot. Cumulative counters survive.
  pub fn reset(&mut self) {
    self.mesh_timings.clear();
    self.damage_timings.clear();
    self.last_mesh_us = 0;
    self.last_vertices = 0;
    self.last_triangles = 0;
    self.mesh_memory_bytes = 0;
  }

  /// Record one damage insertion.
  pub fn record_damage(&mut self, timing_us: u64, leaves_touched: usize) {
    if !is_enabled() {
      return;
    }
    self.damage_timings.push(timing_us);
    self.total_damage_events += 1;
    self.total_leaves_touched += leaves_touched as u64;
  }

  /// Record one mesh rebuild and its output.
  pub fn record_rebuild(&mut self, timing_us: u64, mesh: &MeshBuffers) {
    if !is_enabled() {
      return;
    }
    self.mesh_timings.push(timing_us);
    self.last_mesh_us = timing_us;
    self.last_vertices = mesh.vertex_count() as u64;
    self.last_triangles = mesh.triangle_count() as u64;

    // position 12 + uv 8 + normal 12 + color 16 per vertex, 4 per index
    self.mesh_memory_bytes = self.last_vertices * 48 + mesh.triangles.len() as u64 * 4;
    self.total_rebuilds += 1;
  }

  pub fn avg_mesh_timing_us(&self) -> f64 {
    self.mesh_timings.average_us()
  }

  pub fn avg_damage_timing_us(&self) -> f64 {
    self.damage_timings.average_us()
  }
}


#[cfg(all(test, feature = "metrics"))]
mod tests {
  use glam::{Vec2, Vec3};

  use super::*;

  #[test]
  fn test_record_rebuild() {
    let mut metrics = TerrainMetrics::new();
    let mut mesh = MeshBuffers::new();
    for _ in 0..3 {
      mesh.vertices.push(Vec3::ZERO);
      mesh.uvs.push(Vec2::ZERO);
      mesh.normals.push(Vec3::Z);
      mesh.colors.push(crate::types::colors::RED);
    }
    mesh.triangles.extend([0, 1, 2]);

    metrics.record_rebuild(1000, &mesh);
    metrics.record_rebuild(3000, &mesh);

    assert_eq!(metrics.total_rebuilds, 2);
    assert_eq!(metrics.last_mesh_us, 3000);
    assert_eq!(metrics.avg_mesh_timing_us(), 2000.0);
    assert_eq!(metrics.last_vertices, 3);
    assert_eq!(metrics.last_triangles, 1);
    assert_eq!(metrics.mesh_memory_bytes, 3 * 48 + 12);
  }

  #[test]
  fn test_reset_keeps_totals() {
    let mut metrics = TerrainMetrics::new();
    metrics.record_damage(50, 4);
    metrics.record_damage(150, 6);
    assert_eq!(metrics.avg_damage_timing_us(), 100.0);

    metrics.reset();
    assert!(metrics.damage_timings.is_empty());
    assert_eq!(metrics.total_damage_events, 2);
    assert_eq!(metrics.total_leaves_touched, 10);
  }
}
