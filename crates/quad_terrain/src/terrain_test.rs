use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use super::*;
use crate::error::TerrainError;
use crate::quadtree::{FnListener, QuadtreeUpdate};
use crate::types::colors;

fn terrain() -> Terrain<u8> {
  Terrain::new(
    &QuadtreeConfig::new(Vec2::ZERO, 4.0, 3),
    MeshConfig::default(),
  )
  .expect("valid terrain")
}

#[test]
fn test_first_tick_builds_empty_mesh() {
  let mut terrain = terrain();
  assert!(terrain.is_dirty());
  assert!(terrain.mesh().is_none());

  let mesh = terrain.tick().unwrap().expect("first tick should build");
  assert!(mesh.is_empty());
  assert_eq!(terrain.generation(), 1);
  assert!(!terrain.is_dirty());
}

#[test]
fn test_clean_tick_does_nothing() {
  let mut terrain = terrain();
  terrain.tick().unwrap();
  assert!(terrain.tick().unwrap().is_none());
  assert_eq!(terrain.generation(), 1);
}

/// Many damage events between ticks produce one rebuild.
#[test]
fn test_damage_coalesces_into_one_rebuild() {
  let mut terrain = terrain();
  terrain.tick().unwrap();

  assert!(terrain.damage(Vec2::new(-1.0, 0.0), 0.8, 1) > 0);
  terrain.damage(Vec2::new(1.0, 0.5), 0.6, 2);
  terrain.damage(Vec2::new(0.0, -1.0), 0.7, 1);
  assert!(terrain.is_dirty());

  let triangles = terrain.tick().unwrap().unwrap().triangle_count();
  assert!(triangles > 0);
  assert_eq!(terrain.generation(), 2);
  assert!(terrain.tick().unwrap().is_none());
}

/// A damage call that misses the tree still notifies, so the next tick
/// rebuilds.
#[test]
fn test_missed_damage_still_dirties() {
  let mut terrain = terrain();
  terrain.tick().unwrap();

  assert_eq!(terrain.damage(Vec2::new(50.0, 50.0), 1.0, 1), 0);
  assert!(terrain.is_dirty());
}

#[test]
fn test_rebuild_replaces_mesh() {
  let mut terrain = terrain();
  terrain.damage(Vec2::ZERO, 100.0, 1);
  let full = terrain.rebuild().unwrap().triangle_count();
  assert_eq!(full, 2 * 7 * 7);

  terrain.damage(Vec2::ZERO, 1.0, 0);
  let carved = terrain.rebuild().unwrap().triangle_count();
  assert_ne!(carved, full);
  assert_eq!(terrain.mesh().unwrap().triangle_count(), carved);
  assert_eq!(terrain.generation(), 2);
}

#[test]
fn test_direct_quadtree_damage_dirties() {
  let mut terrain = terrain();
  terrain.tick().unwrap();
  terrain.quadtree_mut().insert_damage(Vec2::ZERO, 0.5, 1);
  assert!(terrain.is_dirty());
}

#[test]
fn test_mesh_config_change_dirties() {
  let mut terrain = terrain();
  terrain.damage(Vec2::ZERO, 100.0, 2);
  terrain.tick().unwrap();

  terrain.set_mesh_config(MeshConfig::default().with_palette(
    crate::marching_squares::IndexedPalette::new([colors::CLEAR, colors::WHITE]),
  ));
  let mesh = terrain.tick().unwrap().unwrap();
  assert!(mesh.colors.iter().all(|&c| c == colors::WHITE));
}

#[test]
fn test_seed_through_terrain() {
  let mut terrain = terrain();
  let seeded = terrain.seed(&|u: f32, _: f32| u < 0.5, 1);
  assert_eq!(seeded, terrain.quadtree().leaf_count() / 2);

  let mesh = terrain.tick().unwrap().unwrap();
  assert!(!mesh.is_empty());
}

#[test]
fn test_extra_listener_runs() {
  let calls = Arc::new(AtomicUsize::new(0));
  let counter = calls.clone();
  let mut terrain = terrain();
  terrain.add_listener(FnListener(move |_: &QuadtreeUpdate| {
    counter.fetch_add(1, Ordering::Relaxed);
  }));

  terrain.damage(Vec2::ZERO, 1.0, 1);
  assert_eq!(calls.load(Ordering::Relaxed), 1);
  assert_eq!(terrain.quadtree().listener_count(), 2);
}

#[test]
fn test_invalid_config_is_rejected() {
  let result = Terrain::<u8>::new(
    &QuadtreeConfig::new(Vec2::ZERO, -1.0, 3),
    MeshConfig::default(),
  );
  assert!(matches!(result, Err(TerrainError::Quadtree(_))));
}

/// Damage on a worker thread, rebuild on the owning one.
#[test]
fn test_terrain_shared_behind_mutex() {
  let shared = Arc::new(Mutex::new(terrain()));
  shared.lock().unwrap().tick().unwrap();

  let worker = {
    let shared = Arc::clone(&shared);
    thread::spawn(move || {
      let mut terrain = shared.lock().unwrap();
      let touched = terrain.damage(Vec2::ZERO, 100.0, 1);
      touched
    })
  };
  assert_eq!(worker.join().expect("worker thread panicked"), 64);

  let mut terrain = shared.lock().unwrap();
  assert!(terrain.is_dirty());
  assert_eq!(terrain.tick().unwrap().unwrap().triangle_count(), 2 * 7 * 7);
}
