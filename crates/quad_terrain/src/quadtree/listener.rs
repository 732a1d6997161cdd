//! Change notification from a quadtree to its listeners.
//!
//! Listeners are registered explicitly on a [`super::Quadtree`] and invoked
//! inline, in registration order, at the end of every damage insertion. The
//! quadtree never coalesces; a [`RegenerationTrigger`] turns any number of
//! notifications into a single pending rebuild.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;
use glam::Vec2;

/// Payload of one damage notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadtreeUpdate {
  /// Circle center passed to the insertion.
  pub center: Vec2,
  /// Circle radius passed to the insertion.
  pub radius: f32,
  /// Leaves whose data was written (may be zero).
  pub leaves_touched: usize,
}

/// Receiver of quadtree change notifications.
///
/// Listeners must be `Send` so a quadtree can move behind a lock shared
/// between threads.
pub trait UpdateListener: Send {
  fn on_update(&mut self, update: &QuadtreeUpdate);
}

/// Shared dirty flag set by notifications and cleared by whoever rebuilds.
///
/// Clones share the same flag: register one clone with the quadtree and keep
/// another to poll.
#[derive(Clone, Debug, Default)]
pub struct RegenerationTrigger {
  dirty: Arc<AtomicBool>,
}

impl RegenerationTrigger {
  pub fn new() -> Self {
    Self::default()
  }

  /// True when a notification arrived since the last [`Self::take`].
  pub fn is_dirty(&self) -> bool {
    self.dirty.load(Ordering::Acquire)
  }

  /// Request a rebuild without a quadtree change.
  pub fn mark_dirty(&self) {
    self.dirty.store(true, Ordering::Release);
  }

  /// Clear the flag, returning whether it was set.
  pub fn take(&self) -> bool {
    self.dirty.swap(false, Ordering::AcqRel)
  }
}

impl UpdateListener for RegenerationTrigger {
  fn on_update(&mut self, _update: &QuadtreeUpdate) {
    self.mark_dirty();
  }
}

/// Forwards every update into a channel. A disconnected receiver is ignored.
impl UpdateListener for Sender<QuadtreeUpdate> {
  fn on_update(&mut self, update: &QuadtreeUpdate) {
    if self.send(*update).is_err() {
      #[cfg(feature = "tracing")]
      tracing::warn!("quadtree update receiver disconnected");
    }
  }
}

/// Closure adapter.
pub struct FnListener<F>(pub F);

impl<F: FnMut(&QuadtreeUpdate) + Send> UpdateListener for FnListener<F> {
  fn on_update(&mut self, update: &QuadtreeUpdate) {
    (self.0)(update)
  }
}

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;
