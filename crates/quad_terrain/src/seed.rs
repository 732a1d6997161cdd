//! Initial terrain from an occupancy source.
//!
//! Every leaf is sampled once at its normalized center; occupied samples get
//! a minimal-radius damage insertion at the leaf center, which writes exactly
//! that leaf.
//!
//! ```text
//!   v = 1 ┌───────────┐
//!         │  ·  ·  ·  │   (u, v) of a leaf = (center - root_min) / size
//!         │  ·  ·  ·  │
//!         │  ·  ·  ·  │   u grows to the right, v grows upward
//!   v = 0 └───────────┘
//!       u = 0       u = 1
//! ```

use glam::{Vec2, Vec3};

use crate::constants::SEED_RADIUS;
use crate::error::SeedError;
use crate::quadtree::Quadtree;

/// Channel threshold above which an image pixel counts as terrain.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Answers "is there terrain here?" for normalized coordinates.
pub trait OccupancySource {
  /// `u` runs left to right, `v` bottom to top, both in [0, 1].
  fn sample(&self, u: f32, v: f32) -> bool;
}

impl<F> OccupancySource for F
where
  F: Fn(f32, f32) -> bool,
{
  #[inline]
  fn sample(&self, u: f32, v: f32) -> bool {
    self(u, v)
  }
}

/// Thresholded RGB image.
///
/// Sampled bilinearly with edge clamping. A sample is occupied when every
/// channel exceeds the threshold, so white reads as terrain and black or any
/// saturated hue reads as empty.
#[derive(Clone)]
pub struct ImageMask {
  /// Rows top to bottom, channels in [0, 1].
  pixels: Vec<Vec3>,
  width: usize,
  height: usize,
  threshold: f32,
}

impl std::fmt::Debug for ImageMask {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ImageMask")
      .field("width", &self.width)
      .field("height", &self.height)
      .field("threshold", &self.threshold)
      .finish()
  }
}

impl ImageMask {
  /// Wrap tightly packed 8-bit RGB rows, top row first.
  pub fn from_rgb8(width: u32, height: u32, bytes: &[u8], threshold: f32) -> Result<Self, SeedError> {
    let (width, height) = (width as usize, height as usize);
    if width == 0 || height == 0 {
      return Err(SeedError::EmptyImage);
    }
    let expected = width * height * 3;
    if bytes.len() != expected {
      return Err(SeedError::BufferSizeMismatch {
        expected,
        actual: bytes.len(),
      });
    }

    let pixels = bytes
      .chunks_exact(3)
      .map(|p| Vec3::new(p[0] as f32, p[1] as f32, p[2] as f32) / 255.0)
      .collect();

    Ok(Self {
      pixels,
      width,
      height,
      threshold,
    })
  }

  /// Load and threshold an image file.
  #[cfg(feature = "image")]
  pub fn open<P: AsRef<std::path::Path>>(path: P, threshold: f32) -> Result<Self, SeedError> {
    let image = image::open(path).map_err(|e| SeedError::Decode(e.to_string()))?;
    Self::from_rgb_image(&image.to_rgb8(), threshold)
  }

  #[cfg(feature = "image")]
  pub fn from_rgb_image(image: &image::RgbImage, threshold: f32) -> Result<Self, SeedError> {
    Self::from_rgb8(image.width(), image.height(), image.as_raw(), threshold)
  }

  pub fn with_threshold(mut self, threshold: f32) -> Self {
    self.threshold = threshold;
    self
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  pub fn threshold(&self) -> f32 {
    self.threshold
  }

  /// Pixel at integer coordinates (row 0 at the top), clamped to the edges.
  #[inline]
  fn pixel(&self, x: i64, y: i64) -> Vec3 {
    let x = x.clamp(0, self.width as i64 - 1) as usize;
    let y = y.clamp(0, self.height as i64 - 1) as usize;
    self.pixels[y * self.width + x]
  }

  /// Bilinear RGB sample at `(u, v)`, `v = 0` at the bottom row.
  pub fn sample_rgb(&self, u: f32, v: f32) -> Vec3 {
    let px = u * self.width as f32 - 0.5;
    let py = (1.0 - v) * self.height as f32 - 0.5;

    let x0 = px.floor();
    let y0 = py.floor();
    let fx = px - x0;
    let fy = py - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let top = self.pixel(x0, y0).lerp(self.pixel(x0 + 1, y0), fx);
    let bottom = self.pixel(x0, y0 + 1).lerp(self.pixel(x0 + 1, y0 + 1), fx);
    top.lerp(bottom, fy)
  }
}

impl OccupancySource for ImageMask {
  #[inline]
  fn sample(&self, u: f32, v: f32) -> bool {
    self.sample_rgb(u, v).min_element() > self.threshold
  }
}

/// Write `value` into every leaf whose normalized center `source` reports as
/// occupied. Returns the number of leaves written.
///
/// Each written leaf notifies listeners once; a [`crate::RegenerationTrigger`]
/// collapses them into a single rebuild.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "seed"))]
pub fn seed<T, S>(tree: &mut Quadtree<T>, source: &S, value: T) -> usize
where
  T: Copy + Default,
  S: OccupancySource + ?Sized,
{
  let bounds = tree.bounds();
  let min = bounds.center - Vec2::splat(bounds.half_size());
  let size = tree.size();
  // Stay inside the sampled leaf on very fine trees
  let radius = SEED_RADIUS.min(tree.leaf_size() * 0.25);

  let centers: Vec<Vec2> = tree
    .leaves()
    .iter()
    .map(|leaf| leaf.position())
    .filter(|&center| {
      let uv = (center - min) / size;
      source.sample(uv.x, uv.y)
    })
    .collect();

  let seeded: usize = centers
    .into_iter()
    .map(|center| tree.insert_damage(center, radius, value))
    .sum();

  #[cfg(feature = "tracing")]
  tracing::debug!(seeded, leaves = tree.leaf_count(), "terrain seeded");

  seeded
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;
