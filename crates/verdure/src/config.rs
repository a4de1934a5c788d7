//! Render configuration.

use crate::constants::TILE_SCALE;

/// Settings shared by single renders and cache builds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
  /// Scale applied to footprint perimeters.
  pub tile_scale: f64,

  /// Worker threads for cache builds. `0` uses one per available core.
  pub worker_threads: usize,
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      tile_scale: TILE_SCALE,
      worker_threads: 0,
    }
  }
}

impl RenderConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_tile_scale(mut self, scale: f64) -> Self {
    self.tile_scale = scale;
    self
  }

  pub fn with_worker_threads(mut self, threads: usize) -> Self {
    self.worker_threads = threads;
    self
  }
}
