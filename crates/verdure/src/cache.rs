//! All-species cache built in parallel.
//!
//! # State machine
//!
//! ```text
//!            build()
//!   Idle ─────────────► Running ──┬── no failures ──► Complete (FoliageCache)
//!                                 └── any failure ──► Failed   (AggregateFailure)
//! ```
//!
//! One render task per species runs on a dedicated pool. Outcomes funnel
//! through a channel into a single reducer, which only starts once every task
//! has reported. A failed build never exposes the meshes that did succeed.

use std::collections::BTreeMap;

use tracing::{info, warn};
use web_time::Instant;

use crate::compositor::MeshCompositor;
use crate::config::RenderConfig;
use crate::error::{AggregateFailure, CacheError, RenderError};
use crate::geometry::Mesh;
use crate::species::{Species, SpeciesRegistry};
use crate::threading::WorkerPool;

/// Prefix for render worker thread names.
const WORKER_NAME: &str = "foliage-render";

/// Lifecycle of a [`FoliageCacheBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildState {
  #[default]
  Idle,
  Running,
  Complete,
  Failed,
}

/// Statistics from the last build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
  /// Render tasks submitted.
  pub species_count: usize,
  /// Tasks that reported an error.
  pub failure_count: usize,
  /// Wall time from submission to the last report, in microseconds.
  pub total_us: u64,
}

/// Immutable species → mesh map. Safe to share across threads.
#[derive(Clone, Debug, Default)]
pub struct FoliageCache {
  meshes: BTreeMap<Species, Mesh>,
}

impl FoliageCache {
  pub fn mesh(&self, species: Species) -> Option<&Mesh> {
    self.meshes.get(&species)
  }

  pub fn len(&self) -> usize {
    self.meshes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.meshes.is_empty()
  }

  /// Meshes in species declaration order.
  pub fn iter(&self) -> impl Iterator<Item = (Species, &Mesh)> {
    self.meshes.iter().map(|(species, mesh)| (*species, mesh))
  }
}

/// Single-writer accumulator for task reports.
#[derive(Default)]
struct Accumulator {
  meshes: BTreeMap<Species, Mesh>,
  failures: Vec<(Species, RenderError)>,
}

impl Accumulator {
  fn record(&mut self, species: Species, outcome: Result<Mesh, RenderError>) {
    match outcome {
      Ok(mesh) => {
        self.meshes.insert(species, mesh);
      }
      Err(cause) => {
        warn!(%species, %cause, "species failed to render");
        self.failures.push((species, cause));
      }
    }
  }

  fn finish(mut self) -> Result<FoliageCache, AggregateFailure> {
    if self.failures.is_empty() {
      return Ok(FoliageCache {
        meshes: self.meshes,
      });
    }
    self.failures.sort_by_key(|(species, _)| *species);
    Err(AggregateFailure {
      failures: self.failures,
    })
  }
}

/// Builds a [`FoliageCache`] exactly once.
pub struct FoliageCacheBuilder {
  compositor: MeshCompositor,
  state: BuildState,
  stats: BuildStats,
}

impl FoliageCacheBuilder {
  pub fn new(registry: SpeciesRegistry, config: RenderConfig) -> Self {
    Self::with_compositor(MeshCompositor::new(registry, config))
  }

  pub fn with_compositor(compositor: MeshCompositor) -> Self {
    Self {
      compositor,
      state: BuildState::Idle,
      stats: BuildStats::default(),
    }
  }

  pub fn state(&self) -> BuildState {
    self.state
  }

  pub fn stats(&self) -> BuildStats {
    self.stats
  }

  /// Render every species in parallel and block until all have reported.
  ///
  /// Returns the complete cache, or every failing species with its cause.
  #[tracing::instrument(skip_all, name = "cache::build")]
  pub fn build(&mut self) -> Result<FoliageCache, CacheError> {
    if self.state != BuildState::Idle {
      return Err(CacheError::AlreadyBuilt(self.state));
    }

    let pool = match WorkerPool::new(self.compositor.config().worker_threads, WORKER_NAME) {
      Ok(pool) => pool,
      Err(err) => {
        self.state = BuildState::Failed;
        return Err(err.into());
      }
    };

    self.state = BuildState::Running;
    let start = Instant::now();

    let compositor = &self.compositor;
    let reports = pool.fan_out(&Species::ALL, |species| compositor.render(species));

    let mut accumulator = Accumulator::default();
    for (species, outcome) in reports.try_iter() {
      accumulator.record(species, outcome);
    }

    self.stats = BuildStats {
      species_count: Species::COUNT,
      failure_count: accumulator.failures.len(),
      total_us: start.elapsed().as_micros() as u64,
    };

    match accumulator.finish() {
      Ok(cache) => {
        self.state = BuildState::Complete;
        info!(
          species = cache.len(),
          workers = pool.num_threads(),
          total_us = self.stats.total_us,
          "foliage cache built"
        );
        Ok(cache)
      }
      Err(failure) => {
        self.state = BuildState::Failed;
        Err(CacheError::Aggregate(failure))
      }
    }
  }
}

/// Build the cache for the built-in species table.
pub fn build_cache(config: RenderConfig) -> Result<FoliageCache, CacheError> {
  FoliageCacheBuilder::new(SpeciesRegistry::builtin().clone(), config).build()
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;
