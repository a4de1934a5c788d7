//! Error types for stencil construction, rendering and cache builds.
//!
//! ```text
//!   inset ──► StencilDefect
//!               │ (which tier, which distance)
//!               ▼
//!   render ──► RenderError ──────────────┐ fail-fast per species
//!                                         ▼
//!   build ───► CacheError::Aggregate(AggregateFailure { (species, cause)... })
//! ```

use std::fmt;

use thiserror::Error;

use crate::cache::BuildState;
use crate::render::{Part, Tier};
use crate::species::Species;

/// Why an inset (or the perimeter it started from) is unusable.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StencilDefect {
  #[error("inset distance is negative or not a number")]
  NegativeDistance,
  #[error("perimeter has fewer than 3 points")]
  TooFewPoints,
  #[error("perimeter has coincident points")]
  CoincidentPoints,
  #[error("polygon collapsed to zero area")]
  Collapsed,
  #[error("polygon orientation flipped")]
  OrientationFlipped,
  #[error("an edge was consumed by the inset")]
  EdgeConsumed,
  #[error("polygon intersects itself")]
  SelfIntersecting,
}

/// A stencil distance that failed, by position in the requested list.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("inset #{index} ({distance}) is invalid: {defect}")]
pub struct InvalidStencil {
  pub index: usize,
  pub distance: f64,
  pub defect: StencilDefect,
}

/// Failure rendering a single species.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
  #[error("invalid {part} stencil at {tier} (inset {distance}): {defect}")]
  InvalidStencil {
    part: Part,
    tier: Tier,
    distance: f64,
    defect: StencilDefect,
  },
  #[error("union of trunk and canopy for {species} produced no faces")]
  EmptyMesh { species: Species },
}

/// Every species that failed in one cache build, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateFailure {
  pub failures: Vec<(Species, RenderError)>,
}

impl AggregateFailure {
  pub fn len(&self) -> usize {
    self.failures.len()
  }

  pub fn is_empty(&self) -> bool {
    self.failures.is_empty()
  }

  pub fn species(&self) -> impl Iterator<Item = Species> + '_ {
    self.failures.iter().map(|(species, _)| *species)
  }

  /// Cause recorded for `species`, if it failed.
  pub fn cause(&self, species: Species) -> Option<&RenderError> {
    self
      .failures
      .iter()
      .find(|(s, _)| *s == species)
      .map(|(_, cause)| cause)
  }
}

impl fmt::Display for AggregateFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} species failed to render", self.failures.len())?;
    for (species, cause) in &self.failures {
      write!(f, "\n  {species}: {cause}")?;
    }
    Ok(())
  }
}

impl std::error::Error for AggregateFailure {}

/// Failure building a [`FoliageCache`](crate::FoliageCache).
#[derive(Debug, Error)]
pub enum CacheError {
  #[error("{0}")]
  Aggregate(AggregateFailure),
  #[error("cache builder already left idle (state: {0:?})")]
  AlreadyBuilt(BuildState),
  #[error("failed to start render workers: {0}")]
  WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
