//! Per-species mesh: trunk and canopy placed on a tile and unioned.
//!
//! ```text
//!          ┌──────────┐
//!          │  canopy  │   origin − canopy centroid + (0, trunk height, 0)
//!          └──┬────┬──┘
//!             │trunk│     origin − trunk centroid
//!   ──────────┴────┴────────── ground (y = origin.y)
//! ```

use glam::DVec3;
use tracing::debug;

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::geometry::Mesh;
use crate::render::{render_canopy, render_trunk, MeshFragment};
use crate::species::{Species, SpeciesRegistry};

/// Renders single species from a registry.
///
/// Holds no mutable state, so one compositor can serve any number of threads.
#[derive(Clone, Debug, Default)]
pub struct MeshCompositor {
  registry: SpeciesRegistry,
  config: RenderConfig,
}

impl MeshCompositor {
  pub fn new(registry: SpeciesRegistry, config: RenderConfig) -> Self {
    Self { registry, config }
  }

  pub fn registry(&self) -> &SpeciesRegistry {
    &self.registry
  }

  pub fn config(&self) -> &RenderConfig {
    &self.config
  }

  /// Tile origin used by [`render`](Self::render): the canopy footprint's
  /// centroid, so the canopy stays where its footprint puts it.
  pub fn default_origin(&self, species: Species) -> DVec3 {
    let canopy = &self.registry.profile(species).canopy;
    canopy.footprint.centroid(self.config.tile_scale)
  }

  /// Render `species` at its default origin.
  pub fn render(&self, species: Species) -> Result<Mesh, RenderError> {
    self.render_at(species, self.default_origin(species))
  }

  /// Render `species` centered on `origin`.
  ///
  /// Fails fast: a trunk failure is returned without rendering the canopy.
  #[tracing::instrument(level = "debug", skip(self))]
  pub fn render_at(&self, species: Species, origin: DVec3) -> Result<Mesh, RenderError> {
    let (trunk, canopy) = self.render_parts(species, origin)?;
    let (trunk_faces, canopy_faces) = (trunk.face_count(), canopy.face_count());
    let dropped = trunk.rejected_count() + canopy.rejected_count();

    let mesh = trunk.into_mesh().union(&canopy.into_mesh());
    if mesh.is_empty() {
      return Err(RenderError::EmptyMesh { species });
    }

    debug!(
      trunk_faces,
      canopy_faces,
      dropped,
      faces = mesh.face_count(),
      "rendered {species}"
    );
    Ok(mesh)
  }

  /// Placed trunk and canopy fragments, before the union.
  pub fn render_parts(
    &self,
    species: Species,
    origin: DVec3,
  ) -> Result<(MeshFragment, MeshFragment), RenderError> {
    let profile = self.registry.profile(species);
    let scale = self.config.tile_scale;

    let trunk_placement = origin - profile.trunk.footprint.centroid(scale);
    let canopy_placement =
      origin - profile.canopy.footprint.centroid(scale) + DVec3::Y * profile.trunk.height;

    let trunk = render_trunk(&profile.trunk, &profile.palette, trunk_placement, scale)?;
    let canopy = render_canopy(&profile.canopy, &profile.palette, canopy_placement, scale)?;
    Ok((trunk, canopy))
  }
}

#[cfg(test)]
#[path = "compositor_test.rs"]
mod compositor_test;
