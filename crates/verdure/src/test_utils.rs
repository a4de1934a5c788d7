//! Test fixtures shared by the renderer, compositor and cache tests.

use crate::color::{Color, ColorPalette};
use crate::footprint::FootprintShape;
use crate::geometry::Mesh;
use crate::species::{CanopyProfile, Species, SpeciesProfile, SpeciesRegistry, TrunkProfile};

// =============================================================================
// Profiles
// =============================================================================

/// Hexagonal canopy with staggered tiers and a waisted silhouette.
pub fn hexagon_canopy() -> CanopyProfile {
  CanopyProfile::new(
    2.0,
    CanopyProfile::STAGGERED,
    CanopyProfile::WAISTED,
    FootprintShape::Hexagon,
  )
}

pub fn triangle_trunk() -> TrunkProfile {
  TrunkProfile::new(1.0, TrunkProfile::THIN, FootprintShape::Triangle)
}

/// Distinct, easy to recognise colors.
pub fn test_palette() -> ColorPalette {
  ColorPalette::new(
    Color::new(1.0, 0.0, 0.0, 1.0),
    Color::new(0.0, 0.0, 1.0, 1.0),
    Color::new(0.0, 1.0, 0.0, 1.0),
    Color::new(1.0, 1.0, 0.0, 1.0),
  )
}

// =============================================================================
// Failure injection
// =============================================================================

/// Canopy crown inset wider than any footprint.
pub const OVERSIZED_CROWN: [f64; 5] = [0.2, 5.0, 0.0, 0.1, 0.2];

/// Trunk base inset that leaves nothing of a triangle.
pub const OVERSIZED_TRUNK_BASE: [f64; 2] = [0.1, 0.4];

/// `registry` with `species`' canopy crown inset oversized.
pub fn with_broken_canopy(registry: SpeciesRegistry, species: Species) -> SpeciesRegistry {
  let mut profile: SpeciesProfile = *registry.profile(species);
  profile.canopy = profile.canopy.with_insets(OVERSIZED_CROWN);
  registry.with_profile(species, profile)
}

/// `registry` with `species`' trunk base inset oversized.
pub fn with_broken_trunk(registry: SpeciesRegistry, species: Species) -> SpeciesRegistry {
  let mut profile: SpeciesProfile = *registry.profile(species);
  profile.trunk = profile
    .trunk
    .with_footprint(FootprintShape::Triangle)
    .with_insets(OVERSIZED_TRUNK_BASE);
  registry.with_profile(species, profile)
}

// =============================================================================
// Assertions
// =============================================================================

pub fn assert_color_close(a: Color, b: Color) {
  for (x, y) in a.to_array().iter().zip(b.to_array()) {
    assert!((x - y).abs() < 1e-9, "{a:?} != {b:?}");
  }
}

/// Every face has distinct corners and non-zero area.
pub fn assert_no_degenerate_faces(mesh: &Mesh) {
  for polygon in mesh.polygons() {
    let vertices = polygon.vertices();
    assert!(vertices.len() >= 3);
    assert!(polygon.area() > 1e-10);
    for (i, a) in vertices.iter().enumerate() {
      for b in &vertices[i + 1..] {
        assert!(a.position.distance(b.position) > 1e-8, "coincident corners");
      }
    }
  }
}

/// Same vertex count and positions within `1e-9`.
pub fn assert_meshes_match(a: &Mesh, b: &Mesh) {
  assert_eq!(a.face_count(), b.face_count());
  assert_eq!(a.vertex_count(), b.vertex_count());
  for (u, v) in a.vertices().zip(b.vertices()) {
    assert!((u.position - v.position).length() < 1e-9);
  }
}
