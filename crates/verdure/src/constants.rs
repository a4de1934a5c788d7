//! Numeric tolerances shared by the geometry kernel and the renderers.
//!
//! # Tolerance Ladder
//!
//! ```text
//! ┌──────────────────────┬────────┬──────────────────────────────────────────┐
//! │ Constant             │ Value  │ Used for                                 │
//! ├──────────────────────┼────────┼──────────────────────────────────────────┤
//! │ POINT_EPSILON        │ 1e-8   │ coincident vertices, zero-length edges   │
//! │ AREA_EPSILON         │ 1e-10  │ zero-area faces and collapsed insets     │
//! │ PLANE_EPSILON        │ 1e-5   │ BSP front/back/coplanar classification   │
//! │ PLANARITY_EPSILON    │ 1e-6   │ vertex distance from a face's own plane  │
//! └──────────────────────┴────────┴──────────────────────────────────────────┘
//! ```
//!
//! All geometry is built in tile units (a footprint triangle has side 1 at
//! `TILE_SCALE`), so absolute tolerances are appropriate.

/// Two points closer than this are considered the same point.
pub const POINT_EPSILON: f64 = 1e-8;

/// Polygons with less area than this are degenerate.
pub const AREA_EPSILON: f64 = 1e-10;

/// Thickness of a splitting plane during BSP classification.
pub const PLANE_EPSILON: f64 = 1e-5;

/// Maximum distance of a vertex from its polygon's plane.
pub const PLANARITY_EPSILON: f64 = 1e-6;

/// Scale of a single grid tile.
pub const TILE_SCALE: f64 = 1.0;

/// Number of tiers stacked in a canopy (apex, crown, throne, mantle, base).
pub const CANOPY_TIERS: usize = 5;

/// Number of tiers stacked in a trunk (apex, base).
pub const TRUNK_TIERS: usize = 2;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tolerances_are_ordered() {
    assert!(AREA_EPSILON < POINT_EPSILON);
    assert!(POINT_EPSILON < PLANARITY_EPSILON);
    assert!(PLANARITY_EPSILON < PLANE_EPSILON);
  }
}
