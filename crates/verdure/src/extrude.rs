//! Side bands between two corresponding rings.
//!
//! ```text
//!   upper[i] ───── upper[i+1]     upper color
//!      │               │
//!      │     quad i    │
//!      │               │
//!   lower[i] ───── lower[i+1]     lower color
//! ```

use crate::color::Color;
use crate::geometry::{FaceAssembler, Polygon};
use crate::stencil::Ring;

/// Emit one quad per ring edge into `faces`.
///
/// Both rings must already sit at their elevations. Quads that collapse
/// (coincident corners, zero area) are counted and dropped by the assembler.
/// Returns how many quads were kept.
pub fn extrude_band(
  lower: &Ring,
  upper: &Ring,
  lower_color: Color,
  upper_color: Color,
  faces: &mut FaceAssembler,
) -> usize {
  debug_assert_eq!(lower.len(), upper.len(), "rings from different stencils");

  let n = lower.len();
  let colors = [lower_color, lower_color, upper_color, upper_color];
  let mut kept = 0;
  for i in 0..n {
    let j = (i + 1) % n;
    let quad = [
      lower.position(i),
      lower.position(j),
      upper.position(j),
      upper.position(i),
    ];
    if faces.glue(Polygon::face(&quad, &colors)) {
      kept += 1;
    }
  }
  kept
}

#[cfg(test)]
mod tests {
  use glam::DVec3;

  use super::*;
  use crate::footprint::FootprintShape;
  use crate::stencil::build_stencil;

  fn rings(distances: &[f64]) -> Vec<Ring> {
    let perimeter = FootprintShape::Hexagon.perimeter(1.0);
    build_stencil(&perimeter, distances, Color::WHITE)
      .unwrap()
      .into_vec()
  }

  #[test]
  fn test_one_quad_per_edge() {
    let rings = rings(&[0.2, 0.0]);
    let upper = rings[0].translated(DVec3::new(0.0, 1.0, 0.0));
    let mut faces = FaceAssembler::new();

    let kept = extrude_band(&rings[1], &upper, Color::BLACK, Color::WHITE, &mut faces);
    assert_eq!(kept, 6);
    assert_eq!(faces.candidate_count(), 6);
    assert_eq!(faces.rejected_count(), 0);
  }

  #[test]
  fn test_band_faces_point_outward_with_gradient() {
    let rings = rings(&[0.1, 0.1]);
    let upper = rings[1].translated(DVec3::new(0.0, 0.5, 0.0));
    let mut faces = FaceAssembler::new();
    extrude_band(&rings[0], &upper, Color::BLACK, Color::WHITE, &mut faces);

    for face in faces.into_polygons() {
      let centroid = face.centroid();
      let outward = DVec3::new(centroid.x, 0.0, centroid.z);
      assert!(face.normal().dot(outward) > 0.0);

      let v = face.vertices();
      assert_eq!([v[0].color, v[1].color], [Color::BLACK; 2]);
      assert_eq!([v[2].color, v[3].color], [Color::WHITE; 2]);
    }
  }

  #[test]
  fn test_flat_band_is_dropped_not_raised() {
    let rings = rings(&[0.1, 0.1]);
    let mut faces = FaceAssembler::new();

    // Same ring at the same elevation: every quad has coincident corners.
    let kept = extrude_band(&rings[0], &rings[1], Color::BLACK, Color::WHITE, &mut faces);
    assert_eq!(kept, 0);
    assert_eq!(faces.candidate_count(), 6);
    assert_eq!(faces.rejected_count(), 6);
    assert!(faces.is_empty());
  }
}
