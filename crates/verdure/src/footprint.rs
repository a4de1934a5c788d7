//! Tile footprints on the triangular grid.
//!
//! A footprint is the closed 2D perimeter a structure occupies on its tile.
//! Perimeters are expressed in the tile-local plane with `u` along +X and `v`
//! along -Z, wound counter-clockwise so that a polygon lifted onto the ground
//! plane faces +Y.
//!
//! ```text
//!   Triangle      Rhombus        Trapezoid          Hexagon        Floret
//!
//!      2          3 ───── 2     3 ───── 2          3 ── 2          *  .  *
//!     / \        /       /     /         \        /      \       .        .
//!    /   \      /       /     /           \      4        1     *          *
//!   0 ─── 1    0 ───── 1     0 ─────────── 1      \      /       .        .
//!                                                   5 ── 0         *  .  *
//! ```

use std::fmt;

use glam::{DVec2, DVec3};

const SQRT_3_2: f64 = 0.866_025_403_784_438_6;

/// Inward pull of the Floret's edge midpoints, as a fraction of the apothem.
const FLORET_PINCH: f64 = 0.8;

/// Supported footprint shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FootprintShape {
  /// Single equilateral triangle, side 1.
  Triangle,
  /// Two triangles joined along an edge.
  Rhombus,
  /// Three triangles in a row.
  Trapezoid,
  /// Regular hexagon of six triangles, centered on the tile vertex.
  Hexagon,
  /// Star-shaped 12-gon: a hexagon with every edge pinched towards its center.
  Floret,
}

impl FootprintShape {
  pub const ALL: [FootprintShape; 5] = [
    FootprintShape::Triangle,
    FootprintShape::Rhombus,
    FootprintShape::Trapezoid,
    FootprintShape::Hexagon,
    FootprintShape::Floret,
  ];

  /// Stable lowercase name used in configuration files.
  pub fn name(self) -> &'static str {
    match self {
      FootprintShape::Triangle => "triangle",
      FootprintShape::Rhombus => "rhombus",
      FootprintShape::Trapezoid => "trapezoid",
      FootprintShape::Hexagon => "hexagon",
      FootprintShape::Floret => "floret",
    }
  }

  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|shape| shape.name() == name)
  }

  /// Ordered perimeter at unit tile scale.
  fn unit_perimeter(self) -> Vec<DVec2> {
    match self {
      FootprintShape::Triangle => vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.5, SQRT_3_2),
      ],
      FootprintShape::Rhombus => vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.5, SQRT_3_2),
        DVec2::new(0.5, SQRT_3_2),
      ],
      FootprintShape::Trapezoid => vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(1.5, SQRT_3_2),
        DVec2::new(0.5, SQRT_3_2),
      ],
      FootprintShape::Hexagon => (0..6)
        .map(|k| DVec2::from_angle(std::f64::consts::FRAC_PI_3 * (k as f64 - 1.0)))
        .collect(),
      FootprintShape::Floret => (0..12)
        .map(|k| {
          let angle = std::f64::consts::FRAC_PI_6 * (k as f64 - 2.0);
          let radius = if k % 2 == 0 { 1.0 } else { FLORET_PINCH * SQRT_3_2 };
          DVec2::from_angle(angle) * radius
        })
        .collect(),
    }
  }

  /// Ordered perimeter vertices at the given tile scale.
  pub fn perimeter(self, scale: f64) -> Vec<DVec2> {
    self.unit_perimeter().into_iter().map(|p| p * scale).collect()
  }

  /// Vertex-average center of the perimeter at the given scale, on the ground
  /// plane.
  pub fn centroid(self, scale: f64) -> DVec3 {
    let perimeter = self.perimeter(scale);
    let sum: DVec2 = perimeter.iter().copied().sum();
    lift(sum / perimeter.len() as f64)
  }
}

impl fmt::Display for FootprintShape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Lift a tile-local point onto the ground plane (`y = 0`).
#[inline]
pub fn lift(point: DVec2) -> DVec3 {
  DVec3::new(point.x, 0.0, -point.y)
}

/// Twice the signed area of a closed 2D polygon (positive when
/// counter-clockwise).
pub fn signed_area2(points: &[DVec2]) -> f64 {
  let n = points.len();
  (0..n)
    .map(|i| points[i].perp_dot(points[(i + 1) % n]))
    .sum()
}

#[cfg(test)]
#[path = "footprint_test.rs"]
mod footprint_test;
