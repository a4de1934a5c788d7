//! Nested rings from one footprint perimeter.
//!
//! A stencil is the list of rings obtained by insetting the same perimeter by
//! each requested distance. Because the inset keeps vertex `i` descended from
//! perimeter vertex `i`, every ring of a stencil has the same length and
//! winding, and ring `a[i]` lines up with ring `b[i]`. Bands between rings are
//! stitched on that correspondence.

use glam::{DVec2, DVec3};
use smallvec::SmallVec;

use crate::color::Color;
use crate::constants::CANOPY_TIERS;
use crate::error::InvalidStencil;
use crate::footprint::lift;
use crate::geometry::{inset, Polygon, Vertex};

/// Closed loop of vertices on the ground plane (or translated from it).
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
  vertices: Vec<Vertex>,
}

impl Ring {
  /// Lift tile-local points onto the ground plane, facing up.
  pub fn from_points(points: &[DVec2], color: Color) -> Self {
    Self {
      vertices: points
        .iter()
        .map(|&p| Vertex::new(lift(p), DVec3::Y, color))
        .collect(),
    }
  }

  pub fn vertices(&self) -> &[Vertex] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  #[inline]
  pub fn position(&self, index: usize) -> DVec3 {
    self.vertices[index].position
  }

  pub fn translated(&self, offset: DVec3) -> Self {
    Self {
      vertices: self.vertices.iter().map(|v| v.translated(offset)).collect(),
    }
  }

  pub fn with_color(&self, color: Color) -> Self {
    Self {
      vertices: self
        .vertices
        .iter()
        .map(|v| Vertex { color, ..*v })
        .collect(),
    }
  }

  /// Upward-facing cap polygon, or `None` if the ring is degenerate.
  pub fn cap(&self) -> Option<Polygon> {
    Polygon::new(self.vertices.clone())
  }
}

/// Rings of one stencil, in the order their distances were requested.
pub type Stencil = SmallVec<[Ring; CANOPY_TIERS]>;

/// Inset `perimeter` by each of `distances`.
///
/// Stops at the first distance that leaves a degenerate polygon; no partial
/// stencil is returned. Every ring starts on the ground plane colored `color`.
pub fn build_stencil(
  perimeter: &[DVec2],
  distances: &[f64],
  color: Color,
) -> Result<Stencil, InvalidStencil> {
  distances
    .iter()
    .enumerate()
    .map(|(index, &distance)| {
      inset(perimeter, distance)
        .map(|points| Ring::from_points(&points, color))
        .map_err(|defect| InvalidStencil {
          index,
          distance,
          defect,
        })
    })
    .collect()
}

#[cfg(test)]
#[path = "stencil_test.rs"]
mod stencil_test;
