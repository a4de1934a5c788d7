//! Polygon meshes and their solid union.

use glam::DVec3;

use super::bsp::BspNode;
use super::polygon::{Polygon, Vertex};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
  pub min: DVec3,
  pub max: DVec3,
}

impl Bounds {
  /// Create bounds with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: DVec3::INFINITY,
      max: DVec3::NEG_INFINITY,
    }
  }

  /// Expand to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: DVec3) {
    self.min = self.min.min(point);
    self.max = self.max.max(point);
  }

  /// Check min <= max on all axes.
  pub fn is_valid(&self) -> bool {
    self.min.cmple(self.max).all()
  }

  pub fn size(&self) -> DVec3 {
    self.max - self.min
  }
}

impl Default for Bounds {
  fn default() -> Self {
    Self::empty()
  }
}

/// A collection of planar polygons, usually describing a closed solid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
  polygons: Vec<Polygon>,
}

impl Mesh {
  pub fn new(polygons: Vec<Polygon>) -> Self {
    Self { polygons }
  }

  pub fn polygons(&self) -> &[Polygon] {
    &self.polygons
  }

  pub fn face_count(&self) -> usize {
    self.polygons.len()
  }

  /// Total number of polygon corners (vertices are not shared between faces).
  pub fn vertex_count(&self) -> usize {
    self.polygons.iter().map(|p| p.vertices().len()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.polygons.is_empty()
  }

  pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
    self.polygons.iter().flat_map(|p| p.vertices())
  }

  pub fn bounds(&self) -> Bounds {
    let mut bounds = Bounds::empty();
    for vertex in self.vertices() {
      bounds.encapsulate(vertex.position);
    }
    bounds
  }

  pub fn translated(&self, offset: DVec3) -> Self {
    Self::new(self.polygons.iter().map(|p| p.translated(offset)).collect())
  }

  /// Enclosed volume by the divergence theorem.
  ///
  /// Only meaningful for closed, outward-facing surfaces.
  pub fn volume(&self) -> f64 {
    self
      .triangles()
      .iter()
      .map(|[a, b, c]| a.position.dot(b.position.cross(c.position)))
      .sum::<f64>()
      / 6.0
  }

  /// Fan triangulation of every face.
  pub fn triangles(&self) -> Vec<[Vertex; 3]> {
    self.polygons.iter().flat_map(Polygon::triangles).collect()
  }

  /// Solid union of two closed meshes.
  ///
  /// Faces shared between the solids (coplanar contact) are removed from the
  /// result, so two stacked solids merge into one closed surface.
  pub fn union(&self, other: &Mesh) -> Mesh {
    if self.is_empty() {
      return other.clone();
    }
    if other.is_empty() {
      return self.clone();
    }

    let mut a = BspNode::new(self.convex_polygons());
    let mut b = BspNode::new(other.convex_polygons());

    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();
    a.build(b.all_polygons());

    Mesh::new(a.all_polygons())
  }

  fn convex_polygons(&self) -> Vec<Polygon> {
    self.polygons.iter().flat_map(Polygon::convex_pieces).collect()
  }
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;
