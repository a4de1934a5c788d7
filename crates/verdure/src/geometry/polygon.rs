//! Colored vertices, planes and planar polygons.

use glam::DVec3;

use crate::color::Color;
use crate::constants::{AREA_EPSILON, PLANARITY_EPSILON, POINT_EPSILON};

/// Mesh vertex with position, normal and color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  pub position: DVec3,
  pub normal: DVec3,
  pub color: Color,
}

impl Vertex {
  pub fn new(position: DVec3, normal: DVec3, color: Color) -> Self {
    Self {
      position,
      normal,
      color,
    }
  }

  #[inline]
  pub fn translated(self, offset: DVec3) -> Self {
    Self {
      position: self.position + offset,
      ..self
    }
  }

  #[inline]
  pub fn inverted(self) -> Self {
    Self {
      normal: -self.normal,
      ..self
    }
  }

  /// Interpolate every attribute towards `other`.
  pub fn lerp(self, other: Vertex, t: f64) -> Self {
    Self {
      position: self.position.lerp(other.position, t),
      normal: self.normal.lerp(other.normal, t).normalize_or(self.normal),
      color: self.color.lerp(other.color, t),
    }
  }
}

/// Oriented plane `normal · p = w`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
  pub normal: DVec3,
  pub w: f64,
}

impl Plane {
  /// Best-fit plane through a closed loop (Newell's method).
  ///
  /// Returns `None` when the loop encloses no area.
  pub fn from_points(points: &[DVec3]) -> Option<Self> {
    let (normal, area) = newell(points)?;
    if area < AREA_EPSILON {
      return None;
    }
    let centroid = points.iter().copied().sum::<DVec3>() / points.len() as f64;
    Some(Self {
      normal,
      w: normal.dot(centroid),
    })
  }

  #[inline]
  pub fn flipped(self) -> Self {
    Self {
      normal: -self.normal,
      w: -self.w,
    }
  }

  /// Signed distance from the plane (positive in front).
  #[inline]
  pub fn distance(&self, point: DVec3) -> f64 {
    self.normal.dot(point) - self.w
  }
}

/// Unit normal and area of a closed loop.
fn newell(points: &[DVec3]) -> Option<(DVec3, f64)> {
  let origin = *points.first()?;
  let n = points.len();
  let sum: DVec3 = (0..n)
    .map(|i| (points[i] - origin).cross(points[(i + 1) % n] - origin))
    .sum();
  let length = sum.length();
  if length == 0.0 {
    return None;
  }
  Some((sum / length, length * 0.5))
}

/// Planar polygon with at least three distinct vertices.
///
/// Construction validates the vertex loop, so every `Polygon` has non-zero
/// area, no coincident vertices and a well-defined plane. Winding is
/// counter-clockwise around the plane normal.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
  vertices: Vec<Vertex>,
  plane: Plane,
}

impl Polygon {
  /// Validate a vertex loop. Returns `None` for degenerate input.
  pub fn new(vertices: Vec<Vertex>) -> Option<Self> {
    if vertices.len() < 3 || has_coincident(&vertices) {
      return None;
    }
    let positions: Vec<DVec3> = vertices.iter().map(|v| v.position).collect();
    let plane = Plane::from_points(&positions)?;
    if positions
      .iter()
      .any(|&p| plane.distance(p).abs() > PLANARITY_EPSILON)
    {
      return None;
    }
    Some(Self { vertices, plane })
  }

  /// Flat-shaded face: every vertex takes the face normal.
  ///
  /// `colors` pairs with `positions` index by index.
  pub fn face(positions: &[DVec3], colors: &[Color]) -> Option<Self> {
    debug_assert_eq!(positions.len(), colors.len());
    let plane = Plane::from_points(positions)?;
    let vertices = positions
      .iter()
      .zip(colors)
      .map(|(&position, &color)| Vertex::new(position, plane.normal, color))
      .collect();
    Self::new(vertices)
  }

  /// Rebuild a fragment produced by splitting `parent`-plane geometry.
  ///
  /// Near-duplicate consecutive vertices are merged; the result is `None` if
  /// fewer than three remain or the area vanished.
  pub(crate) fn from_fragment(vertices: Vec<Vertex>, plane: Plane) -> Option<Self> {
    let mut cleaned: Vec<Vertex> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
      let duplicate = cleaned
        .last()
        .is_some_and(|last| last.position.distance(vertex.position) <= POINT_EPSILON);
      if !duplicate {
        cleaned.push(vertex);
      }
    }
    while cleaned.len() > 1
      && cleaned[0].position.distance(cleaned[cleaned.len() - 1].position) <= POINT_EPSILON
    {
      cleaned.pop();
    }
    if cleaned.len() < 3 || has_coincident(&cleaned) {
      return None;
    }
    let positions: Vec<DVec3> = cleaned.iter().map(|v| v.position).collect();
    let (_, area) = newell(&positions)?;
    if area < AREA_EPSILON {
      return None;
    }
    Some(Self {
      vertices: cleaned,
      plane,
    })
  }

  pub fn vertices(&self) -> &[Vertex] {
    &self.vertices
  }

  pub fn plane(&self) -> Plane {
    self.plane
  }

  pub fn normal(&self) -> DVec3 {
    self.plane.normal
  }

  pub fn area(&self) -> f64 {
    let positions: Vec<DVec3> = self.vertices.iter().map(|v| v.position).collect();
    newell(&positions).map_or(0.0, |(_, area)| area)
  }

  pub fn centroid(&self) -> DVec3 {
    self.vertices.iter().map(|v| v.position).sum::<DVec3>() / self.vertices.len() as f64
  }

  /// Same polygon facing the other way.
  pub fn inverted(&self) -> Self {
    Self {
      vertices: self.vertices.iter().rev().map(|v| v.inverted()).collect(),
      plane: self.plane.flipped(),
    }
  }

  pub fn translated(&self, offset: DVec3) -> Self {
    Self {
      vertices: self.vertices.iter().map(|v| v.translated(offset)).collect(),
      plane: Plane {
        normal: self.plane.normal,
        w: self.plane.w + self.plane.normal.dot(offset),
      },
    }
  }

  /// True when every corner turns the same way around the normal.
  pub fn is_convex(&self) -> bool {
    let n = self.vertices.len();
    (0..n).all(|i| {
      let a = self.vertices[i].position;
      let b = self.vertices[(i + 1) % n].position;
      let c = self.vertices[(i + 2) % n].position;
      (b - a).cross(c - b).dot(self.plane.normal) >= -AREA_EPSILON
    })
  }

  /// Split into convex pieces.
  ///
  /// Non-convex polygons are fanned around their centroid, which is exact for
  /// the star-shaped faces the footprints produce.
  pub fn convex_pieces(&self) -> Vec<Polygon> {
    if self.is_convex() {
      return vec![self.clone()];
    }
    let n = self.vertices.len();
    let weight = 1.0 / n as f64;
    let color = self.vertices.iter().fold(Color::new(0.0, 0.0, 0.0, 0.0), |acc, v| {
      Color::new(
        acc.r + v.color.r * weight,
        acc.g + v.color.g * weight,
        acc.b + v.color.b * weight,
        acc.a + v.color.a * weight,
      )
    });
    let hub = Vertex::new(self.centroid(), self.plane.normal, color);
    (0..n)
      .filter_map(|i| {
        let fan = vec![hub, self.vertices[i], self.vertices[(i + 1) % n]];
        Polygon::from_fragment(fan, self.plane)
      })
      .collect()
  }

  /// Fan triangulation of the convex pieces.
  pub fn triangles(&self) -> Vec<[Vertex; 3]> {
    let mut triangles = Vec::new();
    for piece in self.convex_pieces() {
      let v = &piece.vertices;
      for i in 1..v.len() - 1 {
        triangles.push([v[0], v[i], v[i + 1]]);
      }
    }
    triangles
  }
}

fn has_coincident(vertices: &[Vertex]) -> bool {
  vertices.iter().enumerate().any(|(i, a)| {
    vertices[i + 1..]
      .iter()
      .any(|b| a.position.distance(b.position) <= POINT_EPSILON)
  })
}

/// Accumulates candidate faces, keeping only the valid ones.
///
/// Candidates arrive as `Option<Polygon>` so a construction step that could
/// not produce a polygon (degenerate quad, zero-width band) is absorbed here
/// rather than treated as an error.
#[derive(Debug, Default)]
pub struct FaceAssembler {
  polygons: Vec<Polygon>,
  rejected: usize,
}

impl FaceAssembler {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      polygons: Vec::with_capacity(capacity),
      rejected: 0,
    }
  }

  /// Append `candidate` if present. Returns whether it was kept.
  pub fn glue(&mut self, candidate: Option<Polygon>) -> bool {
    match candidate {
      Some(polygon) => {
        self.polygons.push(polygon);
        true
      }
      None => {
        self.rejected += 1;
        false
      }
    }
  }

  /// Faces offered so far, kept or not.
  pub fn candidate_count(&self) -> usize {
    self.polygons.len() + self.rejected
  }

  pub fn rejected_count(&self) -> usize {
    self.rejected
  }

  pub fn len(&self) -> usize {
    self.polygons.len()
  }

  pub fn is_empty(&self) -> bool {
    self.polygons.is_empty()
  }

  pub fn into_polygons(self) -> Vec<Polygon> {
    self.polygons
  }
}

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;
