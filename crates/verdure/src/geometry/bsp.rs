//! BSP tree used for solid boolean union.
//!
//! Each node stores a splitting plane, the polygons coplanar with it and two
//! subtrees. Union of solids A and B is computed by clipping each tree against
//! the other and merging what survives:
//!
//! ```text
//!   a.clip_to(b)          remove parts of A inside B
//!   b.clip_to(a)          remove parts of B inside A
//!   b.invert()
//!   b.clip_to(a)          remove coplanar faces of B shared with A
//!   b.invert()
//!   a.build(b.all())      A ∪ B
//! ```
//!
//! Input polygons must be convex; `Mesh::union` splits non-convex faces first.

use smallvec::SmallVec;

use super::polygon::{Plane, Polygon};
use crate::constants::PLANE_EPSILON;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// Where a polygon lies relative to a splitting plane.
pub(crate) enum Split {
  CoplanarFront(Polygon),
  CoplanarBack(Polygon),
  Front(Polygon),
  Back(Polygon),
  Spanning {
    front: Option<Polygon>,
    back: Option<Polygon>,
  },
}

impl Plane {
  /// Classify `polygon` against this plane, cutting it if it spans both sides.
  pub(crate) fn split(&self, polygon: Polygon) -> Split {
    let types: SmallVec<[u8; 16]> = polygon
      .vertices()
      .iter()
      .map(|v| {
        let t = self.distance(v.position);
        if t < -PLANE_EPSILON {
          BACK
        } else if t > PLANE_EPSILON {
          FRONT
        } else {
          COPLANAR
        }
      })
      .collect();

    match types.iter().fold(COPLANAR, |acc, &t| acc | t) {
      COPLANAR => {
        if self.normal.dot(polygon.normal()) > 0.0 {
          Split::CoplanarFront(polygon)
        } else {
          Split::CoplanarBack(polygon)
        }
      }
      FRONT => Split::Front(polygon),
      BACK => Split::Back(polygon),
      _ => {
        let vertices = polygon.vertices();
        let n = vertices.len();
        let mut front = Vec::with_capacity(n + 1);
        let mut back = Vec::with_capacity(n + 1);

        for i in 0..n {
          let j = (i + 1) % n;
          let (ti, tj) = (types[i], types[j]);
          let (vi, vj) = (vertices[i], vertices[j]);

          if ti != BACK {
            front.push(vi);
          }
          if ti != FRONT {
            back.push(vi);
          }
          if ti | tj == SPANNING {
            let t = (self.w - self.normal.dot(vi.position))
              / self.normal.dot(vj.position - vi.position);
            let v = vi.lerp(vj, t);
            front.push(v);
            back.push(v);
          }
        }

        let plane = polygon.plane();
        Split::Spanning {
          front: Polygon::from_fragment(front, plane),
          back: Polygon::from_fragment(back, plane),
        }
      }
    }
  }
}

/// Node of a solid BSP tree.
#[derive(Default)]
pub(crate) struct BspNode {
  plane: Option<Plane>,
  front: Option<Box<BspNode>>,
  back: Option<Box<BspNode>>,
  polygons: Vec<Polygon>,
}

impl BspNode {
  pub fn new(polygons: Vec<Polygon>) -> Self {
    let mut node = Self::default();
    node.build(polygons);
    node
  }

  /// Swap solid and empty space.
  pub fn invert(&mut self) {
    for polygon in &mut self.polygons {
      *polygon = polygon.inverted();
    }
    self.plane = self.plane.map(Plane::flipped);
    if let Some(front) = &mut self.front {
      front.invert();
    }
    if let Some(back) = &mut self.back {
      back.invert();
    }
    std::mem::swap(&mut self.front, &mut self.back);
  }

  /// Remove the parts of `polygons` that lie inside this tree's solid.
  pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
    let Some(plane) = self.plane else {
      return polygons;
    };

    let mut front = Vec::new();
    let mut back = Vec::new();
    for polygon in polygons {
      match plane.split(polygon) {
        Split::CoplanarFront(p) | Split::Front(p) => front.push(p),
        Split::CoplanarBack(p) | Split::Back(p) => back.push(p),
        Split::Spanning { front: f, back: b } => {
          front.extend(f);
          back.extend(b);
        }
      }
    }

    let mut kept = match &self.front {
      Some(node) => node.clip_polygons(front),
      None => front,
    };
    if let Some(node) = &self.back {
      kept.extend(node.clip_polygons(back));
    }
    kept
  }

  /// Remove everything in this tree that lies inside `other`.
  pub fn clip_to(&mut self, other: &BspNode) {
    self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
    if let Some(front) = &mut self.front {
      front.clip_to(other);
    }
    if let Some(back) = &mut self.back {
      back.clip_to(other);
    }
  }

  pub fn all_polygons(&self) -> Vec<Polygon> {
    let mut out = Vec::new();
    self.collect_into(&mut out);
    out
  }

  fn collect_into(&self, out: &mut Vec<Polygon>) {
    out.extend(self.polygons.iter().cloned());
    if let Some(front) = &self.front {
      front.collect_into(out);
    }
    if let Some(back) = &self.back {
      back.collect_into(out);
    }
  }

  /// Insert polygons, splitting them by existing planes.
  pub fn build(&mut self, polygons: Vec<Polygon>) {
    let Some(first) = polygons.first() else {
      return;
    };
    let plane = *self.plane.get_or_insert(first.plane());

    let mut front = Vec::new();
    let mut back = Vec::new();
    for polygon in polygons {
      match plane.split(polygon) {
        Split::CoplanarFront(p) | Split::CoplanarBack(p) => self.polygons.push(p),
        Split::Front(p) => front.push(p),
        Split::Back(p) => back.push(p),
        Split::Spanning { front: f, back: b } => {
          front.extend(f);
          back.extend(b);
        }
      }
    }

    if !front.is_empty() {
      self.front.get_or_insert_with(Box::default).build(front);
    }
    if !back.is_empty() {
      self.back.get_or_insert_with(Box::default).build(back);
    }
  }
}
