//! Edge-offset polygon inset.
//!
//! Every edge moves inward along its normal by the inset distance; each output
//! vertex is the intersection of its two neighbouring offset edges (the miter
//! point). Output vertex `i` therefore always descends from input vertex `i`.
//!
//! ```text
//!   p3 ─────────────── p2
//!   │  q3 ───────── q2  │        q_i = p_i + d · (n_prev + n_next)
//!   │  │             │  │                    ─────────────────────
//!   │  q0 ───────── q1  │                      1 + n_prev · n_next
//!   p0 ─────────────── p1
//! ```
//!
//! A distance large enough to consume an edge, flip the polygon or fold it
//! over itself is reported as a [`StencilDefect`], never clamped.

use glam::DVec2;

use crate::constants::{AREA_EPSILON, POINT_EPSILON};
use crate::error::StencilDefect;
use crate::footprint::signed_area2;

/// Below this, neighbouring edges fold back onto each other and the miter
/// point runs off to infinity.
const MITER_LIMIT: f64 = 1e-6;

/// Inset a closed polygon by `distance`.
///
/// The perimeter may wind either way; "inward" follows its orientation.
/// A distance of zero returns the perimeter unchanged.
pub fn inset(points: &[DVec2], distance: f64) -> Result<Vec<DVec2>, StencilDefect> {
  if distance.is_nan() || distance < 0.0 {
    return Err(StencilDefect::NegativeDistance);
  }
  let orientation = validate_perimeter(points)?;
  if distance == 0.0 {
    return Ok(points.to_vec());
  }

  let n = points.len();
  let normals: Vec<DVec2> = (0..n)
    .map(|i| inward_normal(points[i], points[(i + 1) % n], orientation))
    .collect();

  let inset = (0..n)
    .map(|i| {
      let n_prev = normals[(i + n - 1) % n];
      let n_next = normals[i];
      let denom = 1.0 + n_prev.dot(n_next);
      if denom < MITER_LIMIT {
        return Err(StencilDefect::SelfIntersecting);
      }
      Ok(points[i] + (n_prev + n_next) * (distance / denom))
    })
    .collect::<Result<Vec<_>, _>>()?;

  validate_inset(points, &inset, orientation)?;
  Ok(inset)
}

/// Check a perimeter is a simple polygon; returns its orientation (±1).
pub fn validate_perimeter(points: &[DVec2]) -> Result<f64, StencilDefect> {
  if points.len() < 3 {
    return Err(StencilDefect::TooFewPoints);
  }
  for (i, a) in points.iter().enumerate() {
    if points[i + 1..]
      .iter()
      .any(|b| a.distance(*b) <= POINT_EPSILON)
    {
      return Err(StencilDefect::CoincidentPoints);
    }
  }
  let area2 = signed_area2(points);
  if area2.abs() <= 2.0 * AREA_EPSILON {
    return Err(StencilDefect::Collapsed);
  }
  if self_intersects(points) {
    return Err(StencilDefect::SelfIntersecting);
  }
  Ok(area2.signum())
}

fn validate_inset(
  parent: &[DVec2],
  inset: &[DVec2],
  orientation: f64,
) -> Result<(), StencilDefect> {
  let n = parent.len();
  for i in 0..n {
    let j = (i + 1) % n;
    let parent_edge = parent[j] - parent[i];
    let edge = inset[j] - inset[i];
    if edge.length() <= POINT_EPSILON || edge.dot(parent_edge) <= 0.0 {
      return Err(StencilDefect::EdgeConsumed);
    }
  }

  let area2 = signed_area2(inset) * orientation;
  if area2.abs() <= 2.0 * AREA_EPSILON {
    return Err(StencilDefect::Collapsed);
  }
  if area2 < 0.0 {
    return Err(StencilDefect::OrientationFlipped);
  }
  if self_intersects(inset) {
    return Err(StencilDefect::SelfIntersecting);
  }
  Ok(())
}

#[inline]
fn inward_normal(a: DVec2, b: DVec2, orientation: f64) -> DVec2 {
  (b - a).perp().normalize() * orientation
}

/// True when any two non-adjacent edges touch or cross.
fn self_intersects(points: &[DVec2]) -> bool {
  let n = points.len();
  for i in 0..n {
    let (a1, a2) = (points[i], points[(i + 1) % n]);
    for j in i + 2..n {
      // Edge n-1 is adjacent to edge 0.
      if i == 0 && j == n - 1 {
        continue;
      }
      let (b1, b2) = (points[j], points[(j + 1) % n]);
      if segments_touch(a1, a2, b1, b2) {
        return true;
      }
    }
  }
  false
}

fn segments_touch(a1: DVec2, a2: DVec2, b1: DVec2, b2: DVec2) -> bool {
  const EPS: f64 = 1e-12;
  let orient = |p: DVec2, q: DVec2, r: DVec2| (q - p).perp_dot(r - p);

  let o1 = orient(a1, a2, b1);
  let o2 = orient(a1, a2, b2);
  let o3 = orient(b1, b2, a1);
  let o4 = orient(b1, b2, a2);

  if o1.abs() <= EPS && o2.abs() <= EPS {
    // Collinear: overlap of the projections onto the shared line.
    let axis = a2 - a1;
    let (mut s0, mut s1) = (axis.dot(b1 - a1), axis.dot(b2 - a1));
    if s0 > s1 {
      std::mem::swap(&mut s0, &mut s1);
    }
    return s1 >= -EPS && s0 <= axis.length_squared() + EPS;
  }

  o1 * o2 <= EPS && o3 * o4 <= EPS
}

#[cfg(test)]
#[path = "inset_test.rs"]
mod inset_test;
