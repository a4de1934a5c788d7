use glam::DVec3;

use super::*;
use crate::color::Color;

/// Axis-aligned box with outward-facing quads.
fn cuboid(min: DVec3, max: DVec3) -> Mesh {
  let corner = |x: usize, y: usize, z: usize| {
    DVec3::new(
      if x == 0 { min.x } else { max.x },
      if y == 0 { min.y } else { max.y },
      if z == 0 { min.z } else { max.z },
    )
  };
  let faces = [
    [corner(0, 0, 0), corner(0, 0, 1), corner(0, 1, 1), corner(0, 1, 0)], // -X
    [corner(1, 0, 0), corner(1, 1, 0), corner(1, 1, 1), corner(1, 0, 1)], // +X
    [corner(0, 0, 0), corner(1, 0, 0), corner(1, 0, 1), corner(0, 0, 1)], // -Y
    [corner(0, 1, 0), corner(0, 1, 1), corner(1, 1, 1), corner(1, 1, 0)], // +Y
    [corner(0, 0, 0), corner(0, 1, 0), corner(1, 1, 0), corner(1, 0, 0)], // -Z
    [corner(0, 0, 1), corner(1, 0, 1), corner(1, 1, 1), corner(0, 1, 1)], // +Z
  ];
  let colors = [Color::WHITE; 4];
  Mesh::new(
    faces
      .iter()
      .map(|face| Polygon::face(face, &colors).unwrap())
      .collect(),
  )
}

fn unit_cube() -> Mesh {
  cuboid(DVec3::ZERO, DVec3::ONE)
}

#[test]
fn test_cuboid_faces_point_outward() {
  let cube = unit_cube();
  let center = DVec3::splat(0.5);
  for polygon in cube.polygons() {
    assert!(polygon.normal().dot(polygon.centroid() - center) > 0.0);
  }
}

#[test]
fn test_counts_and_bounds() {
  let cube = unit_cube();
  assert_eq!(cube.face_count(), 6);
  assert_eq!(cube.vertex_count(), 24);
  assert_eq!(cube.triangles().len(), 12);

  let bounds = cube.bounds();
  assert!(bounds.is_valid());
  assert_eq!(bounds.min, DVec3::ZERO);
  assert_eq!(bounds.max, DVec3::ONE);
}

#[test]
fn test_empty_bounds_invalid() {
  assert!(!Mesh::default().bounds().is_valid());
}

#[test]
fn test_volume() {
  assert!((unit_cube().volume() - 1.0).abs() < 1e-12);
  let slab = cuboid(DVec3::new(-1.0, 0.0, 2.0), DVec3::new(2.0, 0.5, 3.0));
  assert!((slab.volume() - 1.5).abs() < 1e-12);
}

#[test]
fn test_translated_preserves_volume() {
  let moved = unit_cube().translated(DVec3::new(5.0, -2.0, 1.0));
  assert!((moved.volume() - 1.0).abs() < 1e-12);
  assert_eq!(moved.bounds().min, DVec3::new(5.0, -2.0, 1.0));
}

// =============================================================================
// Union
// =============================================================================

#[test]
fn test_union_with_empty_is_identity() {
  let cube = unit_cube();
  assert_eq!(cube.union(&Mesh::default()), cube);
  assert_eq!(Mesh::default().union(&cube), cube);
}

#[test]
fn test_union_disjoint_keeps_every_face() {
  let a = unit_cube();
  let b = cuboid(DVec3::new(3.0, 0.0, 0.0), DVec3::new(4.0, 1.0, 1.0));
  let union = a.union(&b);

  assert_eq!(union.face_count(), 12);
  assert!((union.volume() - 2.0).abs() < 1e-9);
}

#[test]
fn test_union_overlapping_cubes() {
  let a = unit_cube();
  let b = cuboid(DVec3::splat(0.5), DVec3::splat(1.5));
  let union = a.union(&b);

  assert!((union.volume() - 1.875).abs() < 1e-9);
  let bounds = union.bounds();
  assert!((bounds.min - DVec3::ZERO).length() < 1e-12);
  assert!((bounds.max - DVec3::splat(1.5)).length() < 1e-12);
}

#[test]
fn test_union_stacked_solids_share_no_faces() {
  let base = unit_cube();
  let top = cuboid(DVec3::new(0.25, 1.0, 0.25), DVec3::new(0.75, 2.0, 0.75));
  let union = base.union(&top);

  assert!((union.volume() - 1.25).abs() < 1e-9);

  // Nothing of the contact square survives facing down into the base.
  for polygon in union.polygons() {
    let c = polygon.centroid();
    let inside_contact = (c.y - 1.0).abs() < 1e-9
      && (0.25..=0.75).contains(&c.x)
      && (0.25..=0.75).contains(&c.z);
    assert!(!inside_contact, "contact face left at {c}");
  }
}

#[test]
fn test_union_output_has_no_degenerate_faces() {
  let a = unit_cube();
  let b = cuboid(DVec3::new(0.3, 0.2, 0.1), DVec3::new(1.7, 0.9, 1.4));
  for polygon in a.union(&b).polygons() {
    assert!(polygon.area() > 1e-10);
    assert!(polygon.vertices().len() >= 3);
  }
}
