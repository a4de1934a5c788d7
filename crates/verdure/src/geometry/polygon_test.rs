use glam::DVec3;

use super::*;
use crate::color::Color;

fn unit_square() -> Vec<DVec3> {
  vec![
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(1.0, 0.0, -1.0),
    DVec3::new(0.0, 0.0, -1.0),
  ]
}

fn white(n: usize) -> Vec<Color> {
  vec![Color::WHITE; n]
}

#[test]
fn test_face_normal_follows_winding() {
  let face = Polygon::face(&unit_square(), &white(4)).unwrap();
  assert!((face.normal() - DVec3::Y).length() < 1e-12);
  assert!((face.area() - 1.0).abs() < 1e-12);

  for vertex in face.vertices() {
    assert_eq!(vertex.normal, face.normal());
  }
}

#[test]
fn test_coincident_vertices_rejected() {
  let mut positions = unit_square();
  positions[2] = positions[1];
  assert!(Polygon::face(&positions, &white(4)).is_none());
}

#[test]
fn test_collinear_vertices_rejected() {
  let positions = vec![
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(2.0, 0.0, 0.0),
  ];
  assert!(Polygon::face(&positions, &white(3)).is_none());
}

#[test]
fn test_non_planar_rejected() {
  let mut positions = unit_square();
  positions[2].y = 0.25;
  assert!(Polygon::face(&positions, &white(4)).is_none());
}

#[test]
fn test_too_few_vertices_rejected() {
  assert!(Polygon::new(Vec::new()).is_none());
  let two = vec![Vertex::new(DVec3::ZERO, DVec3::Y, Color::WHITE); 2];
  assert!(Polygon::new(two).is_none());
}

#[test]
fn test_inverted_flips_everything() {
  let face = Polygon::face(&unit_square(), &white(4)).unwrap();
  let inverted = face.inverted();

  assert!((inverted.normal() + DVec3::Y).length() < 1e-12);
  assert_eq!(inverted.plane().w, -face.plane().w);
  assert_eq!(inverted.vertices()[0].position, face.vertices()[3].position);
  for vertex in inverted.vertices() {
    assert_eq!(vertex.normal, -DVec3::Y);
  }
}

#[test]
fn test_translated_moves_plane() {
  let face = Polygon::face(&unit_square(), &white(4)).unwrap();
  let moved = face.translated(DVec3::new(3.0, 2.0, 1.0));

  assert_eq!(moved.vertices()[0].position, DVec3::new(3.0, 2.0, 1.0));
  assert!((moved.plane().w - 2.0).abs() < 1e-12);
  for vertex in moved.vertices() {
    assert!(moved.plane().distance(vertex.position).abs() < 1e-12);
  }
}

#[test]
fn test_convex_square_is_one_piece() {
  let face = Polygon::face(&unit_square(), &white(4)).unwrap();
  assert!(face.is_convex());
  assert_eq!(face.convex_pieces().len(), 1);
  assert_eq!(face.triangles().len(), 2);
}

#[test]
fn test_star_is_fanned_into_pieces() {
  // Four-pointed star, star-shaped around the origin.
  let positions: Vec<DVec3> = (0..8)
    .map(|k| {
      let angle = std::f64::consts::FRAC_PI_4 * k as f64;
      let radius = if k % 2 == 0 { 1.0 } else { 0.4 };
      DVec3::new(angle.cos() * radius, 0.0, -angle.sin() * radius)
    })
    .collect();
  let star = Polygon::face(&positions, &white(8)).unwrap();

  assert!(!star.is_convex());
  let pieces = star.convex_pieces();
  assert_eq!(pieces.len(), 8);

  let total: f64 = pieces.iter().map(Polygon::area).sum();
  assert!((total - star.area()).abs() < 1e-9);
  for piece in &pieces {
    assert!(piece.is_convex());
    assert!(piece.normal().dot(star.normal()) > 0.999);
  }
}

#[test]
fn test_assembler_counts_rejections() {
  let mut assembler = FaceAssembler::new();
  let good = Polygon::face(&unit_square(), &white(4));

  assert!(assembler.glue(good));
  assert!(!assembler.glue(None));
  assert!(!assembler.glue(None));

  assert_eq!(assembler.len(), 1);
  assert_eq!(assembler.rejected_count(), 2);
  assert_eq!(assembler.candidate_count(), 3);
  assert_eq!(assembler.into_polygons().len(), 1);
}

#[test]
fn test_vertex_lerp() {
  let a = Vertex::new(DVec3::ZERO, DVec3::Y, Color::BLACK);
  let b = Vertex::new(DVec3::new(2.0, 0.0, 0.0), DVec3::Y, Color::WHITE);
  let mid = a.lerp(b, 0.5);

  assert_eq!(mid.position, DVec3::new(1.0, 0.0, 0.0));
  assert_eq!(mid.normal, DVec3::Y);
  assert!((mid.color.r - 0.5).abs() < 1e-12);
}
