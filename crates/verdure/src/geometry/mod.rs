//! Geometry kernel: colored polygons, 2D inset and solid union.
//!
//! Everything here is value-style. Polygons and meshes are rebuilt rather
//! than mutated, so render tasks on different threads never share state.

mod bsp;
pub mod inset;
pub mod mesh;
pub mod polygon;

pub use inset::{inset, validate_perimeter};
pub use mesh::{Bounds, Mesh};
pub use polygon::{FaceAssembler, Plane, Polygon, Vertex};
