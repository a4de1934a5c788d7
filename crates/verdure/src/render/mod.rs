//! Canopy and trunk renderers.
//!
//! Both parts are the same construction over a different number of tiers:
//!
//! ```text
//!   1. stencil   perimeter ──inset(d_k)──► ring_k        (one per tier)
//!   2. place     ring_k + placement + (0, elevation_k, 0)
//!   3. color     ring_k tinted with its tier color
//!   4. faces     apex cap (up) + base cap (down)
//!                + one band per consecutive tier pair, base to apex
//! ```
//!
//! The result is an un-unioned [`MeshFragment`]; the compositor joins the
//! two parts of a species.

mod canopy;
mod trunk;

use std::fmt;

use crate::color::Color;
use crate::error::{InvalidStencil, RenderError};
use crate::extrude::extrude_band;
use crate::geometry::{FaceAssembler, Mesh, Polygon};
use crate::stencil::Ring;

pub use canopy::render_canopy;
pub use trunk::render_trunk;

/// Which half of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
  Canopy,
  Trunk,
}

impl fmt::Display for Part {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Part::Canopy => "canopy",
      Part::Trunk => "trunk",
    })
  }
}

/// Named ring level, from the top down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
  Apex,
  Crown,
  Throne,
  Mantle,
  Base,
}

impl Tier {
  pub const CANOPY: [Tier; 5] = [Tier::Apex, Tier::Crown, Tier::Throne, Tier::Mantle, Tier::Base];
  pub const TRUNK: [Tier; 2] = [Tier::Apex, Tier::Base];

  pub fn name(self) -> &'static str {
    match self {
      Tier::Apex => "apex",
      Tier::Crown => "crown",
      Tier::Throne => "throne",
      Tier::Mantle => "mantle",
      Tier::Base => "base",
    }
  }
}

impl fmt::Display for Tier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Faces of one part before the union, with assembly counts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshFragment {
  polygons: Vec<Polygon>,
  candidate_count: usize,
  rejected_count: usize,
}

impl MeshFragment {
  pub fn from_assembler(faces: FaceAssembler) -> Self {
    Self {
      candidate_count: faces.candidate_count(),
      rejected_count: faces.rejected_count(),
      polygons: faces.into_polygons(),
    }
  }

  pub fn polygons(&self) -> &[Polygon] {
    &self.polygons
  }

  pub fn face_count(&self) -> usize {
    self.polygons.len()
  }

  /// Faces offered to assembly, including the dropped ones.
  pub fn candidate_count(&self) -> usize {
    self.candidate_count
  }

  /// Faces dropped as degenerate.
  pub fn rejected_count(&self) -> usize {
    self.rejected_count
  }

  pub fn into_mesh(self) -> Mesh {
    Mesh::new(self.polygons)
  }
}

/// Caps and bands for rings ordered apex first.
///
/// `rings[k]` must already be placed and tinted with `colors[k]`.
fn stack(rings: &[Ring], colors: &[Color]) -> MeshFragment {
  debug_assert_eq!(rings.len(), colors.len());
  let (Some(apex), Some(base)) = (rings.first(), rings.last()) else {
    return MeshFragment::default();
  };

  let bands = rings.len() - 1;
  let mut faces = FaceAssembler::with_capacity(2 + bands * base.len());
  faces.glue(base.cap().map(|cap| cap.inverted()));
  faces.glue(apex.cap());

  for k in (1..rings.len()).rev() {
    extrude_band(&rings[k], &rings[k - 1], colors[k], colors[k - 1], &mut faces);
  }

  MeshFragment::from_assembler(faces)
}

fn stencil_error(part: Part, tiers: &[Tier], err: InvalidStencil) -> RenderError {
  RenderError::InvalidStencil {
    part,
    tier: tiers[err.index],
    distance: err.distance,
    defect: err.defect,
  }
}
