use glam::DVec3;

use super::{stack, stencil_error, MeshFragment, Part, Tier};
use crate::color::ColorPalette;
use crate::error::RenderError;
use crate::species::TrunkProfile;
use crate::stencil::{build_stencil, Ring};

/// Build the trunk of one species, base at `placement`.
///
/// A single band from the base ring (quaternary) up to the apex ring
/// (tertiary) at `height`.
pub fn render_trunk(
  profile: &TrunkProfile,
  palette: &ColorPalette,
  placement: DVec3,
  tile_scale: f64,
) -> Result<MeshFragment, RenderError> {
  let perimeter = profile.footprint.perimeter(tile_scale);
  let stencil = build_stencil(&perimeter, &profile.insets, palette.tertiary)
    .map_err(|err| stencil_error(Part::Trunk, &Tier::TRUNK, err))?;

  let elevations = [profile.height, 0.0];
  let colors = [palette.tertiary, palette.quaternary];

  let rings: Vec<Ring> = stencil
    .iter()
    .zip(elevations)
    .zip(colors)
    .map(|((ring, elevation), color)| {
      ring
        .translated(placement + DVec3::Y * elevation)
        .with_color(color)
    })
    .collect();

  Ok(stack(&rings, &colors))
}
