use glam::DVec3;

use super::{stack, stencil_error, MeshFragment, Part, Tier};
use crate::color::ColorPalette;
use crate::error::RenderError;
use crate::species::CanopyProfile;
use crate::stencil::{build_stencil, Ring};

/// Build the canopy of one species, base at `placement`.
///
/// Rings are inset from the footprint perimeter at `tile_scale`; elevations
/// are `height × {1, crown, throne, mantle, 0}` and tier colors blend the
/// palette's secondary (base) into its primary (apex).
pub fn render_canopy(
  profile: &CanopyProfile,
  palette: &ColorPalette,
  placement: DVec3,
  tile_scale: f64,
) -> Result<MeshFragment, RenderError> {
  let perimeter = profile.footprint.perimeter(tile_scale);
  let stencil = build_stencil(&perimeter, &profile.insets, palette.primary)
    .map_err(|err| stencil_error(Part::Canopy, &Tier::CANOPY, err))?;

  let [crown, throne, mantle] = profile.fractions;
  let height = profile.height;
  let elevations = [height, height * crown, height * throne, height * mantle, 0.0];
  let colors = [
    palette.primary,
    palette.canopy_tier(crown),
    palette.canopy_tier(throne),
    palette.canopy_tier(mantle),
    palette.secondary,
  ];

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
