//! Species and their structural profiles.
//!
//! Every species maps to a canopy profile, a trunk profile and a palette.
//! The built-in table is a compile-time constant; a registry is a plain value
//! that can be copied and have whole profiles replaced before it is shared.
//!
//! ```text
//!            apex ─┬─  height × 1.0     (primary)
//!          crown ──┤   height × crown
//!   canopy throne ──┤   height × throne  (lerp secondary → primary)
//!         mantle ──┤   height × mantle
//!           base ─┴─  0                 (secondary)
//!
//!   trunk    apex ─┬─  trunk height     (tertiary)
//!            base ─┴─  0                 (quaternary)
//! ```

use std::fmt;

use crate::color::{Color, ColorPalette};
use crate::constants::{CANOPY_TIERS, TRUNK_TIERS};
use crate::footprint::FootprintShape;
use crate::footprint::FootprintShape::{Floret, Hexagon, Rhombus, Trapezoid, Triangle};

/// Closed set of vegetation species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
  CherryBlossom,
  Chicle,
  GoldenGingko,
  Jacaranda,
  Linden,
  Spruce,
  ThujaOccidentalis,
}

impl Species {
  pub const COUNT: usize = 7;

  /// Declaration order, which is also the order of every report.
  pub const ALL: [Species; Self::COUNT] = [
    Species::CherryBlossom,
    Species::Chicle,
    Species::GoldenGingko,
    Species::Jacaranda,
    Species::Linden,
    Species::Spruce,
    Species::ThujaOccidentalis,
  ];

  #[inline]
  pub const fn index(self) -> usize {
    self as usize
  }

  /// Stable kebab-case key used on the command line and in config files.
  pub const fn key(self) -> &'static str {
    match self {
      Species::CherryBlossom => "cherry-blossom",
      Species::Chicle => "chicle",
      Species::GoldenGingko => "golden-gingko",
      Species::Jacaranda => "jacaranda",
      Species::Linden => "linden",
      Species::Spruce => "spruce",
      Species::ThujaOccidentalis => "thuja-occidentalis",
    }
  }

  pub fn from_key(key: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|species| species.key() == key)
  }
}

impl fmt::Display for Species {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

// =============================================================================
// Profiles
// =============================================================================

/// Shape of a canopy: five stacked rings over one footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanopyProfile {
  /// Apex elevation above the canopy base.
  pub height: f64,
  /// Crown, throne and mantle elevations as fractions of `height`.
  pub fractions: [f64; 3],
  /// Inset distances for apex, crown, throne, mantle and base.
  pub insets: [f64; CANOPY_TIERS],
  pub footprint: FootprintShape,
}

impl CanopyProfile {
  /// Tiers spaced evenly up the canopy.
  pub const EQUAL: [f64; 3] = [0.75, 0.5, 0.25];
  /// Tiers bunched near the apex and the base.
  pub const STAGGERED: [f64; 3] = [0.8, 0.3, 0.1];
  /// Waisted silhouette: widest at the throne.
  pub const WAISTED: [f64; CANOPY_TIERS] = [0.2, 0.1, 0.0, 0.1, 0.2];

  pub const EPIC: f64 = 3.0;
  pub const TALL: f64 = 2.0;
  pub const SHORT: f64 = 1.0;

  pub const fn new(
    height: f64,
    fractions: [f64; 3],
    insets: [f64; CANOPY_TIERS],
    footprint: FootprintShape,
  ) -> Self {
    Self {
      height,
      fractions,
      insets,
      footprint,
    }
  }

  pub fn with_height(mut self, height: f64) -> Self {
    self.height = height;
    self
  }

  pub fn with_fractions(mut self, fractions: [f64; 3]) -> Self {
    self.fractions = fractions;
    self
  }

  pub fn with_insets(mut self, insets: [f64; CANOPY_TIERS]) -> Self {
    self.insets = insets;
    self
  }

  pub fn with_footprint(mut self, footprint: FootprintShape) -> Self {
    self.footprint = footprint;
    self
  }
}

/// Shape of a trunk: two rings over one footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrunkProfile {
  pub height: f64,
  /// Inset distances for apex and base.
  pub insets: [f64; TRUNK_TIERS],
  pub footprint: FootprintShape,
}

impl TrunkProfile {
  pub const THIN: [f64; TRUNK_TIERS] = [0.25, 0.15];
  pub const THICK: [f64; TRUNK_TIERS] = [0.25, 0.1];

  pub const EPIC: f64 = 1.5;
  pub const TALL: f64 = 1.0;
  pub const SHORT: f64 = 0.5;

  pub const fn new(height: f64, insets: [f64; TRUNK_TIERS], footprint: FootprintShape) -> Self {
    Self {
      height,
      insets,
      footprint,
    }
  }

  pub fn with_height(mut self, height: f64) -> Self {
    self.height = height;
    self
  }

  pub fn with_insets(mut self, insets: [f64; TRUNK_TIERS]) -> Self {
    self.insets = insets;
    self
  }

  pub fn with_footprint(mut self, footprint: FootprintShape) -> Self {
    self.footprint = footprint;
    self
  }
}

/// Everything needed to render one species.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeciesProfile {
  pub canopy: CanopyProfile,
  pub trunk: TrunkProfile,
  pub palette: ColorPalette,
}

// =============================================================================
// Built-in table
// =============================================================================

const DARK_TRUNK_PRIMARY: Color = Color::from_rgb_u32(0x65451F);
const DARK_TRUNK_SECONDARY: Color = Color::from_rgb_u32(0x765827);
const LIGHT_TRUNK_PRIMARY: Color = Color::from_rgb_u32(0xC8AE7D);
const LIGHT_TRUNK_SECONDARY: Color = Color::from_rgb_u32(0xEAC696);

const fn palette(primary: u32, secondary: u32, tertiary: Color, quaternary: Color) -> ColorPalette {
  ColorPalette::new(
    Color::from_rgb_u32(primary),
    Color::from_rgb_u32(secondary),
    tertiary,
    quaternary,
  )
}

const fn profile(canopy: CanopyProfile, trunk: TrunkProfile, palette: ColorPalette) -> SpeciesProfile {
  SpeciesProfile {
    canopy,
    trunk,
    palette,
  }
}

/// Indexed by [`Species::index`].
static BUILTIN: SpeciesRegistry = SpeciesRegistry {
  profiles: [
    // CherryBlossom
    profile(
      CanopyProfile::new(CanopyProfile::TALL, CanopyProfile::STAGGERED, CanopyProfile::WAISTED, Floret),
      TrunkProfile::new(TrunkProfile::EPIC, TrunkProfile::THIN, Triangle),
      palette(0xF8C4B4, 0xFF8787, LIGHT_TRUNK_PRIMARY, LIGHT_TRUNK_SECONDARY),
    ),
    // Chicle
    profile(
      CanopyProfile::new(CanopyProfile::SHORT, CanopyProfile::EQUAL, CanopyProfile::WAISTED, Floret),
      TrunkProfile::new(TrunkProfile::SHORT, TrunkProfile::THICK, Rhombus),
      palette(0xF11A7B, 0x982176, LIGHT_TRUNK_PRIMARY, LIGHT_TRUNK_SECONDARY),
    ),
    // GoldenGingko
    profile(
      CanopyProfile::new(CanopyProfile::TALL, CanopyProfile::EQUAL, CanopyProfile::WAISTED, Hexagon),
      TrunkProfile::new(TrunkProfile::TALL, TrunkProfile::THICK, Trapezoid),
      palette(0xF2BE22, 0xF29727, DARK_TRUNK_PRIMARY, DARK_TRUNK_PRIMARY),
    ),
    // Jacaranda
    profile(
      CanopyProfile::new(CanopyProfile::SHORT, CanopyProfile::STAGGERED, CanopyProfile::WAISTED, Floret),
      TrunkProfile::new(TrunkProfile::SHORT, TrunkProfile::THICK, Triangle),
      palette(0x713ABE, 0x5B0888, LIGHT_TRUNK_PRIMARY, LIGHT_TRUNK_SECONDARY),
    ),
    // Linden
    profile(
      CanopyProfile::new(CanopyProfile::SHORT, CanopyProfile::STAGGERED, CanopyProfile::WAISTED, Floret),
      TrunkProfile::new(TrunkProfile::SHORT, TrunkProfile::THICK, Rhombus),
      palette(0x176B87, 0x053B50, LIGHT_TRUNK_PRIMARY, LIGHT_TRUNK_SECONDARY),
    ),
    // Spruce
    profile(
      CanopyProfile::new(CanopyProfile::EPIC, CanopyProfile::STAGGERED, CanopyProfile::WAISTED, Hexagon),
      TrunkProfile::new(TrunkProfile::TALL, TrunkProfile::THIN, Triangle),
      palette(0x7A9D54, 0x557A46, DARK_TRUNK_PRIMARY, DARK_TRUNK_SECONDARY),
    ),
    // ThujaOccidentalis
    profile(
      CanopyProfile::new(CanopyProfile::TALL, CanopyProfile::STAGGERED, CanopyProfile::WAISTED, Hexagon),
      TrunkProfile::new(TrunkProfile::SHORT, TrunkProfile::THICK, Trapezoid),
      palette(0xC3EDC0, 0x79AC78, DARK_TRUNK_PRIMARY, DARK_TRUNK_PRIMARY),
    ),
  ],
};

/// Total lookup from species to profile.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesRegistry {
  profiles: [SpeciesProfile; Species::COUNT],
}

impl SpeciesRegistry {
  /// The process-wide built-in table.
  pub fn builtin() -> &'static SpeciesRegistry {
    &BUILTIN
  }

  #[inline]
  pub fn profile(&self, species: Species) -> &SpeciesProfile {
    &self.profiles[species.index()]
  }

  /// Copy of this registry with one profile replaced.
  pub fn with_profile(mut self, species: Species, profile: SpeciesProfile) -> Self {
    self.profiles[species.index()] = profile;
    self
  }

  /// Species paired with their profiles, in declaration order.
  pub fn iter(&self) -> impl Iterator<Item = (Species, &SpeciesProfile)> {
    Species::ALL.into_iter().zip(self.profiles.iter())
  }
}

impl Default for SpeciesRegistry {
  fn default() -> Self {
    BUILTIN.clone()
  }
}

#[cfg(test)]
#[path = "species_test.rs"]
mod species_test;
