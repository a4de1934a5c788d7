//! Vertex colors and per-species palettes.

use std::fmt;

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
  pub r: f64,
  pub g: f64,
  pub b: f64,
  pub a: f64,
}

impl Color {
  pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
  pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

  pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
    Self { r, g, b, a }
  }

  /// Opaque color from a 24-bit `0xRRGGBB` value.
  pub const fn from_rgb_u32(rgb: u32) -> Self {
    Self::new(
      ((rgb >> 16) & 0xFF) as f64 / 255.0,
      ((rgb >> 8) & 0xFF) as f64 / 255.0,
      (rgb & 0xFF) as f64 / 255.0,
      1.0,
    )
  }

  /// Parse a 6-digit hex string (`"F8C4B4"`, optional leading `#`).
  pub fn from_hex(hex: &str) -> Option<Self> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
      return None;
    }
    u32::from_str_radix(digits, 16).ok().map(Self::from_rgb_u32)
  }

  /// Linear interpolation towards `other`: `self + t * (other - self)`.
  #[inline]
  pub fn lerp(self, other: Color, t: f64) -> Color {
    Color::new(
      self.r + t * (other.r - self.r),
      self.g + t * (other.g - self.g),
      self.b + t * (other.b - self.b),
      self.a + t * (other.a - self.a),
    )
  }

  pub fn to_array(self) -> [f64; 4] {
    [self.r, self.g, self.b, self.a]
  }
}

impl Default for Color {
  fn default() -> Self {
    Self::WHITE
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    write!(f, "#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
  }
}

/// Four-color palette for one species.
///
/// Canopy tiers blend `secondary` (ground) into `primary` (apex). Trunks use
/// `tertiary` at the apex and `quaternary` at the base.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPalette {
  pub primary: Color,
  pub secondary: Color,
  pub tertiary: Color,
  pub quaternary: Color,
}

impl ColorPalette {
  pub const fn new(primary: Color, secondary: Color, tertiary: Color, quaternary: Color) -> Self {
    Self {
      primary,
      secondary,
      tertiary,
      quaternary,
    }
  }

  /// Canopy tier color at an elevation fraction (0 = base, 1 = apex).
  #[inline]
  pub fn canopy_tier(&self, fraction: f64) -> Color {
    self.secondary.lerp(self.primary, fraction)
  }
}

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;
