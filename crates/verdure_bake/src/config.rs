//! Configuration parsing for foliage baking.
//!
//! ```toml
//! [render]
//! tile_scale = 1.0
//! worker_threads = 4
//!
//! [species.spruce]
//! canopy_height = 3.5
//! canopy_insets = [0.25, 0.1, 0.0, 0.1, 0.2]
//! trunk_footprint = "rhombus"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use verdure::{FootprintShape, RenderConfig, Species, SpeciesProfile, SpeciesRegistry};

/// Root configuration for foliage baking.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	#[serde(default)]
	pub render: RenderSection,
	/// Per-species overrides keyed by species key (`cherry-blossom`, ...).
	#[serde(default)]
	pub species: BTreeMap<String, SpeciesOverride>,
}

/// Settings forwarded to the renderer.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSection {
	/// Footprint scale.
	#[serde(default = "default_tile_scale")]
	pub tile_scale: f64,
	/// Render workers, 0 for one per core.
	#[serde(default)]
	pub worker_threads: usize,
}

impl Default for RenderSection {
	fn default() -> Self {
		Self {
			tile_scale: default_tile_scale(),
			worker_threads: 0,
		}
	}
}

fn default_tile_scale() -> f64 {
	1.0
}

/// Replacement values for one species' built-in profile.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeciesOverride {
	pub canopy_height: Option<f64>,
	/// Crown, throne and mantle elevation fractions.
	pub canopy_fractions: Option<[f64; 3]>,
	/// Apex, crown, throne, mantle and base insets.
	pub canopy_insets: Option<[f64; 5]>,
	pub canopy_footprint: Option<String>,
	pub trunk_height: Option<f64>,
	/// Apex and base insets.
	pub trunk_insets: Option<[f64; 2]>,
	pub trunk_footprint: Option<String>,
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		let scale = config.render.tile_scale;
		if !scale.is_finite() || scale <= 0.0 {
			anyhow::bail!("tile_scale must be positive, got {}", scale);
		}

		for (key, entry) in &config.species {
			if Species::from_key(key).is_none() {
				anyhow::bail!("Unknown species '{}'", key);
			}
			entry.validate().with_context(|| format!("Invalid overrides for '{}'", key))?;
		}

		Ok(config)
	}

	pub fn render_config(&self) -> RenderConfig {
		RenderConfig::new()
			.with_tile_scale(self.render.tile_scale)
			.with_worker_threads(self.render.worker_threads)
	}

	/// Built-in registry with every override applied.
	pub fn registry(&self) -> Result<SpeciesRegistry> {
		let mut registry = SpeciesRegistry::builtin().clone();
		for (key, entry) in &self.species {
			let species =
				Species::from_key(key).with_context(|| format!("Unknown species '{}'", key))?;
			let profile = entry.apply(*registry.profile(species))?;
			registry = registry.with_profile(species, profile);
		}
		Ok(registry)
	}
}

impl SpeciesOverride {
	fn validate(&self) -> Result<()> {
		for height in [self.canopy_height, self.trunk_height].into_iter().flatten() {
			if !height.is_finite() || height <= 0.0 {
				anyhow::bail!("heights must be positive, got {}", height);
			}
		}
		if let Some(fractions) = self.canopy_fractions {
			if fractions.iter().any(|f| !(0.0..=1.0).contains(f)) {
				anyhow::bail!("canopy_fractions must lie in [0, 1], got {:?}", fractions);
			}
		}
		for name in [&self.canopy_footprint, &self.trunk_footprint].into_iter().flatten() {
			footprint(name)?;
		}
		Ok(())
	}

	fn apply(&self, mut profile: SpeciesProfile) -> Result<SpeciesProfile> {
		if let Some(height) = self.canopy_height {
			profile.canopy = profile.canopy.with_height(height);
		}
		if let Some(fractions) = self.canopy_fractions {
			profile.canopy = profile.canopy.with_fractions(fractions);
		}
		if let Some(insets) = self.canopy_insets {
			profile.canopy = profile.canopy.with_insets(insets);
		}
		if let Some(name) = &self.canopy_footprint {
			profile.canopy = profile.canopy.with_footprint(footprint(name)?);
		}
		if let Some(height) = self.trunk_height {
			profile.trunk = profile.trunk.with_height(height);
		}
		if let Some(insets) = self.trunk_insets {
			profile.trunk = profile.trunk.with_insets(insets);
		}
		if let Some(name) = &self.trunk_footprint {
			profile.trunk = profile.trunk.with_footprint(footprint(name)?);
		}
		Ok(profile)
	}
}

fn footprint(name: &str) -> Result<FootprintShape> {
	FootprintShape::from_name(name).with_context(|| format!("Unknown footprint '{}'", name))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_config_uses_defaults() {
		let config = Config::parse("").unwrap();
		assert_eq!(config.render_config(), RenderConfig::default());
		assert_eq!(&config.registry().unwrap(), SpeciesRegistry::builtin());
	}

	#[test]
	fn test_render_section() {
		let config = Config::parse("[render]\ntile_scale = 2.0\nworker_threads = 3\n").unwrap();
		let render = config.render_config();
		assert_eq!(render.tile_scale, 2.0);
		assert_eq!(render.worker_threads, 3);
	}

	#[test]
	fn test_species_override() {
		let config = Config::parse(
			r#"
			[species.spruce]
			canopy_height = 4.0
			canopy_insets = [0.3, 0.1, 0.0, 0.1, 0.3]
			trunk_footprint = "rhombus"
			"#,
		)
		.unwrap();
		let registry = config.registry().unwrap();
		let spruce = registry.profile(Species::Spruce);

		assert_eq!(spruce.canopy.height, 4.0);
		assert_eq!(spruce.canopy.insets, [0.3, 0.1, 0.0, 0.1, 0.3]);
		assert_eq!(spruce.trunk.footprint, FootprintShape::Rhombus);
		// Untouched fields keep their built-in values.
		let builtin = SpeciesRegistry::builtin().profile(Species::Spruce);
		assert_eq!(spruce.canopy.fractions, builtin.canopy.fractions);
		assert_eq!(spruce.palette, builtin.palette);
		assert_eq!(
			registry.profile(Species::Linden),
			SpeciesRegistry::builtin().profile(Species::Linden)
		);
	}

	#[test]
	fn test_rejects_unknown_species() {
		let err = Config::parse("[species.oak]\ncanopy_height = 1.0\n").unwrap_err();
		assert!(err.to_string().contains("oak"));
	}

	#[test]
	fn test_rejects_bad_values() {
		assert!(Config::parse("[render]\ntile_scale = 0.0\n").is_err());
		assert!(Config::parse("[species.linden]\ncanopy_height = -1.0\n").is_err());
		assert!(Config::parse("[species.linden]\ncanopy_fractions = [0.5, 1.5, 0.1]\n").is_err());
		assert!(Config::parse("[species.linden]\ntrunk_footprint = \"circle\"\n").is_err());
		assert!(Config::parse("[species.linden]\nleaf_count = 3\n").is_err());
	}
}
