//! Foliage mesh baker.
//!
//! Renders every species (or just one) and writes one OBJ per species:
//! - `<output>/<species-key>.obj`: triangles with per-vertex colors and normals

mod config;
mod obj;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use config::Config;
use verdure::{FoliageCacheBuilder, MeshCompositor, Species};

/// Bakes procedural foliage meshes.
#[derive(Parser, Debug)]
#[command(name = "bake_foliage")]
#[command(about = "Bakes procedural foliage meshes into OBJ files")]
struct Args {
	/// Path to configuration TOML file (built-in profiles when omitted).
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Directory the OBJ files are written to.
	#[arg(short, long, default_value = "foliage")]
	output_dir: PathBuf,

	/// Render a single species by key (e.g. `cherry-blossom`).
	#[arg(short, long, value_parser = parse_species)]
	species: Option<Species>,

	/// Render workers (overrides the config; 0 = one per core).
	#[arg(short, long)]
	threads: Option<usize>,
}

fn parse_species(key: &str) -> Result<Species, String> {
	Species::from_key(key).ok_or_else(|| {
		let known: Vec<&str> = Species::ALL.iter().map(|s| s.key()).collect();
		format!("unknown species '{}' (expected one of: {})", key, known.join(", "))
	})
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	let config = match &args.config {
		Some(path) => {
			log::info!("Loading config from: {}", path.display());
			Config::load(path)?
		}
		None => Config::default(),
	};

	let mut render_config = config.render_config();
	if let Some(threads) = args.threads {
		render_config = render_config.with_worker_threads(threads);
	}
	let registry = config.registry()?;

	std::fs::create_dir_all(&args.output_dir).with_context(|| {
		format!("Failed to create output dir: {}", args.output_dir.display())
	})?;

	if let Some(species) = args.species {
		let compositor = MeshCompositor::new(registry, render_config);
		let mesh = compositor
			.render(species)
			.with_context(|| format!("Rendering {}", species))?;
		let path = args.output_dir.join(format!("{}.obj", species.key()));
		obj::save_obj(&mesh, species.key(), &path)?;
		log::info!("  ✓ {} ({} faces)", path.display(), mesh.face_count());
		return Ok(());
	}

	log::info!("Baking {} species", Species::COUNT);
	let mut builder = FoliageCacheBuilder::new(registry, render_config);
	let cache = builder.build().context("Building foliage cache")?;

	for (species, mesh) in cache.iter() {
		let path = args.output_dir.join(format!("{}.obj", species.key()));
		obj::save_obj(mesh, species.key(), &path)?;
		log::info!("  ✓ {} ({} faces)", path.display(), mesh.face_count());
	}

	log::info!(
		"Done in {:.1} ms! Output written to: {}",
		builder.stats().total_us as f64 / 1000.0,
		args.output_dir.display()
	);
	Ok(())
}
