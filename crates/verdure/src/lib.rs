//! verdure - Procedural foliage meshes for tiled worlds
//!
//! Every species is a trunk and a canopy. Each part is a stack of rings inset
//! from a tile footprint, stitched into side bands, capped top and bottom, and
//! the two parts are unioned into one closed, per-vertex colored mesh.
//!
//! # Pipeline
//!
//! ```text
//!   SpeciesRegistry ──► stencil (inset rings) ──► extrude (bands + caps)
//!                                                        │
//!                         MeshCompositor ◄── trunk + canopy fragments
//!                               │ union
//!                               ▼
//!   FoliageCacheBuilder ── one task per species ──► FoliageCache
//! ```
//!
//! # Example
//!
//! ```ignore
//! use verdure::{build_cache, MeshCompositor, RenderConfig, Species};
//!
//! // Single species
//! let mesh = MeshCompositor::default().render(Species::Spruce)?;
//! println!("{} faces", mesh.face_count());
//!
//! // Every species, in parallel
//! let cache = build_cache(RenderConfig::default())?;
//! let linden = cache.mesh(Species::Linden);
//! ```

pub mod color;
pub mod constants;
pub mod error;
pub mod footprint;
pub mod geometry;
pub mod species;

// Rings and bands
pub mod extrude;
pub mod stencil;

// Canopy and trunk renderers
pub mod render;

// Trunk + canopy union per species
pub mod compositor;

// Parallel all-species build
pub mod cache;
pub mod threading;

pub mod config;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used items
pub use cache::{build_cache, BuildState, BuildStats, FoliageCache, FoliageCacheBuilder};
pub use color::{Color, ColorPalette};
pub use compositor::MeshCompositor;
pub use config::RenderConfig;
pub use error::{AggregateFailure, CacheError, InvalidStencil, RenderError, StencilDefect};
pub use footprint::FootprintShape;
pub use geometry::{Bounds, Mesh, Polygon, Vertex};
pub use render::{MeshFragment, Part, Tier};
pub use species::{CanopyProfile, Species, SpeciesProfile, SpeciesRegistry, TrunkProfile};
