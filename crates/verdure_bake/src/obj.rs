//! Wavefront OBJ output with per-vertex colors.
//!
//! Every triangle gets its own three vertices (faces are flat shaded, so
//! corners are never shared). Colors use the common `v x y z r g b`
//! extension.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use verdure::Mesh;

/// Write `mesh` as OBJ text.
pub fn write_obj<W: Write>(mesh: &Mesh, name: &str, out: &mut W) -> std::io::Result<()> {
	writeln!(out, "# verdure foliage mesh")?;
	writeln!(out, "o {}", name)?;

	let triangles = mesh.triangles();
	for triangle in &triangles {
		for vertex in triangle {
			let p = vertex.position;
			let c = vertex.color;
			writeln!(
				out,
				"v {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}",
				p.x, p.y, p.z, c.r, c.g, c.b
			)?;
		}
	}
	for triangle in &triangles {
		for vertex in triangle {
			let n = vertex.normal;
			writeln!(out, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
		}
	}
	for i in 0..triangles.len() {
		let base = i * 3 + 1;
		writeln!(
			out,
			"f {}//{} {}//{} {}//{}",
			base,
			base,
			base + 1,
			base + 1,
			base + 2,
			base + 2
		)?;
	}
	Ok(())
}

/// Write `mesh` to `path`.
pub fn save_obj(mesh: &Mesh, name: &str, path: &Path) -> Result<()> {
	let file =
		File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
	let mut out = BufWriter::new(file);
	write_obj(mesh, name, &mut out).with_context(|| format!("Failed to write {}", path.display()))?;
	out.flush()
		.with_context(|| format!("Failed to flush {}", path.display()))?;
	Ok(())
}
