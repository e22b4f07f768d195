use anyhow::{Context, Result};
use std::path::Path;

pub mod mesh;
pub mod step;

pub use mesh::{
    DEFAULT_TESSELLATION_TOLERANCE, export_obj, merge_meshes, position_vertex, triangle_indices,
    triangulate_solid, write_mesh_obj,
};
pub use step::export_step;

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display())),
        _ => Ok(()),
    }
}
