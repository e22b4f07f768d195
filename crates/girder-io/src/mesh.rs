use anyhow::{Context, Result, bail};
use girder_topology::Solid;
use std::fs::File;
use std::path::Path;
use truck_meshalgo::prelude::*;
use truck_polymesh::{Faces, PolygonMesh, StandardAttributes, StandardVertex, obj};

use crate::ensure_parent_dir;

/// Chord tolerance in model units; sections are a few tenths of a metre.
pub const DEFAULT_TESSELLATION_TOLERANCE: f64 = 0.005;

pub fn triangulate_solid(solid: &Solid, tol: f64) -> PolygonMesh {
    let mut mesh = solid.triangulation(tol).to_polygon();
    mesh.add_naive_normals(true);
    mesh.put_together_same_attrs(truck_base::tolerance::TOLERANCE);
    mesh.remove_unused_attrs();
    mesh
}

pub fn triangle_indices(mesh: &PolygonMesh) -> Vec<[usize; 3]> {
    let mut triangles = Vec::new();
    triangles.extend(mesh.tri_faces().iter().map(|tri| [tri[0].pos, tri[1].pos, tri[2].pos]));
    for quad in mesh.quad_faces() {
        triangles.push([quad[0].pos, quad[1].pos, quad[2].pos]);
        triangles.push([quad[0].pos, quad[2].pos, quad[3].pos]);
    }
    for face in mesh.faces().other_faces() {
        if face.len() < 3 {
            continue;
        }
        for idx in 1..(face.len() - 1) {
            triangles.push([face[0].pos, face[idx].pos, face[idx + 1].pos]);
        }
    }
    triangles
}

pub fn merge_meshes<'a>(meshes: impl IntoIterator<Item = &'a PolygonMesh>) -> PolygonMesh {
    let mut positions = Vec::new();
    let mut triangles = Vec::new();
    for mesh in meshes {
        let offset = positions.len();
        positions.extend(mesh.positions().iter().copied());
        triangles.extend(
            triangle_indices(mesh)
                .into_iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }
    PolygonMesh::new(
        StandardAttributes {
            positions,
            ..Default::default()
        },
        Faces::from_iter(triangles.iter().map(|tri| tri.map(position_vertex))),
    )
}

pub fn position_vertex(pos: usize) -> StandardVertex {
    StandardVertex {
        pos,
        uv: None,
        nor: None,
    }
}

pub fn write_mesh_obj(mesh: &PolygonMesh, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if mesh.positions().is_empty() {
        bail!("refusing to write empty mesh to {}", path.display());
    }
    ensure_parent_dir(path)?;

    let file = File::create(path).with_context(|| format!("create OBJ file {}", path.display()))?;
    obj::write(mesh, file).with_context(|| format!("write OBJ file {}", path.display()))?;
    Ok(())
}

pub fn export_obj(solid: &Solid, path: impl AsRef<Path>, tol: f64) -> Result<()> {
    let mesh = triangulate_solid(solid, tol);
    if mesh.positions().is_empty() {
        bail!("triangulation produced empty mesh");
    }
    write_mesh_obj(&mesh, path)
}
