use anyhow::{Context, Result, bail};
use girder_base::{Guid, Units};
use girder_elements::MaterialPreset;
use girder_io::{ensure_parent_dir, merge_meshes, triangle_indices, write_mesh_obj};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use truck_polymesh::PolygonMesh;

use crate::{Camera, Light};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Element,
    Load,
}

#[derive(Clone, Debug)]
pub struct RenderItem {
    pub guid: Guid,
    pub name: String,
    pub kind: ItemKind,
    pub material: MaterialPreset,
    pub mesh: PolygonMesh,
}

#[derive(Clone, Debug)]
pub struct RenderFrame {
    pub units: Units,
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub items: Vec<RenderItem>,
}

impl RenderFrame {
    pub fn triangle_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| triangle_indices(&item.mesh).len())
            .sum()
    }

    pub fn bounds(&self) -> Option<([f64; 3], [f64; 3])> {
        let mut points = self.items.iter().flat_map(|item| item.mesh.positions().iter());
        let first = points.next()?;
        let mut min = [first.x, first.y, first.z];
        let mut max = min;
        for p in points {
            for (axis, value) in [p.x, p.y, p.z].into_iter().enumerate() {
                min[axis] = min[axis].min(value);
                max[axis] = max[axis].max(value);
            }
        }
        Some((min, max))
    }

    pub fn summary(&self) -> FrameSummary {
        FrameSummary {
            length_unit: self.units.length.symbol(),
            camera: CameraSummary {
                fov_y: self.camera.fov_y,
                aspect: self.camera.aspect,
                near: self.camera.near,
                far: self.camera.far,
                position: [
                    self.camera.position.x,
                    self.camera.position.y,
                    self.camera.position.z,
                ],
                target: [
                    self.camera.target.x,
                    self.camera.target.y,
                    self.camera.target.z,
                ],
            },
            lights: self.lights.clone(),
            items: self
                .items
                .iter()
                .map(|item| ItemSummary {
                    guid: item.guid.to_string(),
                    name: item.name.clone(),
                    kind: item.kind,
                    material: item.material,
                    vertices: item.mesh.positions().len(),
                    triangles: triangle_indices(&item.mesh).len(),
                })
                .collect(),
            bounds: self.bounds(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct FrameSummary {
    pub length_unit: &'static str,
    pub camera: CameraSummary,
    pub lights: Vec<Light>,
    pub items: Vec<ItemSummary>,
    pub bounds: Option<([f64; 3], [f64; 3])>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CameraSummary {
    pub fov_y: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: [f64; 3],
    pub target: [f64; 3],
}

#[derive(Clone, Debug, Serialize)]
pub struct ItemSummary {
    pub guid: String,
    pub name: String,
    pub kind: ItemKind,
    pub material: MaterialPreset,
    pub vertices: usize,
    pub triangles: usize,
}

pub trait Renderer {
    fn draw(&mut self, frame: &RenderFrame) -> Result<()>;
}

pub struct ObjRenderer {
    path: PathBuf,
}

impl ObjRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for ObjRenderer {
    fn draw(&mut self, frame: &RenderFrame) -> Result<()> {
        if frame.items.is_empty() {
            bail!("scene is empty; nothing to write to {}", self.path.display());
        }
        let mesh = merge_meshes(frame.items.iter().map(|item| &item.mesh));
        write_mesh_obj(&mesh, &self.path)?;
        info!(
            path = %self.path.display(),
            items = frame.items.len(),
            "OBJ render complete"
        );
        Ok(())
    }
}

pub struct SummaryRenderer {
    path: PathBuf,
}

impl SummaryRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderer for SummaryRenderer {
    fn draw(&mut self, frame: &RenderFrame) -> Result<()> {
        let path = &self.path;
        ensure_parent_dir(path)?;
        let file =
            File::create(path).with_context(|| format!("create summary file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &frame.summary())
            .with_context(|| format!("write summary file {}", path.display()))?;
        info!(path = %path.display(), "summary written");
        Ok(())
    }
}
