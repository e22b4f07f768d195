use girder_base::{Guid, Units};
use girder_elements::{ElementCategory, Load, StructuralElement, apply_beam_edit, beam_data};
use girder_io::{DEFAULT_TESSELLATION_TOLERANCE, triangulate_solid};
use girder_topology::Point3;
use tracing::{debug, info};

use crate::frame::{ItemKind, RenderFrame, RenderItem, Renderer};
use crate::glyph::{LoadGlyph, LoadVisualizer};
use crate::{Camera, Error, Light, Result, default_lights};

#[derive(Clone, Debug)]
struct SceneLoad {
    guid: Guid,
    load: Load,
    glyph: LoadGlyph,
}

#[derive(Clone, Debug)]
pub struct SceneManager {
    units: Units,
    camera: Camera,
    lights: Vec<Light>,
    elements: Vec<StructuralElement>,
    loads: Vec<SceneLoad>,
    visualizer: LoadVisualizer,
    tessellation_tolerance: f64,
}

impl SceneManager {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            units: Units::default(),
            camera: Camera::for_viewport(width, height),
            lights: default_lights(),
            elements: Vec::new(),
            loads: Vec::new(),
            visualizer: LoadVisualizer::default(),
            tessellation_tolerance: DEFAULT_TESSELLATION_TOLERANCE,
        }
    }

    pub fn with_units(mut self, units: Units) -> Self {
        self.units = units;
        self
    }

    pub fn with_visualizer(mut self, visualizer: LoadVisualizer) -> Self {
        self.visualizer = visualizer;
        self
    }

    pub fn set_tessellation_tolerance(&mut self, tol: f64) -> Result<()> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(Error::InvalidParameter(
                "tessellation tolerance must be > 0".to_string(),
            ));
        }
        self.tessellation_tolerance = tol;
        Ok(())
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn elements(&self) -> &[StructuralElement] {
        &self.elements
    }

    pub fn element(&self, guid: Guid) -> Option<&StructuralElement> {
        self.elements.iter().find(|element| element.guid == guid)
    }

    pub fn add_element(&mut self, element: StructuralElement) -> Guid {
        let guid = element.guid;
        info!(%guid, name = %element.name, "element added");
        self.elements.push(element);
        guid
    }

    pub fn remove_element(&mut self, guid: Guid) -> Option<StructuralElement> {
        let index = self.elements.iter().position(|element| element.guid == guid)?;
        let element = self.elements.remove(index);
        info!(%guid, name = %element.name, "element removed");
        Some(element)
    }

    pub fn move_beam(&mut self, guid: Guid, start: Point3, end: Point3) -> Result<()> {
        let element = self
            .elements
            .iter_mut()
            .find(|element| element.guid == guid)
            .ok_or(Error::UnknownElement(guid))?;
        apply_beam_edit(element, start, end)?;
        debug!(%guid, "beam moved");
        Ok(())
    }

    pub fn update_elements(&mut self) -> Result<usize> {
        let mut updated = 0;
        for element in &mut self.elements {
            if element.category != ElementCategory::Beam {
                continue;
            }
            let data = beam_data(element)?;
            apply_beam_edit(element, data.start, data.end)?;
            updated += 1;
        }
        debug!(updated, "elements updated");
        Ok(updated)
    }

    pub fn loads(&self) -> impl Iterator<Item = (Guid, &Load)> {
        self.loads.iter().map(|entry| (entry.guid, &entry.load))
    }

    pub fn add_load(&mut self, load: Load) -> Result<Guid> {
        load.validate()?;
        let glyph = self.visualizer.glyph_for(&load)?;
        let guid = Guid::new();
        info!(%guid, kind = load.kind.label(), magnitude = load.magnitude, "load added");
        self.loads.push(SceneLoad { guid, load, glyph });
        Ok(guid)
    }

    pub fn remove_load(&mut self, guid: Guid) -> Option<Load> {
        let index = self.loads.iter().position(|entry| entry.guid == guid)?;
        Some(self.loads.remove(index).load)
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) -> Result<()> {
        if !self.camera.set_viewport(width, height) {
            return Err(Error::InvalidParameter(format!(
                "viewport must be non-empty (received {width}x{height})"
            )));
        }
        Ok(())
    }

    pub fn frame_all(&mut self) -> bool {
        let frame = self.build_frame();
        match frame.bounds() {
            Some((min, max)) => {
                self.camera.frame_bounds(
                    Point3::new(min[0], min[1], min[2]),
                    Point3::new(max[0], max[1], max[2]),
                );
                true
            }
            None => false,
        }
    }

    pub fn build_frame(&self) -> RenderFrame {
        let mut items = Vec::with_capacity(self.elements.len() + self.loads.len());
        for element in &self.elements {
            items.push(RenderItem {
                guid: element.guid,
                name: element.name.clone(),
                kind: ItemKind::Element,
                material: element.material.preset(),
                mesh: triangulate_solid(element.geometry(), self.tessellation_tolerance),
            });
        }
        for entry in &self.loads {
            items.push(RenderItem {
                guid: entry.guid,
                name: format!("{} load", entry.load.kind.label()),
                kind: ItemKind::Load,
                material: entry.glyph.material,
                mesh: entry.glyph.mesh.clone(),
            });
        }
        RenderFrame {
            units: self.units,
            camera: self.camera,
            lights: self.lights.clone(),
            items,
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> anyhow::Result<()> {
        let frame = self.build_frame();
        debug!(items = frame.items.len(), "rendering frame");
        renderer.draw(&frame)
    }
}
