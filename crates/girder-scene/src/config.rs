use girder_base::Units;
use girder_elements::{Load, MaterialKind, build_beam_element};
use girder_geometry::Dimensions;
use girder_topology::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Light, LoadVisualizer, Result, SceneManager};

/// Scene description read from JSON.
///
/// ```json
/// {
///   "viewport": { "width": 1280, "height": 720 },
///   "beams": [{
///     "start": [0, 0, 0], "end": [3, 0, 0],
///     "dimensions": { "width": 0.2, "height": 0.4, "length": 3,
///                     "flange_thickness": 0.02, "web_thickness": 0.01 }
///   }],
///   "loads": [{ "type": "point", "at": [3, 0.6, 0], "direction": [0, -1, 0], "magnitude": 0.5 }]
/// }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub tessellation_tolerance: Option<f64>,
    #[serde(default)]
    pub frame_all: bool,
    #[serde(default)]
    pub camera: Option<CameraConfig>,
    /// Added on top of the default ambient and key lights.
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub load_color: Option<u32>,
    #[serde(default)]
    pub beams: Vec<BeamConfig>,
    #[serde(default)]
    pub loads: Vec<LoadConfig>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub target: [f64; 3],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BeamConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub start: [f64; 3],
    pub end: [f64; 3],
    pub dimensions: Dimensions,
    #[serde(default)]
    pub material: MaterialKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LoadKindConfig {
    Point,
    Moment,
    Distributed { span: [f64; 3] },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(flatten)]
    pub kind: LoadKindConfig,
    pub at: [f64; 3],
    #[serde(default = "default_direction")]
    pub direction: [f64; 3],
    pub magnitude: f64,
}

fn default_direction() -> [f64; 3] {
    [0.0, -1.0, 0.0]
}

fn point(value: [f64; 3]) -> Point3 {
    Point3::new(value[0], value[1], value[2])
}

fn vector(value: [f64; 3]) -> Vector3 {
    Vector3::new(value[0], value[1], value[2])
}

impl LoadConfig {
    pub fn to_load(&self) -> Result<Load> {
        let at = point(self.at);
        let direction = vector(self.direction);
        let load = match self.kind {
            LoadKindConfig::Point => Load::point(at, direction, self.magnitude)?,
            LoadKindConfig::Moment => Load::moment(at, direction, self.magnitude)?,
            LoadKindConfig::Distributed { span } => {
                Load::distributed(at, direction, self.magnitude, vector(span))?
            }
        };
        Ok(load)
    }
}

impl SceneConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Builds every beam and load. Any invalid entry aborts the whole scene.
    pub fn build_scene(&self) -> Result<SceneManager> {
        let ViewportConfig { width, height } = self.viewport;
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "viewport must be non-empty (received {width}x{height})"
            )));
        }

        let mut scene = SceneManager::new(width, height).with_units(self.units);
        if let Some(color) = self.load_color {
            let material = MaterialKind::Force.preset().with_color(color);
            scene = scene.with_visualizer(LoadVisualizer::new(material));
        }
        if let Some(tol) = self.tessellation_tolerance {
            scene.set_tessellation_tolerance(tol)?;
        }
        if let Some(camera) = self.camera {
            let view = scene.camera_mut();
            view.position = point(camera.position);
            view.look_at(point(camera.target));
        }
        for light in &self.lights {
            scene.add_light(*light);
        }
        for beam in &self.beams {
            let element = build_beam_element(
                point(beam.start),
                point(beam.end),
                &beam.dimensions,
                beam.material,
                beam.name.as_deref(),
            )?;
            scene.add_element(element);
        }
        for load in &self.loads {
            scene.add_load(load.to_load()?)?;
        }
        if self.frame_all {
            scene.frame_all();
        }
        Ok(scene)
    }
}
