use girder_base::Guid;
use thiserror::Error;

mod camera;
mod config;
mod frame;
mod glyph;
mod light;
mod manager;

pub use camera::Camera;
pub use config::{
    BeamConfig, CameraConfig, LoadConfig, LoadKindConfig, SceneConfig, ViewportConfig,
};
pub use frame::{
    CameraSummary, FrameSummary, ItemKind, ItemSummary, ObjRenderer, RenderFrame, RenderItem,
    Renderer, SummaryRenderer,
};
pub use glyph::{LoadGlyph, LoadVisualizer};
pub use light::{Light, default_lights};
pub use manager::SceneManager;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("element {0} is not in the scene")]
    UnknownElement(Guid),
    #[error(transparent)]
    Element(#[from] girder_elements::Error),
    #[error("invalid scene file: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
