use thiserror::Error;

pub use truck_geometry::base::{Point2, Point3, Vector2, Vector3};

mod dimensions;
mod profile;
mod section;
pub mod transform;

pub use dimensions::{Dimensions, validate};
pub use profile::{I_BEAM_VERTEX_COUNT, Profile, build_profile};
pub use section::{CrossSection, IBeamSection, RectangularSection};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

pub type Result<T> = std::result::Result<T, Error>;
