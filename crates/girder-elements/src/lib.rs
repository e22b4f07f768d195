use girder_base::Guid;
use girder_topology::Solid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

mod beam;
mod load;
mod material;
pub mod mechanics;

pub use beam::{BeamData, apply_beam_edit, beam_data, build_beam_element};
pub use load::{Load, LoadKind};
pub use material::{MaterialKind, MaterialPreset, Shading};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] girder_geometry::Error),
    #[error(transparent)]
    Topology(#[from] girder_topology::Error),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("expected a {expected:?} element, found {found:?}")]
    WrongCategory {
        expected: ElementCategory,
        found: ElementCategory,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementCategory {
    Beam,
    Generic,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Integer(i64),
    Number(f64),
    Bool(bool),
    Text(String),
}

pub type ParameterSet = BTreeMap<String, ParameterValue>;

#[derive(Clone, Debug)]
pub struct StructuralElement {
    pub guid: Guid,
    pub name: String,
    pub category: ElementCategory,
    pub material: MaterialKind,
    pub parameters: ParameterSet,
    pub geometry: Solid,
}

impl StructuralElement {
    pub fn new(
        guid: Guid,
        name: impl Into<String>,
        category: ElementCategory,
        material: MaterialKind,
        parameters: ParameterSet,
        geometry: Solid,
    ) -> Self {
        Self {
            guid,
            name: name.into(),
            category,
            material,
            parameters,
            geometry,
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.parameters.get(key) {
            Some(ParameterValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn geometry(&self) -> &Solid {
        &self.geometry
    }
}
