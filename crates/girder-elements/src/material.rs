use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    #[default]
    Steel,
    Concrete,
    Force,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    Standard,
    Unlit,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialPreset {
    pub color: u32,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub shading: Shading,
}

impl MaterialPreset {
    pub const fn standard(color: u32, metalness: f32, roughness: f32) -> Self {
        Self {
            color,
            metalness,
            roughness,
            opacity: 1.0,
            transparent: false,
            shading: Shading::Standard,
        }
    }

    pub const fn unlit(color: u32, opacity: f32) -> Self {
        Self {
            color,
            metalness: 0.0,
            roughness: 1.0,
            opacity,
            transparent: opacity < 1.0,
            shading: Shading::Unlit,
        }
    }

    pub fn with_color(self, color: u32) -> Self {
        Self { color, ..self }
    }

    pub fn rgb(&self) -> [f32; 3] {
        let channel = |shift: u32| ((self.color >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 3] = [Self::Steel, Self::Concrete, Self::Force];

    pub const fn preset(self) -> MaterialPreset {
        match self {
            Self::Steel => MaterialPreset::standard(0x808080, 0.8, 0.2),
            Self::Concrete => MaterialPreset::standard(0xcccccc, 0.1, 0.9),
            Self::Force => MaterialPreset::unlit(0xff0000, 0.7),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Steel => "steel",
            Self::Concrete => "concrete",
            Self::Force => "force",
        }
    }
}

impl FromStr for MaterialKind {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidParameter(format!("unknown material: {trimmed}")))
    }
}
