use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Guid(Uuid);

impl Guid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Millimeter,
    Meter,
}

impl LengthUnit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Meter => "m",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Radian,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Units {
    pub length: LengthUnit,
    pub angle: AngleUnit,
}

impl Default for Units {
    fn default() -> Self {
        Self::metric_m()
    }
}

impl Units {
    pub const fn metric_m() -> Self {
        Self {
            length: LengthUnit::Meter,
            angle: AngleUnit::Radian,
        }
    }

    pub const fn metric_mm() -> Self {
        Self {
            length: LengthUnit::Millimeter,
            angle: AngleUnit::Radian,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tolerance {
    pub linear: f64,
    pub angular: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            linear: 1.0e-6,
            angular: 1.0e-8,
        }
    }
}
