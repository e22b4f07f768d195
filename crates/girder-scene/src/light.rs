use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Light {
    Ambient {
        color: u32,
        intensity: f32,
    },
    Directional {
        color: u32,
        intensity: f32,
        position: [f64; 3],
    },
}

pub fn default_lights() -> Vec<Light> {
    vec![
        Light::Ambient {
            color: 0xffffff,
            intensity: 0.5,
        },
        Light::Directional {
            color: 0xffffff,
            intensity: 0.5,
            position: [10.0, 10.0, 10.0],
        },
    ]
}
