use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Raw member dimensions as supplied by a caller.
///
/// `length` is the extrusion depth and plays no part in the 2D profile.
/// `flange_thickness` and `web_thickness` select an I-shaped section and must
/// be given together; without them the member is a plain rectangular bar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    #[serde(default)]
    pub flange_thickness: Option<f64>,
    #[serde(default)]
    pub web_thickness: Option<f64>,
}

impl Dimensions {
    pub const fn rectangular(width: f64, height: f64, length: f64) -> Self {
        Self {
            width,
            height,
            length,
            flange_thickness: None,
            web_thickness: None,
        }
    }

    pub const fn i_beam(
        width: f64,
        height: f64,
        length: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> Self {
        Self {
            width,
            height,
            length,
            flange_thickness: Some(flange_thickness),
            web_thickness: Some(web_thickness),
        }
    }
}

pub fn validate(dims: &Dimensions) -> Result<()> {
    ensure_positive("width", dims.width)?;
    ensure_positive("height", dims.height)?;
    ensure_positive("length", dims.length)?;

    match (dims.flange_thickness, dims.web_thickness) {
        (None, None) => Ok(()),
        (Some(_), None) => Err(Error::InvalidDimensions(
            "flange_thickness requires web_thickness".to_string(),
        )),
        (None, Some(_)) => Err(Error::InvalidDimensions(
            "web_thickness requires flange_thickness".to_string(),
        )),
        (Some(flange), Some(web)) => {
            ensure_positive("flange_thickness", flange)?;
            ensure_positive("web_thickness", web)?;
            if web >= dims.width {
                return Err(Error::InvalidDimensions(format!(
                    "web_thickness ({web}) must be less than width ({})",
                    dims.width
                )));
            }
            if flange * 2.0 >= dims.height {
                return Err(Error::InvalidDimensions(format!(
                    "total flange thickness ({}) must be less than height ({})",
                    flange * 2.0,
                    dims.height
                )));
            }
            Ok(())
        }
    }
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidDimensions(format!("{name} must be > 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(dims: Dimensions) -> String {
        match validate(&dims) {
            Err(Error::InvalidDimensions(reason)) => reason,
            Ok(()) => panic!("expected {dims:?} to be rejected"),
        }
    }

    #[test]
    fn accepts_reference_i_beam() {
        assert!(validate(&Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.01)).is_ok());
    }

    #[test]
    fn accepts_rectangular_bar() {
        assert!(validate(&Dimensions::rectangular(0.2, 0.4, 3.0)).is_ok());
    }

    #[test]
    fn rejects_zero_extents() {
        assert_eq!(reason(Dimensions::rectangular(0.0, 0.4, 3.0)), "width must be > 0");
        assert_eq!(reason(Dimensions::rectangular(0.2, 0.0, 3.0)), "height must be > 0");
        assert_eq!(reason(Dimensions::rectangular(0.2, 0.4, 0.0)), "length must be > 0");
    }

    #[test]
    fn rejects_negative_and_nan_extents() {
        assert!(validate(&Dimensions::rectangular(-0.2, 0.4, 3.0)).is_err());
        assert!(validate(&Dimensions::rectangular(0.2, f64::NAN, 3.0)).is_err());
    }

    #[test]
    fn rejects_infinite_extents() {
        assert_eq!(
            reason(Dimensions::i_beam(f64::INFINITY, 0.4, 3.0, 0.02, 0.01)),
            "width must be > 0"
        );
        assert_eq!(
            reason(Dimensions::rectangular(0.2, 0.4, f64::INFINITY)),
            "length must be > 0"
        );
        assert!(validate(&Dimensions::i_beam(0.2, 0.4, 3.0, f64::INFINITY, 0.01)).is_err());
    }

    #[test]
    fn rejects_partial_thicknesses() {
        let mut dims = Dimensions::rectangular(0.2, 0.4, 3.0);
        dims.flange_thickness = Some(0.02);
        assert!(reason(dims).contains("requires web_thickness"));

        let mut dims = Dimensions::rectangular(0.2, 0.4, 3.0);
        dims.web_thickness = Some(0.01);
        assert!(reason(dims).contains("requires flange_thickness"));
    }

    #[test]
    fn rejects_non_positive_thicknesses() {
        assert_eq!(
            reason(Dimensions::i_beam(0.2, 0.4, 3.0, 0.0, 0.01)),
            "flange_thickness must be > 0"
        );
        assert_eq!(
            reason(Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, -0.01)),
            "web_thickness must be > 0"
        );
    }

    #[test]
    fn rejects_web_as_wide_as_flange() {
        assert!(reason(Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.2)).contains("less than width"));
        assert!(reason(Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.3)).contains("less than width"));
    }

    #[test]
    fn rejects_flanges_that_meet() {
        assert!(reason(Dimensions::i_beam(0.2, 0.4, 3.0, 0.2, 0.01)).contains("less than height"));
        assert!(reason(Dimensions::i_beam(0.2, 0.4, 3.0, 0.25, 0.01)).contains("less than height"));
    }

    #[test]
    fn dimension_checks_run_before_thickness_checks() {
        let dims = Dimensions::i_beam(0.0, 0.4, 3.0, 0.02, 0.3);
        assert_eq!(reason(dims), "width must be > 0");
    }
}
