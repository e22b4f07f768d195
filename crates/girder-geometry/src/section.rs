use crate::profile::Profile;
use crate::{Dimensions, Point2, Result, validate};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangularSection {
    width: f64,
    height: f64,
}

impl RectangularSection {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IBeamSection {
    width: f64,
    height: f64,
    flange_thickness: f64,
    web_thickness: f64,
}

impl IBeamSection {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn flange_thickness(&self) -> f64 {
        self.flange_thickness
    }

    pub fn web_thickness(&self) -> f64 {
        self.web_thickness
    }

    /// Twelve-vertex outline, clockwise from the top-left flange corner.
    pub fn outline(&self) -> Profile {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let half_web = self.web_thickness / 2.0;
        let tf = self.flange_thickness;

        Profile::new(vec![
            // top flange
            Point2::new(-half_w, half_h),
            Point2::new(half_w, half_h),
            Point2::new(half_w, half_h - tf),
            // web, right side
            Point2::new(half_web, half_h - tf),
            Point2::new(half_web, -half_h + tf),
            // bottom flange
            Point2::new(half_w, -half_h + tf),
            Point2::new(half_w, -half_h),
            Point2::new(-half_w, -half_h),
            Point2::new(-half_w, -half_h + tf),
            // web, left side
            Point2::new(-half_web, -half_h + tf),
            Point2::new(-half_web, half_h - tf),
            Point2::new(-half_w, half_h - tf),
        ])
    }
}

/// A validated member cross-section.
///
/// Values are only obtainable through [`CrossSection::from_dimensions`], so
/// holding one means the dimension invariants have been checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrossSection {
    Rectangular(RectangularSection),
    IBeam(IBeamSection),
}

impl CrossSection {
    pub fn from_dimensions(dims: &Dimensions) -> Result<Self> {
        validate(dims)?;
        let section = match (dims.flange_thickness, dims.web_thickness) {
            (Some(flange_thickness), Some(web_thickness)) => Self::IBeam(IBeamSection {
                width: dims.width,
                height: dims.height,
                flange_thickness,
                web_thickness,
            }),
            _ => Self::Rectangular(RectangularSection {
                width: dims.width,
                height: dims.height,
            }),
        };
        Ok(section)
    }

    pub fn width(&self) -> f64 {
        match self {
            Self::Rectangular(section) => section.width,
            Self::IBeam(section) => section.width,
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Self::Rectangular(section) => section.height,
            Self::IBeam(section) => section.height,
        }
    }

    pub fn profile(&self) -> Option<Profile> {
        match self {
            Self::Rectangular(_) => None,
            Self::IBeam(section) => Some(section.outline()),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Self::Rectangular(s) => s.width * s.height,
            Self::IBeam(s) => {
                let clear = s.height - 2.0 * s.flange_thickness;
                2.0 * s.width * s.flange_thickness + s.web_thickness * clear
            }
        }
    }

    pub fn second_moment_x(&self) -> f64 {
        match self {
            Self::Rectangular(s) => s.width * s.height.powi(3) / 12.0,
            Self::IBeam(s) => {
                let clear = s.height - 2.0 * s.flange_thickness;
                (s.width * s.height.powi(3) - (s.width - s.web_thickness) * clear.powi(3)) / 12.0
            }
        }
    }

    pub fn to_dimensions(&self, length: f64) -> Dimensions {
        match self {
            Self::Rectangular(s) => Dimensions::rectangular(s.width, s.height, length),
            Self::IBeam(s) => Dimensions::i_beam(
                s.width,
                s.height,
                length,
                s.flange_thickness,
                s.web_thickness,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_variant_from_thicknesses() {
        let rect = CrossSection::from_dimensions(&Dimensions::rectangular(0.2, 0.4, 3.0)).unwrap();
        assert!(matches!(rect, CrossSection::Rectangular(_)));
        assert!(rect.profile().is_none());

        let beam =
            CrossSection::from_dimensions(&Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.01)).unwrap();
        assert!(matches!(beam, CrossSection::IBeam(_)));
        assert_eq!(beam.width(), 0.2);
        assert_eq!(beam.height(), 0.4);
    }

    #[test]
    fn area_agrees_with_outline() {
        let beam =
            CrossSection::from_dimensions(&Dimensions::i_beam(0.3, 0.5, 6.0, 0.025, 0.015)).unwrap();
        let outline_area = beam.profile().unwrap().area();
        assert!((beam.area() - outline_area).abs() < 1.0e-12);
    }

    #[test]
    fn rectangular_second_moment() {
        let rect = CrossSection::from_dimensions(&Dimensions::rectangular(0.1, 0.2, 1.0)).unwrap();
        let expected = 0.1 * 0.2_f64.powi(3) / 12.0;
        assert!((rect.second_moment_x() - expected).abs() < 1.0e-15);
    }

    #[test]
    fn i_beam_is_stiffer_per_area_than_bar() {
        let beam =
            CrossSection::from_dimensions(&Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.01)).unwrap();
        let bar = CrossSection::from_dimensions(&Dimensions::rectangular(0.2, 0.4, 3.0)).unwrap();
        assert!(beam.second_moment_x() < bar.second_moment_x());
        assert!(beam.second_moment_x() / beam.area() > bar.second_moment_x() / bar.area());
    }

    #[test]
    fn round_trips_dimensions() {
        let dims = Dimensions::i_beam(0.2, 0.4, 3.0, 0.02, 0.01);
        let section = CrossSection::from_dimensions(&dims).unwrap();
        assert_eq!(section.to_dimensions(3.0), dims);
    }
}
