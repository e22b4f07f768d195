use girder_topology::{Point3, Vector3};

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadKind {
    Point,
    /// Uniform load over the segment from the application point to
    /// `application_point + span`.
    Distributed { span: Vector3 },
    Moment,
}

impl LoadKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Distributed { .. } => "distributed",
            Self::Moment => "moment",
        }
    }
}

/// An external action drawn next to an element.
///
/// For point and distributed loads `direction` is the line of action; for a
/// moment it is the rotation axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Load {
    pub kind: LoadKind,
    pub magnitude: f64,
    pub direction: Vector3,
    pub application_point: Point3,
}

impl Load {
    pub fn new(
        kind: LoadKind,
        magnitude: f64,
        direction: Vector3,
        application_point: Point3,
    ) -> Result<Self> {
        let load = Self {
            kind,
            magnitude,
            direction,
            application_point,
        };
        load.validate()?;
        Ok(load)
    }

    pub fn point(application_point: Point3, direction: Vector3, magnitude: f64) -> Result<Self> {
        Self::new(LoadKind::Point, magnitude, direction, application_point)
    }

    pub fn distributed(
        application_point: Point3,
        direction: Vector3,
        magnitude: f64,
        span: Vector3,
    ) -> Result<Self> {
        Self::new(
            LoadKind::Distributed { span },
            magnitude,
            direction,
            application_point,
        )
    }

    pub fn moment(application_point: Point3, axis: Vector3, magnitude: f64) -> Result<Self> {
        Self::new(LoadKind::Moment, magnitude, axis, application_point)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.magnitude.is_finite() || self.magnitude <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "load magnitude must be a positive number (received {})",
                self.magnitude
            )));
        }
        if !is_non_zero(self.direction) {
            return Err(Error::InvalidParameter(
                "load direction must be a non-zero vector".to_string(),
            ));
        }
        if let LoadKind::Distributed { span } = self.kind {
            if !is_non_zero(span) {
                return Err(Error::InvalidParameter(
                    "distributed load span must be a non-zero vector".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn unit_direction(&self) -> Vector3 {
        let d = self.direction;
        let len = norm(d);
        Vector3::new(d.x / len, d.y / len, d.z / len)
    }

    pub fn resultant(&self) -> f64 {
        match self.kind {
            LoadKind::Distributed { span } => self.magnitude * norm(span),
            LoadKind::Point | LoadKind::Moment => self.magnitude,
        }
    }
}

fn norm(v: Vector3) -> f64 {
    (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

fn is_non_zero(v: Vector3) -> bool {
    let length2 = v.x * v.x + v.y * v.y + v.z * v.z;
    length2.is_finite() && length2 > f64::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Point3 {
        Point3::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn rejects_zero_direction() {
        let result = Load::point(origin(), Vector3::new(0.0, 0.0, 0.0), 1.0);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn rejects_non_positive_magnitude() {
        assert!(Load::point(origin(), Vector3::unit_y(), 0.0).is_err());
        assert!(Load::moment(origin(), Vector3::unit_z(), f64::NAN).is_err());
    }

    #[test]
    fn distributed_resultant_spans_length() {
        let span = Vector3::new(3.0, 0.0, 0.0);
        let load = Load::distributed(origin(), -Vector3::unit_y(), 2.0, span).unwrap();
        assert_eq!(load.resultant(), 6.0);
        let no_span = Vector3::new(0.0, 0.0, 0.0);
        assert!(Load::distributed(origin(), -Vector3::unit_y(), 2.0, no_span).is_err());
    }

    #[test]
    fn unit_direction_is_normalized() {
        let load = Load::point(origin(), Vector3::new(0.0, -3.0, 4.0), 1.0).unwrap();
        let unit = load.unit_direction();
        assert!((unit.y + 0.6).abs() < 1.0e-12);
        assert!((unit.z - 0.8).abs() < 1.0e-12);
    }
}
