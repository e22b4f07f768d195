//! Conversions between global coordinates and an element's local frame.
//!
//! Orientations are quaternions; they are normalized before use and a zero
//! quaternion is treated as the identity.

use cgmath::{InnerSpace, Quaternion, Vector3};

fn unit(orientation: Quaternion<f64>) -> Quaternion<f64> {
    if orientation.magnitude2() <= f64::EPSILON {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    } else {
        orientation.normalize()
    }
}

pub fn global_to_local(vector: Vector3<f64>, orientation: Quaternion<f64>) -> Vector3<f64> {
    unit(orientation).conjugate() * vector
}

pub fn local_to_global(vector: Vector3<f64>, orientation: Quaternion<f64>) -> Vector3<f64> {
    unit(orientation) * vector
}

pub fn orientation_from_z(direction: Vector3<f64>) -> Option<Quaternion<f64>> {
    if direction.magnitude2() <= f64::EPSILON {
        return None;
    }
    Some(Quaternion::from_arc(
        Vector3::unit_z(),
        direction.normalize(),
        None,
    ))
}

/// Axis and angle in radians of an orientation; the identity yields
/// `(+Z, 0)`.
pub fn axis_angle(orientation: Quaternion<f64>) -> (Vector3<f64>, f64) {
    let q = unit(orientation);
    let sin_half = q.v.magnitude();
    if sin_half <= f64::EPSILON {
        return (Vector3::unit_z(), 0.0);
    }
    (q.v / sin_half, 2.0 * sin_half.atan2(q.s))
}
