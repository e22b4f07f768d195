use girder_base::Tolerance;
use girder_geometry::transform::{axis_angle, orientation_from_z};
use girder_geometry::{CrossSection, Profile};
use thiserror::Error;
use truck_modeling::{Rad, builder};

pub use truck_modeling::{Curve, Edge, Face, Point3, Shell, Solid, Surface, Vector3, Vertex, Wire};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Geometry(#[from] girder_geometry::Error),
    #[error(transparent)]
    Modeling(#[from] truck_modeling::errors::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct SolidBuilder;

impl SolidBuilder {
    pub fn box_solid(width: f64, height: f64, depth: f64) -> Result<Solid> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        ensure_positive("depth", depth)?;

        let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
        let e = builder::tsweep(&v, Vector3::unit_x() * width);
        let f = builder::tsweep(&e, Vector3::unit_y() * height);
        Ok(builder::tsweep(&f, Vector3::unit_z() * depth))
    }

    /// Sweeps a closed outline lying in z = 0 along +Z.
    ///
    /// The face is always built counter-clockwise so the solid faces outward,
    /// whatever the winding of `profile`.
    pub fn extrude_profile(profile: &Profile, depth: f64) -> Result<Solid> {
        ensure_positive("depth", depth)?;
        if profile.len() < 3 {
            return Err(Error::InvalidParameter(format!(
                "profile needs at least 3 points, got {}",
                profile.len()
            )));
        }

        let mut points = profile.points().to_vec();
        if profile.is_clockwise() {
            points.reverse();
        }

        let vertices: Vec<Vertex> = points
            .iter()
            .map(|p| builder::vertex(Point3::new(p.x, p.y, 0.0)))
            .collect();
        let count = vertices.len();
        let wire: Wire = (0..count)
            .map(|idx| builder::line(&vertices[idx], &vertices[(idx + 1) % count]))
            .collect::<Vec<Edge>>()
            .into();

        let face = builder::try_attach_plane(&[wire])?;
        Ok(builder::tsweep(&face, Vector3::unit_z() * depth))
    }
}

/// Builds the solid for a member section: the extruded outline for an
/// I-beam, a box otherwise. Both are centered on the XY origin and span
/// `0..=length` along +Z.
pub fn section_solid(section: &CrossSection, length: f64) -> Result<Solid> {
    match section {
        CrossSection::IBeam(beam) => SolidBuilder::extrude_profile(&beam.outline(), length),
        CrossSection::Rectangular(rect) => {
            let solid = SolidBuilder::box_solid(rect.width(), rect.height(), length)?;
            Ok(builder::translated(
                &solid,
                Vector3::new(-rect.width() * 0.5, -rect.height() * 0.5, 0.0),
            ))
        }
    }
}

pub fn place_between(solid: &Solid, start: Point3, end: Point3, tol: &Tolerance) -> Result<Solid> {
    let dir = end - start;
    let length = (dir.x * dir.x + dir.y * dir.y + dir.z * dir.z).sqrt();
    let orientation = orientation_from_z(dir)
        .filter(|_| length > tol.linear)
        .ok_or_else(|| Error::InvalidParameter("start and end points coincide".to_string()))?;

    let (axis, angle) = axis_angle(orientation);
    let mut placed = solid.clone();
    if angle.abs() > tol.angular {
        placed = builder::rotated(&placed, Point3::new(0.0, 0.0, 0.0), axis, Rad(angle));
    }
    Ok(builder::translated(
        &placed,
        Vector3::new(start.x, start.y, start.z),
    ))
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}

pub fn solid_points(solid: &Solid) -> Vec<Point3> {
    solid
        .face_iter()
        .flat_map(|face| face.boundaries())
        .flat_map(|wire| wire.vertex_iter().map(|vertex| vertex.point()).collect::<Vec<_>>())
        .collect()
}
