use cgmath::{Deg, Quaternion, Rotation3};
use girder_elements::{Load, LoadKind, MaterialKind, MaterialPreset};
use girder_geometry::transform::{local_to_global, orientation_from_z};
use girder_io::position_vertex;
use girder_topology::{Point3, Vector3};
use std::f64::consts::TAU;
use tracing::debug;
use truck_polymesh::{Faces, PolygonMesh, StandardAttributes};

use crate::{Error, Result};

const ARROW_SEGMENTS: usize = 8;
const TORUS_RADIAL_SEGMENTS: usize = 8;
const TORUS_TUBULAR_SEGMENTS: usize = 20;
const MAX_DISTRIBUTED_ARROWS: usize = 24;

#[derive(Clone, Debug)]
pub struct LoadGlyph {
    pub mesh: PolygonMesh,
    pub material: MaterialPreset,
}

#[derive(Clone, Copy, Debug)]
struct Placement {
    origin: Point3,
    orientation: Quaternion<f64>,
}

impl Placement {
    fn new(origin: Point3, orientation: Quaternion<f64>) -> Self {
        Self {
            origin,
            orientation,
        }
    }

    fn apply(&self, local: Vector3) -> Point3 {
        self.origin + local_to_global(local, self.orientation)
    }

    fn then(&self, offset: Vector3, orientation: Quaternion<f64>) -> Self {
        Self::new(self.apply(offset), self.orientation * orientation)
    }
}

#[derive(Default)]
struct MeshBuilder {
    positions: Vec<Point3>,
    triangles: Vec<[usize; 3]>,
}

impl MeshBuilder {
    fn push(&mut self, placement: &Placement, local: Vector3) -> usize {
        self.positions.push(placement.apply(local));
        self.positions.len() - 1
    }

    fn ring(&mut self, placement: &Placement, radius: f64, z: f64, segments: usize) -> usize {
        let first = self.positions.len();
        for idx in 0..segments {
            let angle = TAU * idx as f64 / segments as f64;
            self.push(
                placement,
                Vector3::new(radius * angle.cos(), radius * angle.sin(), z),
            );
        }
        first
    }

    fn cylinder(&mut self, placement: &Placement, radius: f64, z0: f64, z1: f64, segments: usize) {
        let bottom = self.ring(placement, radius, z0, segments);
        let top = self.ring(placement, radius, z1, segments);
        let bottom_center = self.push(placement, Vector3::new(0.0, 0.0, z0));
        let top_center = self.push(placement, Vector3::new(0.0, 0.0, z1));
        for i in 0..segments {
            let j = (i + 1) % segments;
            self.triangles.push([bottom + i, bottom + j, top + j]);
            self.triangles.push([bottom + i, top + j, top + i]);
            self.triangles.push([bottom_center, bottom + j, bottom + i]);
            self.triangles.push([top_center, top + i, top + j]);
        }
    }

    fn cone(&mut self, placement: &Placement, radius: f64, z0: f64, height: f64, segments: usize) {
        let base = self.ring(placement, radius, z0, segments);
        let center = self.push(placement, Vector3::new(0.0, 0.0, z0));
        let apex = self.push(placement, Vector3::new(0.0, 0.0, z0 + height));
        for i in 0..segments {
            let j = (i + 1) % segments;
            self.triangles.push([base + i, base + j, apex]);
            self.triangles.push([center, base + j, base + i]);
        }
    }

    fn torus(
        &mut self,
        placement: &Placement,
        radius: f64,
        tube: f64,
        radial_segments: usize,
        tubular_segments: usize,
    ) {
        let first = self.positions.len();
        for j in 0..radial_segments {
            let v = TAU * j as f64 / radial_segments as f64;
            for i in 0..tubular_segments {
                let u = TAU * i as f64 / tubular_segments as f64;
                let r = radius + tube * v.cos();
                self.push(
                    placement,
                    Vector3::new(r * u.cos(), r * u.sin(), tube * v.sin()),
                );
            }
        }
        let index = |j: usize, i: usize| {
            first + (j % radial_segments) * tubular_segments + (i % tubular_segments)
        };
        for j in 0..radial_segments {
            for i in 0..tubular_segments {
                let a = index(j, i);
                let b = index(j, i + 1);
                let c = index(j + 1, i + 1);
                let d = index(j + 1, i);
                self.triangles.push([a, b, c]);
                self.triangles.push([a, c, d]);
            }
        }
    }

    fn arrow(&mut self, tail: Point3, direction: Vector3, length: f64) -> Result<()> {
        let orientation = orientation_from_z(direction).ok_or_else(|| {
            Error::InvalidParameter("load direction must be a non-zero vector".to_string())
        })?;
        let placement = Placement::new(tail, orientation);
        let head_length = length * 0.2;
        let head_radius = length * 0.1 * 0.5;
        let shaft_radius = head_radius * 0.3;
        self.cylinder(
            &placement,
            shaft_radius,
            0.0,
            length - head_length,
            ARROW_SEGMENTS,
        );
        self.cone(
            &placement,
            head_radius,
            length - head_length,
            head_length,
            ARROW_SEGMENTS,
        );
        Ok(())
    }

    fn build(self) -> PolygonMesh {
        PolygonMesh::new(
            StandardAttributes {
                positions: self.positions,
                ..Default::default()
            },
            Faces::from_iter(self.triangles.iter().map(|tri| tri.map(position_vertex))),
        )
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LoadVisualizer {
    material: MaterialPreset,
}

impl Default for LoadVisualizer {
    fn default() -> Self {
        Self {
            material: MaterialKind::Force.preset(),
        }
    }
}

impl LoadVisualizer {
    pub fn new(material: MaterialPreset) -> Self {
        Self { material }
    }

    pub fn material(&self) -> MaterialPreset {
        self.material
    }

    pub fn point_load(
        &self,
        position: Point3,
        direction: Vector3,
        magnitude: f64,
        color: Option<u32>,
    ) -> Result<LoadGlyph> {
        ensure_magnitude(magnitude)?;
        let mut builder = MeshBuilder::default();
        builder.arrow(position, direction, magnitude)?;
        let material = match color {
            Some(color) => self.material.with_color(color),
            None => self.material,
        };
        debug!(magnitude, "built point load glyph");
        Ok(LoadGlyph {
            mesh: builder.build(),
            material,
        })
    }

    pub fn moment_load(&self, position: Point3, axis: Vector3, magnitude: f64) -> Result<LoadGlyph> {
        ensure_magnitude(magnitude)?;
        let orientation = orientation_from_z(axis).ok_or_else(|| {
            Error::InvalidParameter("moment axis must be a non-zero vector".to_string())
        })?;
        let group = Placement::new(position, orientation);

        let mut builder = MeshBuilder::default();
        builder.torus(
            &group,
            magnitude,
            magnitude * 0.1,
            TORUS_RADIAL_SEGMENTS,
            TORUS_TUBULAR_SEGMENTS,
        );

        // cone stands along +Y at the top of the ring, tilted a quarter turn
        let tilt = Quaternion::from_angle_z(Deg(45.0)) * Quaternion::from_angle_x(Deg(-90.0));
        let head = group.then(Vector3::new(0.0, magnitude, 0.0), tilt);
        let height = magnitude * 0.3;
        builder.cone(
            &head,
            magnitude * 0.15,
            -height * 0.5,
            height,
            ARROW_SEGMENTS,
        );

        debug!(magnitude, "built moment load glyph");
        Ok(LoadGlyph {
            mesh: builder.build(),
            material: self.material,
        })
    }

    pub fn distributed_load(
        &self,
        start: Point3,
        span: Vector3,
        direction: Vector3,
        magnitude: f64,
    ) -> Result<LoadGlyph> {
        ensure_magnitude(magnitude)?;
        let length = (span.x * span.x + span.y * span.y + span.z * span.z).sqrt();
        if !length.is_finite() || length <= f64::EPSILON {
            return Err(Error::InvalidParameter(
                "distributed load span must be a non-zero vector".to_string(),
            ));
        }

        let count = arrow_count(length, magnitude);
        let mut builder = MeshBuilder::default();
        for idx in 0..count {
            let t = idx as f64 / (count - 1) as f64;
            builder.arrow(start + span * t, direction, magnitude)?;
        }

        debug!(magnitude, arrows = count, "built distributed load glyph");
        Ok(LoadGlyph {
            mesh: builder.build(),
            material: self.material,
        })
    }

    pub fn glyph_for(&self, load: &Load) -> Result<LoadGlyph> {
        match load.kind {
            LoadKind::Point => self.point_load(
                load.application_point,
                load.direction,
                load.magnitude,
                None,
            ),
            LoadKind::Moment => {
                self.moment_load(load.application_point, load.direction, load.magnitude)
            }
            LoadKind::Distributed { span } => self.distributed_load(
                load.application_point,
                span,
                load.direction,
                load.magnitude,
            ),
        }
    }
}

/// One arrow per `magnitude` of span, both ends always drawn.
fn arrow_count(length: f64, magnitude: f64) -> usize {
    let per_span = (length / magnitude).ceil();
    let inner = if per_span.is_finite() {
        (per_span as usize).min(MAX_DISTRIBUTED_ARROWS - 1)
    } else {
        MAX_DISTRIBUTED_ARROWS - 1
    };
    inner.max(1) + 1
}

fn ensure_magnitude(magnitude: f64) -> Result<()> {
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "load magnitude must be > 0 (received {magnitude})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use girder_io::triangle_indices;

    fn origin() -> Point3 {
        Point3::new(0.0, 0.0, 0.0)
    }

    fn max_along(mesh: &PolygonMesh, axis: Vector3) -> f64 {
        mesh.positions()
            .iter()
            .map(|p| p.x * axis.x + p.y * axis.y + p.z * axis.z)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    #[test]
    fn arrow_tip_reaches_magnitude() {
        let glyph = LoadVisualizer::default()
            .point_load(origin(), Vector3::new(0.0, -2.0, 0.0), 1.5, None)
            .unwrap();
        let down = -Vector3::unit_y();
        assert!((max_along(&glyph.mesh, down) - 1.5).abs() < 1.0e-9);
        // shaft + head: 4 triangles per segment for the cylinder, 2 for the cone
        assert_eq!(triangle_indices(&glyph.mesh).len(), ARROW_SEGMENTS * 6);
    }

    #[test]
    fn arrow_color_overrides_material() {
        let glyph = LoadVisualizer::default()
            .point_load(origin(), Vector3::unit_x(), 1.0, Some(0x00ff00))
            .unwrap();
        assert_eq!(glyph.material.color, 0x00ff00);
        assert_eq!(glyph.material.opacity, 0.7);
    }

    #[test]
    fn zero_direction_is_rejected() {
        let result =
            LoadVisualizer::default().point_load(origin(), Vector3::new(0.0, 0.0, 0.0), 1.0, None);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
        let result = LoadVisualizer::default().point_load(origin(), Vector3::unit_x(), 0.0, None);
        assert!(result.is_err());
    }

    #[test]
    fn moment_ring_has_requested_radius() {
        let glyph = LoadVisualizer::default()
            .moment_load(origin(), Vector3::unit_z(), 2.0)
            .unwrap();
        // ring reaches radius + tube along x, the cone sits above it along y
        assert!((max_along(&glyph.mesh, Vector3::unit_x()) - 2.2).abs() < 1.0e-9);
        assert!(max_along(&glyph.mesh, Vector3::unit_y()) > 2.0);
        let torus = TORUS_RADIAL_SEGMENTS * TORUS_TUBULAR_SEGMENTS * 2;
        assert_eq!(
            triangle_indices(&glyph.mesh).len(),
            torus + ARROW_SEGMENTS * 2
        );
    }

    #[test]
    fn distributed_load_spans_segment() {
        let glyph = LoadVisualizer::default()
            .distributed_load(
                Point3::new(0.0, 0.5, 0.0),
                Vector3::new(3.0, 0.0, 0.0),
                -Vector3::unit_y(),
                1.0,
            )
            .unwrap();
        let arrows = triangle_indices(&glyph.mesh).len() / (ARROW_SEGMENTS * 6);
        assert_eq!(arrows, 4);
        let max_x = max_along(&glyph.mesh, Vector3::unit_x());
        assert!(max_x > 3.0 && max_x < 3.1);
    }

    #[test]
    fn arrow_count_is_bounded() {
        assert_eq!(arrow_count(3.0, 1.0), 4);
        assert_eq!(arrow_count(0.1, 1.0), 2);
        assert_eq!(arrow_count(1000.0, 0.01), MAX_DISTRIBUTED_ARROWS);
    }

    #[test]
    fn glyph_for_dispatches_on_kind() {
        let load = Load::moment(origin(), Vector3::unit_z(), 1.0).unwrap();
        let glyph = LoadVisualizer::default().glyph_for(&load).unwrap();
        assert!(triangle_indices(&glyph.mesh).len() > ARROW_SEGMENTS * 6);
    }
}
