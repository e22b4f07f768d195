use cgmath::{Deg, InnerSpace, Matrix4, Point3, Vector3, perspective};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov_y: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_y: 75.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            position: Point3::new(5.0, 5.0, 5.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
        }
    }
}

impl Camera {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let mut camera = Self::default();
        camera.set_viewport(width, height);
        camera
    }

    /// Updates the aspect ratio. Degenerate sizes keep the previous value and
    /// return `false`.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = f64::from(width) / f64::from(height);
        true
    }

    pub fn look_at(&mut self, target: Point3<f64>) {
        self.target = target;
    }

    pub fn direction(&self) -> Vector3<f64> {
        let dir = self.target - self.position;
        if dir.magnitude2() <= f64::EPSILON {
            -Vector3::unit_z()
        } else {
            dir.normalize()
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f64> {
        Matrix4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Matrix4<f64> {
        perspective(Deg(self.fov_y), self.aspect, self.near, self.far)
    }

    pub fn frame_bounds(&mut self, min: Point3<f64>, max: Point3<f64>) {
        let center = Point3::new(
            (min.x + max.x) * 0.5,
            (min.y + max.y) * 0.5,
            (min.z + max.z) * 0.5,
        );
        let radius = (max - min).magnitude() * 0.5;
        let half_fov = (self.fov_y.to_radians() * 0.5).max(1.0e-3);
        let distance = (radius / half_fov.sin()).max(self.near * 2.0);
        let dir = self.direction();
        self.target = center;
        self.position = center - dir * distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{EuclideanSpace, Transform};

    #[test]
    fn defaults_match_scene_setup() {
        let camera = Camera::default();
        assert_eq!(camera.fov_y, 75.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
        assert_eq!(camera.position, Point3::new(5.0, 5.0, 5.0));
        assert_eq!(camera.target, Point3::origin());
    }

    #[test]
    fn viewport_sets_aspect() {
        let mut camera = Camera::for_viewport(1600, 800);
        assert_eq!(camera.aspect, 2.0);
        assert!(!camera.set_viewport(0, 800));
        assert_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn target_projects_to_view_center() {
        let camera = Camera::for_viewport(1280, 720);
        let clip = camera.projection_matrix() * camera.view_matrix();
        let ndc = clip.transform_point(camera.target);
        assert!(ndc.x.abs() < 1.0e-9);
        assert!(ndc.y.abs() < 1.0e-9);
    }

    #[test]
    fn framing_keeps_direction() {
        let mut camera = Camera::default();
        let before = camera.direction();
        camera.frame_bounds(Point3::new(0.0, -1.0, -1.0), Point3::new(10.0, 1.0, 1.0));
        assert_eq!(camera.target, Point3::new(5.0, 0.0, 0.0));
        assert!((camera.direction() - before).magnitude() < 1.0e-9);
        assert!((camera.position - camera.target).magnitude() > 5.0);
    }
}
