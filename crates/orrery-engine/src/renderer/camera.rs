use glam::{Mat4, Vec2, Vec3};

/// Projection result from world space to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport position in pixels, origin top-left, Y down.
    pub pos: Vec2,
    /// Distance in front of the camera along its view axis.
    pub depth: f32,
    /// Pixels per world unit at this depth.
    pub scale: f32,
}

/// Perspective camera looking from `position` toward a target point.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub up: Vec3,
    target: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_deg,
            aspect,
            near,
            far,
            position: Vec3::new(0.0, 0.0, 1.0),
            up: Vec3::Y,
            target: Vec3::ZERO,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Aim the camera at a world-space point.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Set the aspect ratio and rebuild the projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    /// Recompute the cached projection after changing fov/aspect/near/far.
    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh_gl(self.fov_deg.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Unit vector the camera is facing.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Project a world-space point into a `width` × `height` pixel viewport.
    /// Returns `None` for points outside the near/far range.
    pub fn project(&self, world: Vec3, width: f32, height: f32) -> Option<Projection> {
        let view = self.view_matrix().transform_point3(world);
        let depth = -view.z;
        if depth < self.near || depth > self.far {
            return None;
        }

        let clip = self.projection * view.extend(1.0);
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;

        let half_fov = (self.fov_deg.to_radians() / 2.0).tan();
        let scale = (height / 2.0) / (depth * half_fov);

        Some(Projection {
            pos: Vec2::new((ndc_x * 0.5 + 0.5) * width, (0.5 - ndc_y * 0.5) * height),
            depth,
            scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer_camera() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(75.0, 800.0 / 600.0, 0.1, 1000.0);
        cam.position = Vec3::new(0.0, 30.0, 50.0);
        cam.look_at(Vec3::ZERO);
        cam
    }

    #[test]
    fn target_projects_to_center() {
        let cam = viewer_camera();
        let p = cam.project(Vec3::ZERO, 800.0, 600.0).unwrap();
        assert!((p.pos.x - 400.0).abs() < 1e-3);
        assert!((p.pos.y - 300.0).abs() < 1e-3);
        let expected_depth = Vec3::new(0.0, 30.0, 50.0).length();
        assert!((p.depth - expected_depth).abs() < 1e-3);
    }

    #[test]
    fn behind_camera_is_culled() {
        let cam = viewer_camera();
        assert!(cam.project(Vec3::new(0.0, 60.0, 100.0), 800.0, 600.0).is_none());
    }

    #[test]
    fn nearer_points_scale_larger() {
        let cam = viewer_camera();
        let near = cam.project(Vec3::new(0.0, 0.0, 20.0), 800.0, 600.0).unwrap();
        let far = cam.project(Vec3::new(0.0, 0.0, -20.0), 800.0, 600.0).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn positive_x_lands_right_of_center() {
        let cam = viewer_camera();
        let p = cam.project(Vec3::new(10.0, 0.0, 0.0), 800.0, 600.0).unwrap();
        assert!(p.pos.x > 400.0);
    }

    #[test]
    fn set_aspect_rebuilds_projection() {
        let mut cam = viewer_camera();
        let before = cam.projection_matrix();
        cam.set_aspect(2.0);
        assert_eq!(cam.aspect, 2.0);
        assert_ne!(before, cam.projection_matrix());
        let expected = Mat4::perspective_rh_gl(75f32.to_radians(), 2.0, 0.1, 1000.0);
        assert_eq!(cam.projection_matrix(), expected);
    }

    #[test]
    fn direction_points_at_target() {
        let cam = viewer_camera();
        let d = cam.direction();
        assert!((d.length() - 1.0).abs() < 1e-5);
        assert!(d.y < 0.0 && d.z < 0.0);
    }
}
