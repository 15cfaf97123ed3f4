//! Orbit camera controls.
//!
//! The camera orbits a target point on a sphere. Primary-button drags
//! rotate, secondary or middle drags pan the target, the wheel dollies in
//! and out. Input only accumulates deltas; `update` applies them to the
//! camera once per tick. With damping on, each update applies a fraction
//! of the pending motion and decays the rest, so the view eases to a stop.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::input::queue::{InputEvent, InputQueue, PointerButton};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::traits::Viewport;

/// Keeps the polar angle off the poles, where azimuth is undefined.
const POLAR_EPS: f32 = 1e-6;
/// Camera moves smaller than this (squared) count as "no change".
const MOVE_EPS: f32 = 1e-6;
/// Wheel notches are normalised to this many pixels of `delta_y`.
const WHEEL_NOTCH: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragMode {
    Rotate,
    Pan,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    mode: DragMode,
    last: Vec2,
}

/// Spherical coordinates around the target: `theta` is the azimuth around
/// +Y measured from +Z, `phi` the polar angle from +Y.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Spherical {
    radius: f32,
    theta: f32,
    phi: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Ignore input and leave the camera alone when false.
    pub enabled: bool,
    pub enable_damping: bool,
    /// Fraction of pending motion applied per update when damping.
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar angle limits in radians (0 = looking straight down).
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,

    target: Vec3,
    viewport: Viewport,
    drag: Option<Drag>,
    /// Pending rotation (theta, phi), radians.
    rotate_delta: Vec2,
    /// Pending pan in CSS pixels, converted to world units in `update`.
    pan_pixels: Vec2,
    /// World-space pan still to be applied.
    pan_offset: Vec3,
    /// Pending dolly factor; < 1 moves closer.
    scale: f32,
}

impl OrbitControls {
    pub fn new(camera: &PerspectiveCamera) -> Self {
        Self {
            enabled: true,
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            target: camera.target(),
            viewport: Viewport::default(),
            drag: None,
            rotate_delta: Vec2::ZERO,
            pan_pixels: Vec2::ZERO,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Pixel size of the element receiving input. Drag distances are
    /// measured against its height.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drain `queue` and accumulate the motion it describes.
    pub fn handle_input(&mut self, queue: &mut InputQueue) {
        for event in queue.drain() {
            self.handle(&event);
        }
    }

    pub fn handle(&mut self, event: &InputEvent) {
        if !self.enabled {
            return;
        }
        match *event {
            InputEvent::PointerDown { x, y, button } => {
                let mode = match button {
                    PointerButton::Primary => DragMode::Rotate,
                    PointerButton::Middle | PointerButton::Secondary => DragMode::Pan,
                };
                self.drag = Some(Drag { mode, last: Vec2::new(x, y) });
            }
            InputEvent::PointerMove { x, y } => {
                let Some(drag) = self.drag.as_mut() else {
                    return;
                };
                let pos = Vec2::new(x, y);
                let delta = pos - drag.last;
                drag.last = pos;
                match drag.mode {
                    DragMode::Rotate => self.rotate_pixels(delta),
                    DragMode::Pan => self.pan_pixels += delta * self.pan_speed,
                }
            }
            InputEvent::PointerUp { .. } => self.drag = None,
            InputEvent::Wheel { delta_y } => {
                if delta_y == 0.0 {
                    return;
                }
                let step = 0.95f32.powf(self.zoom_speed * delta_y.abs() / WHEEL_NOTCH);
                if delta_y < 0.0 {
                    self.scale *= step;
                } else {
                    self.scale /= step;
                }
            }
        }
    }

    fn rotate_pixels(&mut self, delta: Vec2) {
        let height = self.viewport.height.max(1) as f32;
        // A drag across the full height turns the view once around.
        self.rotate_delta -= delta * (TAU / height) * self.rotate_speed;
    }

    /// Convert pending pan pixels to a world-space offset in the camera's
    /// screen plane, scaled so the target tracks the pointer.
    fn resolve_pan(&mut self, camera: &PerspectiveCamera) {
        if self.pan_pixels == Vec2::ZERO {
            return;
        }
        let height = self.viewport.height.max(1) as f32;
        let distance = (camera.position - self.target).length();
        let world_per_px = 2.0 * distance * (camera.fov_deg.to_radians() / 2.0).tan() / height;

        let forward = camera.direction();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();

        self.pan_offset += (-right * self.pan_pixels.x + up * self.pan_pixels.y) * world_per_px;
        self.pan_pixels = Vec2::ZERO;
    }

    /// Apply pending motion to `camera`. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        if !self.enabled {
            return false;
        }
        self.resolve_pan(camera);

        let before = camera.position;
        let mut spherical = Spherical::from_offset(camera.position - self.target);

        let step = if self.enable_damping { self.damping_factor } else { 1.0 };
        spherical.theta += self.rotate_delta.x * step;
        spherical.phi += self.rotate_delta.y * step;
        spherical.phi = spherical
            .phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(POLAR_EPS, PI - POLAR_EPS);
        spherical.radius = (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        self.target += self.pan_offset * step;

        camera.position = self.target + spherical.to_offset();
        camera.look_at(self.target);

        if self.enable_damping {
            self.rotate_delta *= 1.0 - self.damping_factor;
            self.pan_offset *= 1.0 - self.damping_factor;
        } else {
            self.rotate_delta = Vec2::ZERO;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        camera.position.distance_squared(before) > MOVE_EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(75.0, 800.0 / 600.0, 0.1, 1000.0);
        cam.position = Vec3::new(0.0, 30.0, 50.0);
        cam.look_at(Vec3::ZERO);
        cam
    }

    fn controls(cam: &PerspectiveCamera) -> OrbitControls {
        let mut c = OrbitControls::new(cam);
        c.set_viewport(Viewport::new(800, 600));
        c
    }

    fn drag(c: &mut OrbitControls, button: PointerButton, from: Vec2, to: Vec2) {
        c.handle(&InputEvent::PointerDown { x: from.x, y: from.y, button });
        c.handle(&InputEvent::PointerMove { x: to.x, y: to.y });
        c.handle(&InputEvent::PointerUp { x: to.x, y: to.y });
    }

    #[test]
    fn spherical_conversion_is_consistent() {
        let offset = Vec3::new(3.0, 4.0, -5.0);
        let back = Spherical::from_offset(offset).to_offset();
        assert!(back.distance(offset) < 1e-4);
    }

    #[test]
    fn idle_update_leaves_camera_in_place() {
        let mut cam = camera();
        let mut c = controls(&cam);
        assert!(!c.update(&mut cam));
        assert!(cam.position.distance(Vec3::new(0.0, 30.0, 50.0)) < 1e-3);
    }

    #[test]
    fn rotate_drag_keeps_distance_to_target() {
        let mut cam = camera();
        let mut c = controls(&cam);
        let radius = cam.position.length();
        drag(&mut c, PointerButton::Primary, Vec2::new(400.0, 300.0), Vec2::new(500.0, 300.0));
        assert!(c.update(&mut cam));
        assert!((cam.position.length() - radius).abs() < 1e-3);
        assert!(cam.position.x.abs() > 1.0);
        assert!(cam.target().distance(Vec3::ZERO) < 1e-6);
    }

    #[test]
    fn polar_angle_is_clamped_at_the_pole() {
        let mut cam = camera();
        let mut c = controls(&cam);
        // Drag far downward: tries to rotate past the top of the sphere.
        drag(&mut c, PointerButton::Primary, Vec2::new(400.0, 0.0), Vec2::new(400.0, 3000.0));
        let radius = cam.position.length();
        c.update(&mut cam);
        assert!(cam.position.is_finite());
        assert!((cam.position.y - radius).abs() < 1e-2);
        assert!(cam.view_matrix().is_finite());
    }

    #[test]
    fn wheel_zooms_in_and_out_within_limits() {
        let mut cam = camera();
        let mut c = controls(&cam);
        let start = cam.position.length();

        c.handle(&InputEvent::Wheel { delta_y: -100.0 });
        c.update(&mut cam);
        let closer = cam.position.length();
        assert!(closer < start);

        c.max_distance = closer + 1.0;
        for _ in 0..20 {
            c.handle(&InputEvent::Wheel { delta_y: 100.0 });
        }
        c.update(&mut cam);
        assert!((cam.position.length() - (closer + 1.0)).abs() < 1e-3);
    }

    #[test]
    fn secondary_drag_pans_target() {
        let mut cam = camera();
        let mut c = controls(&cam);
        drag(&mut c, PointerButton::Secondary, Vec2::new(400.0, 300.0), Vec2::new(300.0, 300.0));
        c.update(&mut cam);
        // Dragging left moves the scene left, so the target moves right.
        assert!(c.target().x > 0.0);
        assert!(cam.target().distance(c.target()) < 1e-6);
    }

    #[test]
    fn damping_eases_over_several_updates() {
        let mut cam = camera();
        let mut c = controls(&cam);
        c.enable_damping = true;
        c.damping_factor = 0.05;
        drag(&mut c, PointerButton::Primary, Vec2::new(400.0, 300.0), Vec2::new(460.0, 300.0));

        let p0 = cam.position;
        assert!(c.update(&mut cam));
        let first_step = cam.position.distance(p0);
        let p1 = cam.position;
        assert!(c.update(&mut cam));
        let second_step = cam.position.distance(p1);
        assert!(second_step > 0.0 && second_step < first_step);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut cam = camera();
        let mut c = controls(&cam);
        c.handle(&InputEvent::PointerMove { x: 10.0, y: 10.0 });
        assert!(!c.is_dragging());
        assert!(!c.update(&mut cam));
    }

    #[test]
    fn handle_input_drains_queue() {
        let mut cam = camera();
        let mut c = controls(&cam);
        let mut q = InputQueue::new();
        q.push(InputEvent::Wheel { delta_y: -100.0 });
        c.handle_input(&mut q);
        assert!(q.is_empty());
        assert!(c.update(&mut cam));
    }

    #[test]
    fn disabled_controls_ignore_input() {
        let mut cam = camera();
        let mut c = controls(&cam);
        c.enabled = false;
        c.handle(&InputEvent::Wheel { delta_y: -100.0 });
        assert!(!c.update(&mut cam));
    }
}
