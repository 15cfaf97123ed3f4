//! Renderer trait for drawing backends.
//!
//! A backend receives the scene, the camera and the lights once per tick
//! and is responsible for putting pixels on screen. Backends share the
//! projection and ordering logic through `build_draw_list`.

use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::lighting::LightState;

/// Output surface size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height, or 1.0 for a degenerate (zero-height) surface.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d", "headless").
    fn backend(&self) -> &'static str;

    /// Draw one frame of `scene` as seen from `camera`.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera, lights: &LightState);

    /// Resize the output surface.
    fn set_size(&mut self, viewport: Viewport);

    /// Current output surface size.
    fn size(&self) -> Viewport;
}
