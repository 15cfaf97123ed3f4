//! Renderer that builds draw lists without painting them.

use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::draw_list::{build_draw_list, DrawList};
use crate::renderer::traits::{Renderer, Viewport};
use crate::systems::lighting::LightState;

/// Keeps the last frame's draw list so callers can inspect what would have
/// been drawn.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    viewport: Viewport,
    frames: u64,
    last: DrawList,
}

impl HeadlessRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Number of frames rendered.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> &DrawList {
        &self.last
    }
}

impl Renderer for HeadlessRenderer {
    fn backend(&self) -> &'static str {
        "headless"
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera, lights: &LightState) {
        self.last = build_draw_list(scene, camera, lights, self.viewport);
        self.frames += 1;
    }

    fn set_size(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn size(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::color::Color;
    use crate::components::entity::Entity;
    use crate::components::mesh::MeshComponent;

    #[test]
    fn render_counts_frames_and_keeps_last_list() {
        let mut renderer = HeadlessRenderer::new(Viewport::new(800, 600));
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_mesh(MeshComponent::basic(5.0, Color::WHITE)));
        let mut camera = PerspectiveCamera::new(75.0, 800.0 / 600.0, 0.1, 1000.0);
        camera.position = glam::Vec3::new(0.0, 30.0, 50.0);
        camera.look_at(glam::Vec3::ZERO);

        renderer.render(&scene, &camera, &LightState::new());
        renderer.render(&scene, &camera, &LightState::new());

        assert_eq!(renderer.backend(), "headless");
        assert_eq!(renderer.frames(), 2);
        assert_eq!(renderer.last_frame().len(), 1);
        assert_eq!(renderer.last_frame().viewport, Viewport::new(800, 600));
    }

    #[test]
    fn set_size_updates_viewport() {
        let mut renderer = HeadlessRenderer::default();
        renderer.set_size(Viewport::new(1024, 768));
        assert_eq!(renderer.size(), Viewport::new(1024, 768));
    }
}
