//! 3D to 2D projection with layer and depth ordering.
//!
//! Turns the scene into a flat list of viewport-space draw commands that a
//! backend can paint in order (painter's algorithm): layers back-to-front,
//! then farthest-first within a layer.

use glam::{Vec2, Vec3};

use crate::components::color::Color;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::core::scene::Scene;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::traits::Viewport;
use crate::systems::lighting::LightState;

/// Smallest on-screen point diameter in pixels.
const MIN_POINT_PX: f32 = 1.0;

/// How a lit sphere is shaded on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shading {
    /// Color of the side facing the light.
    pub lit: Color,
    /// Color of the side facing away (ambient only).
    pub unlit: Color,
    /// Screen-space offset toward the light, in units of the sphere radius.
    pub toward_light: Vec2,
    /// Fraction of the visible disc that is lit: 1 = full, 0 = new.
    pub phase: f32,
}

/// A projected sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereInstance {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Self-rotation about the vertical axis, radians in [0, 2π).
    pub spin: f32,
    /// `None` for unlit materials.
    pub shading: Option<Shading>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sphere(SphereInstance),
    /// Visible runs of a polyline; a run breaks where a point was culled.
    Polyline { runs: Vec<Vec<Vec2>>, color: Color },
    Points { points: Vec<Vec2>, color: Color, size: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: RenderLayer,
    pub depth: f32,
    pub command: DrawCommand,
}

/// Ordered draw commands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub viewport: Viewport,
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn spheres(&self) -> impl Iterator<Item = &SphereInstance> {
        self.items.iter().filter_map(|item| match &item.command {
            DrawCommand::Sphere(s) => Some(s),
            _ => None,
        })
    }
}

/// Project every active entity of `scene` and order the result for painting.
pub fn build_draw_list(
    scene: &Scene,
    camera: &PerspectiveCamera,
    lights: &LightState,
    viewport: Viewport,
) -> DrawList {
    let (w, h) = (viewport.width as f32, viewport.height as f32);
    let mut items = Vec::with_capacity(scene.len());

    for entity in scene.iter().filter(|e| e.active) {
        if let Some(item) = project_mesh(entity, camera, lights, w, h) {
            items.push(item);
        }
        if let Some(item) = project_line(entity, camera, w, h) {
            items.push(item);
        }
        if let Some(item) = project_points(entity, camera, w, h) {
            items.push(item);
        }
    }

    // Layer ascending, then farther objects (larger depth) first.
    items.sort_by(|a, b| {
        a.layer
            .cmp(&b.layer)
            .then(b.depth.partial_cmp(&a.depth).unwrap_or(std::cmp::Ordering::Equal))
    });

    DrawList { viewport, items }
}

fn project_mesh(
    entity: &Entity,
    camera: &PerspectiveCamera,
    lights: &LightState,
    w: f32,
    h: f32,
) -> Option<DrawItem> {
    let mesh = entity.mesh.as_ref()?;
    let proj = camera.project(entity.pos, w, h)?;
    let radius = mesh.radius() * proj.scale;
    let color = mesh.material.color();

    let shading = if mesh.material.is_lit() {
        Some(shade_sphere(entity.pos, mesh.radius(), color, camera, lights, w, h, proj.pos, radius))
    } else {
        None
    };

    Some(DrawItem {
        layer: entity.layer,
        depth: proj.depth,
        command: DrawCommand::Sphere(SphereInstance {
            center: proj.pos,
            radius,
            color,
            spin: entity.rotation.y.rem_euclid(std::f32::consts::TAU),
            shading,
        }),
    })
}

#[allow(clippy::too_many_arguments)]
fn shade_sphere(
    pos: Vec3,
    world_radius: f32,
    color: Color,
    camera: &PerspectiveCamera,
    lights: &LightState,
    w: f32,
    h: f32,
    screen_center: Vec2,
    screen_radius: f32,
) -> Shading {
    let unlit = color.modulate(lights.ambient());
    let Some(incident) = lights.incident(pos) else {
        return Shading {
            lit: unlit,
            unlit,
            toward_light: Vec2::ZERO,
            phase: 0.0,
        };
    };

    let lit = unlit.saturating_add(color.modulate(incident.radiance));

    // Where the sub-solar point lands on screen, relative to the disc.
    let toward_light = camera
        .project(pos + incident.direction * world_radius, w, h)
        .filter(|_| screen_radius > 1e-6)
        .map(|p| ((p.pos - screen_center) / screen_radius).clamp_length_max(1.0))
        .unwrap_or(Vec2::ZERO);

    let to_camera = (camera.position - pos).normalize_or_zero();
    let phase = (1.0 + incident.direction.dot(to_camera)) / 2.0;

    Shading {
        lit,
        unlit,
        toward_light,
        phase,
    }
}

fn project_line(entity: &Entity, camera: &PerspectiveCamera, w: f32, h: f32) -> Option<DrawItem> {
    let line = entity.line.as_ref()?;
    let mut runs: Vec<Vec<Vec2>> = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    let mut depth_sum = 0.0;
    let mut visible = 0usize;

    for &p in &line.points {
        match camera.project(entity.pos + p, w, h) {
            Some(proj) => {
                current.push(proj.pos);
                depth_sum += proj.depth;
                visible += 1;
            }
            None => {
                if current.len() > 1 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() > 1 {
        runs.push(current);
    }
    if runs.is_empty() {
        return None;
    }

    Some(DrawItem {
        layer: entity.layer,
        depth: depth_sum / visible as f32,
        command: DrawCommand::Polyline { runs, color: line.color },
    })
}

fn project_points(entity: &Entity, camera: &PerspectiveCamera, w: f32, h: f32) -> Option<DrawItem> {
    let cloud = entity.points.as_ref()?;
    let mut points = Vec::with_capacity(cloud.len());
    let mut depth_sum = 0.0;
    let mut scale_sum = 0.0;

    for &p in &cloud.positions {
        if let Some(proj) = camera.project(entity.pos + p, w, h) {
            points.push(proj.pos);
            depth_sum += proj.depth;
            scale_sum += proj.scale;
        }
    }
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f32;
    Some(DrawItem {
        layer: entity.layer,
        depth: depth_sum / n,
        command: DrawCommand::Points {
            points,
            color: cloud.color,
            size: (cloud.size * scale_sum / n).max(MIN_POINT_PX),
        },
    })
}
