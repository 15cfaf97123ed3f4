//! Point lights and ambient light for sphere shading.
//!
//! Lights are added once at scene setup and persist.
//! Only `Standard` materials react to them.

use glam::Vec3;
use crate::components::color::Color;

/// An omnidirectional light at `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    /// Range where the light fades to zero. 0.0 means no falloff.
    pub distance: f32,
}

impl PointLight {
    pub fn new(color: Color, intensity: f32, distance: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            color,
            intensity,
            distance,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Falloff factor at `dist`: 1 at the light, 0 at `distance` and beyond (quadratic window).
    pub fn attenuation(&self, dist: f32) -> f32 {
        if self.distance <= 0.0 {
            return 1.0;
        }
        let window = (1.0 - dist / self.distance).clamp(0.0, 1.0);
        window * window
    }

    /// Effective intensity received at a world position.
    pub fn strength_at(&self, point: Vec3) -> f32 {
        self.intensity * self.attenuation(self.position.distance(point))
    }
}

/// Light arriving at a surface from its strongest source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incident {
    /// Unit vector from the surface toward the light.
    pub direction: Vec3,
    /// Light color scaled by strength, clamped to 0..1 per channel.
    pub radiance: Color,
}

/// Manages active lights and ambient color for the scene.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: Color,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: Color::BLACK,
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, color: Color) {
        self.ambient = color;
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    /// The strongest light reaching `point`, if any light reaches it with
    /// a usable direction (a light sitting exactly at `point` has none).
    pub fn incident(&self, point: Vec3) -> Option<Incident> {
        self.lights
            .iter()
            .filter_map(|light| {
                let direction = (light.position - point).normalize_or_zero();
                let strength = light.strength_at(point);
                (direction != Vec3::ZERO && strength > 0.0).then_some((direction, strength, light.color))
            })
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(direction, strength, color)| Incident {
                direction,
                radiance: color.scale(strength),
            })
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
