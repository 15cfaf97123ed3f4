use glam::Vec3;
use crate::components::color::Color;

/// Polyline through `points` (local space, offset by the entity position).
/// A closed loop repeats its first point at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct LineComponent {
    pub points: Vec<Vec3>,
    pub color: Color,
}

impl LineComponent {
    pub fn new(points: Vec<Vec3>, color: Color) -> Self {
        Self { points, color }
    }

    /// Whether the last point returns to the first (within `eps`).
    pub fn is_closed(&self, eps: f32) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.points.len() > 2 => a.distance(*b) <= eps,
            _ => false,
        }
    }
}
