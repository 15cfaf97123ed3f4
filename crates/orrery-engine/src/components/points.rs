use glam::Vec3;
use crate::components::color::Color;

/// Point cloud (local space). `size` is the world-space point diameter.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsComponent {
    pub positions: Vec<Vec3>,
    pub color: Color,
    pub size: f32,
}

impl PointsComponent {
    pub fn new(positions: Vec<Vec3>, color: Color, size: f32) -> Self {
        Self { positions, color, size }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
