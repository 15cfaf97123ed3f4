use crate::components::color::Color;

/// UV-sphere geometry. Segment counts only matter to tessellating backends;
/// the canvas backend draws the exact silhouette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereGeometry {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl SphereGeometry {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            width_segments: 32,
            height_segments: 32,
        }
    }

    pub fn with_segments(mut self, width: u32, height: u32) -> Self {
        self.width_segments = width;
        self.height_segments = height;
        self
    }
}

/// Surface material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Flat color, ignores lights (looks self-illuminated).
    Basic { color: Color },
    /// Diffuse color shaded by ambient + point lights.
    Standard { color: Color },
}

impl Material {
    pub fn color(&self) -> Color {
        match *self {
            Material::Basic { color } | Material::Standard { color } => color,
        }
    }

    pub fn is_lit(&self) -> bool {
        matches!(self, Material::Standard { .. })
    }
}

/// Component for sphere meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: SphereGeometry,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(geometry: SphereGeometry, material: Material) -> Self {
        Self { geometry, material }
    }

    /// Unlit sphere of the given radius.
    pub fn basic(radius: f32, color: Color) -> Self {
        Self::new(SphereGeometry::new(radius), Material::Basic { color })
    }

    /// Lit sphere of the given radius.
    pub fn standard(radius: f32, color: Color) -> Self {
        Self::new(SphereGeometry::new(radius), Material::Standard { color })
    }

    pub fn radius(&self) -> f32 {
        self.geometry.radius
    }
}
