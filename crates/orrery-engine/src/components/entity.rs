use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::components::line::LineComponent;
use crate::components::mesh::MeshComponent;
use crate::components::points::PointsComponent;

/// Fat Entity: a single struct with optional visual components.
/// An entity with no visual component is invisible but still addressable.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is drawn.
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Euler rotation (x, y, z) in radians.
    pub rotation: Vec3,
    /// Draw-order bucket.
    pub layer: RenderLayer,
    /// Sphere mesh.
    pub mesh: Option<MeshComponent>,
    /// Polyline in local space.
    pub line: Option<LineComponent>,
    /// Point cloud in local space.
    pub points: Option<PointsComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            layer: RenderLayer::default(),
            mesh: None,
            line: None,
            points: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_line(mut self, line: LineComponent) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_points(mut self, points: PointsComponent) -> Self {
        self.points = Some(points);
        self
    }
}
