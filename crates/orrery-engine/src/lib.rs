pub mod api;
pub mod core;
pub mod components;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::sim::{Simulation, SimConfig, EngineContext};
pub use api::types::EntityId;
pub use components::color::Color;
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::line::LineComponent;
pub use components::mesh::{MeshComponent, Material, SphereGeometry};
pub use components::points::PointsComponent;
pub use controls::orbit::OrbitControls;
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::scheduler::{FrameScheduler, FrameCallback, ManualScheduler};
pub use core::time::FrameClock;
pub use error::{OrreryError, OrreryResult};
pub use input::queue::{InputEvent, InputQueue, PointerButton};
pub use renderer::camera::{PerspectiveCamera, Projection};
pub use renderer::draw_list::{build_draw_list, DrawCommand, DrawItem, DrawList, Shading, SphereInstance};
pub use renderer::headless::HeadlessRenderer;
pub use renderer::traits::{Renderer, Viewport};
pub use systems::lighting::{LightState, PointLight};
