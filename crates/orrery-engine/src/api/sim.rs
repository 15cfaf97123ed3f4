use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::color::Color;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::systems::lighting::LightState;

/// Configuration for the host, provided by the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// DOM id of the element the canvas is appended to.
    pub container_id: &'static str,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Initial camera position in world space.
    pub camera_position: Vec3,
    /// Point the camera looks at (and orbits around).
    pub camera_target: Vec3,
    /// Whether the orbit controls keep easing after input stops.
    pub enable_damping: bool,
    /// Fraction of the remaining motion applied per update when damping.
    pub damping_factor: f32,
    /// `dt` reported for the very first tick, in seconds.
    pub first_tick_dt: f32,
    /// Canvas clear color.
    pub clear_color: Color,
    /// RNG seed. `None` lets the host pick one (random per page load).
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            container_id: "canvas-container",
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Vec3::new(0.0, 30.0, 50.0),
            camera_target: Vec3::ZERO,
            enable_damping: true,
            damping_factor: 0.05,
            first_tick_dt: 1.0 / 60.0,
            clear_color: Color::BLACK,
            seed: None,
        }
    }
}

/// The contract every simulation hosted by the runner must fulfill.
pub trait Simulation {
    /// Return host configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Build the scene: spawn entities, add lights.
    fn init(&mut self, ctx: &mut EngineContext) -> crate::OrreryResult<()>;

    /// Advance the simulation by `dt` seconds. Called once per display refresh.
    fn update(&mut self, ctx: &mut EngineContext, dt: f32);
}

/// Mutable access to host state, passed to Simulation::init and Simulation::update.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub rng: Rng,
    next_id: u32,
}

impl EngineContext {
    pub fn new(seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            lights: LightState::new(),
            rng: Rng::new(seed),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(42)
    }
}
