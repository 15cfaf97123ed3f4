//! Solar system: sun, eight planets on circular orbits, starfield.
//!
//! Each tick advances every planet's orbital angle and self-rotation by
//! `dt` scaled by its speed multiplier, unless playback is paused. Camera
//! controls and drawing are the runner's job and keep going while paused.

use orrery_engine::{EngineContext, OrreryError, OrreryResult, Simulation};

use crate::bodies::SystemTable;
use crate::builders;
use crate::orbit::{advance_angle, orbital_position, spin_delta};
use crate::registry::BodyRegistry;

/// Whether orbital motion is advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Running,
    Paused,
}

impl AnimationState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Paused,
            Self::Paused => Self::Running,
        }
    }

    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    /// Label for the toggle button: the action it will perform next.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Running => "Pause",
            Self::Paused => "Resume",
        }
    }
}

/// Page color scheme, stored as `data-theme` on `<body>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Anything other than `"light"`, including no attribute, reads as dark.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_attribute(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

pub struct SolarSystem {
    bodies: BodyRegistry,
    state: AnimationState,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            bodies: BodyRegistry::new(),
            state: AnimationState::Running,
        }
    }

    pub fn bodies(&self) -> &BodyRegistry {
        &self.bodies
    }

    pub fn animation_state(&self) -> AnimationState {
        self.state
    }

    /// Flip between running and paused. Returns the new state.
    pub fn toggle_animation(&mut self) -> AnimationState {
        self.state = self.state.toggled();
        log::debug!("animation {:?}", self.state);
        self.state
    }

    /// Overwrite one body's speed multiplier.
    pub fn set_speed_multiplier(&mut self, name: &str, multiplier: f32) -> OrreryResult<()> {
        let body = self
            .bodies
            .get_mut(name)
            .ok_or_else(|| OrreryError::UnknownBody { name: name.to_string() })?;
        body.speed_multiplier = multiplier;
        log::debug!("{name} speed x{multiplier}");
        Ok(())
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for SolarSystem {
    fn init(&mut self, ctx: &mut EngineContext) -> OrreryResult<()> {
        let table = SystemTable::load()?;

        builders::add_lights(ctx);
        builders::spawn_sun(ctx, &table.sun);
        for planet in &table.planets {
            builders::spawn_orbit_ring(ctx, &planet.name, planet.orbit_distance);
            self.bodies.register(ctx, planet)?;
        }
        builders::spawn_starfield(ctx);

        log::info!(
            "solar system: {} planets, {} entities",
            self.bodies.len(),
            ctx.scene.len()
        );
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, dt: f32) {
        if !self.state.is_running() {
            return;
        }

        for body in self.bodies.iter_mut() {
            body.angle = advance_angle(body.angle, dt, body.angular_speed, body.speed_multiplier);
            if let Some(entity) = ctx.scene.get_mut(body.entity) {
                entity.pos = orbital_position(body.angle, body.orbit_distance);
                entity.rotation.y += spin_delta(dt, body.speed_multiplier);
            }
        }
    }
}
