//! Named celestial bodies and their orbital state.

use orrery_engine::{EngineContext, EntityId, OrreryError, OrreryResult};

use crate::bodies::PlanetSpec;
use crate::builders;

/// One orbiting body: the scene entity it drives plus its orbit state.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: String,
    pub entity: EntityId,
    pub orbit_distance: f32,
    /// Radians per second before the global orbit factor.
    pub angular_speed: f32,
    /// Accumulated orbital angle in radians. Never wrapped.
    pub angle: f64,
    /// User speed scale, ≥ 0. Written by the speed slider.
    pub speed_multiplier: f32,
}

/// Bodies keyed by name, in registration order.
#[derive(Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the planet mesh for `spec` and start tracking it at a random
    /// angle. Fails if a body with the same name exists.
    pub fn register(&mut self, ctx: &mut EngineContext, spec: &PlanetSpec) -> OrreryResult<&CelestialBody> {
        if self.get(&spec.name).is_some() {
            return Err(OrreryError::DuplicateBody { name: spec.name.clone() });
        }

        let angle = ctx.rng.angle();
        let entity = builders::spawn_planet(ctx, spec, angle);
        self.bodies.push(CelestialBody {
            name: spec.name.clone(),
            entity,
            orbit_distance: spec.orbit_distance,
            angular_speed: spec.angular_speed,
            angle,
            speed_multiplier: 1.0,
        });
        log::debug!("registered {} at angle {angle:.3}", spec.name);
        Ok(&self.bodies[self.bodies.len() - 1])
    }

    pub fn get(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CelestialBody> {
        self.bodies.iter_mut().find(|b| b.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CelestialBody> {
        self.bodies.iter_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(|b| b.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
