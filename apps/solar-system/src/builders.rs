//! One-time scene construction: sun, planets, orbit rings, stars, lights.

use orrery_engine::geometry::{circle_xz, random_points_in_cube};
use orrery_engine::{
    Color, EngineContext, Entity, EntityId, LineComponent, Material, MeshComponent, PointLight,
    PointsComponent, RenderLayer, SphereGeometry,
};
use glam::Vec3;

use crate::bodies::{
    PlanetSpec, SunSpec, AMBIENT_COLOR, ORBIT_COLOR, ORBIT_SEGMENTS, SPHERE_SEGMENTS, STAR_COUNT,
    STAR_SIZE, STAR_SPREAD, SUN_LIGHT_INTENSITY, SUN_LIGHT_RANGE,
};
use crate::orbit::orbital_position;

pub const STARFIELD_TAG: &str = "starfield";

fn sphere(radius: f32) -> SphereGeometry {
    SphereGeometry::new(radius).with_segments(SPHERE_SEGMENTS, SPHERE_SEGMENTS)
}

/// Unlit sphere at the origin.
pub fn spawn_sun(ctx: &mut EngineContext, sun: &SunSpec) -> EntityId {
    let id = ctx.next_id();
    let mesh = MeshComponent::new(sphere(sun.radius), Material::Basic { color: sun.color });
    ctx.scene.spawn(Entity::new(id).with_tag(sun.name.as_str()).with_mesh(mesh));
    id
}

/// Lit planet sphere placed on its orbit at `angle`.
pub fn spawn_planet(ctx: &mut EngineContext, spec: &PlanetSpec, angle: f64) -> EntityId {
    let id = ctx.next_id();
    let mesh = MeshComponent::new(sphere(spec.radius), Material::Standard { color: spec.color });
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(spec.name.as_str())
            .with_pos(orbital_position(angle, spec.orbit_distance))
            .with_mesh(mesh),
    );
    id
}

/// Closed ring of `ORBIT_SEGMENTS + 1` points at `distance` in the XZ plane.
pub fn spawn_orbit_ring(ctx: &mut EngineContext, name: &str, distance: f32) -> EntityId {
    let id = ctx.next_id();
    let ring = LineComponent::new(circle_xz(distance, ORBIT_SEGMENTS), Color::from_hex(ORBIT_COLOR));
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(format!("{name}-orbit"))
            .with_layer(RenderLayer::Guides)
            .with_line(ring),
    );
    id
}

/// Single point cloud of `STAR_COUNT` stars filling a cube around the sun.
pub fn spawn_starfield(ctx: &mut EngineContext) -> EntityId {
    let id = ctx.next_id();
    let positions = random_points_in_cube(&mut ctx.rng, STAR_COUNT, STAR_SPREAD);
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(STARFIELD_TAG)
            .with_layer(RenderLayer::Background)
            .with_points(PointsComponent::new(positions, Color::WHITE, STAR_SIZE)),
    );
    id
}

/// Dim ambient fill plus a white point light at the sun.
pub fn add_lights(ctx: &mut EngineContext) {
    ctx.lights.set_ambient(Color::from_hex(AMBIENT_COLOR));
    ctx.lights.add(
        PointLight::new(Color::WHITE, SUN_LIGHT_INTENSITY, SUN_LIGHT_RANGE).with_position(Vec3::ZERO),
    );
}
