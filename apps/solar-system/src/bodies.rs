//! Body table and scene constants.
//!
//! Sizes, distances and speeds are display values, not astronomy: radii and
//! orbit distances are scene units, angular speeds are radians per second
//! before the global orbit factor.

use orrery_engine::{Color, OrreryResult};
use serde::Deserialize;

/// Embed the body table at compile time.
const PLANETS_JSON: &str = include_str!("../data/planets.json");

// ── Scene constants ──────────────────────────────────────────────────

/// Segments per orbit ring; the ring carries one more point to close it.
pub const ORBIT_SEGMENTS: usize = 360;
pub const ORBIT_COLOR: u32 = 0x444444;

pub const STAR_COUNT: usize = 5000;
/// Side of the cube the starfield fills, centered on the sun.
pub const STAR_SPREAD: f32 = 500.0;
pub const STAR_SIZE: f32 = 0.1;

pub const AMBIENT_COLOR: u32 = 0x333333;
pub const SUN_LIGHT_INTENSITY: f32 = 3.0;
/// Distance at which the sun's light has faded out.
pub const SUN_LIGHT_RANGE: f32 = 300.0;

/// Sphere tessellation used for every body.
pub const SPHERE_SEGMENTS: u32 = 32;

// ── Table ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SunSpec {
    pub name: String,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSpec {
    /// Lowercase key; also names the `#{name}-speed` slider.
    pub name: String,
    pub radius: f32,
    pub orbit_distance: f32,
    pub angular_speed: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemTable {
    pub sun: SunSpec,
    pub planets: Vec<PlanetSpec>,
}

impl SystemTable {
    /// Load the embedded table.
    pub fn load() -> OrreryResult<Self> {
        Self::from_json(PLANETS_JSON)
    }

    pub fn from_json(json: &str) -> OrreryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn planet(&self, name: &str) -> Option<&PlanetSpec> {
        self.planets.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.planets.iter().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::OrreryError;

    #[test]
    fn embedded_table_loads() {
        let table = SystemTable::load().unwrap();
        assert_eq!(table.planets.len(), 8);
        assert_eq!(table.sun.radius, 5.0);
        assert_eq!(table.sun.color, Color::from_hex(0xffff00));
    }

    #[test]
    fn planets_in_order_from_the_sun() {
        let table = SystemTable::load().unwrap();
        let names: Vec<_> = table.names().collect();
        assert_eq!(
            names,
            ["mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune"]
        );
        assert!(table
            .planets
            .windows(2)
            .all(|w| w[0].orbit_distance < w[1].orbit_distance));
    }

    #[test]
    fn earth_values() {
        let table = SystemTable::load().unwrap();
        let earth = table.planet("earth").unwrap();
        assert_eq!(earth.radius, 1.0);
        assert_eq!(earth.orbit_distance, 15.0);
        assert!((earth.angular_speed - 2.978).abs() < 1e-6);
        assert_eq!(earth.color, Color::from_hex(0x2b82ed));
    }

    #[test]
    fn every_planet_moves() {
        let table = SystemTable::load().unwrap();
        assert!(table.planets.iter().all(|p| p.angular_speed > 0.0 && p.radius > 0.0));
    }

    #[test]
    fn bad_color_is_config_error() {
        let json = r##"{ "sun": { "name": "sun", "radius": 5, "color": "yellow" }, "planets": [] }"##;
        let err = SystemTable::from_json(json).unwrap_err();
        assert!(matches!(err, OrreryError::Config(_)));
        assert!(err.to_string().contains("yellow"));
    }

    #[test]
    fn missing_field_is_config_error() {
        let json = r##"{ "sun": { "name": "sun", "radius": 5, "color": "#ffff00" },
                        "planets": [ { "name": "earth", "radius": 1 } ] }"##;
        assert!(matches!(SystemTable::from_json(json), Err(OrreryError::Config(_))));
    }
}
