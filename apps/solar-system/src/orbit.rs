//! Circular-orbit kinematics: pure math, no engine state.
//!
//! Angles are kept in f64 and never wrapped; cos/sin of the accumulated
//! value stays accurate for far longer than a page stays open.

use glam::Vec3;

/// Global slow-down applied to every planet's angular speed.
pub const ORBIT_SPEED_FACTOR: f64 = 0.5;

/// Angle after `dt` seconds at `angular_speed` rad/s scaled by `multiplier`.
pub fn advance_angle(angle: f64, dt: f32, angular_speed: f32, multiplier: f32) -> f64 {
    angle + dt as f64 * angular_speed as f64 * multiplier as f64 * ORBIT_SPEED_FACTOR
}

/// Position on a circle of radius `distance` in the XZ plane.
pub fn orbital_position(angle: f64, distance: f32) -> Vec3 {
    let d = distance as f64;
    Vec3::new((d * angle.cos()) as f32, 0.0, (d * angle.sin()) as f32)
}

/// Self-rotation increment about the vertical axis for one tick.
pub fn spin_delta(dt: f32, multiplier: f32) -> f32 {
    dt * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn advance_applies_half_speed() {
        let a = advance_angle(0.0, 1.0, 2.0, 1.0);
        assert!((a - 1.0).abs() < 1e-12);
    }

    #[test]
    fn advance_scales_with_multiplier() {
        let base = advance_angle(0.3, 0.016, 2.978, 1.0) - 0.3;
        let doubled = advance_angle(0.3, 0.016, 2.978, 2.0) - 0.3;
        assert!((doubled - 2.0 * base).abs() < 1e-12);
    }

    #[test]
    fn zero_multiplier_freezes() {
        assert_eq!(advance_angle(1.25, 0.5, 4.787, 0.0), 1.25);
        assert_eq!(spin_delta(0.5, 0.0), 0.0);
    }

    #[test]
    fn position_follows_cos_sin() {
        let p = orbital_position(PI / 2.0, 15.0);
        assert!(p.x.abs() < 1e-5);
        assert_eq!(p.y, 0.0);
        assert!((p.z - 15.0).abs() < 1e-5);

        let p = orbital_position(0.0, 8.0);
        assert_eq!(p, Vec3::new(8.0, 0.0, 0.0));
    }

    #[test]
    fn large_angles_stay_on_the_circle() {
        let p = orbital_position(1.0e7, 50.0);
        assert!((p.length() - 50.0).abs() < 1e-3);
    }
}
