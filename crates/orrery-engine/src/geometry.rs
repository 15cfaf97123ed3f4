//! Procedural point generation for guides and backdrops.

use glam::Vec3;
use crate::core::rng::Rng;

/// Closed circle in the XZ plane centered at the origin.
///
/// Samples `segments + 1` points at equal angular steps from 0 to 2π
/// inclusive, so the last point repeats the first.
pub fn circle_xz(radius: f32, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let angle = (i as f64 / segments as f64) * std::f64::consts::TAU;
            Vec3::new(
                (angle.cos() * radius as f64) as f32,
                0.0,
                (angle.sin() * radius as f64) as f32,
            )
        })
        .collect()
}

/// `count` points with each coordinate uniform in [-side / 2, side / 2].
pub fn random_points_in_cube(rng: &mut Rng, count: usize, side: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let x = rng.spread(side);
            let y = rng.spread(side);
            let z = rng.spread(side);
            Vec3::new(x, y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_is_closed_and_flat() {
        let pts = circle_xz(15.0, 360);
        assert_eq!(pts.len(), 361);
        assert!(pts[0].distance(pts[360]) < 1e-4);
        for p in &pts {
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 15.0).abs() < 1e-4);
        }
    }

    #[test]
    fn circle_starts_on_positive_x() {
        let pts = circle_xz(8.0, 4);
        assert!((pts[0] - Vec3::new(8.0, 0.0, 0.0)).length() < 1e-5);
        assert!((pts[1] - Vec3::new(0.0, 0.0, 8.0)).length() < 1e-5);
    }

    #[test]
    fn cube_points_within_bounds() {
        let mut rng = Rng::new(11);
        let pts = random_points_in_cube(&mut rng, 1000, 500.0);
        assert_eq!(pts.len(), 1000);
        for p in &pts {
            for v in [p.x, p.y, p.z] {
                assert!((-250.0..=250.0).contains(&v));
            }
        }
    }

    #[test]
    fn cube_points_are_seed_deterministic() {
        let a = random_points_in_cube(&mut Rng::new(5), 10, 2.0);
        let b = random_points_in_cube(&mut Rng::new(5), 10, 2.0);
        assert_eq!(a, b);
    }
}
