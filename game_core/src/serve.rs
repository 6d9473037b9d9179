//! Serve-angle generation
//!
//! A fresh ball is served into one of four near-horizontal bands: slightly
//! up or down, heading left or right. The band magnitude is drawn uniformly
//! from `[atan(near / width), atan(far / width)]`, which keeps serves away
//! from degenerate near-vertical trajectories while leaving some variety.

use std::f32::consts::PI;

use rand::Rng;

use crate::{Config, GameRng};

/// Generate a serve angle in radians
pub fn serve_angle(config: &Config, rng: &mut GameRng) -> f32 {
    let magnitude = rng
        .0
        .gen_range(config.serve_angle_min()..config.serve_angle_max());

    match rng.0.gen_range(0..4u8) {
        0 => magnitude,      // rightward, up
        1 => -magnitude,     // rightward, down
        2 => PI - magnitude, // leftward, up
        _ => PI + magnitude, // leftward, down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_magnitude(angle: f32) -> f32 {
        // Distance from the nearest horizontal direction (0 or PI)
        let a = angle.rem_euclid(2.0 * PI);
        let from_right = a.min(2.0 * PI - a);
        let from_left = (a - PI).abs();
        from_right.min(from_left)
    }

    #[test]
    fn test_serve_angle_within_bands() {
        let config = Config::new();
        let mut rng = GameRng::new(42);
        let min = config.serve_angle_min();
        let max = config.serve_angle_max();

        for _ in 0..1000 {
            let angle = serve_angle(&config, &mut rng);
            let magnitude = band_magnitude(angle);
            assert!(
                magnitude >= min - 1e-6 && magnitude <= max + 1e-6,
                "serve angle {} is outside the allowed band [{}, {}]",
                angle,
                min,
                max
            );
        }
    }

    #[test]
    fn test_serve_angle_never_vertical() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let min_horizontal = config.serve_angle_max().cos();

        for _ in 0..1000 {
            let angle = serve_angle(&config, &mut rng);
            assert!(
                angle.cos().abs() >= min_horizontal - 1e-6,
                "serve angle {} is too close to vertical",
                angle
            );
        }
    }

    #[test]
    fn test_serve_angle_covers_both_directions() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut leftward = 0;
        let mut rightward = 0;

        for _ in 0..200 {
            let angle = serve_angle(&config, &mut rng);
            if angle.cos() > 0.0 {
                rightward += 1;
            } else {
                leftward += 1;
            }
        }

        assert!(leftward > 0, "some serves should head left");
        assert!(rightward > 0, "some serves should head right");
    }

    #[test]
    fn test_serve_angle_deterministic_for_seed() {
        let config = Config::new();
        let a = serve_angle(&config, &mut GameRng::new(12345));
        let b = serve_angle(&config, &mut GameRng::new(12345));
        assert_eq!(a, b);
    }
}
