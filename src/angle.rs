//! Angle utilities shared by the thinning pass and the glyph classifier.
//!
//! Gradient angles are measured as `atan2(gx, gy)`, so `0` points along the
//! vertical axis. Both consumers work in degrees on `[0, 360)`.

/// Converts radians in `(-π, π]` to degrees, wraps negatives into `[0, 360)`
/// and then adds `rotation` (in degrees, expected in `[0, 360)`), wrapping once
/// more so the result stays below 360.
#[inline]
pub fn rad_to_deg(angle: f64, rotation: f64) -> f64 {
    let mut deg = angle * 180.0 / std::f64::consts::PI;
    if deg < 0.0 {
        deg += 360.0;
    }
    deg += rotation;
    if deg >= 360.0 {
        deg -= 360.0;
    }
    deg
}

/// Gradient angle convention used across the crate.
#[inline]
pub fn gradient_angle(gx: f64, gy: f64) -> f64 {
    gx.atan2(gy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn negative_angles_wrap() {
        assert!(approx_eq(rad_to_deg(-FRAC_PI_2, 0.0), 270.0));
        assert!(approx_eq(rad_to_deg(PI, 0.0), 180.0));
    }

    #[test]
    fn rotation_wraps_past_full_turn() {
        assert!(approx_eq(rad_to_deg(-FRAC_PI_2, 90.0), 0.0));
        assert!(approx_eq(rad_to_deg(PI, 90.0), 270.0));
        assert!(approx_eq(rad_to_deg(0.0, 90.0), 90.0));
    }

    #[test]
    fn result_stays_in_range() {
        for i in -1000..=1000 {
            let a = PI * f64::from(i) / 1000.0;
            for rot in [0.0, 90.0] {
                let d = rad_to_deg(a, rot);
                assert!((0.0..360.0).contains(&d), "a={a} rot={rot} -> {d}");
            }
        }
    }

    #[test]
    fn zero_angle_points_down_the_vertical_axis() {
        // Pure vertical gradient.
        assert!(approx_eq(gradient_angle(0.0, 1.0), 0.0));
        // Pure horizontal gradient.
        assert!(approx_eq(gradient_angle(1.0, 0.0), FRAC_PI_2));
    }
}
