//! Helper functions

use std::f64::consts::PI;
use crate::kinematic_traits::Joints;

/// Below this magnitude both arguments of [safe_atan2] are treated as zero, and this is
/// also the tolerance used by the analytic solver for clamping and singularity checks.
pub const EPSILON: f64 = 1e-6;

/// Checks if all elements in the array are finite
pub fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Wraps the angle into (-PI, PI].
pub fn normalize_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let mut wrapped = angle % two_pi;
    if wrapped > PI {
        wrapped -= two_pi;
    } else if wrapped <= -PI {
        wrapped += two_pi;
    }
    wrapped
}

/// Normalizes all six joint values, see [normalize_angle].
pub fn normalize_joints(qs: &Joints) -> Joints {
    qs.map(normalize_angle)
}

/// atan2 that returns 0 rather than an arbitrary direction when both arguments
/// are (nearly) zero.
pub fn safe_atan2(y: f64, x: f64) -> f64 {
    if x.abs() < EPSILON && y.abs() < EPSILON {
        return 0.0;
    }
    y.atan2(x)
}

/// acos saturating at the ends of its domain instead of returning NaN.
pub fn safe_acos(x: f64) -> f64 {
    if x >= 1.0 {
        0.0
    } else if x <= -1.0 {
        PI
    } else {
        x.acos()
    }
}

/// Allows to specify joint values in degrees (converts to radians)
pub fn as_radians(degrees: [i32; 6]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Convert joints that are array of f64's in radians to
/// array of f64's in degrees
pub fn to_degrees(angles: &Joints) -> [f64; 6] {
    angles.map(f64::to_degrees)
}

/// formatting for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.4})", x.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_with_all_finite() {
        let qs = [0.0, 1.0, -1.0, 0.5, -0.5, PI];
        assert!(is_valid(&qs));
    }

    #[test]
    fn test_is_valid_with_nan() {
        let qs = [0.0, f64::NAN, 1.0, -1.0, 0.5, -0.5];
        assert!(!is_valid(&qs));
    }

    #[test]
    fn test_is_valid_with_infinity() {
        let qs = [0.0, f64::INFINITY, 1.0, -1.0, 0.5, -0.5];
        assert!(!is_valid(&qs));
    }

    #[test]
    fn test_normalize_angle_range() {
        assert_eq!(normalize_angle(0.5), 0.5);
        assert_eq!(normalize_angle(PI), PI);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(-5.0 * PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(7.0 * PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_safe_atan2_origin() {
        assert_eq!(safe_atan2(0.0, 0.0), 0.0);
        assert_eq!(safe_atan2(1e-9, -1e-9), 0.0);
        assert!((safe_atan2(1.0, 0.0) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_safe_acos_saturates() {
        assert_eq!(safe_acos(1.0000001), 0.0);
        assert_eq!(safe_acos(-1.0000001), PI);
        assert!((safe_acos(0.0) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_degree_helpers() {
        let qs = as_radians([30, 45, -30, 0, 60, 0]);
        let back = to_degrees(&qs);
        assert!((back[0] - 30.0).abs() < 1e-9);
        assert!((back[2] + 30.0).abs() < 1e-9);
        assert_eq!(deg(&0.0), "0");
        assert_eq!(deg(&(-90.0_f64).to_radians()), "deg(-90.0000)");
    }
}
