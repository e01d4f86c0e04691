//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose `+ 360` rounds to exactly 360.0 fold to 0.0,
/// so the result never equals the modulus.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_never_reaches_modulus() {
        for &x in &[-1e-15, -1e-300, -f64::EPSILON, 359.999_999_999_999_94] {
            let r = normalize_360(x);
            assert!((0.0..360.0).contains(&r), "normalize_360({x}) = {r}");
        }
    }
}
