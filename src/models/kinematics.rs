//! Horizontal launch model.
//!
//! A projectile released horizontally at height `h` with speed `v` stays in the
//! air for `t = sqrt(2 h / g)` and lands `d = v * t` away.
//!
//! The fitter relies on two primitive operations:
//! - `flight_time(h)`: the derivative `∂d/∂v` (the single Jacobian column)
//! - `horizontal_distance(h, v)`: the prediction (for residuals/plots)

use crate::error::{PipelineError, Result};

/// Gravitational acceleration near the Earth's surface (m/s²).
pub const G: f64 = 9.8;

/// Time of flight for a release at `height` metres.
pub fn flight_time(height: f64) -> Result<f64> {
    if !height.is_finite() || height < 0.0 {
        return Err(PipelineError::invalid(format!(
            "release height must be a finite value >= 0, got {height}"
        )));
    }
    Ok(flight_time_unchecked(height))
}

/// Predicted horizontal distance for a release at `height` with speed `velocity`.
pub fn horizontal_distance(height: f64, velocity: f64) -> Result<f64> {
    Ok(distance_for_flight_time(flight_time(height)?, velocity))
}

/// Apply `horizontal_distance` to each height, preserving order.
pub fn predict_distances(heights: &[f64], velocity: f64) -> Result<Vec<f64>> {
    heights
        .iter()
        .map(|&h| horizontal_distance(h, velocity))
        .collect()
}

/// Distance covered during `flight_time` seconds at horizontal speed `velocity`.
pub(crate) fn distance_for_flight_time(flight_time: f64, velocity: f64) -> f64 {
    velocity * flight_time
}

/// Caller guarantees `height` is finite and non-negative.
pub(crate) fn flight_time_unchecked(height: f64) -> f64 {
    (2.0 * height / G).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_height_lands_at_origin() {
        for v in [0.0, 1.0, 3.0, 250.0] {
            assert_eq!(horizontal_distance(0.0, v).unwrap(), 0.0);
        }
    }

    #[test]
    fn known_value() {
        // h = 4.9 m -> t = 1 s
        let d = horizontal_distance(4.9, 3.0).unwrap();
        assert!((d - 3.0).abs() < 1e-12, "got {d}");
    }

    #[test]
    fn negative_height_is_invalid() {
        assert!(matches!(
            horizontal_distance(-0.1, 3.0),
            Err(PipelineError::InvalidInput(_))
        ));
        assert!(matches!(flight_time(f64::NAN), Err(PipelineError::InvalidInput(_))));
    }

    #[test]
    fn broadcast_matches_scalar() {
        let heights = [0.0, 0.303, 0.5, 0.717];
        let v = 2.97;
        let many = predict_distances(&heights, v).unwrap();
        assert_eq!(many.len(), heights.len());
        for (&h, &d) in heights.iter().zip(&many) {
            assert_eq!(d, horizontal_distance(h, v).unwrap());
        }
    }

    #[test]
    fn broadcast_fails_on_any_bad_height() {
        assert!(predict_distances(&[0.3, -1.0], 2.0).is_err());
    }

    proptest! {
        #[test]
        fn monotone_in_height(h in 0.0f64..50.0, dh in 0.0f64..10.0, v in 0.0f64..100.0) {
            let a = horizontal_distance(h, v).unwrap();
            let b = horizontal_distance(h + dh, v).unwrap();
            prop_assert!(b >= a);
        }

        #[test]
        fn monotone_in_velocity(h in 0.0f64..50.0, v in 0.0f64..100.0, dv in 0.0f64..10.0) {
            let a = horizontal_distance(h, v).unwrap();
            let b = horizontal_distance(h, v + dv).unwrap();
            prop_assert!(b >= a);
        }
    }
}
