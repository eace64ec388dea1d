//! Score normalization helpers.

/// Clamp `value` into `[floor, 1.0]`; non-finite values map to the floor.
pub fn clamp_score(value: f64, floor: f64) -> f64 {
    if !value.is_finite() {
        return floor;
    }
    value.max(floor).min(1.0)
}

/// Round to three decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-3.0, 0.1), 0.1);
        assert_eq!(clamp_score(0.5, 0.1), 0.5);
        assert_eq!(clamp_score(7.0, 0.1), 1.0);
        assert_eq!(clamp_score(f64::NAN, 0.1), 0.1);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.123_456), 0.123);
        assert_eq!(round3(0.9996), 1.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[0.25, 0.75]), Some(0.5));
    }

    proptest! {
        #[test]
        fn prop_clamped_scores_stay_in_range(value in -1e6f64..1e6, floor in 0.0f64..=1.0) {
            let clamped = clamp_score(value, floor);
            prop_assert!(clamped >= floor && clamped <= 1.0);
        }
    }
}
