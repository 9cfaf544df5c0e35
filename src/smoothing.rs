//! Exponential angle smoothing.

use crate::constants::{SMOOTHING_DIVISOR, SMOOTHING_HISTORY_WEIGHT};

/// Exponential smoother for one angle channel.
///
/// Blends each new sample into the accumulated history with a fixed
/// 11/12 history, 1/12 sample weighting, which suppresses per-frame
/// landmark jitter while still converging on a held pose.
///
/// Invariant: the stored value is always finite. A frame whose raw
/// sample is missing or non-finite leaves the previous value unchanged;
/// a corrupted stored value is reset to zero.
#[derive(Debug, Clone, Copy)]
pub struct AngleSmoother {
    value: f64,
}

impl AngleSmoother {
    /// Create a smoother starting from zero
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Blend in this frame's raw sample, if it produced one.
    ///
    /// Returns the updated smoothed value, which is always finite.
    pub fn update(&mut self, raw: Option<f64>) -> f64 {
        if let Some(sample) = raw.filter(|s| s.is_finite()) {
            self.value = (self.value * SMOOTHING_HISTORY_WEIGHT + sample) / SMOOTHING_DIVISOR;
        }
        if !self.value.is_finite() {
            self.value = 0.0;
        }
        self.value
    }

    /// Current smoothed value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl Default for AngleSmoother {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_blended_against_zero() {
        let mut smoother = AngleSmoother::new();
        let value = smoother.update(Some(12.0));
        assert!((value - 1.0).abs() < 1e-12); // (0 * 11 + 12) / 12
    }

    #[test]
    fn converges_monotonically_to_constant_input() {
        let mut smoother = AngleSmoother::new();
        let target = 24.0;
        let mut previous = smoother.value();
        for _ in 0..200 {
            let value = smoother.update(Some(target));
            // Approaches the target from below, never overshoots
            assert!(value > previous);
            assert!(value <= target);
            previous = value;
        }
        assert!((previous - target).abs() < 1e-3);
    }

    #[test]
    fn missing_sample_keeps_previous_value() {
        let mut smoother = AngleSmoother::new();
        smoother.update(Some(12.0));
        let held = smoother.value();
        assert_eq!(smoother.update(None), held);
    }

    #[test]
    fn non_finite_sample_keeps_previous_value() {
        let mut smoother = AngleSmoother::new();
        smoother.update(Some(12.0));
        let held = smoother.value();
        assert_eq!(smoother.update(Some(f64::NAN)), held);
        assert_eq!(smoother.update(Some(f64::INFINITY)), held);
    }

    #[test]
    fn output_is_always_finite() {
        let mut smoother = AngleSmoother::new();
        for raw in [Some(10.0), Some(f64::NAN), None, Some(-5.0), Some(f64::NEG_INFINITY)] {
            assert!(smoother.update(raw).is_finite());
        }
    }
}
