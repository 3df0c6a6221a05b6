//! Central-difference velocity estimation
//!
//! Velocity is estimated over a fixed sample-count half-window rather than
//! a fixed time span, so the estimate adapts to whatever capture cadence
//! the host drove.

use crate::config::DEFAULT_VELOCITY_HALF_WINDOW;
use crate::types::Sample;
use std::time::Duration;

/// Velocity estimator using central differences over a sample-count
/// half-window.
#[derive(Debug, Clone, Copy)]
pub struct VelocityEstimator {
    half_window: usize,
}

impl Default for VelocityEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityEstimator {
    /// Create an estimator with the default half-window
    pub fn new() -> Self {
        Self {
            half_window: DEFAULT_VELOCITY_HALF_WINDOW,
        }
    }

    /// Create an estimator with a specific half-window
    pub fn with_half_window(half_window: usize) -> Self {
        Self { half_window }
    }

    /// Get the configured half-window
    pub fn half_window(&self) -> usize {
        self.half_window
    }

    /// Estimated velocity at sample index `i`, in position units per second.
    ///
    /// The half-window shrinks near the sequence boundaries; where fewer
    /// than one sample fits on either side the velocity is defined as 0.0
    /// (a flat-edge policy, not a missing value). A zero time span across
    /// the window also yields 0.0. Out-of-range indices yield 0.0.
    pub fn velocity_at_index(&self, samples: &[Sample], i: usize) -> f64 {
        let n = samples.len();
        if n == 0 || i >= n {
            return 0.0;
        }

        let h = self.half_window.min(i).min(n - 1 - i);
        if h < 1 {
            return 0.0;
        }

        let ahead = samples[i + h];
        let behind = samples[i - h];
        let span = ahead.secs() - behind.secs();
        if span <= 0.0 {
            return 0.0;
        }

        (ahead.x - behind.x) / span
    }

    /// Estimated velocity at time `t`, in position units per second.
    ///
    /// Unlike the position query, this is NOT interpolated: it evaluates
    /// [`Self::velocity_at_index`] at the first sample whose timestamp is at
    /// or after `t` (the last sample when `t` is past the end). Downstream
    /// tangent and hover displays depend on this nearest-sample policy, so
    /// it is deliberate and must not be "fixed" to match the position
    /// query's interpolation.
    ///
    /// Returns `None` for an empty sequence.
    pub fn velocity_at_time(&self, samples: &[Sample], t: Duration) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }

        let idx = samples
            .partition_point(|s| s.t < t)
            .min(samples.len() - 1);
        Some(self.velocity_at_index(samples, idx))
    }
}
