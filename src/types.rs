//! Core data types for motiontrace-rs
//!
//! This module contains the fundamental data structures used throughout
//! the engine for representing position samples.
//!
//! # Main Types
//!
//! - [`Sample`] - A single timestamped marker position
//!
//! # Position Range
//!
//! Marker positions live on a normalized one-dimensional axis spanning
//! [`POSITION_MIN`] to [`POSITION_MAX`]. Positions are clamped into this
//! range when a sample is constructed (capture time); queries against
//! already-stored samples never clamp.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lower bound of the normalized position axis
pub const POSITION_MIN: f64 = -1.0;

/// Upper bound of the normalized position axis
pub const POSITION_MAX: f64 = 1.0;

/// A single position sample with timestamp
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time offset from the start of the capture
    pub t: Duration,
    /// Marker position on the normalized axis, within [-1, 1]
    pub x: f64,
}

impl Sample {
    /// Create a new sample, clamping the position into the normalized range.
    ///
    /// A NaN position collapses to the axis center (0.0) so that malformed
    /// input never leaks into downstream math.
    pub fn new(t: Duration, x: f64) -> Self {
        let x = if x.is_nan() {
            0.0
        } else {
            x.clamp(POSITION_MIN, POSITION_MAX)
        };
        Self { t, x }
    }

    /// Time offset in seconds, for interpolation math
    #[inline]
    pub fn secs(&self) -> f64 {
        self.t.as_secs_f64()
    }
}
