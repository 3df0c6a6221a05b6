//! Nearest-curve selection
//!
//! Turns a plot-space query point (time, position) into the index of the
//! recording whose displayed curve passes closest to it, under a tolerance.

use std::time::Duration;

use crate::analysis::interp::value_at;

use super::types::RecordingSet;

/// Find the recording whose active curve is nearest to the query point.
///
/// Recordings are scanned in insertion order and compared by the absolute
/// difference between their interpolated position at `t` and `x`. A
/// candidate only replaces the current best when its difference is strictly
/// smaller, so ties keep the earlier (lower-index) recording. Returns
/// `None` when no difference falls strictly below `tolerance`.
///
/// A negative tolerance is clamped to zero, which rejects every candidate.
pub fn select_nearest(
    set: &RecordingSet,
    t: Duration,
    x: f64,
    tolerance: f64,
) -> Option<usize> {
    let mut min_diff = tolerance.max(0.0);
    let mut best = None;

    for (index, recording) in set.iter().enumerate() {
        let Some(value) = value_at(recording.active(), t) else {
            continue;
        };
        let diff = (value - x).abs();
        if diff < min_diff {
            min_diff = diff;
            best = Some(index);
        }
    }

    best
}
