//! Time-to-position interpolation over a sample sequence
//!
//! Position queries are linearly interpolated between the two samples
//! bracketing the query time, with the ends clamped to the first and last
//! sample positions. Querying an empty sequence yields `None`, which is an
//! explicit invalid-result signal distinct from the clamped-boundary cases.

use crate::types::Sample;
use std::time::Duration;

/// Interpolated position of a sample sequence at time `t`.
///
/// - `None` for an empty sequence
/// - `first.x` for `t <= first.t`, `last.x` for `t >= last.t`
/// - linear interpolation between the bracketing pair otherwise
///
/// Duplicate timestamps in the bracketing pair return the earlier sample's
/// position instead of dividing by a zero time span.
pub fn value_at(samples: &[Sample], t: Duration) -> Option<f64> {
    let first = samples.first()?;
    let last = samples.last()?;

    if t <= first.t {
        return Some(first.x);
    }
    if t >= last.t {
        return Some(last.x);
    }

    // Samples are time-sorted, so binary search for the bracketing pair:
    // lo.t < t <= hi.t with idx in [1, n-1].
    let idx = samples.partition_point(|s| s.t < t);
    let lo = samples[idx - 1];
    let hi = samples[idx];

    // Exact hits reproduce the stored position bit-for-bit, and with
    // duplicate timestamps the earliest sample at t wins.
    if hi.t == t {
        return Some(hi.x);
    }

    let span = hi.secs() - lo.secs();
    if span <= 0.0 {
        return Some(lo.x);
    }

    let ratio = (t.as_secs_f64() - lo.secs()) / span;
    Some(lo.x + ratio * (hi.x - lo.x))
}

/// Evaluate a sample sequence on a fixed time grid from zero to its last
/// timestamp (inclusive), stepping by `interval`.
///
/// The renderer uses this to place evenly spaced trace markers along a
/// recording regardless of the capture cadence. Returns an empty vector for
/// an empty sequence or a zero interval.
pub fn resample(samples: &[Sample], interval: Duration) -> Vec<Sample> {
    let Some(last) = samples.last() else {
        return Vec::new();
    };
    if interval.is_zero() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut t = Duration::ZERO;
    while t <= last.t {
        if let Some(x) = value_at(samples, t) {
            out.push(Sample { t, x });
        }
        t += interval;
    }
    out
}
