//! Centered moving-average smoothing
//!
//! The smoother derives a recording's active (displayed) sequence from its
//! raw capture. It is a pure function of the raw samples and the window
//! width: re-deriving with the same inputs always yields the same output,
//! so the active sequence can be recomputed from raw whenever the window
//! changes without accumulating drift.
//!
//! Smoothing is NOT idempotent. Applying the same window to an already
//! smoothed sequence keeps flattening it, so callers must always smooth
//! from the raw sequence, never from a previous result.

use crate::types::Sample;

/// Smooth a sample sequence with a centered moving average of width
/// `window`.
///
/// A window of 0 or 1 returns a value-equal copy of the input. For wider
/// windows, each sample's position becomes the mean of the raw positions
/// within `window / 2` indices on either side; the window shrinks at the
/// sequence boundaries rather than padding or wrapping. Timestamps are
/// preserved.
pub fn smooth(raw: &[Sample], window: usize) -> Vec<Sample> {
    if window <= 1 {
        return raw.to_vec();
    }

    let n = raw.len();
    let half = window / 2;

    raw.iter()
        .enumerate()
        .map(|(i, s)| {
            let lo = i.saturating_sub(half);
            let hi = (i + half).min(n - 1);
            let sum: f64 = raw[lo..=hi].iter().map(|s| s.x).sum();
            Sample {
                t: s.t,
                x: sum / (hi - lo + 1) as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample(t_ms: u64, x: f64) -> Sample {
        Sample::new(Duration::from_millis(t_ms), x)
    }

    fn positions(samples: &[Sample]) -> Vec<f64> {
        samples.iter().map(|s| s.x).collect()
    }

    #[test]
    fn test_window_zero_and_one_are_identity() {
        let raw = vec![sample(0, 0.1), sample(100, -0.4), sample(200, 0.9)];
        assert_eq!(positions(&smooth(&raw, 0)), positions(&raw));
        assert_eq!(positions(&smooth(&raw, 1)), positions(&raw));
    }

    #[test]
    fn test_centered_average() {
        // Window 3 at the middle index averages all three raw positions.
        let raw = vec![sample(0, 0.0), sample(1000, 2.0), sample(2000, 0.0)];
        let active = smooth(&raw, 3);
        assert!((active[1].x - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_window_shrinks() {
        let raw = vec![sample(0, 0.0), sample(1000, 2.0), sample(2000, 0.0)];
        let active = smooth(&raw, 3);
        // Index 0 only sees indices 0..=1, index 2 only 1..=2.
        assert!((active[0].x - 1.0).abs() < 1e-9);
        assert!((active[2].x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_timestamps_preserved() {
        let raw = vec![sample(3, 0.5), sample(77, -0.5), sample(400, 0.25)];
        let active = smooth(&raw, 5);
        for (r, a) in raw.iter().zip(active.iter()) {
            assert_eq!(r.t, a.t);
        }
    }

    #[test]
    fn test_deterministic_rederivation() {
        let raw: Vec<Sample> = (0..50)
            .map(|i| sample(i * 20, ((i as f64) * 0.37).sin()))
            .collect();
        assert_eq!(positions(&smooth(&raw, 7)), positions(&smooth(&raw, 7)));
    }

    #[test]
    fn test_not_idempotent() {
        let raw = vec![
            sample(0, 1.0),
            sample(100, -1.0),
            sample(200, 1.0),
            sample(300, -1.0),
            sample(400, 1.0),
        ];
        let once = smooth(&raw, 3);
        let twice = smooth(&once, 3);
        assert_ne!(positions(&once), positions(&twice));
    }

    #[test]
    fn test_empty_input() {
        assert!(smooth(&[], 5).is_empty());
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_smoothed_values_stay_in_range(
            xs in prop::collection::vec(-1.0f64..1.0, 1..60),
            window in 0usize..12,
        ) {
            let raw: Vec<Sample> = xs
                .iter()
                .enumerate()
                .map(|(i, &x)| sample(i as u64 * 10, x))
                .collect();

            for s in smooth(&raw, window) {
                prop_assert!(s.x >= -1.0 && s.x <= 1.0);
            }
        }

        #[test]
        fn test_small_windows_are_identity(
            xs in prop::collection::vec(-1.0f64..1.0, 1..60),
            window in 0usize..2,
        ) {
            let raw: Vec<Sample> = xs
                .iter()
                .enumerate()
                .map(|(i, &x)| sample(i as u64 * 10, x))
                .collect();

            let active = smooth(&raw, window);
            prop_assert_eq!(positions(&active), positions(&raw));
        }

        #[test]
        fn test_constant_signal_is_fixed_point(
            x in -1.0f64..1.0,
            len in 1usize..40,
            window in 2usize..10,
        ) {
            let raw: Vec<Sample> = (0..len).map(|i| sample(i as u64 * 10, x)).collect();
            for s in smooth(&raw, window) {
                prop_assert!((s.x - x).abs() < 1e-9);
            }
        }
    }
}
