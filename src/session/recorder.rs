//! Trace recorder for capturing the live marker position
//!
//! The recorder is a two-state machine fed by the host's tick loop. It
//! accumulates elapsed time from tick deltas, so it assumes no fixed
//! sampling rate; samples land at whatever cadence the host drives.

use std::time::Duration;

use crate::types::Sample;

use super::types::{CaptureState, Recording};

/// Minimum number of samples a capture must hold to be committed.
/// Shorter captures are discarded silently.
pub const MIN_COMMIT_SAMPLES: usize = 2;

/// Trace recorder capturing the live input into a sample buffer
#[derive(Debug, Default)]
pub struct TraceRecorder {
    /// Current capture state
    state: CaptureState,
    /// Samples captured so far
    buffer: Vec<Sample>,
    /// Capture time accumulated from tick deltas
    elapsed: Duration,
}

impl TraceRecorder {
    /// Create a new idle recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Check if capturing
    pub fn is_capturing(&self) -> bool {
        self.state.is_capturing()
    }

    /// The live capture buffer
    pub fn buffer(&self) -> &[Sample] {
        &self.buffer
    }

    /// Number of samples captured so far
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Capture time accumulated so far
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Start a new capture. No-op while already capturing.
    pub fn start(&mut self) {
        if self.is_capturing() {
            tracing::debug!("Capture already in progress, ignoring start");
            return;
        }
        self.buffer.clear();
        self.elapsed = Duration::ZERO;
        self.state = CaptureState::Capturing;
        tracing::debug!("Capture started");
    }

    /// Record one tick of the live input position.
    ///
    /// No-op when idle. A tick with a zero delta is skipped: sample
    /// timestamps must be strictly increasing.
    pub fn tick(&mut self, delta: Duration, position: f64) {
        if !self.is_capturing() || delta.is_zero() {
            return;
        }
        self.elapsed += delta;
        self.buffer.push(Sample::new(self.elapsed, position));
    }

    /// Stop capturing and commit the buffer as a recording.
    ///
    /// Returns `None` without error when idle, or when the buffer holds
    /// fewer than [`MIN_COMMIT_SAMPLES`] samples (the capture is discarded
    /// silently). The committed recording's active sequence is derived with
    /// `smoothing_window`.
    pub fn stop(&mut self, smoothing_window: usize) -> Option<Recording> {
        if !self.is_capturing() {
            return None;
        }
        self.state = CaptureState::Idle;

        if self.buffer.len() < MIN_COMMIT_SAMPLES {
            tracing::debug!(
                "Discarding capture with {} sample(s), below commit threshold",
                self.buffer.len()
            );
            self.buffer.clear();
            return None;
        }

        let raw = std::mem::take(&mut self.buffer);
        let recording = Recording::commit(raw, smoothing_window);
        tracing::info!(
            "Committed recording {} ({} samples, {:.2}s)",
            recording.id(),
            recording.len(),
            recording.duration().as_secs_f64()
        );
        Some(recording)
    }

    /// Abort an in-flight capture, discarding the buffer
    pub fn cancel(&mut self) {
        if self.is_capturing() {
            tracing::debug!("Capture cancelled, discarding {} sample(s)", self.buffer.len());
        }
        self.buffer.clear();
        self.elapsed = Duration::ZERO;
        self.state = CaptureState::Idle;
    }
}
