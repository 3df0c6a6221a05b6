//! Top-level trace engine
//!
//! [`TraceEngine`] is the explicit session object hosts drive: it owns the
//! recording set, the recorder, the playback clock and the current
//! selection, and exposes every operation the rendering/input layer needs.
//! Nothing in the engine is global, so independent engines (and tests) can
//! coexist freely.
//!
//! # Tick Model
//!
//! The engine never subscribes to events or reads wall clocks. The host
//! scheduler calls [`TraceEngine::advance`] once per frame with the elapsed
//! delta; while capturing, the engine pulls the marker position from the
//! injected [`InputSource`], and while playing it moves the playback
//! cursor. All derived state is updated synchronously inside the call.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::analysis::interp::{resample, value_at};
use crate::analysis::velocity::VelocityEstimator;
use crate::config::{EngineSettings, SettingsStore};
use crate::error::{MotionTraceError, Result, ResultExt};
use crate::session::{
    select_nearest, CaptureState, PlaybackClock, Recording, RecordingSet, TraceRecorder,
};
use crate::types::Sample;

/// Accessor for the live marker position during capture.
///
/// The host's input layer (pointer, keyboard, whatever it wires up) owns
/// the marker; the engine only samples it once per tick while capturing.
pub trait InputSource {
    /// The marker's current position on the normalized axis
    fn current_value(&self) -> f64;
}

/// Input source backed by a shared cell the host writes into.
///
/// Cloning yields another handle onto the same value, which is the usual
/// arrangement: the host keeps one handle next to its pointer handling and
/// gives the other to the engine.
#[derive(Debug, Clone, Default)]
pub struct SharedInput {
    value: Rc<Cell<f64>>,
}

impl SharedInput {
    /// Create a shared input holding an initial position
    pub fn new(initial: f64) -> Self {
        Self {
            value: Rc::new(Cell::new(initial)),
        }
    }

    /// Update the marker position
    pub fn set(&self, x: f64) {
        self.value.set(x);
    }

    /// Read the marker position
    pub fn get(&self) -> f64 {
        self.value.get()
    }
}

impl InputSource for SharedInput {
    fn current_value(&self) -> f64 {
        self.value.get()
    }
}

/// The trace engine: recording set, capture, playback and selection state
pub struct TraceEngine {
    settings: EngineSettings,
    input: Box<dyn InputSource>,
    recordings: RecordingSet,
    recorder: TraceRecorder,
    clock: PlaybackClock,
    velocity: VelocityEstimator,
    selected: Option<usize>,
}

impl TraceEngine {
    /// Build an engine from an injected settings store and input source.
    ///
    /// The store is read exactly once, here; a failing store logs a warning
    /// and falls back to defaults rather than refusing to start.
    pub fn new(store: &dyn SettingsStore, input: Box<dyn InputSource>) -> Self {
        let settings = store
            .load()
            .context("Loading engine settings")
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                EngineSettings::default()
            })
            .sanitized();

        let velocity = VelocityEstimator::with_half_window(settings.velocity_half_window);
        Self {
            settings,
            input,
            recordings: RecordingSet::new(),
            recorder: TraceRecorder::new(),
            clock: PlaybackClock::new(),
            velocity,
            selected: None,
        }
    }

    /// The settings the engine was built with
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    // ==================== Tick ====================

    /// Advance the engine by one host tick.
    ///
    /// While capturing this samples the live input; while playing it moves
    /// the playback cursor (pausing at the end of the recording). The two
    /// states are mutually exclusive by construction.
    pub fn advance(&mut self, delta: Duration) {
        if self.recorder.is_capturing() {
            let position = self.input.current_value();
            self.recorder.tick(delta, position);
        } else if self.clock.is_playing() {
            self.clock.advance(delta);
        }
    }

    // ==================== Capture ====================

    /// Begin capturing the live input.
    ///
    /// Refused while playback is running or a capture is already in
    /// progress. Starting a capture deselects any recording (and thereby
    /// resets the playback clock), matching the plot going "live".
    pub fn start_capture(&mut self) {
        if self.clock.is_playing() {
            tracing::warn!("Refusing to start capture while playback is active");
            return;
        }
        if self.recorder.is_capturing() {
            return;
        }
        self.select_recording(None);
        self.recorder.start();
    }

    /// Stop capturing and commit the buffer if it is long enough.
    ///
    /// A committed recording is appended to the set and becomes the
    /// selection; a too-short capture is discarded silently. Returns the
    /// index of the committed recording, if any.
    pub fn stop_capture(&mut self) -> Option<usize> {
        let recording = self.recorder.stop(self.settings.smoothing_window)?;
        let index = self.recordings.push(recording);
        self.selected = Some(index);
        // The new selection starts with its cursor at zero.
        let duration = self.recordings.get(index).map(|r| r.duration())?;
        self.clock.load(duration);
        tracing::info!("Recording committed and selected at index {}", index);
        Some(index)
    }

    /// Current capture state
    pub fn capture_state(&self) -> CaptureState {
        self.recorder.state()
    }

    /// Check if a capture is in progress
    pub fn is_capturing(&self) -> bool {
        self.recorder.is_capturing()
    }

    /// Samples captured so far in the live buffer
    pub fn live_buffer(&self) -> &[Sample] {
        self.recorder.buffer()
    }

    /// Length of the live capture buffer
    pub fn live_buffer_len(&self) -> usize {
        self.recorder.buffer_len()
    }

    /// Interpolated position of the live capture buffer at time `t`
    pub fn live_value_at(&self, t: Duration) -> Option<f64> {
        value_at(self.recorder.buffer(), t)
    }

    // ==================== Recording set ====================

    /// Read-only view of all committed recordings in insertion order
    pub fn recordings(&self) -> &[Recording] {
        self.recordings.as_slice()
    }

    /// Duration of the longest committed recording
    pub fn max_duration(&self) -> Duration {
        self.recordings.max_duration()
    }

    /// Re-derive a recording's active sequence with a new smoothing window
    pub fn set_smoothing_window(&mut self, index: usize, window: usize) -> Result<()> {
        let len = self.recordings.len();
        let recording = self
            .recordings
            .get_mut(index)
            .ok_or(MotionTraceError::InvalidRecording { index, len })?;
        recording.set_smoothing_window(window);
        tracing::debug!("Recording {} re-smoothed with window {}", index, window);
        Ok(())
    }

    /// Delete the recording at `index`.
    ///
    /// Deleting the selected recording clears the selection and resets the
    /// playback clock; a selection after the deleted index shifts down with
    /// the set.
    pub fn delete_recording(&mut self, index: usize) -> Result<()> {
        let len = self.recordings.len();
        self.recordings
            .remove(index)
            .ok_or(MotionTraceError::InvalidRecording { index, len })?;

        match self.selected {
            Some(sel) if sel == index => {
                self.selected = None;
                self.clock.unload();
            }
            Some(sel) if sel > index => {
                self.selected = Some(sel - 1);
            }
            _ => {}
        }
        tracing::info!("Deleted recording at index {}", index);
        Ok(())
    }

    /// Delete every recording, abort any capture and reset playback
    pub fn clear_all(&mut self) {
        self.recorder.cancel();
        self.recordings.clear();
        self.selected = None;
        self.clock.unload();
        tracing::info!("Cleared all recordings");
    }

    // ==================== Selection ====================

    /// Currently selected recording index
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Currently selected recording
    pub fn selected_recording(&self) -> Option<&Recording> {
        self.selected.and_then(|i| self.recordings.get(i))
    }

    /// Select a recording by index, or deselect with `None`.
    ///
    /// An out-of-range index leaves the selection unchanged. Any change of
    /// selection resets the playback clock to the start of the newly
    /// selected recording (or unloads it on deselection).
    pub fn select_recording(&mut self, selection: Option<usize>) {
        if let Some(index) = selection {
            if index >= self.recordings.len() {
                tracing::warn!("Selection index {} out of range, ignoring", index);
                return;
            }
        }
        if selection == self.selected {
            return;
        }

        self.selected = selection;
        match selection {
            Some(index) => {
                let duration = self
                    .recordings
                    .get(index)
                    .map(|r| r.duration())
                    .unwrap_or(Duration::ZERO);
                self.clock.load(duration);
                tracing::debug!("Selected recording at index {}", index);
            }
            None => {
                self.clock.unload();
                tracing::debug!("Selection cleared");
            }
        }
    }

    /// Select the recording nearest to a plot query point, using the
    /// configured tolerance. Applies the result: a miss deselects.
    pub fn select_nearest(&mut self, t: Duration, x: f64) -> Option<usize> {
        self.select_nearest_with_tolerance(t, x, self.settings.select_tolerance)
    }

    /// Select the recording nearest to a plot query point under an explicit
    /// tolerance. Applies the result: a miss deselects.
    pub fn select_nearest_with_tolerance(
        &mut self,
        t: Duration,
        x: f64,
        tolerance: f64,
    ) -> Option<usize> {
        let hit = select_nearest(&self.recordings, t, x, tolerance);
        self.select_recording(hit);
        hit
    }

    // ==================== Queries ====================

    /// Interpolated position of a committed recording's active sequence
    pub fn value_at(&self, index: usize, t: Duration) -> Option<f64> {
        self.recordings
            .get(index)
            .and_then(|r| value_at(r.active(), t))
    }

    /// Estimated velocity of a committed recording's active sequence.
    ///
    /// Nearest-sample semantics, not interpolated; see
    /// [`VelocityEstimator::velocity_at_time`].
    pub fn velocity_at_time(&self, index: usize, t: Duration) -> Option<f64> {
        self.recordings
            .get(index)
            .and_then(|r| self.velocity.velocity_at_time(r.active(), t))
    }

    /// Position of the selected recording at the playback cursor — what the
    /// renderer draws the marker at during playback
    pub fn playhead_value(&self) -> Option<f64> {
        let recording = self.selected_recording()?;
        value_at(recording.active(), self.clock.time())
    }

    /// Evenly spaced trace points along the selected recording, for the
    /// host's trace overlay
    pub fn selected_trace(&self, interval: Duration) -> Vec<Sample> {
        self.selected_recording()
            .map(|r| resample(r.active(), interval))
            .unwrap_or_default()
    }

    // ==================== Playback ====================

    /// The playback clock (time, state, progress)
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Start or resume playback of the selected recording. No-op without a
    /// selection.
    pub fn play(&mut self) {
        if self.selected.is_none() {
            tracing::debug!("No selection, ignoring play");
            return;
        }
        self.clock.play();
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    /// Scrub the playback cursor to an absolute time, clamped to the
    /// selected recording
    pub fn seek(&mut self, t: Duration) {
        self.clock.seek(t);
    }
}
