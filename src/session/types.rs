//! Recording data types

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::analysis::smoothing::smooth;
use crate::types::Sample;

/// State of trace capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// No capture in progress
    #[default]
    Idle,
    /// Currently capturing the live input
    Capturing,
}

impl CaptureState {
    /// Check if currently capturing
    pub fn is_capturing(&self) -> bool {
        matches!(self, CaptureState::Capturing)
    }

    /// Display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            CaptureState::Idle => "Idle",
            CaptureState::Capturing => "Capturing",
        }
    }
}

/// State of trace playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Not playing, cursor at zero
    #[default]
    Stopped,
    /// Advancing the cursor in real time
    Playing,
    /// Cursor frozen at its current time
    Paused,
}

impl PlaybackState {
    /// Check if currently playing
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    /// Check if paused
    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused)
    }

    /// Display name for the state
    pub fn display_name(&self) -> &'static str {
        match self {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        }
    }
}

/// Metadata for a committed recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingMetadata {
    /// Name/title of the recording
    pub name: String,
    /// When the recording was committed
    pub recorded_at: chrono::DateTime<chrono::Utc>,
    /// Total duration of the recording
    pub duration: Duration,
    /// Number of raw samples captured
    pub sample_count: usize,
}

impl Default for RecordingMetadata {
    fn default() -> Self {
        Self {
            name: String::from("Untitled Trace"),
            recorded_at: chrono::Utc::now(),
            duration: Duration::ZERO,
            sample_count: 0,
        }
    }
}

/// Global counter for generating unique recording IDs
static NEXT_RECORDING_ID: std::sync::atomic::AtomicU32 = std::sync::atomic::AtomicU32::new(1);

/// A committed trace: the immutable raw capture plus the smoothed active
/// sequence derived from it.
///
/// The active sequence is what collaborators display and query by default.
/// It is always re-derived from the untouched raw sequence when the
/// smoothing window changes, so window mutations are non-destructive and
/// the last window set wins regardless of mutation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    /// Unique identifier for this recording
    id: u32,
    /// Recording metadata
    metadata: RecordingMetadata,
    /// Raw captured samples, strictly increasing in time, immutable
    raw: Vec<Sample>,
    /// Smoothed samples derived from `raw`
    active: Vec<Sample>,
    /// Moving-average window used to derive `active`
    smoothing_window: usize,
}

impl Recording {
    /// Commit a captured buffer as a new recording, deriving its active
    /// sequence with the given smoothing window.
    ///
    /// Callers are responsible for the commit threshold (at least two
    /// samples); the recorder discards shorter buffers before reaching
    /// this point.
    pub fn commit(raw: Vec<Sample>, smoothing_window: usize) -> Self {
        let id = NEXT_RECORDING_ID.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let metadata = RecordingMetadata {
            name: format!("Trace {}", id),
            recorded_at: chrono::Utc::now(),
            duration: raw.last().map(|s| s.t).unwrap_or(Duration::ZERO),
            sample_count: raw.len(),
        };
        let active = smooth(&raw, smoothing_window);
        Self {
            id,
            metadata,
            raw,
            active,
            smoothing_window,
        }
    }

    /// Unique identifier of this recording
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Recording metadata
    pub fn metadata(&self) -> &RecordingMetadata {
        &self.metadata
    }

    /// The immutable raw sample sequence
    pub fn raw(&self) -> &[Sample] {
        &self.raw
    }

    /// The smoothed sample sequence collaborators display and query
    pub fn active(&self) -> &[Sample] {
        &self.active
    }

    /// Currently applied smoothing window
    pub fn smoothing_window(&self) -> usize {
        self.smoothing_window
    }

    /// Re-derive the active sequence from raw with a new smoothing window
    pub fn set_smoothing_window(&mut self, window: usize) {
        self.smoothing_window = window;
        self.active = smooth(&self.raw, window);
    }

    /// Total duration (timestamp of the last raw sample)
    pub fn duration(&self) -> Duration {
        self.raw.last().map(|s| s.t).unwrap_or(Duration::ZERO)
    }

    /// Number of raw samples
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if the recording holds no samples
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Insertion-ordered set of committed recordings
#[derive(Debug, Default)]
pub struct RecordingSet {
    recordings: Vec<Recording>,
}

impl RecordingSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recordings in the set
    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }

    /// Get a recording by index
    pub fn get(&self, index: usize) -> Option<&Recording> {
        self.recordings.get(index)
    }

    /// Get a recording by index, mutably
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Recording> {
        self.recordings.get_mut(index)
    }

    /// Read-only view of all recordings in insertion order
    pub fn as_slice(&self) -> &[Recording] {
        &self.recordings
    }

    /// Iterate recordings in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Recording> {
        self.recordings.iter()
    }

    /// Append a recording, returning its index
    pub fn push(&mut self, recording: Recording) -> usize {
        self.recordings.push(recording);
        self.recordings.len() - 1
    }

    /// Remove the recording at `index`, shifting later recordings down.
    ///
    /// The recording's raw sequence, active sequence and smoothing window
    /// all leave together.
    pub fn remove(&mut self, index: usize) -> Option<Recording> {
        if index < self.recordings.len() {
            Some(self.recordings.remove(index))
        } else {
            None
        }
    }

    /// Remove every recording
    pub fn clear(&mut self) {
        self.recordings.clear();
    }

    /// Duration of the longest recording in the set.
    ///
    /// Hosts use this to scale a shared time axis across all curves.
    pub fn max_duration(&self) -> Duration {
        self.recordings
            .iter()
            .map(|r| r.duration())
            .max()
            .unwrap_or(Duration::ZERO)
    }
}
