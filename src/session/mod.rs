//! Trace capture, playback and selection
//!
//! This module holds the stateful half of the engine: the recorder that
//! turns live input ticks into committed recordings, the playback clock
//! that scrubs a time cursor through the selected recording, and the
//! nearest-curve selector that resolves a plot query point to a recording.
//!
//! # Features
//!
//! - Capture the live marker position at whatever cadence the host drives
//! - Commit captures as immutable raw recordings with derived active forms
//! - Play back a selected recording at 1x rate with end clamping
//! - Seek/scrub to arbitrary times
//! - Pick a recording by proximity to a clicked plot point

pub mod player;
pub mod recorder;
pub mod selector;
pub mod types;

pub use player::PlaybackClock;
pub use recorder::{TraceRecorder, MIN_COMMIT_SAMPLES};
pub use selector::select_nearest;
pub use types::{CaptureState, PlaybackState, Recording, RecordingMetadata, RecordingSet};
