//! # MotionTrace-RS: One-Dimensional Motion Trace Engine
//!
//! The signal-processing and playback core for a one-dimensional motion
//! tracer: a marker moves along a normalized axis, the engine records its
//! position over time, and recorded traces can be replayed, smoothed and
//! analyzed (position and derived velocity) against each other.
//!
//! ## Architecture
//!
//! - **Types**: timestamped [`Sample`]s on the normalized [-1, 1] axis
//! - **Analysis**: pure queries — linear interpolation, centered
//!   moving-average smoothing, central-difference velocity estimation
//! - **Session**: the capture recorder, the playback clock and the
//!   nearest-curve selector, plus the recording set they share
//! - **Engine**: [`TraceEngine`], the explicit session object hosts drive
//!   with one `advance(delta)` call per tick
//!
//! The engine never renders, never reads input devices and never persists
//! anything. Rendering and input wiring live in the host; settings arrive
//! through an injected [`SettingsStore`] read once at construction.
//!
//! ## Example
//!
//! ```ignore
//! use motiontrace_rs::{
//!     config::MemorySettingsStore,
//!     engine::{SharedInput, TraceEngine},
//! };
//! use std::time::Duration;
//!
//! let input = SharedInput::new(0.0);
//! let store = MemorySettingsStore::default();
//! let mut engine = TraceEngine::new(&store, Box::new(input.clone()));
//!
//! // Host tick loop: move the marker, advance the engine.
//! engine.start_capture();
//! for i in 0..100 {
//!     input.set((i as f64 / 50.0) - 1.0);
//!     engine.advance(Duration::from_millis(16));
//! }
//! engine.stop_capture();
//!
//! // Replay the committed trace.
//! engine.play();
//! while engine.clock().is_playing() {
//!     engine.advance(Duration::from_millis(16));
//!     let _marker = engine.playhead_value();
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use analysis::{resample, smooth, value_at, VelocityEstimator};
pub use config::{EngineSettings, MemorySettingsStore, SettingsStore};
pub use engine::{InputSource, SharedInput, TraceEngine};
pub use error::{MotionTraceError, Result};
pub use session::{
    select_nearest, CaptureState, PlaybackClock, PlaybackState, Recording, RecordingSet,
    TraceRecorder,
};
pub use types::Sample;
