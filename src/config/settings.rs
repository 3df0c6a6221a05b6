//! Engine settings blob and the injected store interface
//!
//! [`EngineSettings`] mirrors what hosts persist between runs: the
//! smoothing window for new recordings, display toggles the core itself
//! never interprets, and overrides for the selection/velocity policy
//! constants. Every field carries a serde default so partial blobs from
//! older hosts still load.

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_SELECT_TOLERANCE, DEFAULT_SMOOTHING_WINDOW, DEFAULT_VELOCITY_HALF_WINDOW,
};
use crate::error::Result;

/// Persisted engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Moving-average window applied to newly committed recordings
    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: usize,

    /// Whether the host should draw the selected recording's trace in the
    /// marker space (display-only; the engine just carries it)
    #[serde(default = "default_true")]
    pub show_trace: bool,

    /// Whether the host should draw fine grid lines (display-only)
    #[serde(default)]
    pub show_grid: bool,

    /// Tolerance for nearest-curve selection
    #[serde(default = "default_select_tolerance")]
    pub select_tolerance: f64,

    /// Half-window for velocity estimation
    #[serde(default = "default_velocity_half_window")]
    pub velocity_half_window: usize,
}

fn default_smoothing_window() -> usize {
    DEFAULT_SMOOTHING_WINDOW
}

fn default_true() -> bool {
    true
}

fn default_select_tolerance() -> f64 {
    DEFAULT_SELECT_TOLERANCE
}

fn default_velocity_half_window() -> usize {
    DEFAULT_VELOCITY_HALF_WINDOW
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            show_trace: true,
            show_grid: false,
            select_tolerance: DEFAULT_SELECT_TOLERANCE,
            velocity_half_window: DEFAULT_VELOCITY_HALF_WINDOW,
        }
    }
}

impl EngineSettings {
    /// Clamp out-of-range values at the boundary so they never reach the
    /// query math. A negative tolerance becomes zero (rejects every
    /// selection candidate).
    pub fn sanitized(mut self) -> Self {
        if self.select_tolerance.is_nan() || self.select_tolerance < 0.0 {
            self.select_tolerance = 0.0;
        }
        self
    }
}

/// Injected settings source the engine reads once at construction.
///
/// Loading and saving the underlying blob is entirely the store's job;
/// the engine neither parses nor writes it.
pub trait SettingsStore {
    /// Load the persisted settings
    fn load(&self) -> Result<EngineSettings>;
}

/// In-memory settings store for hosts and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    settings: EngineSettings,
}

impl MemorySettingsStore {
    /// Create a store holding the given settings
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<EngineSettings> {
        Ok(self.settings.clone())
    }
}
