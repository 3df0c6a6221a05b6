//! Configuration module for motiontrace-rs
//!
//! This module defines the engine's policy constants and the settings blob
//! hosts hand to the engine at construction.
//!
//! # Settings Ownership
//!
//! The engine never loads or saves settings itself. A host implements
//! [`SettingsStore`] over whatever persistence it has (a JSON file, browser
//! storage, an in-memory map) and the engine reads it exactly once when it
//! is built. The serialization format stays a host concern.

pub mod settings;

pub use settings::*;

/// Default moving-average window applied to newly committed recordings
/// (1 leaves the trace unsmoothed)
pub const DEFAULT_SMOOTHING_WINDOW: usize = 1;

/// Default tolerance for nearest-curve selection, in position units.
/// A policy value, not an invariant; hosts may tune it per query.
pub const DEFAULT_SELECT_TOLERANCE: f64 = 0.3;

/// Default half-window for velocity estimation, in samples on each side.
/// A policy value, not an invariant; hosts may tune it per estimator.
pub const DEFAULT_VELOCITY_HALF_WINDOW: usize = 5;
