//! Analysis module for signal queries
//!
//! This module provides the pure signal-processing tools of the engine:
//! - Linear time-to-position interpolation over a recording
//! - Centered moving-average smoothing
//! - Central-difference velocity estimation

pub mod interp;
pub mod smoothing;
pub mod velocity;

pub use interp::{resample, value_at};
pub use smoothing::smooth;
pub use velocity::VelocityEstimator;
