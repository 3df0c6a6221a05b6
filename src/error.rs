//! Error handling for the motiontrace-rs engine
//!
//! This module defines custom error types and a Result alias for use
//! throughout the crate.

use thiserror::Error;

/// Main error type for motiontrace-rs operations
#[derive(Error, Debug)]
pub enum MotionTraceError {
    /// A recording index that does not exist in the set
    #[error("No recording at index {index} (set holds {len})")]
    InvalidRecording { index: usize, len: usize },

    /// Errors related to settings loading
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<MotionTraceError>,
    },
}

impl MotionTraceError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        MotionTraceError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for motiontrace-rs operations
pub type Result<T> = std::result::Result<T, MotionTraceError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
