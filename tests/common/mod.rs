//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use std::time::Duration;

use motiontrace_rs::{
    config::{EngineSettings, MemorySettingsStore},
    engine::{SharedInput, TraceEngine},
};

/// Tick delta used by the scripted host loops
pub const TICK: Duration = Duration::from_millis(100);

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Build an engine wired to a shared input, with default settings
pub fn test_engine() -> (TraceEngine, SharedInput) {
    test_engine_with(EngineSettings::default())
}

/// Build an engine wired to a shared input, with specific settings
pub fn test_engine_with(settings: EngineSettings) -> (TraceEngine, SharedInput) {
    let input = SharedInput::new(0.0);
    let store = MemorySettingsStore::new(settings);
    let engine = TraceEngine::new(&store, Box::new(input.clone()));
    (engine, input)
}

/// Script a capture through the engine: one tick per position
pub fn capture_positions(
    engine: &mut TraceEngine,
    input: &SharedInput,
    positions: &[f64],
) -> Option<usize> {
    engine.start_capture();
    for &x in positions {
        input.set(x);
        engine.advance(TICK);
    }
    engine.stop_capture()
}
