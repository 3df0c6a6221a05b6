//! Motion Trace Engine - Headless Demo Host
//!
//! Drives the engine the way a UI host would, without one: a fixed-rate
//! tick loop moves a synthetic marker through a capture, re-smooths the
//! committed trace and replays it, logging what a renderer would draw.

use motiontrace_rs::{
    config::MemorySettingsStore,
    engine::{SharedInput, TraceEngine},
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Simulated tick delta (~60 Hz host scheduler)
const TICK: Duration = Duration::from_millis(16);

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,motiontrace_rs=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting motion trace demo host");

    let input = SharedInput::new(0.0);
    let store = MemorySettingsStore::default();
    let mut engine = TraceEngine::new(&store, Box::new(input.clone()));

    // Capture three seconds of a slow sine sweep, as if a user dragged the
    // marker back and forth.
    engine.start_capture();
    let mut t = 0.0f64;
    while t < 3.0 {
        input.set((2.0 * std::f64::consts::PI * 0.5 * t).sin());
        engine.advance(TICK);
        t += TICK.as_secs_f64();
    }
    let Some(index) = engine.stop_capture() else {
        tracing::warn!("Capture too short to commit, nothing to replay");
        return;
    };

    let recording = &engine.recordings()[index];
    tracing::info!(
        "Captured '{}': {} samples over {:.2}s",
        recording.metadata().name,
        recording.len(),
        recording.duration().as_secs_f64()
    );

    // Re-derive the displayed trace with a wider smoothing window.
    if let Err(e) = engine.set_smoothing_window(index, 9) {
        tracing::warn!("Could not re-smooth recording: {}", e);
    }

    // Point queries a hover label would make.
    let probe = Duration::from_millis(1500);
    if let (Some(x), Some(v)) = (
        engine.value_at(index, probe),
        engine.velocity_at_time(index, probe),
    ) {
        tracing::info!(
            "At {:.1}s: position {:+.3}, velocity {:+.3}/s",
            probe.as_secs_f64(),
            x,
            v
        );
    }

    // Replay to the end; the clock pauses itself there.
    engine.play();
    let mut ticks = 0u32;
    while engine.clock().is_playing() {
        engine.advance(TICK);
        ticks += 1;
    }
    tracing::info!(
        "Replayed to {:.2}s in {} ticks (marker ended at {:+.3})",
        engine.clock().time().as_secs_f64(),
        ticks,
        engine.playhead_value().unwrap_or(0.0)
    );

    tracing::info!("Demo complete");
}
