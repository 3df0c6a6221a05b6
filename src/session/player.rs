//! Playback clock for scrubbing through a selected recording
//!
//! The clock never owns a recording; it is loaded with the duration of
//! whichever recording is currently selected and advances a time cursor
//! through it at 1x rate from the host's tick deltas. The engine resets
//! the clock whenever the selection changes or the selected recording is
//! deleted.

use std::time::Duration;

use super::types::PlaybackState;

/// Time-cursor state machine for trace playback
#[derive(Debug, Default)]
pub struct PlaybackClock {
    /// Current playback state
    state: PlaybackState,
    /// Current cursor position
    time: Duration,
    /// Duration of the selected recording
    duration: Duration,
}

impl PlaybackClock {
    /// Create a stopped clock with no recording loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Current cursor position
    pub fn time(&self) -> Duration {
        self.time
    }

    /// Duration of the loaded recording
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Playback progress in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        self.time.as_secs_f64() / self.duration.as_secs_f64()
    }

    /// Load the duration of a newly selected recording, rewinding to zero
    pub fn load(&mut self, duration: Duration) {
        self.duration = duration;
        self.time = Duration::ZERO;
        self.state = PlaybackState::Stopped;
    }

    /// Forget the loaded recording, rewinding to zero
    pub fn unload(&mut self) {
        self.load(Duration::ZERO);
    }

    /// Start or resume playback.
    ///
    /// From `Stopped` or `Paused` with the cursor at or past the end, the
    /// cursor rewinds to zero first. No-op while already playing or with
    /// nothing loaded.
    pub fn play(&mut self) {
        if self.duration.is_zero() {
            tracing::debug!("No recording loaded, ignoring play");
            return;
        }
        match self.state {
            PlaybackState::Playing => {}
            PlaybackState::Stopped | PlaybackState::Paused => {
                if self.time >= self.duration {
                    self.time = Duration::ZERO;
                }
                self.state = PlaybackState::Playing;
                tracing::debug!("Playback started at {:.2}s", self.time.as_secs_f64());
            }
        }
    }

    /// Pause playback, keeping the cursor. No-op unless playing.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            tracing::debug!("Playback paused at {:.2}s", self.time.as_secs_f64());
        }
    }

    /// Jump the cursor to an absolute time, clamped to the recording.
    ///
    /// Valid in any state; scrubbing does not change the play/pause state.
    pub fn seek(&mut self, time: Duration) {
        self.time = time.min(self.duration);
    }

    /// Advance the cursor by one tick while playing.
    ///
    /// The cursor never overshoots: a tick that would pass the end clamps
    /// to the end and pauses.
    pub fn advance(&mut self, delta: Duration) {
        if self.state != PlaybackState::Playing {
            return;
        }
        let next = self.time + delta;
        if next > self.duration {
            self.time = self.duration;
            self.state = PlaybackState::Paused;
            tracing::debug!("Playback reached end at {:.2}s", self.time.as_secs_f64());
        } else {
            self.time = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_clock(secs: u64) -> PlaybackClock {
        let mut clock = PlaybackClock::new();
        clock.load(Duration::from_secs(secs));
        clock
    }

    #[test]
    fn test_clock_lifecycle() {
        let mut clock = loaded_clock(4);
        assert_eq!(clock.state(), PlaybackState::Stopped);

        clock.play();
        assert_eq!(clock.state(), PlaybackState::Playing);

        clock.pause();
        assert_eq!(clock.state(), PlaybackState::Paused);

        clock.unload();
        assert_eq!(clock.state(), PlaybackState::Stopped);
        assert_eq!(clock.time(), Duration::ZERO);
    }

    #[test]
    fn test_advance_clamps_and_pauses_at_end() {
        let mut clock = loaded_clock(4);
        clock.play();

        // Five one-second ticks on a four-second recording: the cursor
        // never exceeds the end and playback finishes paused there.
        for _ in 0..5 {
            clock.advance(Duration::from_secs(1));
            assert!(clock.time() <= Duration::from_secs(4));
        }
        assert_eq!(clock.time(), Duration::from_secs(4));
        assert_eq!(clock.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_advance_only_while_playing() {
        let mut clock = loaded_clock(4);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.time(), Duration::ZERO);

        clock.play();
        clock.advance(Duration::from_secs(1));
        clock.pause();
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.time(), Duration::from_secs(1));
    }

    #[test]
    fn test_play_at_end_rewinds() {
        let mut clock = loaded_clock(2);
        clock.seek(Duration::from_secs(2));
        clock.play();
        assert_eq!(clock.time(), Duration::ZERO);
        assert_eq!(clock.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_play_without_recording_is_noop() {
        let mut clock = PlaybackClock::new();
        clock.play();
        assert_eq!(clock.state(), PlaybackState::Stopped);
    }

    #[test]
    fn test_seek_clamps() {
        let mut clock = loaded_clock(3);
        clock.seek(Duration::from_secs(10));
        assert_eq!(clock.time(), Duration::from_secs(3));

        clock.seek(Duration::from_millis(1500));
        assert_eq!(clock.time(), Duration::from_millis(1500));
    }

    #[test]
    fn test_seek_keeps_state() {
        let mut clock = loaded_clock(3);
        clock.play();
        clock.seek(Duration::from_secs(1));
        assert_eq!(clock.state(), PlaybackState::Playing);

        clock.pause();
        clock.seek(Duration::from_secs(2));
        assert_eq!(clock.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_progress() {
        let mut clock = loaded_clock(4);
        assert_eq!(clock.progress(), 0.0);
        clock.seek(Duration::from_secs(1));
        assert!((clock.progress() - 0.25).abs() < 1e-12);

        let empty = PlaybackClock::new();
        assert_eq!(empty.progress(), 0.0);
    }

    #[test]
    fn test_load_resets_cursor() {
        let mut clock = loaded_clock(4);
        clock.play();
        clock.advance(Duration::from_secs(2));
        clock.load(Duration::from_secs(7));
        assert_eq!(clock.time(), Duration::ZERO);
        assert_eq!(clock.state(), PlaybackState::Stopped);
        assert_eq!(clock.duration(), Duration::from_secs(7));
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_cursor_never_exceeds_duration(
            duration_ms in 1u64..10_000,
            deltas in prop::collection::vec(0u64..2_000, 1..50),
        ) {
            let mut clock = PlaybackClock::new();
            clock.load(Duration::from_millis(duration_ms));
            clock.play();

            for delta in deltas {
                clock.advance(Duration::from_millis(delta));
                prop_assert!(clock.time() <= clock.duration());
            }
        }
    }
}
