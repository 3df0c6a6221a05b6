//! Test data builders for creating recordings

use std::time::Duration;

use motiontrace_rs::{Recording, Sample};

/// Builder for creating test Recordings with a uniform sample cadence
pub struct RecordingBuilder {
    step: Duration,
    smoothing_window: usize,
    positions: Vec<f64>,
}

impl RecordingBuilder {
    pub fn new() -> Self {
        Self {
            step: Duration::from_millis(100),
            smoothing_window: 1,
            positions: Vec::new(),
        }
    }

    /// Time between consecutive samples
    pub fn step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    /// Smoothing window used to derive the active sequence
    pub fn smoothing_window(mut self, window: usize) -> Self {
        self.smoothing_window = window;
        self
    }

    /// Explicit position sequence
    pub fn positions(mut self, positions: &[f64]) -> Self {
        self.positions = positions.to_vec();
        self
    }

    /// Uniformly sampled linear motion x(t) = a*t + b over `n` samples
    pub fn linear(mut self, a: f64, b: f64, n: usize) -> Self {
        self.positions = (1..=n)
            .map(|i| a * (i as f64 * self.step.as_secs_f64()) + b)
            .collect();
        self
    }

    pub fn build(self) -> Recording {
        let raw: Vec<Sample> = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, &x)| Sample::new(self.step * (i as u32 + 1), x))
            .collect();
        Recording::commit(raw, self.smoothing_window)
    }
}

impl Default for RecordingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_builder() {
        let rec = RecordingBuilder::new()
            .step(Duration::from_millis(250))
            .positions(&[0.0, 0.5, 1.0])
            .build();

        assert_eq!(rec.len(), 3);
        assert_eq!(rec.duration(), Duration::from_millis(750));
        assert_eq!(rec.raw()[1].x, 0.5);
    }

    #[test]
    fn test_linear_builder() {
        let rec = RecordingBuilder::new()
            .step(Duration::from_millis(100))
            .linear(1.0, 0.0, 5)
            .build();

        assert_eq!(rec.len(), 5);
        assert!((rec.raw()[4].x - 0.5).abs() < 1e-12);
    }
}
