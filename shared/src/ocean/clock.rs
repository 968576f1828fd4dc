use crate::MILLIS_TO_SECONDS;

/// Running animation time of the ocean, in seconds.
///
/// Only ever moves forward and is never reset for the life of a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveClock {
    elapsed: f32,
}

impl WaveClock {
    /// Creates a clock already advanced to `elapsed` seconds.
    pub fn starting_at(elapsed: f32) -> Self {
        Self {
            elapsed: elapsed.max(0.0),
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advances the clock by a frame delta in seconds. Negative deltas are ignored.
    pub fn advance(&mut self, delta_seconds: f32) -> f32 {
        if delta_seconds > 0.0 {
            self.elapsed += delta_seconds;
        }
        self.elapsed
    }

    /// Advances the clock by a frame delta in milliseconds.
    pub fn advance_millis(&mut self, delta_millis: f32) -> f32 {
        self.advance(delta_millis * MILLIS_TO_SECONDS)
    }
}
