//! Per-frame vertex displacement of the ocean grid.
//!
//! The displacer owns a snapshot of the resting `(x, z)` layout and the wave
//! clock. Each call rewrites only the height channel of the live position
//! buffer, so X/Z are never touched after the mesh is built and heights never
//! drift from frame to frame.

use super::{clock::WaveClock, waves::ocean_height};

#[derive(Debug, Clone)]
pub struct WaveDisplacer {
    /// Resting (x, z) of every vertex, in buffer order
    base: Vec<[f32; 2]>,
    clock: WaveClock,
}

impl WaveDisplacer {
    /// Captures the resting layout of `positions`.
    pub fn new(positions: &[[f32; 3]]) -> Self {
        Self {
            base: positions.iter().map(|p| [p[0], p[2]]).collect(),
            clock: WaveClock::default(),
        }
    }

    /// Starts the displacer at `elapsed` seconds instead of zero.
    pub fn with_time(mut self, elapsed: f32) -> Self {
        self.clock = WaveClock::starting_at(elapsed);
        self
    }

    pub fn time(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Advances the clock by `delta_seconds` and rewrites the heights.
    ///
    /// # Panics
    /// If `positions` does not have exactly one entry per captured vertex.
    pub fn advance(&mut self, delta_seconds: f32, positions: &mut [[f32; 3]]) {
        self.clock.advance(delta_seconds);
        self.apply(positions);
    }

    /// Rewrites the heights for the current time without advancing the clock.
    ///
    /// # Panics
    /// If `positions` does not have exactly one entry per captured vertex.
    pub fn apply(&self, positions: &mut [[f32; 3]]) {
        assert_eq!(
            positions.len(),
            self.base.len(),
            "position buffer does not match the captured ocean grid"
        );

        let time = self.clock.elapsed();
        for (position, &[x, z]) in positions.iter_mut().zip(self.base.iter()) {
            position[1] = ocean_height(x, z, time);
        }
    }
}
