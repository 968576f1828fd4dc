//! Ocean surface animation.
//!
//! The ocean is a flat ground grid whose height channel is rewritten every
//! frame from a fixed sum of sine waves. Heights are always derived from the
//! resting grid captured at creation, never from the previous frame.

pub mod clock;
pub mod displacer;
pub mod grid;
pub mod waves;

pub use clock::WaveClock;
pub use displacer::WaveDisplacer;
pub use grid::GroundGrid;
pub use waves::{amplitude_bound, ocean_height, WaveTerm, OCEAN_WAVE_TERMS};
