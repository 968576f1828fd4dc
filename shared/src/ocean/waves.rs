//! Layered traveling sine waves for the ocean surface.
//!
//! ```rust
//! use seascape_shared::ocean::ocean_height;
//!
//! let y = ocean_height(10.0, -4.0, 1.5);
//! assert!(y.abs() <= 2.6);
//! ```

/// One sine term of the ocean height field.
///
/// The phase is `x * x_frequency + z * z_frequency + time * speed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveTerm {
    /// Peak height contributed by this term
    pub amplitude: f32,
    /// Spatial frequency along X (radians per world unit)
    pub x_frequency: f32,
    /// Spatial frequency along Z (radians per world unit)
    pub z_frequency: f32,
    /// Temporal frequency (radians per second)
    pub speed: f32,
}

impl WaveTerm {
    pub const fn new(amplitude: f32, x_frequency: f32, z_frequency: f32, speed: f32) -> Self {
        Self {
            amplitude,
            x_frequency,
            z_frequency,
            speed,
        }
    }

    /// Height contribution of this term at `(x, z)` after `time` seconds.
    #[inline]
    pub fn sample(&self, x: f32, z: f32, time: f32) -> f32 {
        (x * self.x_frequency + z * self.z_frequency + time * self.speed).sin() * self.amplitude
    }
}

/// Active ocean wave layers.
pub const OCEAN_WAVE_TERMS: [WaveTerm; 3] = [
    WaveTerm::new(1.5, 0.05, 0.0, 0.5), // Big slow wave
    WaveTerm::new(0.8, 0.0, 0.08, 0.8), // Medium wave traveling along z
    WaveTerm::new(0.3, 0.2, 0.2, 1.2),  // Small fast ripples
];

/// Ocean surface height at `(x, z)` after `time` seconds.
#[inline]
pub fn ocean_height(x: f32, z: f32, time: f32) -> f32 {
    OCEAN_WAVE_TERMS
        .iter()
        .map(|term| term.sample(x, z, time))
        .sum()
}

/// Largest absolute height the ocean can reach (sum of the amplitudes).
pub fn amplitude_bound() -> f32 {
    OCEAN_WAVE_TERMS.iter().map(|term| term.amplitude.abs()).sum()
}
