//! One-pole lowpass used for head shadow and depth.

use std::f32::consts::PI;

/// Single-pole lowpass: `y = alpha * y + (1 - alpha) * x`.
///
/// Only the memory lives here. The coefficient is computed once per block by the
/// caller and passed to [`OnePole::process`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OnePole {
    state: f32,
}

impl OnePole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pole for a given cutoff: `exp(-2π·cutoff/sample_rate)`.
    #[inline]
    pub fn coefficient(cutoff_hz: f32, sample_rate: f64) -> f32 {
        (-2.0 * PI * cutoff_hz / sample_rate as f32).exp()
    }

    #[inline]
    pub fn process(&mut self, input: f32, alpha: f32) -> f32 {
        self.state = alpha * self.state + (1.0 - alpha) * input;
        self.state
    }

    #[inline]
    pub fn state(&self) -> f32 {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}

/// `from + amount * (to - from)`
#[inline]
pub(crate) fn lerp(from: f32, to: f32, amount: f32) -> f32 {
    from + amount * (to - from)
}
