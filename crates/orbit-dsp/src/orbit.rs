//! Orbit modes and the control-rate pan LFO.

use crate::{Error, Result};
use std::f64::consts::TAU;

/// How the pan position is produced for each block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(u8)]
pub enum OrbitMode {
    /// Pan comes straight from the manual pan control.
    #[default]
    Manual = 0,
    /// Full left-right sweep, one cycle per LFO period.
    Orbit = 1,
    /// Twice the angular rate of [`OrbitMode::Orbit`].
    Figure8 = 2,
}

impl OrbitMode {
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(OrbitMode::Manual),
            1 => Some(OrbitMode::Orbit),
            2 => Some(OrbitMode::Figure8),
            _ => None,
        }
    }

    #[inline]
    pub fn is_automatic(self) -> bool {
        self != OrbitMode::Manual
    }

    pub fn all() -> &'static [OrbitMode] {
        &[OrbitMode::Manual, OrbitMode::Orbit, OrbitMode::Figure8]
    }

    pub fn name(&self) -> &'static str {
        match self {
            OrbitMode::Manual => "Manual",
            OrbitMode::Orbit => "Orbit (3D)",
            OrbitMode::Figure8 => "Figure-8 (8D)",
        }
    }
}

impl TryFrom<u8> for OrbitMode {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        OrbitMode::from_index(index).ok_or(Error::InvalidOrbitMode(index))
    }
}

impl From<OrbitMode> for u8 {
    fn from(mode: OrbitMode) -> Self {
        mode.index()
    }
}

/// Block-rate sine LFO that drives the automatic orbit modes.
///
/// The phase lives in `[0, 2π)` and is kept in f64 so slow orbits do not drift.
#[derive(Debug, Clone, Default)]
pub struct OrbitLfo {
    phase: f64,
}

impl OrbitLfo {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Pan for the current phase, in `[-1, 1]` for the automatic modes.
    #[inline]
    pub fn pan(&self, mode: OrbitMode, manual_pan: f32) -> f32 {
        match mode {
            OrbitMode::Manual => manual_pan,
            OrbitMode::Orbit => self.phase.sin() as f32,
            OrbitMode::Figure8 => (2.0 * self.phase).sin() as f32,
        }
    }

    /// Advance by one block of `num_samples`.
    ///
    /// Wraps at most once. This is exact as long as
    /// `speed_hz * num_samples / sample_rate < 1`, which holds for every orbit speed
    /// and block size a host will use (0.5 Hz would need a block longer than two
    /// seconds to break it).
    #[inline]
    pub fn advance(&mut self, speed_hz: f32, num_samples: usize, sample_rate: f64) {
        let increment = TAU * speed_hz as f64 / sample_rate;
        self.phase += increment * num_samples as f64;
        if self.phase > TAU {
            self.phase -= TAU;
        }
    }

    /// Pan for this block, then advance the phase unless `mode` is manual.
    #[inline]
    pub fn next_block(
        &mut self,
        mode: OrbitMode,
        manual_pan: f32,
        speed_hz: f32,
        num_samples: usize,
        sample_rate: f64,
    ) -> f32 {
        let pan = self.pan(mode, manual_pan);
        if mode.is_automatic() {
            self.advance(speed_hz, num_samples, sample_rate);
        }
        pan
    }
}
