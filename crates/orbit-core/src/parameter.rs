//! Control ranges and slider mapping.
//!
//! Every control carries a [`ParameterRange`]: setters saturate through
//! [`ParameterRange::clamp`], and a UI or host maps a 0-1 position onto the
//! control with [`ParameterRange::denormalize`].
//!
//! ```
//! use orbit_core::{ParameterRange, ParameterScale};
//!
//! const SPEED: ParameterRange = ParameterRange {
//!     min: 0.02,
//!     max: 0.5,
//!     default: 0.05,
//!     scale: ParameterScale::Logarithmic,
//! };
//!
//! // halfway along the slider is the geometric mean
//! let hz = SPEED.denormalize(0.5);
//! # assert!((hz - 0.1).abs() < 1e-4);
//! # assert!((SPEED.normalize(hz) - 0.5).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};

/// Mapping between a slider position and a real value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ParameterScale {
    #[default]
    Linear,
    /// Equal ratios per equal travel. Needs `min > 0`.
    Logarithmic,
    /// Snaps to whole numbers, for selectors such as the orbit mode.
    Integer,
}

/// Bounds, default and scale of one control.
///
/// Fields are public so ranges can be `const` items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f32,
    pub max: f32,
    pub default: f32,
    pub scale: ParameterScale,
}

impl ParameterRange {
    pub fn new(min: f32, max: f32, default: f32, scale: ParameterScale) -> Self {
        debug_assert!(max > min, "empty range {min}..{max}");
        Self {
            min,
            max,
            default: default.clamp(min, max),
            scale,
        }
    }

    pub fn linear(min: f32, max: f32, default: f32) -> Self {
        Self::new(min, max, default, ParameterScale::Linear)
    }

    /// Saturate to `[min, max]`. NaN becomes the default.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Slider position (0-1) of a real value. Out-of-range values pin to the ends.
    pub fn normalize(&self, value: f32) -> f32 {
        let value = self.clamp(value);
        let position = match (self.scale, self.log_bounds()) {
            (ParameterScale::Logarithmic, Some((lo, hi))) => (value.ln() - lo) / (hi - lo),
            (ParameterScale::Integer, _) => (value.round() - self.min) / (self.max - self.min),
            _ => (value - self.min) / (self.max - self.min),
        };
        if position.is_finite() {
            position
        } else {
            0.0
        }
    }

    /// Real value at a slider position. The position is clamped to 0-1 first.
    pub fn denormalize(&self, position: f32) -> f32 {
        let position = position.clamp(0.0, 1.0);
        match (self.scale, self.log_bounds()) {
            (ParameterScale::Logarithmic, Some((lo, hi))) => (lo + position * (hi - lo)).exp(),
            (ParameterScale::Integer, _) => (self.min + position * (self.max - self.min)).round(),
            _ => self.min + position * (self.max - self.min),
        }
    }

    #[inline]
    pub fn default_normalized(&self) -> f32 {
        self.normalize(self.default)
    }

    // falls back to linear when the range touches zero
    fn log_bounds(&self) -> Option<(f32, f32)> {
        (self.min > 0.0).then(|| (self.min.ln(), self.max.ln()))
    }
}
