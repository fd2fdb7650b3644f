//! Comparison tolerances shared by the signal tests.

/// Exact gains and passthrough, allowing for f32 rounding.
pub const FLOAT_EPSILON: f32 = 1e-6;

/// Filtered or accumulated output: one-pole states, summed blocks, the f64 LFO phase.
pub const DSP_EPSILON: f32 = 1e-4;

/// Level comparisons between renders, about -60 dB.
pub const PERCEPTUAL_EPSILON: f32 = 0.001;

/// Peak level treated as silence, about -80 dB.
pub const SILENCE_THRESHOLD: f32 = 0.0001;

/// Smallest step a 24-bit file can hold.
pub const INT24_EPSILON: f32 = 1.0 / 8_388_608.0;
