//! Shared control parameters and their ranges.
//!
//! A control thread writes through the setters at any time; the audio thread takes
//! one [`ParamSnapshot`] at the start of each block. Every cell is an independent
//! atomic, so a snapshot may mix old and new values across cells.

use crate::OrbitMode;
use orbit_core::{AtomicFloat, AtomicU8, Ordering, ParameterRange, ParameterScale};

const fn unit_range(default: f32) -> ParameterRange {
    ParameterRange {
        min: 0.0,
        max: 1.0,
        default,
        scale: ParameterScale::Linear,
    }
}

/// Scales the maximum interaural delay.
pub const ITD_AMOUNT_RANGE: ParameterRange = unit_range(1.0);
/// Scales how far the far-ear lowpass drops at full pan.
pub const SHADOW_STRENGTH_RANGE: ParameterRange = unit_range(1.0);
/// Distance rolloff. 0 bypasses the depth stage.
pub const DEPTH_RANGE: ParameterRange = unit_range(0.0);
/// Stereo width of the pan gains. 0 collapses to mono gains.
pub const WIDTH_RANGE: ParameterRange = unit_range(1.0);
/// Reverb wet mix.
pub const REVERB_WET_RANGE: ParameterRange = unit_range(0.33);

/// -1 = hard left, 1 = hard right.
pub const PAN_RANGE: ParameterRange = ParameterRange {
    min: -1.0,
    max: 1.0,
    default: 0.0,
    scale: ParameterScale::Linear,
};

/// Orbit LFO rate in Hz. The UI range; the engine accepts any non-negative speed.
pub const PAN_SPEED_RANGE: ParameterRange = ParameterRange {
    min: 0.02,
    max: 0.5,
    default: 0.05,
    scale: ParameterScale::Logarithmic,
};

pub const ORBIT_MODE_RANGE: ParameterRange = ParameterRange {
    min: 0.0,
    max: 2.0,
    default: 0.0,
    scale: ParameterScale::Integer,
};

/// A user-facing control, for mapping sliders or host automation onto the
/// engine through its [`ParameterRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    ManualPan,
    OrbitMode,
    PanSpeed,
    ItdAmount,
    ShadowStrength,
    Depth,
    Width,
    ReverbWet,
}

impl Control {
    pub const ALL: [Control; 8] = [
        Control::ManualPan,
        Control::OrbitMode,
        Control::PanSpeed,
        Control::ItdAmount,
        Control::ShadowStrength,
        Control::Depth,
        Control::Width,
        Control::ReverbWet,
    ];

    pub const fn range(self) -> &'static ParameterRange {
        match self {
            Control::ManualPan => &PAN_RANGE,
            Control::OrbitMode => &ORBIT_MODE_RANGE,
            Control::PanSpeed => &PAN_SPEED_RANGE,
            Control::ItdAmount => &ITD_AMOUNT_RANGE,
            Control::ShadowStrength => &SHADOW_STRENGTH_RANGE,
            Control::Depth => &DEPTH_RANGE,
            Control::Width => &WIDTH_RANGE,
            Control::ReverbWet => &REVERB_WET_RANGE,
        }
    }
}

/// Values of every control, read once per block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    pub itd_amount: f32,
    pub shadow_strength: f32,
    pub depth: f32,
    pub width: f32,
    pub manual_pan: f32,
    pub pan_speed_hz: f32,
    pub orbit_mode: OrbitMode,
}

impl Default for ParamSnapshot {
    fn default() -> Self {
        SpatialParams::default().snapshot()
    }
}

/// Atomic cells for every spatializer control, shared through `Arc`.
#[derive(Debug)]
pub struct SpatialParams {
    itd_amount: AtomicFloat,
    shadow_strength: AtomicFloat,
    depth: AtomicFloat,
    width: AtomicFloat,
    manual_pan: AtomicFloat,
    pan_speed_hz: AtomicFloat,
    orbit_mode: AtomicU8,
}

impl Default for SpatialParams {
    fn default() -> Self {
        Self {
            itd_amount: AtomicFloat::new(ITD_AMOUNT_RANGE.default),
            shadow_strength: AtomicFloat::new(SHADOW_STRENGTH_RANGE.default),
            depth: AtomicFloat::new(DEPTH_RANGE.default),
            width: AtomicFloat::new(WIDTH_RANGE.default),
            manual_pan: AtomicFloat::new(PAN_RANGE.default),
            pan_speed_hz: AtomicFloat::new(PAN_SPEED_RANGE.default),
            orbit_mode: AtomicU8::new(OrbitMode::default().index()),
        }
    }
}

impl SpatialParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_itd_amount(&self, amount: f32) {
        self.itd_amount.set_clamped(amount, &ITD_AMOUNT_RANGE);
    }

    pub fn set_shadow_strength(&self, strength: f32) {
        self.shadow_strength
            .set_clamped(strength, &SHADOW_STRENGTH_RANGE);
    }

    pub fn set_depth(&self, depth: f32) {
        self.depth.set_clamped(depth, &DEPTH_RANGE);
    }

    pub fn set_width(&self, width: f32) {
        self.width.set_clamped(width, &WIDTH_RANGE);
    }

    pub fn set_manual_pan(&self, pan: f32) {
        self.manual_pan.set_clamped(pan, &PAN_RANGE);
    }

    /// Stored as given. Non-finite speeds fall back to the default and negative
    /// speeds stop the orbit.
    pub fn set_pan_speed_hz(&self, speed_hz: f32) {
        let speed_hz = if speed_hz.is_finite() {
            speed_hz.max(0.0)
        } else {
            PAN_SPEED_RANGE.default
        };
        self.pan_speed_hz.set(speed_hz);
    }

    pub fn set_orbit_mode(&self, mode: OrbitMode) {
        self.orbit_mode.store(mode.index(), Ordering::Release);
    }

    #[inline]
    pub fn itd_amount(&self) -> f32 {
        self.itd_amount.get()
    }

    #[inline]
    pub fn shadow_strength(&self) -> f32 {
        self.shadow_strength.get()
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth.get()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width.get()
    }

    #[inline]
    pub fn manual_pan(&self) -> f32 {
        self.manual_pan.get()
    }

    #[inline]
    pub fn pan_speed_hz(&self) -> f32 {
        self.pan_speed_hz.get()
    }

    #[inline]
    pub fn orbit_mode(&self) -> OrbitMode {
        OrbitMode::from_index(self.orbit_mode.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Read every cell once.
    #[inline]
    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            itd_amount: self.itd_amount(),
            shadow_strength: self.shadow_strength(),
            depth: self.depth(),
            width: self.width(),
            manual_pan: self.manual_pan(),
            pan_speed_hz: self.pan_speed_hz(),
            orbit_mode: self.orbit_mode(),
        }
    }
}
