//! Binaural stereo spatializer.
//!
//! Places a stereo signal on the horizontal axis with four cues:
//!
//! - **ITD**: the far ear hears the signal up to [`MAX_DELAY_MS`] later
//! - **Head shadow**: a one-pole lowpass on the far ear, darker as `|pan|` grows
//! - **Depth**: a lowpass blended into both ears to push the source away
//! - **Width**: scales the equal-power pan gains towards mono
//!
//! The pan position is either the manual pan control or a sine LFO
//! ([`OrbitMode::Orbit`], [`OrbitMode::Figure8`]) evaluated once per block.
//!
//! ```
//! use orbit_dsp::{OrbitMode, Spatializer};
//!
//! let mut spatializer = Spatializer::new();
//! spatializer.prepare(256, 48000.0);
//! spatializer.set_width(0.8);
//!
//! let mut left = vec![0.5; 256];
//! let mut right = vec![0.5; 256];
//! spatializer.process(&mut left, &mut right, -0.5, OrbitMode::Manual, 0.05);
//! assert!(left.iter().sum::<f32>() > right.iter().sum::<f32>());
//! ```

use crate::delay_line::{StereoDelayLine, MAX_DELAY_SAMPLES};
use crate::filter::{lerp, OnePole};
use crate::orbit::{OrbitLfo, OrbitMode};
use crate::params::{SpatialParams, PAN_RANGE};
use orbit_core::Arc;
use std::f32::consts::FRAC_PI_4;

/// Largest interaural delay, reached at full pan with `itd_amount = 1`.
pub const MAX_DELAY_MS: f64 = 0.5;
/// Far-ear cutoff at full pan and full shadow.
pub const MIN_CUTOFF_HZ: f32 = 2000.0;
/// Far-ear cutoff with no shadow.
pub const MAX_CUTOFF_HZ: f32 = 18000.0;
/// Depth lowpass cutoff as depth approaches 0.
pub const DEPTH_NEAR_CUTOFF_HZ: f32 = 18000.0;
/// Depth lowpass cutoff at depth 1.
pub const DEPTH_FAR_CUTOFF_HZ: f32 = 1500.0;

const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Per-block coefficients derived from the pan and the parameter snapshot.
#[derive(Debug, Clone, Copy)]
struct BlockCoefficients {
    left_delay: usize,
    right_delay: usize,
    shadow_alpha: f32,
    left_gain: f32,
    right_gain: f32,
    depth: f32,
    depth_alpha: f32,
}

/// Real-time binaural spatializer.
///
/// Owned by the audio thread. Parameters live in a shared [`SpatialParams`] so a
/// control thread can change them while audio runs; [`params`](Self::params) hands
/// out the shared cells.
pub struct Spatializer {
    params: Arc<SpatialParams>,
    sample_rate: f64,
    block_size: usize,
    lfo: OrbitLfo,
    delay: StereoDelayLine,
    shadow_left: OnePole,
    shadow_right: OnePole,
    depth_left: OnePole,
    depth_right: OnePole,
    last_pan: f32,
}

impl Spatializer {
    pub fn new() -> Self {
        Self::with_params(Arc::new(SpatialParams::new()))
    }

    /// Spatializer driven by existing parameter cells.
    pub fn with_params(params: Arc<SpatialParams>) -> Self {
        Self {
            params,
            sample_rate: DEFAULT_SAMPLE_RATE,
            block_size: 0,
            lfo: OrbitLfo::new(),
            delay: StereoDelayLine::new(),
            shadow_left: OnePole::new(),
            shadow_right: OnePole::new(),
            depth_left: OnePole::new(),
            depth_right: OnePole::new(),
            last_pan: 0.0,
        }
    }

    pub fn params(&self) -> &Arc<SpatialParams> {
        &self.params
    }

    /// Reset all DSP state for a new session.
    ///
    /// `expected_block_size` is recorded but never used to size anything; `process`
    /// accepts blocks of any length.
    pub fn prepare(&mut self, expected_block_size: usize, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.block_size = expected_block_size;
        self.lfo.reset();
        self.delay.clear();
        self.shadow_left.reset();
        self.shadow_right.reset();
        self.depth_left.reset();
        self.depth_right.reset();
        self.last_pan = 0.0;

        tracing::debug!(
            sample_rate,
            block_size = expected_block_size,
            max_itd_samples = self.max_delay_samples(1.0),
            "Spatializer prepared"
        );
    }

    /// Spatialize one block in place.
    ///
    /// Both slices should have the same length; only the common prefix is touched.
    /// `pan_speed_hz * num_samples / sample_rate` must stay below 1 for the LFO to
    /// wrap correctly.
    pub fn process(
        &mut self,
        left: &mut [f32],
        right: &mut [f32],
        manual_pan: f32,
        orbit_mode: OrbitMode,
        pan_speed_hz: f32,
    ) {
        debug_assert_eq!(left.len(), right.len(), "channel lengths differ");
        let num_samples = left.len().min(right.len());

        let pan = self.lfo.next_block(
            orbit_mode,
            PAN_RANGE.clamp(manual_pan),
            pan_speed_hz,
            num_samples,
            self.sample_rate,
        );
        self.last_pan = pan;

        let coeffs = self.block_coefficients(pan);

        for (l, r) in left[..num_samples]
            .iter_mut()
            .zip(right[..num_samples].iter_mut())
        {
            let (mut in_l, mut in_r) = (*l, *r);

            if coeffs.depth > 0.0 {
                let lp_l = self.depth_left.process(in_l, coeffs.depth_alpha);
                let lp_r = self.depth_right.process(in_r, coeffs.depth_alpha);
                in_l = lerp(in_l, lp_l, coeffs.depth);
                in_r = lerp(in_r, lp_r, coeffs.depth);
            }

            self.delay.write(in_l, in_r);
            let (delayed_l, delayed_r) = self.delay.read(coeffs.left_delay, coeffs.right_delay);

            let mut out_l = delayed_l * coeffs.left_gain;
            let mut out_r = delayed_r * coeffs.right_gain;

            // head shadow on the far ear only
            if pan > 0.0 {
                out_l = self.shadow_left.process(out_l, coeffs.shadow_alpha);
            } else if pan < 0.0 {
                out_r = self.shadow_right.process(out_r, coeffs.shadow_alpha);
            }

            *l = out_l;
            *r = out_r;

            self.delay.advance();
        }
    }

    /// Spatialize one block using the pan, mode and speed stored in [`SpatialParams`].
    pub fn process_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        let manual_pan = self.params.manual_pan();
        let orbit_mode = self.params.orbit_mode();
        let pan_speed_hz = self.params.pan_speed_hz();
        self.process(left, right, manual_pan, orbit_mode, pan_speed_hz);
    }

    fn max_delay_samples(&self, itd_amount: f32) -> usize {
        let samples = self.sample_rate * MAX_DELAY_MS / 1000.0 * itd_amount as f64;
        (samples as usize).min(MAX_DELAY_SAMPLES)
    }

    fn block_coefficients(&self, pan: f32) -> BlockCoefficients {
        let itd = self.params.itd_amount();
        let shadow = self.params.shadow_strength();
        let depth = self.params.depth();
        let width = self.params.width();

        let max_used = self.max_delay_samples(itd) as f32;
        let left_delay = if pan > 0.0 { (pan * max_used) as usize } else { 0 };
        let right_delay = if pan < 0.0 { (-pan * max_used) as usize } else { 0 };

        let shadow_amount = pan.abs() * shadow;
        let shadow_cutoff = lerp(MIN_CUTOFF_HZ, MAX_CUTOFF_HZ, 1.0 - shadow_amount);
        let shadow_alpha = OnePole::coefficient(shadow_cutoff, self.sample_rate);

        let angle = (pan + 1.0) * FRAC_PI_4;
        let mut left_gain = angle.cos();
        let mut right_gain = angle.sin();
        if width < 1.0 {
            let mid = 0.5 * (left_gain + right_gain);
            let side = 0.5 * (right_gain - left_gain);
            left_gain = mid - side * width;
            right_gain = mid + side * width;
        }

        let depth_alpha = if depth > 0.0 {
            let cutoff = lerp(DEPTH_NEAR_CUTOFF_HZ, DEPTH_FAR_CUTOFF_HZ, depth);
            OnePole::coefficient(cutoff, self.sample_rate)
        } else {
            0.0
        };

        BlockCoefficients {
            left_delay,
            right_delay,
            shadow_alpha,
            left_gain,
            right_gain,
            depth,
            depth_alpha,
        }
    }

    pub fn set_itd_amount(&self, amount: f32) {
        self.params.set_itd_amount(amount);
    }

    pub fn set_shadow_strength(&self, strength: f32) {
        self.params.set_shadow_strength(strength);
    }

    pub fn set_depth(&self, depth: f32) {
        self.params.set_depth(depth);
    }

    pub fn set_width(&self, width: f32) {
        self.params.set_width(width);
    }

    pub fn itd_amount(&self) -> f32 {
        self.params.itd_amount()
    }

    pub fn shadow_strength(&self) -> f32 {
        self.params.shadow_strength()
    }

    pub fn depth(&self) -> f32 {
        self.params.depth()
    }

    pub fn width(&self) -> f32 {
        self.params.width()
    }

    /// Pan used by the most recent block.
    #[inline]
    pub fn last_pan(&self) -> f32 {
        self.last_pan
    }

    #[inline]
    pub fn lfo_phase(&self) -> f64 {
        self.lfo.phase()
    }

    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl Default for Spatializer {
    fn default() -> Self {
        Self::new()
    }
}
