//! Freeverb-style stereo reverb placed after the spatializer.
//!
//! Eight damped comb filters in parallel feed four allpasses in series, per
//! channel. The right channel's delay lines are [`STEREO_SPREAD`] samples longer
//! at 44.1 kHz, which decorrelates the tails. Lengths scale with the sample rate.

use crate::params::REVERB_WET_RANGE;
use orbit_core::{AtomicFlag, AtomicFloat};

// Delay lengths in samples at 44.1 kHz
const COMB_TUNING: [usize; 8] = [1116, 1188, 1277, 1356, 1422, 1491, 1557, 1617];
const ALLPASS_TUNING: [usize; 4] = [556, 441, 341, 225];
const STEREO_SPREAD: usize = 23;
const TUNING_SAMPLE_RATE: f64 = 44100.0;

const FIXED_GAIN: f32 = 0.015;
const ROOM_SCALE: f32 = 0.28;
const ROOM_OFFSET: f32 = 0.7;
const DAMP_SCALE: f32 = 0.4;
const WET_SCALE: f32 = 3.0;
const DRY_SCALE: f32 = 2.0;
const ALLPASS_FEEDBACK: f32 = 0.5;

#[derive(Debug, Clone)]
struct Comb {
    buffer: Vec<f32>,
    index: usize,
    filter_store: f32,
}

impl Comb {
    fn new(size: usize) -> Self {
        Self {
            buffer: vec![0.0; size.max(1)],
            index: 0,
            filter_store: 0.0,
        }
    }

    #[inline]
    fn process(&mut self, input: f32, feedback: f32, damp: f32) -> f32 {
        let output = self.buffer[self.index];
        self.filter_store = output * (1.0 - damp) + self.filter_store * damp;
        self.buffer[self.index] = input + self.filter_store * feedback;
        self.index = (self.index + 1) % self.buffer.len();
        output
    }

    fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.index = 0;
        self.filter_store = 0.0;
    }
}

#[derive(Debug, Clone)]
struct Allpass {
    buffer: Vec<f32>,
    index: usize,
}

impl Allpass {
    fn new(size: usize) -> Self {
        Self {
            buffer: vec![0.0; size.max(1)],
            index: 0,
        }
    }

    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let buffered = self.buffer[self.index];
        self.buffer[self.index] = input + buffered * ALLPASS_FEEDBACK;
        self.index = (self.index + 1) % self.buffer.len();
        buffered - input
    }

    fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.index = 0;
    }
}

/// Control cells for the reverb: on/off and wet level.
#[derive(Debug)]
pub struct ReverbParams {
    enabled: AtomicFlag,
    wet: AtomicFloat,
}

impl Default for ReverbParams {
    fn default() -> Self {
        Self {
            enabled: AtomicFlag::new(false),
            wet: AtomicFloat::new(REVERB_WET_RANGE.default),
        }
    }
}

impl ReverbParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn set_wet(&self, wet: f32) {
        self.wet.set_clamped(wet, &REVERB_WET_RANGE);
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled.get()
    }

    #[inline]
    pub fn wet(&self) -> f32 {
        self.wet.get()
    }
}

/// Stereo reverb.
///
/// Delay buffers are sized for the sample rate in [`new`](Self::new) and
/// [`prepare`](Self::prepare); [`process_stereo`](Self::process_stereo) never allocates.
#[derive(Debug, Clone)]
pub struct Reverb {
    combs_left: Vec<Comb>,
    combs_right: Vec<Comb>,
    allpasses_left: Vec<Allpass>,
    allpasses_right: Vec<Allpass>,
    sample_rate: f64,
    room_size: f32,
    damping: f32,
    wet: f32,
    dry: f32,
    width: f32,
}

impl Reverb {
    pub const DEFAULT_ROOM_SIZE: f32 = 0.5;
    pub const DEFAULT_DAMPING: f32 = 0.5;
    pub const DEFAULT_DRY: f32 = 0.4;
    pub const DEFAULT_WIDTH: f32 = 1.0;

    pub fn new(sample_rate: f64) -> Self {
        let scale = sample_rate / TUNING_SAMPLE_RATE;
        let scaled = |tuning: usize, spread: usize| ((tuning + spread) as f64 * scale) as usize;

        Self {
            combs_left: COMB_TUNING.iter().map(|&t| Comb::new(scaled(t, 0))).collect(),
            combs_right: COMB_TUNING
                .iter()
                .map(|&t| Comb::new(scaled(t, STEREO_SPREAD)))
                .collect(),
            allpasses_left: ALLPASS_TUNING
                .iter()
                .map(|&t| Allpass::new(scaled(t, 0)))
                .collect(),
            allpasses_right: ALLPASS_TUNING
                .iter()
                .map(|&t| Allpass::new(scaled(t, STEREO_SPREAD)))
                .collect(),
            sample_rate,
            room_size: Self::DEFAULT_ROOM_SIZE,
            damping: Self::DEFAULT_DAMPING,
            wet: REVERB_WET_RANGE.default,
            dry: Self::DEFAULT_DRY,
            width: Self::DEFAULT_WIDTH,
        }
    }

    /// Resize for a new sample rate (allocates if the rate changed) and clear tails.
    pub fn prepare(&mut self, sample_rate: f64) {
        if sample_rate != self.sample_rate {
            let settings = (self.room_size, self.damping, self.wet, self.dry, self.width);
            *self = Self::new(sample_rate);
            (self.room_size, self.damping, self.wet, self.dry, self.width) = settings;
        } else {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.combs_left
            .iter_mut()
            .chain(self.combs_right.iter_mut())
            .for_each(Comb::clear);
        self.allpasses_left
            .iter_mut()
            .chain(self.allpasses_right.iter_mut())
            .for_each(Allpass::clear);
    }

    pub fn set_room_size(&mut self, room_size: f32) {
        self.room_size = room_size.clamp(0.0, 1.0);
    }

    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping.clamp(0.0, 1.0);
    }

    pub fn set_wet(&mut self, wet: f32) {
        self.wet = REVERB_WET_RANGE.clamp(wet);
    }

    pub fn set_dry(&mut self, dry: f32) {
        self.dry = dry.clamp(0.0, 1.0);
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.clamp(0.0, 1.0);
    }

    pub fn wet(&self) -> f32 {
        self.wet
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Process a stereo block in place.
    pub fn process_stereo(&mut self, left: &mut [f32], right: &mut [f32]) {
        let feedback = self.room_size * ROOM_SCALE + ROOM_OFFSET;
        let damp = self.damping * DAMP_SCALE;
        let wet = self.wet * WET_SCALE;
        let wet1 = 0.5 * wet * (1.0 + self.width);
        let wet2 = 0.5 * wet * (1.0 - self.width);
        let dry = self.dry * DRY_SCALE;

        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let input = (*l + *r) * FIXED_GAIN;

            let mut out_l: f32 = self
                .combs_left
                .iter_mut()
                .map(|c| c.process(input, feedback, damp))
                .sum();
            let mut out_r: f32 = self
                .combs_right
                .iter_mut()
                .map(|c| c.process(input, feedback, damp))
                .sum();

            for allpass in &mut self.allpasses_left {
                out_l = allpass.process(out_l);
            }
            for allpass in &mut self.allpasses_right {
                out_r = allpass.process(out_r);
            }

            *l = out_l * wet1 + out_r * wet2 + *l * dry;
            *r = out_r * wet1 + out_l * wet2 + *r * dry;
        }
    }
}

impl Default for Reverb {
    fn default() -> Self {
        Self::new(TUNING_SAMPLE_RATE)
    }
}
