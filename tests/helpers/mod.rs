//! Test helpers and fixtures for Orbit integration tests
//!
//! Everything runs offline: processors are driven block by block, exactly as an
//! audio callback would, so results are deterministic.
//!
//! Comparison tolerances live in [`tolerances`].

#![allow(dead_code)]

pub mod tolerances;

use orbit_audio::export::{write_wav, WavConfig};
use orbit_audio::prelude::*;
use orbit_audio::BitDepth;
use std::path::Path;

/// Default test sample rate (matches the reference scenario)
pub const TEST_SAMPLE_RATE: f64 = 44100.0;

/// Standard block size for deterministic testing
pub const TEST_BLOCK_SIZE: usize = 256;

/// Create a test engine without a preset store.
pub fn test_engine() -> OrbitEngine {
    OrbitEngine::builder()
        .sample_rate(TEST_SAMPLE_RATE)
        .block_size(TEST_BLOCK_SIZE)
        .build()
        .expect("Failed to create test engine")
}

/// Create a test engine whose presets live in `dir`.
pub fn test_engine_with_presets(dir: &Path) -> OrbitEngine {
    OrbitEngine::builder()
        .sample_rate(TEST_SAMPLE_RATE)
        .block_size(TEST_BLOCK_SIZE)
        .preset_dir(dir)
        .build()
        .expect("Failed to create test engine")
}

/// Run `left`/`right` through `processor` in blocks of `block_size`.
pub fn process_in_blocks(
    processor: &mut OrbitProcessor,
    left: &mut [f32],
    right: &mut [f32],
    block_size: usize,
) {
    for (l, r) in left.chunks_mut(block_size).zip(right.chunks_mut(block_size)) {
        processor.process(l, r);
    }
}

/// Process a constant stereo signal and return the output channels.
pub fn render_constant(
    processor: &mut OrbitProcessor,
    value: f32,
    num_samples: usize,
) -> (Vec<f32>, Vec<f32>) {
    let mut left = generate_dc(value, num_samples);
    let mut right = generate_dc(value, num_samples);
    process_in_blocks(processor, &mut left, &mut right, TEST_BLOCK_SIZE);
    (left, right)
}

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate silence (zero samples).
pub fn generate_silence(num_samples: usize) -> Vec<f32> {
    vec![0.0; num_samples]
}

/// Generate a DC offset signal (constant value).
pub fn generate_dc(value: f32, num_samples: usize) -> Vec<f32> {
    vec![value; num_samples]
}

/// Generate white noise (random samples in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    // Simple LCG for reproducible "random" noise
    let mut rng = seed;
    (0..num_samples)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((rng >> 33) as f32 / u32::MAX as f32) * 4.0 - 1.0
        })
        .collect()
}

/// Generate an impulse signal (single sample at 1.0, rest zeros).
pub fn generate_impulse(num_samples: usize, position: usize) -> Vec<f32> {
    let mut samples = vec![0.0; num_samples];
    if position < num_samples {
        samples[position] = 1.0;
    }
    samples
}

/// Mean absolute value of a signal.
pub fn mean_abs(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(|s| s.abs()).sum::<f32>() / samples.len() as f32
}

/// Calculate RMS of a signal.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// Index of the first sample whose magnitude exceeds `threshold`.
pub fn first_above(samples: &[f32], threshold: f32) -> Option<usize> {
    samples.iter().position(|s| s.abs() > threshold)
}

/// Assert that a signal is approximately silent (all values near zero).
pub fn assert_silence(samples: &[f32], tolerance: f32) {
    let max = peak(samples);
    assert!(
        max <= tolerance,
        "Expected silence, but peak amplitude was {}",
        max
    );
}

/// Assert that a signal has content (not silent).
pub fn assert_has_audio(samples: &[f32], min_rms: f32) {
    let r = rms(samples);
    assert!(
        r >= min_rms,
        "Expected audio content with RMS >= {}, but RMS was {}",
        min_rms,
        r
    );
}

/// Write a 32-bit float stereo WAV fixture.
pub fn write_test_wav(path: &Path, left: &[f32], right: &[f32], sample_rate: u32) {
    write_wav(path, left, right, &WavConfig::new(sample_rate, BitDepth::Float32))
        .expect("Failed to write test WAV");
}
