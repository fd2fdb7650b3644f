//! Engine integration tests
//!
//! Builder validation, the control surface and processors created from the engine.

use crate::helpers::tolerances::*;
use crate::helpers::*;
use approx::assert_abs_diff_eq;
use orbit_audio::prelude::*;
use orbit_audio::{EngineConfig, Error, ParamSnapshot};

#[test]
fn test_builder_applies_config() {
    let engine = OrbitEngine::builder()
        .sample_rate(48000.0)
        .block_size(64)
        .build()
        .unwrap();

    assert_eq!(engine.config(), &EngineConfig::new(48000.0, 64));

    let processor = engine.processor();
    assert_eq!(processor.spatializer().sample_rate(), 48000.0);
    assert_eq!(processor.spatializer().block_size(), 64);
}

#[test]
fn test_builder_rejects_invalid_config() {
    for (rate, block) in [(0.0, 256), (f64::NAN, 256), (1_000_000.0, 256), (44100.0, 0)] {
        let result = OrbitEngine::builder()
            .sample_rate(rate)
            .block_size(block)
            .build();
        assert!(
            matches!(result, Err(Error::Core(_))),
            "rate {rate}, block {block} should be rejected"
        );
    }
}

#[test]
fn test_fresh_engine_has_neutral_controls() {
    let engine = test_engine();
    let snap = engine.snapshot();

    assert_eq!(snap, ParamSnapshot::default());
    assert_eq!(engine.orbit_mode(), OrbitMode::Manual);
    assert_eq!(engine.manual_pan(), 0.0);
    assert_eq!(engine.itd_amount(), 1.0);
    assert_eq!(engine.shadow_strength(), 1.0);
    assert_eq!(engine.depth(), 0.0);
    assert_eq!(engine.width(), 1.0);
    assert_abs_diff_eq!(engine.pan_speed_hz(), 0.05);
    assert!(!engine.reverb_enabled());
    assert_abs_diff_eq!(engine.reverb_wet(), 0.33);
}

#[test]
fn test_controls_saturate() {
    let engine = test_engine();

    engine.set_itd_amount(-1.0);
    engine.set_shadow_strength(7.0);
    engine.set_depth(f32::NAN);
    engine.set_width(-0.5);
    engine.set_manual_pan(2.0);
    engine.set_pan_speed_hz(-3.0);

    assert_eq!(engine.itd_amount(), 0.0);
    assert_eq!(engine.shadow_strength(), 1.0);
    assert_eq!(engine.depth(), 0.0);
    assert_eq!(engine.width(), 0.0);
    assert_eq!(engine.manual_pan(), 1.0);
    assert!(engine.pan_speed_hz() >= 0.0);
}

#[test]
fn test_processors_follow_engine_controls() {
    let engine = test_engine();
    let mut first = engine.processor();
    let mut second = engine.processor();

    engine.set_manual_pan(-1.0);

    let (left_a, right_a) = render_constant(&mut first, 1.0, TEST_BLOCK_SIZE);
    let (left_b, right_b) = render_constant(&mut second, 1.0, TEST_BLOCK_SIZE);

    assert_eq!(left_a, left_b);
    assert_eq!(right_a, right_b);
    assert_abs_diff_eq!(mean_abs(&left_a), 1.0, epsilon = FLOAT_EPSILON);
    assert_silence(&right_a, SILENCE_THRESHOLD);
}

#[test]
fn test_processor_runs_on_another_thread() {
    let engine = test_engine();
    engine.set_orbit_mode(OrbitMode::Orbit);
    engine.set_pan_speed_hz(0.5);
    let mut processor = engine.processor();

    let audio = std::thread::spawn(move || {
        let (left, right) = render_constant(&mut processor, 0.5, TEST_BLOCK_SIZE * 64);
        (left, right, processor.spatializer().lfo_phase())
    });

    engine.set_width(0.5);
    let (left, right, phase) = audio.join().unwrap();

    assert!(phase > 0.0);
    assert_has_audio(&left, 0.01);
    assert_has_audio(&right, 0.01);
}

#[test]
fn test_reverb_switch_adds_a_tail() {
    let engine = test_engine();
    engine.set_reverb_wet(0.8);
    let mut processor = engine.processor();

    let tail_peak = |processor: &mut OrbitProcessor| {
        let mut left = generate_impulse(TEST_BLOCK_SIZE * 40, 0);
        let mut right = generate_impulse(TEST_BLOCK_SIZE * 40, 0);
        process_in_blocks(processor, &mut left, &mut right, TEST_BLOCK_SIZE);
        peak(&left[TEST_BLOCK_SIZE * 4..])
    };

    assert!(tail_peak(&mut processor) <= SILENCE_THRESHOLD);

    engine.set_reverb_enabled(true);
    processor.prepare(TEST_BLOCK_SIZE, TEST_SAMPLE_RATE);
    assert!(tail_peak(&mut processor) > SILENCE_THRESHOLD);
}

#[test]
fn test_interleaved_device_buffer() {
    let engine = test_engine();
    engine.set_manual_pan(-1.0);
    let mut processor = engine.processor();

    // 3 channels, longer than one block
    let frames = TEST_BLOCK_SIZE * 2 + 17;
    let mut data: Vec<f32> = (0..frames).flat_map(|_| [1.0, 1.0, 0.25]).collect();
    processor.process_interleaved(&mut data, 3);

    for frame in data.chunks_exact(3) {
        assert_abs_diff_eq!(frame[0], 1.0, epsilon = FLOAT_EPSILON);
        assert_abs_diff_eq!(frame[1], 0.0, epsilon = FLOAT_EPSILON);
        assert_eq!(frame[2], 0.25);
    }
}
