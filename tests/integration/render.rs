//! Offline render integration tests
//!
//! WAV files in, spatialized WAV files out, compared against the live processor.

use crate::helpers::tolerances::*;
use crate::helpers::*;
use approx::assert_abs_diff_eq;
use orbit_audio::export::read_wav;
use orbit_audio::prelude::*;
use orbit_audio::{render_file, BitDepth, OfflineRenderer, RenderOptions};

#[test]
fn test_render_matches_live_processor() {
    let engine = test_engine();
    engine.apply_preset(&Preset::builtin("Narrow").unwrap());

    let input = generate_sine(440.0, TEST_SAMPLE_RATE, TEST_BLOCK_SIZE * 12);
    let source = orbit_audio::export::StereoBuffer {
        left: input.clone(),
        right: input.clone(),
        sample_rate: TEST_SAMPLE_RATE as u32,
    };

    let options = RenderOptions {
        block_size: TEST_BLOCK_SIZE,
        ..Default::default()
    };
    let mut renderer = OfflineRenderer::new(engine.processor(), options);
    let rendered = renderer.render(&source, None).unwrap();

    let mut processor = engine.processor();
    let (mut left, mut right) = (input.clone(), input);
    process_in_blocks(&mut processor, &mut left, &mut right, TEST_BLOCK_SIZE);

    assert_eq!(rendered.left, left);
    assert_eq!(rendered.right, right);
}

#[test]
fn test_render_file_hard_left() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");

    let tone = generate_dc(0.5, 4096);
    write_test_wav(&input, &tone, &tone, 44100);

    let preset = Preset {
        pan: -1.0,
        reverb_wet: 0.0,
        ..Preset::default()
    };
    let options = RenderOptions {
        bit_depth: BitDepth::Float32,
        ..Default::default()
    };
    let result = render_file(&input, &output, &preset, &options).unwrap();
    assert_abs_diff_eq!(result.peak_level, 0.5, epsilon = FLOAT_EPSILON);

    let written = read_wav(&output).unwrap();
    assert_eq!(written.sample_rate, 44100);
    assert_eq!(written.len(), 4096);
    assert_abs_diff_eq!(mean_abs(&written.left), 0.5, epsilon = FLOAT_EPSILON);
    assert_silence(&written.right, SILENCE_THRESHOLD);
}

#[test]
fn test_render_file_with_reverb_tail() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("click.wav");
    let output = dir.path().join("room.wav");

    let click = generate_impulse(1024, 0);
    write_test_wav(&input, &click, &click, 48000);

    let options = RenderOptions {
        tail_seconds: 1.0,
        bit_depth: BitDepth::Int24,
        reverb: true,
        ..Default::default()
    };
    let preset = Preset::builtin("Orbit").unwrap();
    render_file(&input, &output, &preset, &options).unwrap();

    let written = read_wav(&output).unwrap();
    assert_eq!(written.len(), 1024 + 48000);
    assert_has_audio(&written.left[1024..], INT24_EPSILON);
}

#[test]
fn test_default_render_is_dry_like_a_fresh_engine() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("click.wav");
    let output = dir.path().join("dry.wav");

    let click = generate_impulse(44100, 0);
    write_test_wav(&input, &click, &click, 44100);

    let options = RenderOptions {
        bit_depth: BitDepth::Float32,
        ..Default::default()
    };
    render_file(&input, &output, &Preset::default(), &options).unwrap();
    let written = read_wav(&output).unwrap();

    assert_silence(&written.left[2000..], SILENCE_THRESHOLD);
    assert_silence(&written.right[2000..], SILENCE_THRESHOLD);

    // the live engine with the same preset applied stays dry as well
    let engine = test_engine();
    engine.apply_preset(&Preset::default());
    assert!(!engine.reverb_enabled());
}

#[test]
fn test_render_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = render_file(
        dir.path().join("missing.wav"),
        dir.path().join("out.wav"),
        &Preset::default(),
        &RenderOptions::default(),
    );
    assert!(result.is_err());
    assert!(!dir.path().join("out.wav").exists());
}
