//! Preset integration tests
//!
//! The engine's preset operations over a temporary preset directory.

use crate::helpers::*;
use approx::assert_abs_diff_eq;
use orbit_audio::prelude::*;
use orbit_audio::{Error, BUILTIN_PRESETS, DEFAULT_PRESET};

#[test]
fn test_save_then_load_restores_controls() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine_with_presets(dir.path());

    engine.set_manual_pan(-0.4);
    engine.set_orbit_mode(OrbitMode::Figure8);
    engine.set_pan_speed_hz(0.2);
    engine.set_depth(0.3);
    engine.set_width(0.6);
    engine.set_reverb_wet(0.1);

    let path = engine.save_preset("Late Night").unwrap();
    assert!(path.starts_with(dir.path()));
    assert!(path.is_file());

    engine.load_preset(DEFAULT_PRESET).unwrap();
    assert_eq!(engine.orbit_mode(), OrbitMode::Manual);
    assert_eq!(engine.depth(), 0.0);

    let loaded = engine.load_preset("Late Night").unwrap();
    assert_eq!(loaded.name, "Late Night");
    assert_eq!(engine.orbit_mode(), OrbitMode::Figure8);
    assert_abs_diff_eq!(engine.manual_pan(), -0.4);
    assert_abs_diff_eq!(engine.pan_speed_hz(), 0.2);
    assert_abs_diff_eq!(engine.depth(), 0.3);
    assert_abs_diff_eq!(engine.width(), 0.6);
    assert_abs_diff_eq!(engine.reverb_wet(), 0.1);
}

#[test]
fn test_list_puts_builtins_first() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine_with_presets(dir.path());

    assert_eq!(engine.list_presets().unwrap(), BUILTIN_PRESETS.to_vec());

    engine.save_preset("Zeta").unwrap();
    engine.save_preset("Alpha").unwrap();

    let names = engine.list_presets().unwrap();
    assert_eq!(&names[..4], &BUILTIN_PRESETS);
    assert_eq!(&names[4..], &["Alpha".to_string(), "Zeta".to_string()]);
}

#[test]
fn test_default_preset_is_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine_with_presets(dir.path());

    let result = engine.save_preset(DEFAULT_PRESET);
    assert!(matches!(
        result,
        Err(Error::Preset(orbit_audio::preset::Error::ReadOnlyPreset(_)))
    ));
}

#[test]
fn test_default_ignores_files_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Default.json"), r#"{ "width": 0.1 }"#).unwrap();
    let engine = test_engine_with_presets(dir.path());
    engine.set_width(0.9);

    engine.load_preset(DEFAULT_PRESET).unwrap();
    assert_eq!(engine.width(), 1.0);
}

#[test]
fn test_stored_file_overrides_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine_with_presets(dir.path());

    let builtin = engine.load_preset("Wide").unwrap();
    assert_abs_diff_eq!(builtin.itd_amount, 0.5);

    engine.set_itd_amount(0.8);
    engine.save_preset("Wide").unwrap();
    engine.load_preset(DEFAULT_PRESET).unwrap();

    let stored = engine.load_preset("Wide").unwrap();
    assert_abs_diff_eq!(stored.itd_amount, 0.8);
    assert_abs_diff_eq!(engine.itd_amount(), 0.8);
}

#[test]
fn test_corrupt_file_falls_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Orbit.json"), "not json at all").unwrap();
    let engine = test_engine_with_presets(dir.path());

    let preset = engine.load_preset("Orbit").unwrap();
    assert_eq!(preset, Preset::builtin("Orbit").unwrap());
    assert_eq!(engine.orbit_mode(), OrbitMode::Orbit);
}

#[test]
fn test_unknown_and_invalid_names() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine_with_presets(dir.path());

    assert!(matches!(
        engine.load_preset("Nowhere"),
        Err(Error::Preset(orbit_audio::preset::Error::UnknownPreset(_)))
    ));
    for name in ["", " padded", "a/b", "..", "c\\d"] {
        assert!(
            matches!(
                engine.save_preset(name),
                Err(Error::Preset(orbit_audio::preset::Error::InvalidName(_)))
            ),
            "name {name:?} should be rejected"
        );
    }
}

#[test]
fn test_hand_written_file_is_clamped_on_apply() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Loud.json"),
        r#"{ "pan": 3.0, "orbitMode": 5, "width": -2.0, "reverbWet": 4.0 }"#,
    )
    .unwrap();
    let engine = test_engine_with_presets(dir.path());
    engine.set_orbit_mode(OrbitMode::Orbit);

    let preset = engine.load_preset("Loud").unwrap();
    assert_eq!(preset.orbit_mode(), None);

    assert_eq!(engine.manual_pan(), 1.0);
    assert_eq!(engine.orbit_mode(), OrbitMode::Manual);
    assert_eq!(engine.width(), 0.0);
    assert_eq!(engine.reverb_wet(), 1.0);
}

#[test]
fn test_legacy_auto_pan_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Old.json"),
        r#"{ "autoPan": true, "panSpeedHz": 0.3 }"#,
    )
    .unwrap();
    let engine = test_engine_with_presets(dir.path());

    engine.load_preset("Old").unwrap();
    assert_eq!(engine.orbit_mode(), OrbitMode::Orbit);
    assert_abs_diff_eq!(engine.pan_speed_hz(), 0.3);
}

#[test]
fn test_current_preset_round_trips_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine_with_presets(dir.path());
    engine.apply_preset(&Preset::builtin("Narrow").unwrap());

    let store = engine.preset_store().unwrap();
    store.save("Copy", &engine.current_preset("Copy")).unwrap();

    let copy = store.load("Copy").unwrap();
    let narrow = Preset::builtin("Narrow").unwrap();
    assert_eq!(copy, Preset { name: "Copy".into(), ..narrow });
}
