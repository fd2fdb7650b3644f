//! Property tests over the engine's control surface
//!
//! Whatever a preset file or a slider feeds in, every control ends up inside its range.

use crate::helpers::*;
use orbit_audio::prelude::*;
use proptest::prelude::*;

fn any_value() -> impl Strategy<Value = f32> {
    prop_oneof![
        proptest::num::f32::ANY,
        -10.0f32..10.0,
        Just(f32::NAN),
        Just(f32::INFINITY),
    ]
}

fn any_preset() -> impl Strategy<Value = Preset> {
    (
        (any_value(), any::<u8>(), any_value(), any_value()),
        (any_value(), any_value(), any_value(), any_value()),
    )
        .prop_map(
            |((pan, orbit_mode, pan_speed_hz, itd_amount), (shadow, depth, width, wet))| Preset {
                name: "Fuzzed".into(),
                pan,
                orbit_mode,
                pan_speed_hz,
                itd_amount,
                shadow_strength: shadow,
                depth,
                width,
                reverb_wet: wet,
            },
        )
}

fn assert_controls_in_range(engine: &OrbitEngine) -> Result<(), TestCaseError> {
    for control in Control::ALL {
        let value = engine.control(control);
        if control == Control::PanSpeed {
            prop_assert!(value.is_finite() && value >= 0.0, "pan speed {value}");
        } else {
            prop_assert!(control.range().contains(value), "{control:?} = {value}");
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn applied_presets_stay_in_range(preset in any_preset()) {
        let engine = test_engine();
        engine.set_orbit_mode(OrbitMode::Figure8);
        engine.apply_preset(&preset);

        assert_controls_in_range(&engine)?;
        if preset.orbit_mode > 2 {
            prop_assert_eq!(engine.orbit_mode(), OrbitMode::Manual);
        }
    }

    #[test]
    fn slider_positions_stay_in_range(
        index in 0usize..Control::ALL.len(),
        position in any_value(),
    ) {
        let engine = test_engine();
        let control = Control::ALL[index];
        engine.set_normalized(control, position);

        assert_controls_in_range(&engine)?;
        let back = engine.normalized(control);
        prop_assert!((0.0..=1.0).contains(&back), "{control:?} at {back}");
    }
}
