//! The preset record and the built-in presets.

use crate::Result;
use orbit_dsp::params::{
    DEPTH_RANGE, ITD_AMOUNT_RANGE, PAN_RANGE, PAN_SPEED_RANGE, REVERB_WET_RANGE,
    SHADOW_STRENGTH_RANGE, WIDTH_RANGE,
};
use orbit_dsp::{OrbitMode, ReverbParams, SpatialParams};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRESET: &str = "Default";

/// Names of the presets that exist without any file on disk, in display order.
pub const BUILTIN_PRESETS: [&str; 4] = [DEFAULT_PRESET, "Orbit", "Wide", "Narrow"];

/// Every user-facing control, flat and by name.
///
/// Fields missing from a preset file take the neutral defaults. Values are not
/// validated here; applying a preset goes through the clamping setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PresetRecord")]
pub struct Preset {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub pan: f32,
    /// Index of the [`OrbitMode`].
    pub orbit_mode: u8,
    pub pan_speed_hz: f32,
    pub itd_amount: f32,
    pub shadow_strength: f32,
    pub depth: f32,
    pub width: f32,
    pub reverb_wet: f32,
}

/// On-disk shape, including the legacy `autoPan` switch.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PresetRecord {
    name: String,
    pan: f32,
    orbit_mode: u8,
    auto_pan: bool,
    pan_speed_hz: f32,
    itd_amount: f32,
    shadow_strength: f32,
    depth: f32,
    width: f32,
    reverb_wet: f32,
}

impl Default for PresetRecord {
    fn default() -> Self {
        let neutral = Preset::default();
        Self {
            name: String::new(),
            pan: neutral.pan,
            orbit_mode: neutral.orbit_mode,
            auto_pan: false,
            pan_speed_hz: neutral.pan_speed_hz,
            itd_amount: neutral.itd_amount,
            shadow_strength: neutral.shadow_strength,
            depth: neutral.depth,
            width: neutral.width,
            reverb_wet: neutral.reverb_wet,
        }
    }
}

impl From<PresetRecord> for Preset {
    fn from(record: PresetRecord) -> Self {
        // old files only had an on/off auto pan, which meant Orbit
        let orbit_mode = if record.auto_pan {
            OrbitMode::Orbit.index()
        } else {
            record.orbit_mode
        };
        Self {
            name: record.name,
            pan: record.pan,
            orbit_mode,
            pan_speed_hz: record.pan_speed_hz,
            itd_amount: record.itd_amount,
            shadow_strength: record.shadow_strength,
            depth: record.depth,
            width: record.width,
            reverb_wet: record.reverb_wet,
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            name: DEFAULT_PRESET.to_string(),
            pan: PAN_RANGE.default,
            orbit_mode: OrbitMode::Manual.index(),
            pan_speed_hz: PAN_SPEED_RANGE.default,
            itd_amount: ITD_AMOUNT_RANGE.default,
            shadow_strength: SHADOW_STRENGTH_RANGE.default,
            depth: DEPTH_RANGE.default,
            width: WIDTH_RANGE.default,
            reverb_wet: REVERB_WET_RANGE.default,
        }
    }
}

impl Preset {
    /// Neutral settings under another name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Built-in preset by name (case-sensitive).
    pub fn builtin(name: &str) -> Option<Self> {
        let preset = match name {
            DEFAULT_PRESET => Self::default(),
            "Orbit" => Self {
                orbit_mode: OrbitMode::Orbit.index(),
                ..Self::named(name)
            },
            "Wide" => Self {
                itd_amount: 0.5,
                shadow_strength: 0.5,
                ..Self::named(name)
            },
            "Narrow" => Self {
                orbit_mode: OrbitMode::Figure8.index(),
                pan_speed_hz: 0.1,
                depth: 0.2,
                width: 0.7,
                reverb_wet: 0.25,
                ..Self::named(name)
            },
            _ => return None,
        };
        Some(preset)
    }

    pub fn is_builtin(name: &str) -> bool {
        BUILTIN_PRESETS.contains(&name)
    }

    /// The stored mode, or `None` if the index is out of range.
    pub fn orbit_mode(&self) -> Option<OrbitMode> {
        OrbitMode::from_index(self.orbit_mode)
    }

    /// Push every field through the clamping setters.
    ///
    /// An out-of-range mode index falls back to Manual.
    pub fn apply_to(&self, params: &SpatialParams, reverb: &ReverbParams) {
        let mode = self.orbit_mode().unwrap_or_else(|| {
            tracing::warn!(
                "Preset '{}' has unknown orbit mode {}, using Manual",
                self.name,
                self.orbit_mode
            );
            OrbitMode::Manual
        });

        params.set_manual_pan(self.pan);
        params.set_orbit_mode(mode);
        params.set_pan_speed_hz(self.pan_speed_hz);
        params.set_itd_amount(self.itd_amount);
        params.set_shadow_strength(self.shadow_strength);
        params.set_depth(self.depth);
        params.set_width(self.width);
        reverb.set_wet(self.reverb_wet);
    }

    /// Snapshot the current controls as a preset.
    pub fn capture(name: impl Into<String>, params: &SpatialParams, reverb: &ReverbParams) -> Self {
        let snap = params.snapshot();
        Self {
            name: name.into(),
            pan: snap.manual_pan,
            orbit_mode: snap.orbit_mode.index(),
            pan_speed_hz: snap.pan_speed_hz,
            itd_amount: snap.itd_amount,
            shadow_strength: snap.shadow_strength,
            depth: snap.depth,
            width: snap.width,
            reverb_wet: reverb.wet(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
