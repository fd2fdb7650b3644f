//! Control-side facade: owns the shared parameter cells and the preset store.

use crate::{Error, OrbitEngineBuilder, Result};
use orbit_core::{Arc, EngineConfig};
use orbit_dsp::{Control, OrbitMode, OrbitProcessor, ParamSnapshot, ReverbParams, SpatialParams};
use orbit_preset::{Preset, PresetStore, BUILTIN_PRESETS};
use std::path::PathBuf;

#[cfg(feature = "io")]
use crate::output::AudioStream;

/// Every setter is lock-free and may be called from any thread while audio is
/// running; the audio side picks the new value up at its next block.
pub struct OrbitEngine {
    params: Arc<SpatialParams>,
    reverb: Arc<ReverbParams>,
    config: EngineConfig,
    presets: Option<PresetStore>,

    #[cfg(feature = "io")]
    output_device: Option<usize>,
    #[cfg(feature = "io")]
    stream: Option<AudioStream>,
}

impl OrbitEngine {
    pub fn builder() -> OrbitEngineBuilder {
        OrbitEngineBuilder::default()
    }

    pub(crate) fn from_parts(
        config: EngineConfig,
        presets: Option<PresetStore>,
        #[cfg(feature = "io")] output_device: Option<usize>,
    ) -> Self {
        Self {
            params: Arc::new(SpatialParams::new()),
            reverb: Arc::new(ReverbParams::new()),
            config,
            presets,
            #[cfg(feature = "io")]
            output_device,
            #[cfg(feature = "io")]
            stream: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sample_rate(&self) -> f64 {
        self.config.sample_rate
    }

    pub fn block_size(&self) -> usize {
        self.config.block_size
    }

    pub fn params(&self) -> &Arc<SpatialParams> {
        &self.params
    }

    pub fn reverb_params(&self) -> &Arc<ReverbParams> {
        &self.reverb
    }

    /// A new processor sharing this engine's controls, prepared for the
    /// configured rate and block size.
    pub fn processor(&self) -> OrbitProcessor {
        let mut processor = OrbitProcessor::new(Arc::clone(&self.params), Arc::clone(&self.reverb));
        processor.prepare(self.config.block_size, self.config.sample_rate);
        processor
    }

    // =========================================================================
    // Controls
    // =========================================================================

    pub fn set_manual_pan(&self, pan: f32) {
        self.params.set_manual_pan(pan);
    }

    pub fn set_orbit_mode(&self, mode: OrbitMode) {
        self.params.set_orbit_mode(mode);
    }

    pub fn set_pan_speed_hz(&self, speed_hz: f32) {
        self.params.set_pan_speed_hz(speed_hz);
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

    pub fn set_reverb_enabled(&self, enabled: bool) {
        self.reverb.set_enabled(enabled);
    }

    pub fn set_reverb_wet(&self, wet: f32) {
        self.reverb.set_wet(wet);
    }

    pub fn manual_pan(&self) -> f32 {
        self.params.manual_pan()
    }

    pub fn orbit_mode(&self) -> OrbitMode {
        self.params.orbit_mode()
    }

    pub fn pan_speed_hz(&self) -> f32 {
        self.params.pan_speed_hz()
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

    pub fn reverb_enabled(&self) -> bool {
        self.reverb.enabled()
    }

    pub fn reverb_wet(&self) -> f32 {
        self.reverb.wet()
    }

    pub fn snapshot(&self) -> ParamSnapshot {
        self.params.snapshot()
    }

    /// Set `control` to a real value, through the same clamping as its setter.
    pub fn set_control(&self, control: Control, value: f32) {
        match control {
            Control::ManualPan => self.set_manual_pan(value),
            Control::OrbitMode => {
                let index = control.range().clamp(value).round() as u8;
                self.set_orbit_mode(OrbitMode::from_index(index).unwrap_or_default());
            }
            Control::PanSpeed => self.set_pan_speed_hz(value),
            Control::ItdAmount => self.set_itd_amount(value),
            Control::ShadowStrength => self.set_shadow_strength(value),
            Control::Depth => self.set_depth(value),
            Control::Width => self.set_width(value),
            Control::ReverbWet => self.set_reverb_wet(value),
        }
    }

    pub fn control(&self, control: Control) -> f32 {
        match control {
            Control::ManualPan => self.manual_pan(),
            Control::OrbitMode => self.orbit_mode().index() as f32,
            Control::PanSpeed => self.pan_speed_hz(),
            Control::ItdAmount => self.itd_amount(),
            Control::ShadowStrength => self.shadow_strength(),
            Control::Depth => self.depth(),
            Control::Width => self.width(),
            Control::ReverbWet => self.reverb_wet(),
        }
    }

    /// Set `control` from a 0-1 slider position. Pan speed maps logarithmically
    /// and orbit mode snaps to the nearest mode.
    pub fn set_normalized(&self, control: Control, normalized: f32) {
        self.set_control(control, control.range().denormalize(normalized));
    }

    /// Slider position of `control`. Pan speeds outside the UI range read as 0 or 1.
    pub fn normalized(&self, control: Control) -> f32 {
        control.range().normalize(self.control(control))
    }

    /// Put `control` back to its default value.
    pub fn reset_control(&self, control: Control) {
        self.set_normalized(control, control.range().default_normalized());
    }

    // =========================================================================
    // Presets
    // =========================================================================

    pub fn preset_store(&self) -> Option<&PresetStore> {
        self.presets.as_ref()
    }

    /// Push every field of `preset` through the clamping setters.
    ///
    /// The reverb on/off switch is not part of a preset and is left as is.
    pub fn apply_preset(&self, preset: &Preset) {
        preset.apply_to(&self.params, &self.reverb);
        tracing::info!("Applied preset '{}'", preset.name);
    }

    /// The current controls captured under `name`.
    pub fn current_preset(&self, name: &str) -> Preset {
        Preset::capture(name, &self.params, &self.reverb)
    }

    /// Load a preset by name and apply it.
    ///
    /// Without a preset store only the built-ins resolve.
    pub fn load_preset(&self, name: &str) -> Result<Preset> {
        let preset = match self.presets {
            Some(ref store) => store.load(name)?,
            None => Preset::builtin(name)
                .ok_or_else(|| orbit_preset::Error::UnknownPreset(name.to_string()))?,
        };
        self.apply_preset(&preset);
        Ok(preset)
    }

    /// Save the current controls under `name`. Returns the file written.
    pub fn save_preset(&self, name: &str) -> Result<PathBuf> {
        let store = self.presets.as_ref().ok_or(Error::NoPresetStore)?;
        let path = store.save(name, &self.current_preset(name))?;
        Ok(path)
    }

    pub fn list_presets(&self) -> Result<Vec<String>> {
        match self.presets {
            Some(ref store) => Ok(store.list()?),
            None => Ok(BUILTIN_PRESETS.iter().map(|s| s.to_string()).collect()),
        }
    }

    // =========================================================================
    // Audio I/O
    // =========================================================================

    /// Open the input and output devices and start processing.
    ///
    /// Does nothing if the stream is already running.
    #[cfg(feature = "io")]
    pub fn start(&mut self) -> Result<()> {
        if self.stream.is_some() {
            return Ok(());
        }

        let processor = OrbitProcessor::new(Arc::clone(&self.params), Arc::clone(&self.reverb));
        let stream = AudioStream::start(self.output_device, self.config.block_size, processor)?;

        if stream.sample_rate() != self.config.sample_rate {
            tracing::info!(
                "Device runs at {} Hz (configured {} Hz)",
                stream.sample_rate(),
                self.config.sample_rate
            );
            self.config.sample_rate = stream.sample_rate();
        }

        self.stream = Some(stream);
        Ok(())
    }

    /// Stop and close the devices.
    #[cfg(feature = "io")]
    pub fn stop(&mut self) {
        if self.stream.take().is_some() {
            tracing::info!("Audio stopped");
        }
    }

    #[cfg(feature = "io")]
    pub fn is_running(&self) -> bool {
        self.stream.is_some()
    }

    #[cfg(feature = "io")]
    pub fn output_device_name(&self) -> Result<String> {
        crate::output::device_name(self.output_device)
    }

    /// Output devices of the default host, formatted `"<index>: <name>"`.
    #[cfg(feature = "io")]
    pub fn list_output_devices() -> Result<Vec<String>> {
        crate::output::list_devices()
    }
}
