//! Builder for configuring and constructing an `OrbitEngine`.

use crate::{OrbitEngine, Result};
use orbit_core::EngineConfig;
use orbit_preset::PresetStore;
use std::path::PathBuf;

enum PresetSource {
    None,
    Default,
    Dir(PathBuf),
}

/// The preset store is opt-in: `.preset_dir(path)` for an explicit folder or
/// `.default_presets()` for the platform data directory. Without one, only the
/// built-in presets are available.
///
/// # Example
///
/// ```
/// use orbit_audio::prelude::*;
///
/// let dir = tempfile::tempdir()?;
/// let engine = OrbitEngine::builder()
///     .sample_rate(44100.0)
///     .block_size(512)
///     .preset_dir(dir.path())
///     .build()?;
///
/// assert_eq!(engine.block_size(), 512);
/// assert!(engine.preset_store().is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct OrbitEngineBuilder {
    config: EngineConfig,
    presets: PresetSource,

    #[cfg(feature = "io")]
    output_device: Option<usize>,
}

impl Default for OrbitEngineBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            presets: PresetSource::None,

            #[cfg(feature = "io")]
            output_device: None,
        }
    }
}

impl OrbitEngineBuilder {
    /// Default: 44100.0
    ///
    /// With the `io` feature, the device's own rate takes over once the stream
    /// starts.
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.config.sample_rate = sample_rate;
        self
    }

    /// Default: 256
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.config.block_size = block_size;
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn preset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.presets = PresetSource::Dir(dir.into());
        self
    }

    /// Use `<data dir>/OrbitAudio/Presets`. Falls back to built-ins only if the
    /// platform has no data directory.
    pub fn default_presets(mut self) -> Self {
        self.presets = PresetSource::Default;
        self
    }

    #[cfg(feature = "io")]
    pub fn output_device(mut self, index: usize) -> Self {
        self.output_device = Some(index);
        self
    }

    pub fn build(self) -> Result<OrbitEngine> {
        self.config.validate()?;

        let presets = match self.presets {
            PresetSource::None => None,
            PresetSource::Dir(dir) => Some(PresetStore::new(dir)),
            PresetSource::Default => match PresetStore::open_default() {
                Ok(store) => Some(store),
                Err(e) => {
                    tracing::warn!("No preset directory ({}), using built-ins only", e);
                    None
                }
            },
        };

        if let Some(ref store) = presets {
            tracing::debug!("Preset directory: {}", store.dir().display());
        }

        Ok(OrbitEngine::from_parts(
            self.config,
            presets,
            #[cfg(feature = "io")]
            self.output_device,
        ))
    }
}
