//! Centralized error type for the orbit-audio umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] orbit_core::Error),

    #[error("DSP: {0}")]
    Dsp(#[from] orbit_dsp::Error),

    #[error("Preset: {0}")]
    Preset(#[from] orbit_preset::Error),

    #[error("Export: {0}")]
    Export(#[from] orbit_export::ExportError),

    #[error("No preset store configured")]
    NoPresetStore,

    #[cfg(feature = "io")]
    #[error("Invalid device: {0}")]
    InvalidDevice(String),

    #[cfg(feature = "io")]
    #[error("Audio device not available")]
    DeviceNotAvailable(#[from] cpal::DefaultStreamConfigError),

    #[cfg(feature = "io")]
    #[error("Failed to build audio stream")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[cfg(feature = "io")]
    #[error("Failed to play audio stream")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[cfg(feature = "io")]
    #[error("Failed to enumerate devices")]
    DevicesError(#[from] cpal::DevicesError),

    #[cfg(feature = "io")]
    #[error("Failed to get device name")]
    DeviceNameError(#[from] cpal::DeviceNameError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
