//! Error types for orbit-preset

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Preset '{0}' is built in and cannot be overwritten")]
    ReadOnlyPreset(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid preset name: {0:?}")]
    InvalidName(String),

    #[error("No platform data directory available for presets")]
    NoPresetDirectory,
}

pub type Result<T> = std::result::Result<T, Error>;
