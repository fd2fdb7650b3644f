//! Error types for orbit-export

use std::io;
use thiserror::Error;

/// Export error type
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// WAV decoding or encoding failed
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Input file uses a layout this crate cannot read
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Invalid audio data
    #[error("Invalid audio data: {0}")]
    InvalidData(String),

    /// Rejected render configuration
    #[error(transparent)]
    Config(#[from] orbit_core::Error),

    /// Preset could not be resolved
    #[error(transparent)]
    Preset(#[from] orbit_preset::Error),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
