//! Error types for orbit-dsp

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid orbit mode index: {0} (expected 0-2)")]
    InvalidOrbitMode(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
