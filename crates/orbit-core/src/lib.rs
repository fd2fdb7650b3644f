//! Shared building blocks for the Orbit spatializer.
//!
//! - [`AtomicFloat`] / [`AtomicFlag`]: cache-line aligned cells for control → audio
//!   parameter handoff without locks
//! - [`ParameterRange`]: value ranges, defaults and UI normalization
//! - [`EngineConfig`]: validated session configuration (sample rate, block size)
//!
//! Nothing in this crate allocates or blocks on the audio thread.

pub mod error;
pub use error::{Error, Result};

mod config;
pub use config::EngineConfig;

pub(crate) mod lockfree;
pub use lockfree::{AtomicFlag, AtomicFloat};

pub mod parameter;
pub use parameter::{ParameterRange, ParameterScale};

pub use std::sync::atomic::{AtomicU8, Ordering};
pub use std::sync::Arc;
