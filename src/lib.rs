//! # Orbit - Real-time Binaural Stereo Spatializer
//!
//! Places a stereo signal around the listener's head with interaural time
//! difference, head shadow, distance filtering and stereo width, and can sweep it
//! automatically along an orbit or a figure-8.
//!
//! ## Architecture
//!
//! Orbit is an umbrella crate that coordinates:
//! - **orbit-core** - Lock-free parameter cells, parameter ranges, session config
//! - **orbit-dsp** - Spatializer, pan LFO, reverb and the audio-side processor
//! - **orbit-preset** - Built-in and user presets stored as JSON
//! - **orbit-export** - WAV I/O and offline rendering
//!
//! ## Quick Start
//!
//! ```
//! use orbit_audio::prelude::*;
//!
//! let engine = OrbitEngine::builder()
//!     .sample_rate(48000.0)
//!     .block_size(256)
//!     .build()?;
//!
//! engine.set_orbit_mode(OrbitMode::Figure8);
//! engine.set_pan_speed_hz(0.1);
//!
//! // Audio side: one processor per stream, sharing the engine's controls
//! let mut processor = engine.processor();
//! let mut left = vec![0.5; 256];
//! let mut right = vec![0.5; 256];
//! processor.process(&mut left, &mut right);
//! # Ok::<(), orbit_audio::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - DSP, presets and offline rendering
//! - `io` - Live audio through the default host's input and output devices

/// Re-export of orbit-core for direct access
pub use orbit_core as core;

pub use orbit_core::{AtomicFlag, AtomicFloat, EngineConfig, ParameterRange, ParameterScale};

// DSP
pub use orbit_dsp as dsp;
pub use orbit_dsp::{
    Control, OrbitMode, OrbitProcessor, ParamSnapshot, Reverb, ReverbParams, SpatialParams,
    Spatializer,
};

// Presets
pub use orbit_preset as preset;
pub use orbit_preset::{Preset, PresetStore, BUILTIN_PRESETS, DEFAULT_PRESET};

// Export
pub use orbit_export as export;
pub use orbit_export::{render_file, BitDepth, OfflineRenderer, RenderOptions, RenderResult};

mod error;
pub use error::{Error, Result};

mod builder;
mod engine;

#[cfg(feature = "io")]
mod output;

pub use builder::OrbitEngineBuilder;
pub use engine::OrbitEngine;

/// Convenience prelude for common imports
pub mod prelude {
    // Main engine
    pub use crate::{OrbitEngine, OrbitEngineBuilder};

    // Controls
    pub use crate::{Control, OrbitMode, ReverbParams, SpatialParams};

    // Audio side
    pub use crate::{OrbitProcessor, Spatializer};

    // Presets
    pub use crate::{Preset, PresetStore};
}
