//! Named spatializer presets.
//!
//! A [`Preset`] is a flat record of every control. [`PresetStore`] keeps user
//! presets as JSON files next to the built-ins (Default, Orbit, Wide, Narrow).
//!
//! ```no_run
//! use orbit_preset::PresetStore;
//!
//! let store = PresetStore::open_default()?;
//! let narrow = store.load("Narrow")?;
//! store.save("My Narrow", &narrow)?;
//! # Ok::<(), orbit_preset::Error>(())
//! ```

mod error;
pub use error::{Error, Result};

mod preset;
pub use preset::{Preset, BUILTIN_PRESETS, DEFAULT_PRESET};

mod store;
pub use store::PresetStore;
