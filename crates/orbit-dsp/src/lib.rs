//! Real-time binaural DSP: the orbit spatializer, its pan LFO and the optional
//! downstream reverb. Parameters are lock-free atomics shared with the control thread.

mod error;
pub use error::{Error, Result};

mod delay_line;
pub use delay_line::{StereoDelayLine, MAX_DELAY_SAMPLES};

mod filter;
pub use filter::OnePole;

mod orbit;
pub use orbit::{OrbitLfo, OrbitMode};

pub mod params;
pub use params::{Control, ParamSnapshot, SpatialParams};

mod spatializer;
pub use spatializer::{
    Spatializer, DEPTH_FAR_CUTOFF_HZ, DEPTH_NEAR_CUTOFF_HZ, MAX_CUTOFF_HZ, MAX_DELAY_MS,
    MIN_CUTOFF_HZ,
};

mod reverb;
pub use reverb::{Reverb, ReverbParams};

mod processor;
pub use processor::OrbitProcessor;
