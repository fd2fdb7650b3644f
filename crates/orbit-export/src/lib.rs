//! # Orbit Export
//!
//! Offline rendering for the Orbit spatializer:
//! - **WAV I/O**: read any PCM WAV as stereo, write 16/24-bit int or 32-bit float
//! - **Offline render**: run a file through the same processor the live engine uses
//!
//! ```no_run
//! use orbit_export::{render_file, RenderOptions};
//! use orbit_preset::Preset;
//!
//! let preset = Preset::builtin("Orbit").unwrap();
//! let result = render_file("in.wav", "out.wav", &preset, &RenderOptions::default())?;
//! println!("peak {:.3}", result.peak_level);
//! # Ok::<(), orbit_export::ExportError>(())
//! ```

pub mod error;
pub mod format;
mod options;
mod renderer;

pub use error::{ExportError, Result};
pub use format::wav::{
    decode_wav_memory, encode_wav_memory, read_wav, write_wav, StereoBuffer, WavConfig,
};
pub use options::{BitDepth, RenderOptions};
pub use renderer::{OfflineRenderer, RenderProgressCallback, RenderResult};

use orbit_core::Arc;
use orbit_dsp::{OrbitProcessor, ReverbParams, SpatialParams};
use orbit_preset::Preset;
use std::path::Path;

/// Read `input`, render it with `preset` applied and write the result to `output`.
///
/// The reverb runs only when `options.reverb` is set; the preset supplies its wet level.
pub fn render_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    preset: &Preset,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let source = read_wav(input)?;

    let params = Arc::new(SpatialParams::new());
    let reverb = Arc::new(ReverbParams::new());
    preset.apply_to(&params, &reverb);
    reverb.set_enabled(options.reverb);

    let mut renderer = OfflineRenderer::new(OrbitProcessor::new(params, reverb), options.clone());
    let result = renderer.render(&source, None)?;

    let config = WavConfig::new(result.sample_rate, options.bit_depth);
    write_wav(output, &result.left, &result.right, &config)?;
    Ok(result)
}
