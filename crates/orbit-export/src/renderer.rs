//! Offline renderer
//!
//! Runs a stereo buffer through an [`OrbitProcessor`] block by block, exactly as the
//! audio callback would, without any real-time constraints.

use crate::error::{ExportError, Result};
use crate::format::wav::StereoBuffer;
use crate::options::RenderOptions;
use orbit_core::EngineConfig;
use orbit_dsp::OrbitProcessor;

/// Progress callback for render operations
pub type RenderProgressCallback = Box<dyn Fn(f32) + Send>;

/// Result of a render operation
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Left channel audio data
    pub left: Vec<f32>,
    /// Right channel audio data
    pub right: Vec<f32>,
    /// Sample rate of the rendered audio
    pub sample_rate: u32,
    /// Peak level (linear)
    pub peak_level: f32,
    /// Number of samples rendered
    pub length_samples: usize,
}

impl RenderResult {
    /// Get duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.length_samples as f64 / self.sample_rate as f64
    }

    /// Get interleaved stereo data [L, R, L, R, ...]
    pub fn interleaved(&self) -> Vec<f32> {
        self.left
            .iter()
            .zip(self.right.iter())
            .flat_map(|(&l, &r)| [l, r])
            .collect()
    }
}

/// Offline renderer
pub struct OfflineRenderer {
    processor: OrbitProcessor,
    options: RenderOptions,
}

impl OfflineRenderer {
    pub fn new(processor: OrbitProcessor, options: RenderOptions) -> Self {
        Self { processor, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn processor(&self) -> &OrbitProcessor {
        &self.processor
    }

    /// Render `input` (plus the configured tail) through the processor.
    ///
    /// The processor is prepared for the input's sample rate first, so every render
    /// starts from silence with the LFO at phase 0.
    ///
    /// # Arguments
    /// * `input` - Stereo source audio
    /// * `progress` - Optional progress callback (0.0 to 1.0)
    pub fn render(
        &mut self,
        input: &StereoBuffer,
        progress: Option<RenderProgressCallback>,
    ) -> Result<RenderResult> {
        if input.left.len() != input.right.len() {
            return Err(ExportError::InvalidData(
                "Left and right channels have different lengths".into(),
            ));
        }

        let config = EngineConfig::new(input.sample_rate as f64, self.options.block_size);
        config.validate()?;

        let total_samples = input.len() + self.options.tail_samples(input.sample_rate);
        let mut left = input.left.clone();
        let mut right = input.right.clone();
        left.resize(total_samples, 0.0);
        right.resize(total_samples, 0.0);

        tracing::info!(
            samples = total_samples,
            sample_rate = input.sample_rate,
            block_size = config.block_size,
            "Rendering"
        );

        self.processor.prepare(config.block_size, config.sample_rate);

        let total_blocks = total_samples.div_ceil(config.block_size).max(1);
        for (index, (l, r)) in left
            .chunks_mut(config.block_size)
            .zip(right.chunks_mut(config.block_size))
            .enumerate()
        {
            self.processor.process(l, r);

            if let Some(ref callback) = progress {
                callback((index + 1) as f32 / total_blocks as f32);
            }
        }

        let peak_level = left
            .iter()
            .chain(right.iter())
            .fold(0.0f32, |peak, s| peak.max(s.abs()));

        tracing::info!(peak = peak_level, "Render finished");

        Ok(RenderResult {
            left,
            right,
            sample_rate: input.sample_rate,
            peak_level,
            length_samples: total_samples,
        })
    }
}
