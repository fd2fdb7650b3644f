//! The full audio chain: spatializer, then the optional reverb.

use crate::{Reverb, ReverbParams, SpatialParams, Spatializer};
use orbit_core::Arc;

const DEFAULT_BLOCK_SIZE: usize = 512;

/// Audio-thread half of the engine.
///
/// Reads every control from the shared [`SpatialParams`] and [`ReverbParams`]
/// once per block. Create one per stream, call [`prepare`](Self::prepare) before
/// the first block, then feed it from the audio callback.
pub struct OrbitProcessor {
    spatializer: Spatializer,
    reverb: Reverb,
    reverb_params: Arc<ReverbParams>,
    scratch_left: Vec<f32>,
    scratch_right: Vec<f32>,
}

impl OrbitProcessor {
    pub fn new(params: Arc<SpatialParams>, reverb_params: Arc<ReverbParams>) -> Self {
        Self {
            spatializer: Spatializer::with_params(params),
            reverb: Reverb::default(),
            reverb_params,
            scratch_left: vec![0.0; DEFAULT_BLOCK_SIZE],
            scratch_right: vec![0.0; DEFAULT_BLOCK_SIZE],
        }
    }

    /// Reset both stages and size the interleaving scratch buffers.
    ///
    /// Allocates; call it outside the audio callback.
    pub fn prepare(&mut self, block_size: usize, sample_rate: f64) {
        self.spatializer.prepare(block_size, sample_rate);
        self.reverb.prepare(sample_rate);
        self.reverb.set_wet(self.reverb_params.wet());

        let scratch = block_size.max(1);
        self.scratch_left = vec![0.0; scratch];
        self.scratch_right = vec![0.0; scratch];
    }

    /// Process one stereo block in place.
    pub fn process(&mut self, left: &mut [f32], right: &mut [f32]) {
        self.spatializer.process_block(left, right);

        if self.reverb_params.enabled() {
            self.reverb.set_wet(self.reverb_params.wet());
            self.reverb.process_stereo(left, right);
        }
    }

    /// Process an interleaved buffer in place.
    ///
    /// The first two channels are spatialized; any further channels are left
    /// untouched. Buffers longer than the prepared block size are split into
    /// chunks, each one a block for the pan LFO. Mono buffers are processed as a
    /// centred stereo pair and folded back.
    pub fn process_interleaved(&mut self, data: &mut [f32], channels: usize) {
        if channels == 0 {
            return;
        }
        let chunk_frames = self.scratch_left.len();

        for chunk in data.chunks_mut(chunk_frames * channels) {
            let frames = chunk.len() / channels;
            let left = &mut self.scratch_left[..frames];
            let right = &mut self.scratch_right[..frames];

            for (i, frame) in chunk.chunks_exact(channels).enumerate() {
                left[i] = frame[0];
                right[i] = if channels > 1 { frame[1] } else { frame[0] };
            }

            self.spatializer.process_block(left, right);
            if self.reverb_params.enabled() {
                self.reverb.set_wet(self.reverb_params.wet());
                self.reverb.process_stereo(left, right);
            }

            for (i, frame) in chunk.chunks_exact_mut(channels).enumerate() {
                if channels > 1 {
                    frame[0] = left[i];
                    frame[1] = right[i];
                } else {
                    frame[0] = 0.5 * (left[i] + right[i]);
                }
            }
        }
    }

    pub fn spatializer(&self) -> &Spatializer {
        &self.spatializer
    }

    pub fn spatializer_mut(&mut self) -> &mut Spatializer {
        &mut self.spatializer
    }

    pub fn reverb_params(&self) -> &Arc<ReverbParams> {
        &self.reverb_params
    }
}
