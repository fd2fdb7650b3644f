//! Render options.

/// Bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    Int16,
    #[default]
    Int24,
    Float32,
}

impl BitDepth {
    /// Bits per sample.
    pub fn bits(&self) -> u16 {
        match self {
            BitDepth::Int16 => 16,
            BitDepth::Int24 => 24,
            BitDepth::Float32 => 32,
        }
    }

    /// Parse `16`, `24` or `32f`/`32`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "16" => Some(BitDepth::Int16),
            "24" => Some(BitDepth::Int24),
            "32" | "32f" | "f32" => Some(BitDepth::Float32),
            _ => None,
        }
    }
}

/// Offline render options.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Block size fed to the processor. The pan LFO steps once per block.
    pub block_size: usize,
    /// Silence appended after the input so the reverb tail is kept.
    pub tail_seconds: f64,
    /// Output bit depth.
    pub bit_depth: BitDepth,
    /// Reverb switch. Presets only carry the wet level, so it stays off unless asked for.
    pub reverb: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            block_size: 512,
            tail_seconds: 0.0,
            bit_depth: BitDepth::Int24,
            reverb: false,
        }
    }
}

impl RenderOptions {
    /// Number of tail samples at `sample_rate`.
    pub fn tail_samples(&self, sample_rate: u32) -> usize {
        (self.tail_seconds.max(0.0) * sample_rate as f64).round() as usize
    }
}
