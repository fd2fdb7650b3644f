//! WAV reading and writing using hound
//!
//! Reads any integer or float PCM WAV. Writes 16-bit, 24-bit, and 32-bit float
//! stereo.

use crate::error::{ExportError, Result};
use crate::options::BitDepth;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::{Read, Seek, Write};
use std::path::Path;

/// Decoded stereo audio.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoBuffer {
    pub left: Vec<f32>,
    pub right: Vec<f32>,
    pub sample_rate: u32,
}

impl StereoBuffer {
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    pub fn duration_seconds(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }
}

/// WAV encoder configuration
#[derive(Debug, Clone)]
pub struct WavConfig {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bit depth
    pub bit_depth: BitDepth,
}

impl Default for WavConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            bit_depth: BitDepth::Int16,
        }
    }
}

impl WavConfig {
    pub fn new(sample_rate: u32, bit_depth: BitDepth) -> Self {
        Self {
            sample_rate,
            bit_depth,
        }
    }
}

/// Read a WAV file as stereo.
///
/// Mono files are duplicated onto both channels; files with more than two channels
/// keep the first two. Integer samples are scaled to [-1, 1].
pub fn read_wav(path: impl AsRef<Path>) -> Result<StereoBuffer> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    tracing::debug!("Reading {}", path.display());
    decode(reader)
}

/// Decode WAV bytes as stereo. See [`read_wav`].
pub fn decode_wav_memory(bytes: &[u8]) -> Result<StereoBuffer> {
    decode(WavReader::new(std::io::Cursor::new(bytes))?)
}

fn decode<R: Read>(reader: WavReader<R>) -> Result<StereoBuffer> {
    let spec = reader.spec();
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(ExportError::UnsupportedFormat("WAV file has no channels".into()));
    }
    if channels > 2 {
        tracing::warn!("{} channel input, keeping the first two", channels);
    }

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Int => {
            if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                return Err(ExportError::UnsupportedFormat(format!(
                    "{}-bit integer samples",
                    spec.bits_per_sample
                )));
            }
            let scale = 1.0 / (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<std::result::Result<_, _>>()?
        }
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<_, _>>()?,
    };

    let frames = samples.len() / channels;
    let mut left = Vec::with_capacity(frames);
    let mut right = Vec::with_capacity(frames);
    for frame in samples.chunks_exact(channels) {
        left.push(frame[0]);
        right.push(if channels > 1 { frame[1] } else { frame[0] });
    }

    Ok(StereoBuffer {
        left,
        right,
        sample_rate: spec.sample_rate,
    })
}

/// Encode stereo audio to a WAV file
///
/// # Arguments
/// * `left` - Left channel samples (normalized -1.0 to 1.0)
/// * `right` - Right channel samples (normalized -1.0 to 1.0)
/// * `path` - Output file path
/// * `config` - WAV configuration
pub fn write_wav(
    path: impl AsRef<Path>,
    left: &[f32],
    right: &[f32],
    config: &WavConfig,
) -> Result<()> {
    check_lengths(left, right)?;

    let mut writer = WavWriter::create(path.as_ref(), create_wav_spec(config))?;
    write_samples(&mut writer, left, right, config)?;
    writer.finalize()?;

    Ok(())
}

/// Encode stereo audio to WAV in memory
pub fn encode_wav_memory(left: &[f32], right: &[f32], config: &WavConfig) -> Result<Vec<u8>> {
    check_lengths(left, right)?;

    let mut buffer = Vec::new();
    {
        let cursor = std::io::Cursor::new(&mut buffer);
        let mut writer = WavWriter::new(cursor, create_wav_spec(config))?;
        write_samples(&mut writer, left, right, config)?;
        // Finalize writes the header and flushes
        writer.finalize()?;
    }

    Ok(buffer)
}

fn check_lengths(left: &[f32], right: &[f32]) -> Result<()> {
    if left.len() != right.len() {
        return Err(ExportError::InvalidData(format!(
            "Left and right channels have different lengths ({} vs {})",
            left.len(),
            right.len()
        )));
    }
    Ok(())
}

fn create_wav_spec(config: &WavConfig) -> WavSpec {
    let sample_format = match config.bit_depth {
        BitDepth::Float32 => SampleFormat::Float,
        _ => SampleFormat::Int,
    };

    WavSpec {
        channels: 2,
        sample_rate: config.sample_rate,
        bits_per_sample: config.bit_depth.bits(),
        sample_format,
    }
}

/// Write interleaved stereo samples to the writer
fn write_samples<W: Write + Seek>(
    writer: &mut WavWriter<W>,
    left: &[f32],
    right: &[f32],
    config: &WavConfig,
) -> Result<()> {
    for (&l, &r) in left.iter().zip(right.iter()) {
        match config.bit_depth {
            BitDepth::Int16 => {
                writer.write_sample(float_to_i16(l))?;
                writer.write_sample(float_to_i16(r))?;
            }
            BitDepth::Int24 => {
                writer.write_sample(float_to_i24(l))?;
                writer.write_sample(float_to_i24(r))?;
            }
            BitDepth::Float32 => {
                writer.write_sample(l)?;
                writer.write_sample(r)?;
            }
        }
    }
    Ok(())
}

/// Convert float sample to 16-bit integer with clipping
#[inline]
fn float_to_i16(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * 32767.0) as i16
}

/// Convert float sample to 24-bit integer (stored as i32) with clipping
#[inline]
fn float_to_i24(sample: f32) -> i32 {
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * 8388607.0) as i32
}
