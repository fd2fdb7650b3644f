//! CPAL duplex stream: input device -> ring buffer -> processor -> output device.

use crate::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::Sample;
use orbit_dsp::OrbitProcessor;
use ringbuf::{
    traits::{Consumer, Producer, Split},
    HeapCons, HeapProd, HeapRb,
};

/// Minimum ring capacity in frames.
const MIN_RING_FRAMES: usize = 4096;

/// Wrapper to hold `cpal::Stream` in a `Send` context.
///
/// # Safety
/// `cpal::Stream` is `!Send` due to platform internals. This is safe because
/// `AudioStream` is owned by the engine and only touched through `&mut self`.
struct StreamHandle(#[allow(dead_code)] cpal::Stream);

unsafe impl Send for StreamHandle {}

/// A running stream pair. Dropping it stops both devices.
pub(crate) struct AudioStream {
    sample_rate: f64,
    _output: StreamHandle,
    _input: Option<StreamHandle>,
}

impl AudioStream {
    pub(crate) fn start(
        output_index: Option<usize>,
        block_size: usize,
        mut processor: OrbitProcessor,
    ) -> Result<Self> {
        let output_device = get_device(output_index)?;
        let output_config = output_device.default_output_config()?;
        let sample_rate = output_config.sample_rate().0 as f64;
        let channels = output_config.channels() as usize;

        processor.prepare(block_size, sample_rate);

        let ring_frames = (block_size * 8).max(MIN_RING_FRAMES);
        let (producer, consumer) = HeapRb::<(f32, f32)>::new(ring_frames).split();

        let input = match cpal::default_host().default_input_device() {
            Some(device) => {
                let config = device.default_input_config()?;
                if config.sample_rate().0 as f64 != sample_rate {
                    tracing::warn!(
                        "Input runs at {} Hz, output at {} Hz; no resampling is done",
                        config.sample_rate().0,
                        sample_rate
                    );
                }
                let stream = match config.sample_format() {
                    cpal::SampleFormat::F32 => {
                        build_input_stream::<f32>(&device, &config.into(), producer)?
                    }
                    cpal::SampleFormat::I16 => {
                        build_input_stream::<i16>(&device, &config.into(), producer)?
                    }
                    cpal::SampleFormat::U16 => {
                        build_input_stream::<u16>(&device, &config.into(), producer)?
                    }
                    format => {
                        return Err(Error::InvalidDevice(format!(
                            "Unsupported input sample format: {format:?}"
                        )));
                    }
                };
                stream.play()?;
                Some(StreamHandle(stream))
            }
            None => {
                tracing::warn!("No input device, processing silence");
                None
            }
        };

        let output = match output_config.sample_format() {
            cpal::SampleFormat::F32 => build_output_stream::<f32>(
                &output_device,
                &output_config.into(),
                consumer,
                processor,
                ring_frames,
            )?,
            cpal::SampleFormat::I16 => build_output_stream::<i16>(
                &output_device,
                &output_config.into(),
                consumer,
                processor,
                ring_frames,
            )?,
            cpal::SampleFormat::U16 => build_output_stream::<u16>(
                &output_device,
                &output_config.into(),
                consumer,
                processor,
                ring_frames,
            )?,
            format => {
                return Err(Error::InvalidDevice(format!(
                    "Unsupported output sample format: {format:?}"
                )));
            }
        };
        output.play()?;

        tracing::info!(
            device = %output_device.name().unwrap_or_default(),
            sample_rate,
            channels,
            "Audio started"
        );

        Ok(Self {
            sample_rate,
            _output: StreamHandle(output),
            _input: input,
        })
    }

    pub(crate) fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

pub(crate) fn device_name(index: Option<usize>) -> Result<String> {
    Ok(get_device(index)?.name()?)
}

pub(crate) fn list_devices() -> Result<Vec<String>> {
    cpal::default_host()
        .output_devices()?
        .enumerate()
        .map(|(i, d)| Ok(format!("{i}: {}", d.name()?)))
        .collect()
}

fn get_device(index: Option<usize>) -> Result<cpal::Device> {
    let host = cpal::default_host();

    match index {
        Some(i) => {
            let devices: Vec<_> = host.output_devices()?.collect();
            let count = devices.len();
            devices.into_iter().nth(i).ok_or_else(|| {
                Error::InvalidDevice(format!("Device index {i} out of range ({count} available)"))
            })
        }
        None => host
            .default_output_device()
            .ok_or_else(|| Error::InvalidDevice("No output device available".into())),
    }
}

fn build_input_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut producer: HeapProd<(f32, f32)>,
) -> Result<cpal::Stream>
where
    T: cpal::SizedSample,
    f32: cpal::FromSample<T>,
{
    let channels = (config.channels as usize).max(1);

    let stream = device.build_input_stream(
        config,
        move |data: &[T], _: &cpal::InputCallbackInfo| {
            for frame in data.chunks_exact(channels) {
                let left = frame[0].to_sample::<f32>();
                let right = if channels > 1 {
                    frame[1].to_sample::<f32>()
                } else {
                    left
                };
                // a full ring drops input rather than block
                let _ = producer.try_push((left, right));
            }
        },
        |err| tracing::error!("Input stream error: {}", err),
        None,
    )?;

    Ok(stream)
}

fn build_output_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut consumer: HeapCons<(f32, f32)>,
    mut processor: OrbitProcessor,
    max_frames: usize,
) -> Result<cpal::Stream>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let channels = (config.channels as usize).max(1);
    let CallbackBuffers {
        mut frames_in,
        mut output_f32,
    } = CallbackBuffers::new(max_frames, channels);

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                let frames = data.len() / channels;

                read_input(&mut consumer, frames, &mut frames_in);
                fill_interleaved(&frames_in[..frames], channels, &mut output_f32);
                processor.process_interleaved(&mut output_f32[..frames * channels], channels);
                write_output(data, &output_f32[..frames * channels]);
            }));

            if result.is_err() {
                output_silence(data);
            }
        },
        |err| tracing::error!("Output stream error: {}", err),
        None,
    )?;

    Ok(stream)
}

/// Scratch buffers owned by the output callback, sized before the stream starts.
/// They only grow if a device hands over more than `frames` frames at once.
struct CallbackBuffers {
    frames_in: Vec<(f32, f32)>,
    output_f32: Vec<f32>,
}

impl CallbackBuffers {
    fn new(frames: usize, channels: usize) -> Self {
        Self {
            frames_in: vec![(0.0, 0.0); frames],
            output_f32: vec![0.0; frames * channels],
        }
    }
}

/// Pop up to `frames` input frames; an underrun leaves silence.
#[inline]
fn read_input(consumer: &mut HeapCons<(f32, f32)>, frames: usize, buffer: &mut Vec<(f32, f32)>) {
    if buffer.len() < frames {
        buffer.resize(frames, (0.0, 0.0));
    }
    let read = consumer.pop_slice(&mut buffer[..frames]);
    buffer[read..frames].fill((0.0, 0.0));
}

/// Spread stereo frames over `channels`; channels past the first two are silent.
#[inline]
fn fill_interleaved(frames: &[(f32, f32)], channels: usize, output: &mut Vec<f32>) {
    let needed = frames.len() * channels;
    if output.len() < needed {
        output.resize(needed, 0.0);
    }
    for (frame, &(left, right)) in output[..needed].chunks_exact_mut(channels).zip(frames) {
        frame.fill(0.0);
        frame[0] = left;
        if channels > 1 {
            frame[1] = right;
        }
    }
}

/// Convert f32 to output format and write to device buffer.
#[inline]
fn write_output<T: cpal::SizedSample + cpal::FromSample<f32>>(data: &mut [T], output: &[f32]) {
    for (sample, &value) in data.iter_mut().zip(output) {
        *sample = T::from_sample(value);
    }
}

/// Output silence (panic recovery).
#[inline]
fn output_silence<T: cpal::SizedSample + cpal::FromSample<f32>>(data: &mut [T]) {
    for sample in data.iter_mut() {
        *sample = T::from_sample(0.0);
    }
}
