//! Render a WAV file through the Orbit spatializer.
//!
//! Usage: orbit-render <input.wav> <output.wav> [preset] [--bits 16|24|32f] [--tail seconds] [--reverb]
//!
//! `preset` is a preset name (built-in or saved in the user preset folder) or a
//! path to a preset `.json` file. Without it the Default preset is used.
//! `--reverb` turns the reverb on at the preset's wet level.

use orbit_export::{render_file, BitDepth, ExportError, RenderOptions};
use orbit_preset::{Preset, PresetStore};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: orbit-render <input.wav> <output.wav> [preset] [--bits 16|24|32f] [--tail seconds] [--reverb]";

struct Args {
    input: String,
    output: String,
    preset: Option<String>,
    options: RenderOptions,
}

fn parse_args(args: &[String]) -> Option<Args> {
    let mut positional = Vec::new();
    let mut options = RenderOptions::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--bits" => options.bit_depth = BitDepth::parse(iter.next()?)?,
            "--tail" => options.tail_seconds = iter.next()?.parse().ok()?,
            "--reverb" => options.reverb = true,
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let input = positional.next()?;
    let output = positional.next()?;
    let preset = positional.next();
    if positional.next().is_some() {
        return None;
    }

    Some(Args {
        input,
        output,
        preset,
        options,
    })
}

fn resolve_preset(arg: Option<&str>) -> Result<Preset, ExportError> {
    let Some(arg) = arg else {
        return Ok(Preset::default());
    };

    let path = Path::new(arg);
    if path.extension().and_then(|e| e.to_str()) == Some("json") && path.is_file() {
        let json = std::fs::read_to_string(path)?;
        return Ok(Preset::from_json(&json)?);
    }

    let store = match PresetStore::open_default() {
        Ok(store) => store,
        Err(e) => return Preset::builtin(arg).ok_or_else(|| e.into()),
    };
    Ok(store.load(arg)?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(args) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let run = || -> Result<(), ExportError> {
        let preset = resolve_preset(args.preset.as_deref())?;
        let result = render_file(&args.input, &args.output, &preset, &args.options)?;
        eprintln!(
            "Rendered {} samples at {} Hz ({:.2}s), peak {:.3}",
            result.length_samples,
            result.sample_rate,
            result.duration_seconds(),
            result.peak_level
        );
        Ok(())
    };

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("orbit-render: {e}");
            ExitCode::FAILURE
        }
    }
}
