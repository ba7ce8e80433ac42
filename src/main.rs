use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use hipass::dsp::HighPass;
use hipass::{io, signal};

/// Run one-pole and Butterworth high-pass filters over a mono signal and
/// dump the input and each output as CSV and 16-bit WAV.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input WAV; the first channel is used. Omit to synthesize a test tone.
    input: Option<PathBuf>,

    /// One-pole cutoff in Hz.
    #[arg(long, default_value_t = 3800.0)]
    cutoff: f32,

    /// Second one-pole cutoff in Hz.
    #[arg(long, default_value_t = 50.0)]
    cutoff2: f32,

    /// Biquad cutoff in Hz; defaults to --cutoff.
    #[arg(long)]
    biquad_cutoff: Option<f32>,

    /// Sample rate for the synthesized tone, in Hz.
    #[arg(long, default_value_t = 44100.0)]
    sample_rate: f32,

    /// Directory the CSV and WAV dumps go to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (input, sr) = match &args.input {
        Some(path) => {
            let (samples, sr) = io::read_wav_mono(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (samples, sr as f32)
        }
        None => (signal::two_tone(args.sample_rate), args.sample_rate),
    };
    info!("{} samples in at {} Hz", input.len(), sr);

    let biquad_cutoff = args.biquad_cutoff.unwrap_or(args.cutoff);
    let passes = [
        ("output", HighPass::one_pole(sr, args.cutoff)?),
        ("output2", HighPass::one_pole(sr, args.cutoff2)?),
        ("output3", HighPass::butterworth(sr, biquad_cutoff)?),
    ];

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    io::write_csv(&args.out_dir.join("input.csv"), &input)?;

    for (name, mut filter) in passes {
        let out = filter.process(&input);
        io::write_csv(&args.out_dir.join(format!("{name}.csv")), &out)?;
        io::write_wav_mono(&args.out_dir.join(format!("{name}.wav")), &out, sr.round() as u32)?;
        info!("wrote {name}.csv and {name}.wav ({} samples)", out.len());
    }
    Ok(())
}
