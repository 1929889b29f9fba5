use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use hound::{SampleFormat, WavReader, WavWriter};

use fixfir::signal_processing::FixedPointFir;
use fixfir::{FilterConfig, tables};

#[derive(Parser, Debug)]
#[command(name = "fixfir")]
#[command(about = "Run a 16-bit WAV file through a fixed-point FIR band-pass filter", long_about = None)]
struct Args {
    /// Input WAV file (16-bit integer PCM)
    input: PathBuf,

    /// Output WAV file
    output: PathBuf,

    /// Built-in coefficient table: lowband3, lowband6, highband6
    #[arg(short = 'b', long, value_enum, default_value = "lowband3")]
    band: Band,

    /// TOML coefficient table (overrides --band)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Band {
    /// 0.05-1.95 MHz, Butterworth order 3
    Lowband3,
    /// 0.05-1.95 MHz, Butterworth order 6 (degenerate all-zero table)
    Lowband6,
    /// 4.05-5.95 MHz, Butterworth order 6
    Highband6,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let coefficients = match &args.config {
        Some(path) => FilterConfig::from_toml_file(path)
            .and_then(|c| c.coefficient_set())
            .with_context(|| format!("loading filter config {}", path.display()))?,
        None => match args.band {
            Band::Lowband3 => tables::lowband_3rd_order()?,
            Band::Lowband6 => tables::lowband_6th_order()?,
            Band::Highband6 => tables::highband_6th_order()?,
        },
    };

    log::info!(
        "Filter: {} taps, gain divisor {}, group delay {} samples",
        coefficients.num_taps(),
        coefficients.gain_divisor(),
        coefficients.group_delay_samples()
    );

    let mut reader = WavReader::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let spec = reader.spec();

    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        bail!(
            "{}: expected 16-bit integer PCM, got {}-bit {:?}",
            args.input.display(),
            spec.bits_per_sample,
            spec.sample_format
        );
    }

    // One filter instance per channel; histories are never shared.
    let mut filters: Vec<FixedPointFir> = (0..spec.channels)
        .map(|_| FixedPointFir::new(coefficients.clone()))
        .collect();

    let mut writer = WavWriter::create(&args.output, spec)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut channel = 0usize;
    let mut count = 0usize;
    for sample in reader.samples::<i16>() {
        let sample = sample.context("reading samples")?;
        writer.write_sample(filters[channel].process(sample))?;
        channel += 1;
        if channel == filters.len() {
            channel = 0;
        }
        count += 1;
    }

    writer.finalize()?;
    log::info!(
        "Wrote {} samples ({} channels) to {}",
        count,
        spec.channels,
        args.output.display()
    );

    Ok(())
}
