// CLI command implementations
use anyhow::{bail, Context};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use opusogg::utils::pcm::sine_wave;
use opusogg::{EncoderConfig, Framing, FrameEncoder};

use crate::cli::{Commands, Config, OutputFormatter, Summary};

/// Run the selected subcommand
pub fn run(config: &Config) -> anyhow::Result<()> {
    let encoder_config = match &config.config {
        Some(path) => EncoderConfig::from_file(path)
            .with_context(|| format!("reading encoder config {}", path.display()))?,
        None => EncoderConfig::default(),
    };
    if encoder_config.framing != Framing::Ogg {
        bail!("the command line tool only writes ogg framed streams");
    }

    let summary = match &config.command {
        Commands::Tone { output, blocks, block_ms, frequency } => {
            command_tone(encoder_config, output, *blocks, *block_ms, *frequency)?
        }
        Commands::Silence { output, millis } => command_silence(encoder_config, output, *millis)?,
    };

    let formatter = OutputFormatter::new(config.format, config.quiet);
    formatter.output_summary(&summary, &mut std::io::stdout())
}

/// Write header pages followed by `blocks` pages of a sine tone
fn command_tone(
    config: EncoderConfig,
    output: &Path,
    blocks: usize,
    block_ms: f32,
    frequency: f32,
) -> anyhow::Result<Summary> {
    let frames = (config.sampling_rate as f32 * block_ms / 1000.0) as usize;
    if frames == 0 {
        bail!("block length of {} ms is too short", block_ms);
    }

    let mut encoder = FrameEncoder::open(config)?;
    let mut writer = create_output(output)?;
    let channels = encoder.config().channels as usize;
    let tone = sine_wave(frequency, encoder.config().sampling_rate, channels, frames, 0.5);

    let mut summary = Summary {
        file: output.display().to_string(),
        pages: 0,
        bytes: 0,
        last_sequence: None,
    };
    write_chunk(&mut writer, &encoder.stream_header()?, &mut summary)?;

    for _ in 0..blocks {
        let sequence = encoder.page_sequence();
        let page = encoder.encode_float(&tone)?;
        write_chunk(&mut writer, &page, &mut summary)?;
        summary.last_sequence = Some(sequence);
    }

    writer.flush()?;
    encoder.close();
    Ok(summary)
}

/// Write header pages followed by one silence page
fn command_silence(config: EncoderConfig, output: &Path, millis: u64) -> anyhow::Result<Summary> {
    let mut encoder = FrameEncoder::open(config)?;
    let mut writer = create_output(output)?;

    let mut summary = Summary {
        file: output.display().to_string(),
        pages: 0,
        bytes: 0,
        last_sequence: None,
    };
    write_chunk(&mut writer, &encoder.stream_header()?, &mut summary)?;

    let spec = encoder.create_silence(Duration::from_millis(millis))?;
    let sequence = encoder.page_sequence();
    let page = encoder
        .encode_silence(&spec)
        .with_context(|| {
            format!("{} blocks of silence do not fit in one page", spec.repeat_count())
        })?;
    write_chunk(&mut writer, &page, &mut summary)?;
    summary.last_sequence = Some(sequence);

    writer.flush()?;
    encoder.close();
    Ok(summary)
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn write_chunk(writer: &mut impl Write, bytes: &[u8], summary: &mut Summary) -> anyhow::Result<()> {
    writer.write_all(bytes)?;
    summary.pages += count_pages(bytes);
    summary.bytes += bytes.len();
    Ok(())
}

/// Pages in a buffer of back to back pages
fn count_pages(bytes: &[u8]) -> usize {
    let mut pos = 0;
    let mut pages = 0;
    while pos + 27 <= bytes.len() {
        let segments = bytes[pos + 26] as usize;
        let table = &bytes[pos + 27..(pos + 27 + segments).min(bytes.len())];
        let data: usize = table.iter().map(|&x| x as usize).sum();
        pos += 27 + segments + data;
        pages += 1;
    }
    pages
}
