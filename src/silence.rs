// Silence padding
//
// A span of silence is covered by encoding one all-zero block and lacing
// that single packet into a page as many times as needed, so the codec runs
// once per span instead of once per block.

use std::time::Duration;

use crate::codec::{Codec, CodecError};
use crate::config::EncoderConfig;
use crate::error::{Error, Result};
use crate::ogg::lacing::segment_header_len;
use crate::ogg::page::{build_multi_packet_page, PageHeader};
use crate::ogg::OGG_MAX_SEGMENTS;

/// Block durations in units of 2.5 ms, longest first (60, 40, 20, 10, 5, 2.5 ms)
const BLOCK_UNITS: [usize; 6] = [24, 16, 8, 4, 2, 1];

/// Valid codec block sizes in samples per channel, longest first.
///
/// At 48 kHz these are 2880, 1920, 960, 480, 240 and 120.
pub fn block_sizes(sampling_rate: u32) -> [usize; 6] {
    let unit = sampling_rate as usize / 400;
    BLOCK_UNITS.map(|n| n * unit)
}

/// Largest block size not exceeding `duration_samples`, or the smallest
/// block size when the duration is shorter than every block.
pub fn block_size_for(duration_samples: usize, sampling_rate: u32) -> usize {
    let sizes = block_sizes(sampling_rate);
    sizes
        .iter()
        .copied()
        .find(|&size| duration_samples >= size)
        .unwrap_or(sizes[sizes.len() - 1])
}

/// Duration expressed in samples per channel, rounded down and saturating at
/// `usize::MAX`
pub fn duration_in_samples(duration: Duration, sampling_rate: u32) -> usize {
    let samples = duration.as_nanos().saturating_mul(sampling_rate as u128) / 1_000_000_000;
    usize::try_from(samples).unwrap_or(usize::MAX)
}

/// One encoded silent block and how many times it must be repeated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SilenceSpec {
    raw: Vec<u8>,
    repeat_count: usize,
    block_size: usize,
}

impl SilenceSpec {
    /// The compressed silent packet
    pub fn packet(&self) -> &[u8] {
        &self.raw
    }

    /// Number of copies needed to cover the requested duration
    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    /// Samples per channel covered by one copy
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Samples per channel covered by the whole page
    pub fn covered_samples(&self) -> usize {
        self.block_size.saturating_mul(self.repeat_count)
    }
}

/// Encode one silent block sized for `duration`.
///
/// The repeat count is `duration_samples / block_size`; any remainder is
/// dropped, so durations are rounded down to whole blocks. `out` is scratch
/// space for the codec.
pub fn synthesize<C: Codec + ?Sized>(
    codec: &mut C,
    config: &EncoderConfig,
    duration: Duration,
    out: &mut [u8],
) -> Result<SilenceSpec> {
    let duration_samples = duration_in_samples(duration, config.sampling_rate);
    let block_size = block_size_for(duration_samples, config.sampling_rate);
    let pcm = vec![0.0f32; block_size * config.channels as usize];

    let len = codec.encode_f32(&pcm, block_size, out)?;
    if len > out.len() {
        return Err(CodecError::new(CodecError::BUFFER_TOO_SMALL).into());
    }

    let spec = SilenceSpec {
        raw: out[..len].to_vec(),
        repeat_count: duration_samples / block_size,
        block_size,
    };
    log::debug!(
        "silence for {:?}: block={} repeat={} packet={} bytes",
        duration,
        spec.block_size,
        spec.repeat_count,
        spec.raw.len()
    );
    Ok(spec)
}

/// Build one page whose segment table laces `repeat_count` copies of the
/// silent packet and whose body holds those copies back to back.
///
/// The segment count is checked before anything is allocated.
pub fn assemble_page(spec: &SilenceSpec, header: &PageHeader) -> Result<Vec<u8>> {
    let segment_count = spec
        .repeat_count
        .checked_mul(segment_header_len(spec.raw.len()))
        .unwrap_or(usize::MAX);
    if segment_count > OGG_MAX_SEGMENTS {
        return Err(Error::TooManySegments(segment_count));
    }

    let packets = vec![spec.raw.as_slice(); spec.repeat_count];
    build_multi_packet_page(header, &packets)
}
