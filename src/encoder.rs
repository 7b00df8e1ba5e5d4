// Encoder session: codec handle plus OGG framing state
//
// Sequence numbers 0 and 1 belong to the header pages, so audio and silence
// pages start at 2. The counter only moves when a page is actually returned.

use std::time::Duration;

use crate::codec::{Codec, CodecError};
use crate::config::{EncoderConfig, Framing};
use crate::error::{Error, Result};
use crate::ogg::page::{PageHeader, ScratchBuffer};
use crate::opus::{self, VorbisComment, FIRST_AUDIO_PAGE_SEQUENCE};
use crate::silence::{self, SilenceSpec};
use crate::utils::pcm;

/// One block of interleaved input samples
#[derive(Debug, Clone, Copy)]
pub enum Samples<'a> {
    /// Little-endian 16-bit samples as raw bytes
    Raw(&'a [u8]),
    Int16(&'a [i16]),
    Float(&'a [f32]),
}

/// Encoder session.
///
/// Owns the codec exclusively; dropping the session (or calling
/// [`FrameEncoder::close`]) releases it. All methods take `&mut self`, so
/// concurrent calls on one session need external synchronisation.
pub struct FrameEncoder<C: Codec> {
    codec: C,
    config: EncoderConfig,
    page_sequence: u32,
    scratch: ScratchBuffer,
}

#[cfg(feature = "libopus")]
impl FrameEncoder<crate::codec::OpusCodec> {
    /// Open a session backed by libopus
    pub fn open(config: EncoderConfig) -> Result<Self> {
        let codec = crate::codec::OpusCodec::new(&config)?;
        Self::new(config, codec)
    }
}

impl<C: Codec> FrameEncoder<C> {
    /// Create a session around an already opened codec
    pub fn new(config: EncoderConfig, codec: C) -> Result<Self> {
        config.validate()?;
        log::info!(
            "opened encoder session: {} Hz, {} channel(s), {:?}, framing {:?}",
            config.sampling_rate,
            config.channels,
            config.application,
            config.framing
        );
        Ok(FrameEncoder {
            codec,
            config,
            page_sequence: FIRST_AUDIO_PAGE_SEQUENCE,
            scratch: ScratchBuffer::default(),
        })
    }

    /// Replace the working buffer, e.g. to change the header budget
    pub fn with_scratch_buffer(mut self, scratch: ScratchBuffer) -> Self {
        self.scratch = scratch;
        self
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Sequence number the next emitted page will carry; wraps to 0 after
    /// `u32::MAX`
    pub fn page_sequence(&self) -> u32 {
        self.page_sequence
    }

    /// Identification and comment pages; empty when framing is disabled
    pub fn stream_header(&self) -> Result<Vec<u8>> {
        match self.config.framing {
            Framing::Ogg => {
                opus::header_pages(self.config.channels, self.config.serial, &self.config.vendor)
            }
            Framing::None => Ok(Vec::new()),
        }
    }

    /// Header pages with caller supplied user comments
    pub fn stream_header_with(&self, comment: &VorbisComment) -> Result<Vec<u8>> {
        match self.config.framing {
            Framing::Ogg => {
                opus::header_pages_with(self.config.channels, self.config.serial, comment)
            }
            Framing::None => Ok(Vec::new()),
        }
    }

    /// Encode one block and return it as a page, or as a bare packet when
    /// framing is disabled.
    pub fn encode(&mut self, samples: Samples<'_>) -> Result<Vec<u8>> {
        let channels = self.config.channels as usize;
        let out = self.scratch.payload_mut();
        let capacity = out.len();

        let result = match samples {
            Samples::Raw(bytes) => {
                let pcm = pcm::i16_from_le_bytes(bytes);
                self.codec.encode_i16(&pcm, pcm.len() / channels, out)
            }
            Samples::Int16(pcm) => self.codec.encode_i16(pcm, pcm.len() / channels, out),
            Samples::Float(pcm) => self.codec.encode_f32(pcm, pcm.len() / channels, out),
        };

        let len = match result {
            Ok(len) if len <= capacity => len,
            Ok(_) => {
                let e = CodecError::new(CodecError::BUFFER_TOO_SMALL);
                return Err(self.codec_failure(e));
            }
            Err(e) => return Err(self.codec_failure(e)),
        };

        match self.config.framing {
            Framing::None => Ok(self.scratch.payload(len).to_vec()),
            Framing::Ogg => {
                let header = self.next_page_header();
                let page = self.scratch.frame_page(&header, len)?.to_vec();
                self.page_sequence = self.page_sequence.wrapping_add(1);
                Ok(page)
            }
        }
    }

    pub fn encode_raw(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.encode(Samples::Raw(input))
    }

    pub fn encode_i16(&mut self, input: &[i16]) -> Result<Vec<u8>> {
        self.encode(Samples::Int16(input))
    }

    pub fn encode_float(&mut self, input: &[f32]) -> Result<Vec<u8>> {
        self.encode(Samples::Float(input))
    }

    /// Encode a single silent block sized for `duration`
    pub fn create_silence(&mut self, duration: Duration) -> Result<SilenceSpec> {
        let out = self.scratch.payload_mut();
        silence::synthesize(&mut self.codec, &self.config, duration, out).map_err(|e| {
            if let Error::Codec(code) = &e {
                log::warn!("silence encoding failed: {}", code);
            }
            e
        })
    }

    /// Emit one page holding every repetition of the silent packet.
    ///
    /// Consumes exactly one sequence number regardless of the repeat count.
    pub fn encode_silence(&mut self, spec: &SilenceSpec) -> Result<Vec<u8>> {
        let header = self.next_page_header();
        let page = silence::assemble_page(spec, &header)?;
        self.page_sequence = self.page_sequence.wrapping_add(1);
        Ok(page)
    }

    /// Release the codec and end the session
    pub fn close(self) {
        log::info!("closing encoder session after {} page(s)", self.pages_emitted());
    }

    fn pages_emitted(&self) -> u32 {
        self.page_sequence.wrapping_sub(FIRST_AUDIO_PAGE_SEQUENCE)
    }

    fn next_page_header(&self) -> PageHeader {
        PageHeader::new(self.config.serial, self.page_sequence)
    }

    fn codec_failure(&self, e: CodecError) -> Error {
        log::warn!("opus encoding error at page {}: {}", self.page_sequence, e);
        Error::Codec(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Application;
    use crate::ogg::OFFSET_SEQUENCE;

    type CodecResult = std::result::Result<usize, CodecError>;

    /// Returns one byte per frame, or an error for an empty block
    struct CountingCodec;

    impl Codec for CountingCodec {
        fn encode_i16(&mut self, _pcm: &[i16], frame_size: usize, out: &mut [u8]) -> CodecResult {
            if frame_size == 0 {
                return Err(CodecError::new(CodecError::BAD_ARG));
            }
            out[..frame_size].fill(0x16);
            Ok(frame_size)
        }

        fn encode_f32(&mut self, _pcm: &[f32], frame_size: usize, out: &mut [u8]) -> CodecResult {
            if frame_size == 0 {
                return Err(CodecError::new(CodecError::BAD_ARG));
            }
            out[..frame_size].fill(0x32);
            Ok(frame_size)
        }
    }

    fn sequence_of(page: &[u8]) -> u32 {
        u32::from_le_bytes(page[OFFSET_SEQUENCE..OFFSET_SEQUENCE + 4].try_into().unwrap())
    }

    #[test]
    fn test_frame_count_per_format() {
        let mut enc = FrameEncoder::new(EncoderConfig::default(), CountingCodec).unwrap();

        let page = enc.encode_float(&[0.0; 20]).unwrap();
        assert_eq!(page.len(), 28 + 10);
        assert_eq!(page[27], 10);
        assert_eq!(page[28], 0x32);

        let page = enc.encode_i16(&[0; 8]).unwrap();
        assert_eq!(page[27], 4);
        assert_eq!(page[28], 0x16);

        // 12 bytes = 6 samples = 3 stereo frames
        let page = enc.encode_raw(&[0; 12]).unwrap();
        assert_eq!(page[27], 3);
        assert_eq!(enc.page_sequence(), 5);
    }

    #[test]
    fn test_sequence_starts_at_two() {
        let mut enc = FrameEncoder::new(EncoderConfig::default(), CountingCodec).unwrap();
        assert_eq!(enc.page_sequence(), 2);
        let first = enc.encode_float(&[0.0; 4]).unwrap();
        let second = enc.encode_float(&[0.0; 4]).unwrap();
        assert_eq!(sequence_of(&first), 2);
        assert_eq!(sequence_of(&second), 3);
    }

    #[test]
    fn test_codec_failure_keeps_counter() {
        let mut enc = FrameEncoder::new(EncoderConfig::default(), CountingCodec).unwrap();
        enc.encode_float(&[0.0; 4]).unwrap();
        assert!(matches!(enc.encode_float(&[]), Err(Error::Codec(_))));
        assert_eq!(enc.page_sequence(), 3);
        assert_eq!(sequence_of(&enc.encode_float(&[0.0; 4]).unwrap()), 3);
    }

    #[test]
    fn test_bare_packets() {
        let config = EncoderConfig { framing: Framing::None, channels: 1, ..Default::default() };
        let mut enc = FrameEncoder::new(config, CountingCodec).unwrap();
        assert_eq!(enc.encode_float(&[0.0; 5]).unwrap(), vec![0x32; 5]);
        assert_eq!(enc.page_sequence(), 2);
        assert!(enc.stream_header().unwrap().is_empty());
    }

    #[test]
    fn test_header_too_large_is_not_counted() {
        let config = EncoderConfig { channels: 1, ..Default::default() };
        let mut enc = FrameEncoder::new(config, CountingCodec)
            .unwrap()
            .with_scratch_buffer(ScratchBuffer::new(28, 1024));
        assert!(enc.encode_float(&[0.0; 254]).is_ok());
        assert!(matches!(enc.encode_float(&[0.0; 255]), Err(Error::HeaderTooLarge { .. })));
        assert_eq!(enc.page_sequence(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EncoderConfig {
            sampling_rate: 44100,
            application: Application::Voip,
            ..Default::default()
        };
        assert!(matches!(FrameEncoder::new(config, CountingCodec), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_silence_consumes_one_sequence_number() {
        let mut enc = FrameEncoder::new(EncoderConfig::default(), CountingCodec).unwrap();
        let spec = enc.create_silence(Duration::from_millis(500)).unwrap();
        assert_eq!(spec.repeat_count(), 8);
        assert_eq!(spec.packet().len(), 2880);

        let page = enc.encode_silence(&spec).unwrap();
        assert_eq!(sequence_of(&page), 2);
        let page = enc.encode_silence(&spec).unwrap();
        assert_eq!(sequence_of(&page), 3);
        assert_eq!(enc.page_sequence(), 4);
    }

    #[test]
    fn test_sequence_wraps_after_max() {
        let mut enc = FrameEncoder::new(EncoderConfig::default(), CountingCodec).unwrap();
        enc.page_sequence = u32::MAX;
        assert_eq!(sequence_of(&enc.encode_float(&[0.0; 4]).unwrap()), u32::MAX);
        assert_eq!(enc.page_sequence(), 0);
        let spec = enc.create_silence(Duration::from_millis(60)).unwrap();
        assert_eq!(sequence_of(&enc.encode_silence(&spec).unwrap()), 0);
        assert_eq!(enc.page_sequence(), 1);
        assert_eq!(enc.pages_emitted(), u32::MAX);
        enc.close();
    }

    #[test]
    fn test_silence_longest_duration_rejected() {
        let mut enc = FrameEncoder::new(EncoderConfig::default(), CountingCodec).unwrap();
        enc.encode_float(&[0.0; 4]).unwrap();

        let spec = enc.create_silence(Duration::MAX).unwrap();
        assert_eq!(spec.repeat_count(), usize::MAX / 2880);
        assert!(matches!(enc.encode_silence(&spec), Err(Error::TooManySegments(_))));
        assert_eq!(enc.page_sequence(), 3);

        let spec = enc.create_silence(Duration::from_millis(60)).unwrap();
        assert_eq!(sequence_of(&enc.encode_silence(&spec).unwrap()), 3);
    }
}
