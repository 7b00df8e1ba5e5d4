// libopus-backed codec
//
// `::opus` is the libopus binding crate, not `crate::opus`.

use crate::codec::{Codec, CodecError};
use crate::config::{Application, EncoderConfig};
use crate::error::{Error, Result};

/// Opus encoder handle; the native state is destroyed when this is dropped
pub struct OpusCodec {
    inner: ::opus::Encoder,
    channels: usize,
}

impl OpusCodec {
    /// Open an encoder for the given configuration
    pub fn new(config: &EncoderConfig) -> Result<Self> {
        config.validate()?;

        let channels = match config.channels {
            1 => ::opus::Channels::Mono,
            _ => ::opus::Channels::Stereo,
        };
        let application = match config.application {
            Application::Voip => ::opus::Application::Voip,
            Application::Audio => ::opus::Application::Audio,
            Application::RestrictedLowDelay => ::opus::Application::LowDelay,
        };

        let inner = ::opus::Encoder::new(config.sampling_rate, channels, application)
            .map_err(|e| Error::InvalidConfig(format!("creating opus encoder failed: {}", e)))?;

        Ok(OpusCodec {
            inner,
            channels: config.channels as usize,
        })
    }
}

fn codec_error(e: ::opus::Error) -> CodecError {
    CodecError::new(e.code() as i32)
}

impl Codec for OpusCodec {
    fn encode_i16(
        &mut self,
        pcm: &[i16],
        frame_size: usize,
        out: &mut [u8],
    ) -> std::result::Result<usize, CodecError> {
        let pcm = &pcm[..(frame_size * self.channels).min(pcm.len())];
        self.inner.encode(pcm, out).map_err(codec_error)
    }

    fn encode_f32(
        &mut self,
        pcm: &[f32],
        frame_size: usize,
        out: &mut [u8],
    ) -> std::result::Result<usize, CodecError> {
        let pcm = &pcm[..(frame_size * self.channels).min(pcm.len())];
        self.inner.encode_float(pcm, out).map_err(codec_error)
    }
}
