// Opus codec seam
//
// The framing layer never compresses audio itself. It hands one block of
// interleaved PCM to a `Codec` and frames whatever packet comes back. The
// implementation owns the native encoder handle and releases it in `Drop`,
// so a handle is released exactly once when its owner goes away.

#[cfg(feature = "libopus")]
pub mod libopus;

#[cfg(feature = "libopus")]
pub use libopus::OpusCodec;

use std::fmt;

/// A failed encode call, carrying the codec's (negative) result code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecError {
    pub code: i32,
}

impl CodecError {
    pub const BAD_ARG: i32 = -1;
    pub const BUFFER_TOO_SMALL: i32 = -2;
    pub const INTERNAL_ERROR: i32 = -3;
    pub const INVALID_PACKET: i32 = -4;
    pub const UNIMPLEMENTED: i32 = -5;
    pub const INVALID_STATE: i32 = -6;
    pub const ALLOC_FAIL: i32 = -7;

    pub fn new(code: i32) -> Self {
        CodecError { code }
    }

    /// Short description of the result code
    pub fn describe(&self) -> &'static str {
        match self.code {
            Self::BAD_ARG => "invalid argument",
            Self::BUFFER_TOO_SMALL => "buffer too small",
            Self::INTERNAL_ERROR => "internal error",
            Self::INVALID_PACKET => "invalid packet",
            Self::UNIMPLEMENTED => "unimplemented",
            Self::INVALID_STATE => "invalid state",
            Self::ALLOC_FAIL => "allocation failed",
            _ => "unknown error",
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.describe(), self.code)
    }
}

impl std::error::Error for CodecError {}

/// Block encoder producing one compressed packet per call.
///
/// `pcm` is interleaved and holds `frame_size * channels` samples. The packet
/// is written to the front of `out` and its length returned.
pub trait Codec {
    fn encode_i16(
        &mut self,
        pcm: &[i16],
        frame_size: usize,
        out: &mut [u8],
    ) -> Result<usize, CodecError>;

    fn encode_f32(
        &mut self,
        pcm: &[f32],
        frame_size: usize,
        out: &mut [u8],
    ) -> Result<usize, CodecError>;
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn encode_i16(
        &mut self,
        pcm: &[i16],
        frame_size: usize,
        out: &mut [u8],
    ) -> Result<usize, CodecError> {
        (**self).encode_i16(pcm, frame_size, out)
    }

    fn encode_f32(
        &mut self,
        pcm: &[f32],
        frame_size: usize,
        out: &mut [u8],
    ) -> Result<usize, CodecError> {
        (**self).encode_f32(pcm, frame_size, out)
    }
}
