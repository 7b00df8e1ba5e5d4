//! Opusogg - Ogg container framing for Opus streams
//!
//! Turns compressed Opus packets into a playable Ogg Opus stream:
//! - OGG pages with lacing tables, sequence numbers and CRC checksums
//! - the identification and comment header pages
//! - silence pages that repeat one encoded block over a time span
//!
//! The audio codec itself sits behind the [`Codec`] trait. With the
//! `libopus` feature, [`codec::OpusCodec`] provides a libopus backed one.
//!
//! ```rust,ignore
//! let mut enc = FrameEncoder::open(EncoderConfig::default())?;
//! let mut stream = enc.stream_header()?;
//! stream.extend(enc.encode_float(&block)?);
//! ```

pub mod codec;
pub mod config;
pub mod encoder;
pub mod error;
pub mod ogg;
pub mod opus;
pub mod silence;
pub mod utils;

pub use codec::{Codec, CodecError};
pub use config::{Application, EncoderConfig, Framing};
pub use encoder::{FrameEncoder, Samples};
pub use error::{Error, Result};
pub use opus::VorbisComment;
pub use silence::SilenceSpec;
