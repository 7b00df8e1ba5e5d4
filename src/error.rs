// Error types for the framing layer

use thiserror::Error;

use crate::codec::CodecError;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a session or building pages
#[derive(Debug, Error)]
pub enum Error {
    /// Sampling rate, channel count or application mode rejected at session creation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Framing code that is neither bare payload nor Ogg
    #[error("unknown framing mode: {0}")]
    UnknownFraming(i32),

    /// A single encode call failed inside the codec; the session stays usable
    #[error("opus encoding error: {0}")]
    Codec(#[from] CodecError),

    /// Page header does not fit in the space reserved ahead of the payload
    #[error("ogg header too large: {needed} bytes needed, {budget} reserved")]
    HeaderTooLarge { needed: usize, budget: usize },

    /// Payload length runs past the end of the working buffer
    #[error("payload of {len} bytes exceeds the {capacity} byte payload region")]
    PayloadTooLarge { len: usize, capacity: usize },

    /// Page would need more lacing values than a single page can carry
    #[error("page needs {0} segments, at most 255 fit in one page")]
    TooManySegments(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
