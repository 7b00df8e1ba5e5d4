// Ogg Opus logical stream headers
//
// An Ogg Opus stream starts with two header pages before any audio:
// - Page 0 (bos): identification header, "OpusHead" (8 bytes) + 11 bytes of fields
// - Page 1: comment header, "OpusTags" (8 bytes) followed by a Vorbis Comment
// Audio pages follow with sequence numbers starting at 2.
//
// Reference:
// - RFC 7845: Ogg Encapsulation for the Opus Audio Codec

pub mod comment;
pub mod header;

pub use comment::VorbisComment;
pub use header::{comment_packet, header_pages, header_pages_with, identification_packet};

pub const OPUS_SIGNATURE: &[u8; 8] = b"OpusHead";
pub const OPUS_TAGS: &[u8; 8] = b"OpusTags";

/// Identification header version
pub const OPUS_HEAD_VERSION: u8 = 1;

/// Page sequence numbers of the two header pages
pub const IDENTIFICATION_PAGE_SEQUENCE: u32 = 0;
pub const COMMENT_PAGE_SEQUENCE: u32 = 1;

/// First sequence number available to audio pages
pub const FIRST_AUDIO_PAGE_SEQUENCE: u32 = 2;
