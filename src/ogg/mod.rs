// OGG container framing
//
// OGG Page Layout:
// - OGG Page Header (27 bytes)
//   - Capture Pattern: "OggS" (4 bytes)
//   - Version: 0 (1 byte)
//   - Header Type: 1=continuation, 2=bos, 4=eos (1 byte)
//   - Granule Position (8 bytes)
//   - Bitstream Serial Number (4 bytes)
//   - Page Sequence Number (4 bytes)
//   - CRC Checksum (4 bytes)
//   - Number of Page Segments (1 byte)
// - Segment Table (1 byte per segment)
// - Payload
//
// All multi-byte fields are little-endian. The checksum covers the whole
// page with its own field zeroed.

pub mod crc;
pub mod lacing;
pub mod page;

pub use crc::{checksum, stamp};
pub use lacing::{segment_header_len, write_segments};
pub use page::{build_page, PageHeader, ScratchBuffer};

// OGG signature
pub const OGG_SIGNATURE: &[u8; 4] = b"OggS";

/// Stream structure version, always zero
pub const OGG_VERSION: u8 = 0;

// OGG page header types
pub const OGG_HEADER_TYPE_CONTINUATION: u8 = 0x01;
pub const OGG_HEADER_TYPE_BOS: u8 = 0x02; // Beginning of Stream
pub const OGG_HEADER_TYPE_EOS: u8 = 0x04; // End of Stream

/// Size of the fixed part of a page header, before the segment table
pub const OGG_FIXED_HEADER_SIZE: usize = 27;

/// Largest number of lacing values a single page can hold
pub const OGG_MAX_SEGMENTS: usize = 255;

// Field offsets inside the fixed header
pub(crate) const OFFSET_HEADER_TYPE: usize = 5;
pub(crate) const OFFSET_GRANULE: usize = 6;
pub(crate) const OFFSET_SERIAL: usize = 14;
pub(crate) const OFFSET_SEQUENCE: usize = 18;
pub(crate) const OFFSET_CRC: usize = 22;
pub(crate) const OFFSET_SEGMENT_COUNT: usize = 26;
