use crate::error::{Error, Result};
use crate::ogg::lacing::{segment_header_len, write_segments};
use crate::ogg::{
    crc, OFFSET_GRANULE, OFFSET_HEADER_TYPE, OFFSET_SEGMENT_COUNT, OFFSET_SEQUENCE, OFFSET_SERIAL,
    OGG_FIXED_HEADER_SIZE, OGG_MAX_SEGMENTS, OGG_SIGNATURE, OGG_VERSION,
};

/// OGG Page Header fields that vary between pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    pub header_type: u8,
    pub granule_position: u64,
    pub bitstream_serial: u32,
    pub page_sequence: u32,
}

impl PageHeader {
    /// Header for a plain data page; granule position is left at zero
    pub fn new(bitstream_serial: u32, page_sequence: u32) -> Self {
        PageHeader {
            header_type: 0,
            granule_position: 0,
            bitstream_serial,
            page_sequence,
        }
    }

    /// Set the header type flags (continuation, bos, eos)
    pub fn with_header_type(mut self, header_type: u8) -> Self {
        self.header_type = header_type;
        self
    }

    /// Write the 27 byte fixed header into `dest`, leaving the checksum zeroed
    pub fn write_fixed(&self, dest: &mut [u8], segment_count: u8) {
        let dest = &mut dest[..OGG_FIXED_HEADER_SIZE];
        dest.fill(0);
        dest[..4].copy_from_slice(OGG_SIGNATURE);
        dest[4] = OGG_VERSION;
        dest[OFFSET_HEADER_TYPE] = self.header_type;
        dest[OFFSET_GRANULE..OFFSET_GRANULE + 8]
            .copy_from_slice(&self.granule_position.to_le_bytes());
        dest[OFFSET_SERIAL..OFFSET_SERIAL + 4]
            .copy_from_slice(&self.bitstream_serial.to_le_bytes());
        dest[OFFSET_SEQUENCE..OFFSET_SEQUENCE + 4]
            .copy_from_slice(&self.page_sequence.to_le_bytes());
        dest[OFFSET_SEGMENT_COUNT] = segment_count;
    }
}

/// Build a checksummed page carrying a single packet
pub fn build_page(header: &PageHeader, payload: &[u8]) -> Result<Vec<u8>> {
    build_multi_packet_page(header, &[payload])
}

/// Build a checksummed page carrying several complete packets, each with its
/// own terminated lacing run.
pub fn build_multi_packet_page(header: &PageHeader, packets: &[&[u8]]) -> Result<Vec<u8>> {
    let segment_count: usize = packets.iter().map(|p| segment_header_len(p.len())).sum();
    if segment_count > OGG_MAX_SEGMENTS {
        return Err(Error::TooManySegments(segment_count));
    }

    let header_len = OGG_FIXED_HEADER_SIZE + segment_count;
    let body_len: usize = packets.iter().map(|p| p.len()).sum();
    let mut page = vec![0u8; header_len + body_len];

    header.write_fixed(&mut page, segment_count as u8);

    let mut idx = OGG_FIXED_HEADER_SIZE;
    for packet in packets {
        idx += write_segments(&mut page[idx..header_len], packet.len());
    }
    for packet in packets {
        page[idx..idx + packet.len()].copy_from_slice(packet);
        idx += packet.len();
    }

    crc::stamp(&mut page);
    log::debug!(
        "built ogg page seq={} segments={} size={}",
        header.page_sequence,
        segment_count,
        page.len()
    );
    Ok(page)
}

/// Working buffer that lets the codec write its packet at a fixed offset and
/// the page header be backfilled directly in front of it.
///
/// ```text
/// [ ........ header budget ........ | payload region ]
///              [ 27 + segments ]^
///              start            budget
/// ```
#[derive(Debug)]
pub struct ScratchBuffer {
    buf: Vec<u8>,
    header_budget: usize,
}

impl ScratchBuffer {
    pub const DEFAULT_HEADER_BUDGET: usize = 0x200;
    pub const DEFAULT_PAYLOAD_CAPACITY: usize = 4096 - Self::DEFAULT_HEADER_BUDGET;

    pub fn new(header_budget: usize, payload_capacity: usize) -> Self {
        ScratchBuffer {
            buf: vec![0u8; header_budget + payload_capacity],
            header_budget,
        }
    }

    pub fn header_budget(&self) -> usize {
        self.header_budget
    }

    /// Region the codec writes its packet into
    pub fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.header_budget..]
    }

    /// The first `len` bytes of the payload region
    pub fn payload(&self, len: usize) -> &[u8] {
        &self.buf[self.header_budget..self.header_budget + len]
    }

    /// Backfill a page header in front of the first `payload_len` payload
    /// bytes, checksum the page and return it.
    pub fn frame_page(&mut self, header: &PageHeader, payload_len: usize) -> Result<&[u8]> {
        let capacity = self.buf.len() - self.header_budget;
        if payload_len > capacity {
            return Err(Error::PayloadTooLarge {
                len: payload_len,
                capacity,
            });
        }

        let segment_count = segment_header_len(payload_len);
        if segment_count > OGG_MAX_SEGMENTS {
            return Err(Error::TooManySegments(segment_count));
        }

        let header_len = OGG_FIXED_HEADER_SIZE + segment_count;
        if header_len > self.header_budget {
            return Err(Error::HeaderTooLarge {
                needed: header_len,
                budget: self.header_budget,
            });
        }

        let start = self.header_budget - header_len;
        let end = self.header_budget + payload_len;
        header.write_fixed(&mut self.buf[start..], segment_count as u8);
        let table = &mut self.buf[start + OGG_FIXED_HEADER_SIZE..self.header_budget];
        write_segments(table, payload_len);

        let page = &mut self.buf[start..end];
        crc::stamp(page);
        log::debug!(
            "framed ogg page seq={} segments={} size={}",
            header.page_sequence,
            segment_count,
            page.len()
        );
        Ok(page)
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEADER_BUDGET, Self::DEFAULT_PAYLOAD_CAPACITY)
    }
}
