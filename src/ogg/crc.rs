//! OGG page CRC32
//! Parameters:
//! - Poly:    0x04C11DB7
//! - Init:    0x00000000
//! - RefIn:   false
//! - RefOut:  false
//! - XorOut:  0x00000000
//!
//! This is not the reflected IEEE CRC32 found in most general purpose
//! libraries, the register shifts left and the table is indexed by the
//! top byte.

use crate::ogg::OFFSET_CRC;

const POLY: u32 = 0x04C1_1DB7;

static CRC_TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut r = (i as u32) << 24;
        let mut bit = 0;
        while bit < 8 {
            r = if r & 0x8000_0000 != 0 {
                (r << 1) ^ POLY
            } else {
                r << 1
            };
            bit += 1;
        }
        table[i] = r;
        i += 1;
    }
    table
}

/// Compute the OGG checksum of a byte range
pub fn checksum(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |crc, &b| {
        (crc << 8) ^ CRC_TABLE[((crc >> 24) as u8 ^ b) as usize]
    })
}

/// Zero the checksum field, checksum the whole page and write the result back
/// little-endian.
///
/// `page` must be at least as long as the fixed header.
pub fn stamp(page: &mut [u8]) {
    page[OFFSET_CRC..OFFSET_CRC + 4].fill(0);
    let crc = checksum(page);
    page[OFFSET_CRC..OFFSET_CRC + 4].copy_from_slice(&crc.to_le_bytes());
}
