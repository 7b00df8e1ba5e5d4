// OGG lacing (segment table) encoding
//
// A packet of length L is laced as L / 255 segments of value 255 followed by
// one terminating segment holding L % 255. A segment of 255 means the packet
// continues, so the terminator is always written, including a 0 when L is a
// multiple of 255 (and for empty packets).

/// Number of lacing values needed for a packet of `payload_len` bytes
pub fn segment_header_len(payload_len: usize) -> usize {
    payload_len / 255 + 1
}

/// Write the lacing values for one packet into `dest`, returning how many
/// bytes were written.
///
/// `dest` must hold at least `segment_header_len(payload_len)` bytes.
pub fn write_segments(dest: &mut [u8], payload_len: usize) -> usize {
    let mut remaining = payload_len;
    let mut idx = 0;
    while remaining >= 255 {
        dest[idx] = 255;
        remaining -= 255;
        idx += 1;
    }
    dest[idx] = remaining as u8;
    idx + 1
}

/// Build the lacing values for a packet as an owned table
pub fn lacing_values(payload_len: usize) -> Vec<u8> {
    let mut table = vec![0u8; segment_header_len(payload_len)];
    write_segments(&mut table, payload_len);
    table
}

/// Split a segment table back into packet lengths.
///
/// A trailing run of 255 values without a terminator is an error carrying
/// the length of that unfinished packet.
pub fn packet_lengths(table: &[u8]) -> Result<Vec<usize>, usize> {
    let mut packets = Vec::new();
    let mut current = 0usize;
    for &value in table {
        current += value as usize;
        if value < 255 {
            packets.push(current);
            current = 0;
        }
    }
    if current != 0 {
        return Err(current);
    }
    Ok(packets)
}
