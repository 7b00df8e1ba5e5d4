// Shared helpers for integration tests
#![allow(dead_code)]

use opusogg::ogg::checksum;
use opusogg::{Codec, CodecError};

/// Codec stand-in: packet length follows the call index, calls listed in
/// `fail_on` return an internal error instead.
pub struct ScriptedCodec {
    pub calls: usize,
    pub fail_on: Vec<usize>,
    pub frame_sizes: Vec<usize>,
}

impl ScriptedCodec {
    pub fn new() -> Self {
        ScriptedCodec { calls: 0, fail_on: Vec::new(), frame_sizes: Vec::new() }
    }

    pub fn failing_on(calls: &[usize]) -> Self {
        ScriptedCodec { fail_on: calls.to_vec(), ..Self::new() }
    }

    fn produce(&mut self, frame_size: usize, out: &mut [u8]) -> Result<usize, CodecError> {
        let call = self.calls;
        self.calls += 1;
        self.frame_sizes.push(frame_size);
        if self.fail_on.contains(&call) {
            return Err(CodecError::new(CodecError::INTERNAL_ERROR));
        }
        let len = 100 + 53 * call;
        for (i, b) in out[..len].iter_mut().enumerate() {
            *b = (i + call) as u8;
        }
        Ok(len)
    }
}

impl Codec for ScriptedCodec {
    fn encode_i16(
        &mut self,
        _pcm: &[i16],
        frame_size: usize,
        out: &mut [u8],
    ) -> Result<usize, CodecError> {
        self.produce(frame_size, out)
    }

    fn encode_f32(
        &mut self,
        _pcm: &[f32],
        frame_size: usize,
        out: &mut [u8],
    ) -> Result<usize, CodecError> {
        self.produce(frame_size, out)
    }
}

/// A page split into its fields
#[derive(Debug)]
pub struct ParsedPage {
    pub header_type: u8,
    pub granule_position: u64,
    pub serial: u32,
    pub sequence: u32,
    pub crc: u32,
    pub segments: Vec<u8>,
    pub body: Vec<u8>,
}

impl ParsedPage {
    /// Lengths of the packets laced into this page
    pub fn packet_lengths(&self) -> Vec<usize> {
        opusogg::ogg::lacing::packet_lengths(&self.segments).expect("unterminated packet")
    }
}

/// Parse back to back pages, checking signature, version and checksum
pub fn parse_pages(mut bytes: &[u8]) -> Vec<ParsedPage> {
    let mut pages = Vec::new();
    while !bytes.is_empty() {
        assert_eq!(&bytes[..4], b"OggS");
        assert_eq!(bytes[4], 0);
        let segment_count = bytes[26] as usize;
        let segments = bytes[27..27 + segment_count].to_vec();
        let body_len: usize = segments.iter().map(|&x| x as usize).sum();
        let total = 27 + segment_count + body_len;
        let page = &bytes[..total];

        let crc = u32::from_le_bytes(page[22..26].try_into().unwrap());
        let mut zeroed = page.to_vec();
        zeroed[22..26].fill(0);
        assert_eq!(checksum(&zeroed), crc, "checksum mismatch");

        pages.push(ParsedPage {
            header_type: page[5],
            granule_position: u64::from_le_bytes(page[6..14].try_into().unwrap()),
            serial: u32::from_le_bytes(page[14..18].try_into().unwrap()),
            sequence: u32::from_le_bytes(page[18..22].try_into().unwrap()),
            crc,
            segments,
            body: page[27 + segment_count..].to_vec(),
        });
        bytes = &bytes[total..];
    }
    pages
}
