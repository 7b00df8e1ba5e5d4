use crate::error::Result;
use crate::ogg::page::{build_page, PageHeader};
use crate::ogg::OGG_HEADER_TYPE_BOS;
use crate::opus::{
    VorbisComment, COMMENT_PAGE_SEQUENCE, IDENTIFICATION_PAGE_SEQUENCE, OPUS_HEAD_VERSION,
    OPUS_SIGNATURE, OPUS_TAGS,
};

/// Size of the OpusHead packet for channel mapping family 0
pub const IDENTIFICATION_PACKET_SIZE: usize = 19;

/// Build the OpusHead packet.
///
/// Layout:
///
/// ```text
/// [ "OpusHead" (8) ]
/// [ version (1) ]
/// [ channel count (1) ]
/// [ pre-skip (2) ]
/// [ input sample rate (4) ]
/// [ output gain (2) ]
/// [ channel mapping family (1) ]
/// ```
///
/// Pre-skip, input sample rate, gain and mapping family are written as zero.
pub fn identification_packet(channels: u8) -> [u8; IDENTIFICATION_PACKET_SIZE] {
    let mut packet = [0u8; IDENTIFICATION_PACKET_SIZE];
    packet[..8].copy_from_slice(OPUS_SIGNATURE);
    packet[8] = OPUS_HEAD_VERSION;
    packet[9] = channels;
    packet
}

/// Build the OpusTags packet
pub fn comment_packet(comment: &VorbisComment) -> Vec<u8> {
    let mut packet = Vec::new();
    packet.extend_from_slice(OPUS_TAGS);
    packet.extend_from_slice(&comment.to_bytes());
    packet
}

/// The two header pages, back to back: identification (sequence 0, bos)
/// then comment (sequence 1) with `vendor` and no user comments.
pub fn header_pages(channels: u8, serial: u32, vendor: &str) -> Result<Vec<u8>> {
    header_pages_with(channels, serial, &VorbisComment::new(vendor))
}

/// Same as [`header_pages`] with a caller supplied comment block
pub fn header_pages_with(channels: u8, serial: u32, comment: &VorbisComment) -> Result<Vec<u8>> {
    let head =
        PageHeader::new(serial, IDENTIFICATION_PAGE_SEQUENCE).with_header_type(OGG_HEADER_TYPE_BOS);
    let mut out = build_page(&head, &identification_packet(channels))?;

    let tags = PageHeader::new(serial, COMMENT_PAGE_SEQUENCE);
    out.extend(build_page(&tags, &comment_packet(comment))?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SERIAL, DEFAULT_VENDOR};

    #[test]
    fn test_identification_packet() {
        let packet = identification_packet(2);
        assert_eq!(&packet[..8], b"OpusHead");
        assert_eq!(packet[8], 1);
        assert_eq!(packet[9], 2);
        assert!(packet[10..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_header_page_layout() {
        let pages = header_pages(2, DEFAULT_SERIAL, DEFAULT_VENDOR).unwrap();
        assert_eq!(pages.len(), 47 + 51);

        let (head, tags) = pages.split_at(47);
        assert_eq!(head[5], OGG_HEADER_TYPE_BOS);
        assert_eq!(&head[18..22], &[0, 0, 0, 0]);
        assert_eq!(&head[26..28], &[1, 19]);
        assert_eq!(&head[22..26], &[0xbf, 0xa3, 0xc5, 0x90]);

        assert_eq!(tags[5], 0);
        assert_eq!(&tags[18..22], &[1, 0, 0, 0]);
        assert_eq!(&tags[26..28], &[1, 23]);
        assert_eq!(&tags[28..36], b"OpusTags");
        assert_eq!(&tags[36..40], &[7, 0, 0, 0]);
        assert_eq!(&tags[40..47], b"opusogg");
        assert_eq!(&tags[47..51], &[0, 0, 0, 0]);
        assert_eq!(&tags[22..26], &[0x64, 0xea, 0x8b, 0x53]);
    }

    #[test]
    fn test_mono_checksum() {
        let pages = header_pages(1, DEFAULT_SERIAL, DEFAULT_VENDOR).unwrap();
        assert_eq!(pages[37], 1);
        assert_eq!(&pages[22..26], &[0xa1, 0x5e, 0xb5, 0x15]);
    }

    #[test]
    fn test_deterministic() {
        let a = header_pages(2, DEFAULT_SERIAL, DEFAULT_VENDOR).unwrap();
        let b = header_pages(2, DEFAULT_SERIAL, DEFAULT_VENDOR).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_user_comments_in_tags_page() {
        let mut comment = VorbisComment::new(DEFAULT_VENDOR);
        comment.add("ENCODER", "opusogg");
        let pages = header_pages_with(2, DEFAULT_SERIAL, &comment).unwrap();
        let tags = &pages[47..];
        assert_eq!(tags[27] as usize, 23 + 4 + "ENCODER=opusogg".len());
        assert!(tags.ends_with(b"ENCODER=opusogg"));
    }
}
