// Vorbis comment structure carried by the OpusTags packet

/// Vorbis comment structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VorbisComment {
    pub vendor_string: String,
    pub comments: Vec<(String, String)>,
}

impl VorbisComment {
    /// Comment block with a vendor string and no user comments
    pub fn new(vendor: &str) -> Self {
        VorbisComment {
            vendor_string: vendor.to_string(),
            comments: Vec::new(),
        }
    }

    /// Append a `FIELD=value` user comment
    pub fn add(&mut self, field: &str, value: &str) {
        self.comments.push((field.to_string(), value.to_string()));
    }

    /// Get a comment value by field name
    pub fn get(&self, field: &str) -> Option<&String> {
        self.comments
            .iter()
            .find(|(f, _)| f.eq_ignore_ascii_case(field))
            .map(|(_, v)| v)
    }

    /// Serialize as vendor length, vendor, comment count, then each
    /// length-prefixed `FIELD=value`; all lengths little-endian 32-bit.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(self.vendor_string.len() as u32).to_le_bytes());
        out.extend_from_slice(self.vendor_string.as_bytes());
        out.extend_from_slice(&(self.comments.len() as u32).to_le_bytes());
        for (field, value) in &self.comments {
            let entry = format!("{}={}", field, value);
            out.extend_from_slice(&(entry.len() as u32).to_le_bytes());
            out.extend_from_slice(entry.as_bytes());
        }
        out
    }
}
