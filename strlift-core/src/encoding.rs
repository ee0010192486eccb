//! String encodings at a component boundary
//!
//! Two views of encoding live here. `StringEncoding` is what a component
//! declares for its memory: the canonical ABI allows `utf8`, `utf16`, and
//! the compact `latin1+utf16` form. `SelectedEncoding` is the concrete wire
//! form a single lowered region actually uses. The two differ only for
//! compact destinations, where the probe picks Latin-1 or UTF-16 per string.

/// Tag bit set in a compact destination's code-unit word when the UTF-16
/// branch was taken rather than Latin-1
pub const UTF16_TAG: u32 = 1 << 31;

/// Longest encoded string a lowering will produce, in bytes
///
/// One below the tag bit: a unit count derived from a length this size can
/// never collide with `UTF16_TAG`, so a tagged word stays unambiguous.
pub const MAX_STRING_BYTE_LENGTH: u32 = UTF16_TAG - 1;

/// String encoding declared by a component for its boundary memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringEncoding {
    /// UTF-8 encoding
    #[default]
    Utf8,
    /// UTF-16 encoding (little-endian)
    Utf16,
    /// Latin-1 when every scalar fits one byte, UTF-16 otherwise
    CompactUtf16,
}

/// Concrete wire form of one lowered string region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedEncoding {
    /// UTF-8 encoding
    Utf8,
    /// UTF-16 encoding (little-endian)
    Utf16,
    /// Latin-1 encoding (single byte per scalar, values 0x00..=0xFF)
    Latin1,
}

impl SelectedEncoding {
    /// Required allocation alignment for regions in this encoding
    pub fn alignment(self) -> u32 {
        match self {
            SelectedEncoding::Utf8 | SelectedEncoding::Latin1 => 1,
            SelectedEncoding::Utf16 => 2,
        }
    }

    /// Storage atom size in bytes: 1 for UTF-8 and Latin-1, 2 for UTF-16
    pub fn unit_width(self) -> u32 {
        match self {
            SelectedEncoding::Utf8 | SelectedEncoding::Latin1 => 1,
            SelectedEncoding::Utf16 => 2,
        }
    }
}
