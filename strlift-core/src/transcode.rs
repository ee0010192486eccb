//! Validating decode and encode for the three wire forms
//!
//! Decoding is strict and atomic: either the whole region is a valid
//! sequence and a complete string comes back, or the first defect aborts
//! with its position and nothing is produced. No replacement characters,
//! ever. Encoding is the exact inverse and always produces the byte length
//! the probe measured for the same value.

use crate::encoding::SelectedEncoding;
use crate::error::{Error, Result};

/// Decode a region's bytes into an owned string
pub fn decode(bytes: &[u8], encoding: SelectedEncoding) -> Result<String> {
    match encoding {
        SelectedEncoding::Utf8 => decode_utf8(bytes),
        SelectedEncoding::Utf16 => decode_utf16(bytes),
        SelectedEncoding::Latin1 => Ok(decode_latin1(bytes)),
    }
}

/// Encode a string into a region's bytes
pub fn encode(value: &str, encoding: SelectedEncoding) -> Result<Vec<u8>> {
    match encoding {
        SelectedEncoding::Utf8 => Ok(value.as_bytes().to_vec()),
        SelectedEncoding::Utf16 => Ok(encode_utf16(value)),
        SelectedEncoding::Latin1 => encode_latin1(value),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_string()),
        // valid_up_to is the offset of the first offending byte
        Err(e) => Err(Error::InvalidByteSequence {
            offset: e.valid_up_to(),
        }),
    }
}

fn decode_utf16(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::TruncatedUnit {
            byte_len: bytes.len(),
        });
    }

    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));

    let mut out = String::with_capacity(bytes.len() / 2);
    let mut index = 0usize;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(ch) => {
                out.push(ch);
                index += ch.len_utf16();
            }
            Err(e) => {
                return Err(Error::UnpairedSurrogate {
                    unit: e.unpaired_surrogate(),
                    index,
                });
            }
        }
    }
    Ok(out)
}

/// Latin-1 bytes map one-to-one onto U+0000..=U+00FF; decoding is total
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn encode_utf16(value: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len() * 2);
    for unit in value.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// A scalar above 0xFF here means the probe selected the wrong form, which
/// is a defect in this crate rather than bad input
fn encode_latin1(value: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(value.len());
    for ch in value.chars() {
        let scalar = ch as u32;
        if scalar > 0xFF {
            return Err(Error::InternalEncodingDefect(format!(
                "scalar U+{scalar:04X} outside the Latin-1 range"
            )));
        }
        out.push(scalar as u8);
    }
    Ok(out)
}
