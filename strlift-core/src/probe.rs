//! Pre-allocation measurement of lowered strings
//!
//! The probe is the arithmetic half of lowering. Given the value and the
//! destination's declared encoding, it commits to a wire form and the exact
//! byte length before any destination memory is touched. The engine then
//! allocates exactly the reported length, and the encoder must fill exactly
//! that many bytes.
//!
//! The probe is pure: no allocation, no side effects, and the same inputs
//! always produce the same report.

use crate::encoding::{SelectedEncoding, StringEncoding};

/// Outcome of probing one string against one destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    /// Wire form the lowering will use
    pub selected: SelectedEncoding,
    /// Exact region size in bytes
    pub byte_len: u64,
    /// Region size in code units of the selected form
    pub code_units: u64,
}

/// Measure `value` for a destination declaring `destination`.
///
/// For a `CompactUtf16` destination the probe selects Latin-1 when every
/// scalar fits in one byte and UTF-16 otherwise; the other destinations have
/// only one possible wire form. Lengths are kept in `u64` so the probe
/// itself cannot overflow; whether the result fits the destination's 32-bit
/// address space is the engine's concern.
pub fn probe(value: &str, destination: StringEncoding) -> ProbeReport {
    match destination {
        StringEncoding::Utf8 => ProbeReport {
            selected: SelectedEncoding::Utf8,
            byte_len: value.len() as u64,
            code_units: value.len() as u64,
        },
        StringEncoding::Utf16 => {
            let units = utf16_units(value);
            ProbeReport {
                selected: SelectedEncoding::Utf16,
                byte_len: units * 2,
                code_units: units,
            }
        }
        StringEncoding::CompactUtf16 => {
            // Single pass: the scalar count doubles as the Latin-1 byte length.
            let mut scalars: u64 = 0;
            let mut units: u64 = 0;
            let mut latin1 = true;
            for ch in value.chars() {
                scalars += 1;
                units += ch.len_utf16() as u64;
                latin1 &= (ch as u32) <= 0xFF;
            }
            if latin1 {
                ProbeReport {
                    selected: SelectedEncoding::Latin1,
                    byte_len: scalars,
                    code_units: scalars,
                }
            } else {
                ProbeReport {
                    selected: SelectedEncoding::Utf16,
                    byte_len: units * 2,
                    code_units: units,
                }
            }
        }
    }
}

/// UTF-16 code unit count: one unit per BMP scalar, two per supplementary
fn utf16_units(value: &str) -> u64 {
    value.chars().map(|ch| ch.len_utf16() as u64).sum()
}
